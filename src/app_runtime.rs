use tauri::{Manager, WindowEvent};

use crate::{
    app_menu,
    document_shell::DocumentShell,
    logging,
    recent_files::{RecentFiles, RecentFilesStore},
    shell_dispatch,
    tauri_host::TauriHost,
    window_actions, CloseDecision, ShellState, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            window_actions::focus_main_window(app_handle);
        }))
        .plugin(logging::build_log_plugin())
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            crate::shell_commands::open_file,
            crate::shell_commands::save_with_content,
            crate::shell_commands::save_as_with_content,
            crate::shell_commands::set_dirty,
            crate::shell_commands::new_document,
            crate::shell_commands::confirm_discard,
            crate::shell_commands::allow_close_once,
            crate::shell_commands::get_version,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            // The unsaved-changes prompt is modal, so the decision is made off
            // the UI thread and the window is closed afterwards if allowed.
            if let WindowEvent::CloseRequested { api, .. } = event {
                api.prevent_close();
                shell_dispatch::spawn_shell_task(
                    window.app_handle(),
                    "before_close",
                    |app_handle, shell| {
                        if shell.before_close() == CloseDecision::Allow {
                            window_actions::destroy_main_window(app_handle);
                        }
                    },
                );
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            log::info!("desktop shell starting, version {}", crate::app_version());

            if let Err(error) = app_menu::setup_app_menu(&app_handle) {
                log::error!("failed to initialize application menu: {error}");
            }

            let shell = DocumentShell::new(
                TauriHost::new(app_handle.clone()),
                RecentFiles::new(RecentFilesStore::user_config()),
            );
            app.manage(ShellState::new(shell));

            let state = app.state::<ShellState>();
            if let Err(error) = state.with_shell("startup", |shell| shell.startup()) {
                log::error!("{error}");
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running dia desktop shell");
}
