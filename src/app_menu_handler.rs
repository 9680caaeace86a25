use tauri::AppHandle;

use crate::{
    host_shell::FrontendEvent,
    menu_actions::{self, MenuAction},
    shell_dispatch, tauri_host, window_actions,
};

/// Menu actions the frontend handles on its own.
fn frontend_event_for_action(action: &MenuAction) -> Option<FrontendEvent> {
    match action {
        MenuAction::NewFile => Some(FrontendEvent::FileNew),
        MenuAction::OpenRequest => Some(FrontendEvent::FileOpenRequest),
        MenuAction::Save => Some(FrontendEvent::FileSave),
        MenuAction::SaveAs => Some(FrontendEvent::FileSaveAs),
        MenuAction::Settings => Some(FrontendEvent::SettingsOpen),
        MenuAction::About => Some(FrontendEvent::AboutOpen),
        MenuAction::SetTheme(theme) => Some(FrontendEvent::ThemeSet(theme.clone())),
        MenuAction::HideWindow
        | MenuAction::Quit
        | MenuAction::OpenRecent(_)
        | MenuAction::ClearRecent => None,
    }
}

pub fn handle_app_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = menu_actions::action_from_menu_id(menu_id) else {
        return;
    };
    if let Some(event) = frontend_event_for_action(&action) {
        tauri_host::emit_frontend_event(app_handle, &event);
        return;
    }

    match action {
        MenuAction::HideWindow => window_actions::hide_main_window(app_handle),
        MenuAction::Quit => {
            log::info!("quit requested from menu");
            window_actions::request_main_window_close(app_handle);
        }
        MenuAction::OpenRecent(path) => {
            shell_dispatch::spawn_shell_task(app_handle, "open_recent_file", move |_, shell| {
                shell.open_recent_file(&path);
            });
        }
        MenuAction::ClearRecent => {
            shell_dispatch::spawn_shell_task(app_handle, "clear_recent_files", |_, shell| {
                shell.clear_recent_files();
            });
        }
        _ => {}
    }
}
