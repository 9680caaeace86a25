//! Commands the editor frontend invokes on the desktop shell.
//!
//! Anything that can open a dialog is an async command so it never runs on
//! the UI thread.

use tauri::{AppHandle, Manager};

use crate::{
    app_types::FileResult, document_shell::DocumentShell, tauri_host::TauriHost, window_actions,
    ShellState,
};

fn run_shell_command<T, F>(app_handle: &AppHandle, action: &str, run: F) -> Result<T, String>
where
    F: FnOnce(&mut DocumentShell<TauriHost>) -> T,
{
    let state = app_handle.state::<ShellState>();
    state.with_shell(action, run).inspect_err(|error| {
        log::error!("{error}");
    })
}

fn run_file_command<F>(app_handle: &AppHandle, action: &str, run: F) -> FileResult
where
    F: FnOnce(&mut DocumentShell<TauriHost>) -> FileResult,
{
    run_shell_command(app_handle, action, run).unwrap_or_else(FileResult::failure)
}

#[tauri::command]
pub(crate) async fn open_file(app_handle: AppHandle) -> FileResult {
    run_file_command(&app_handle, "open_file", |shell| shell.open_file())
}

#[tauri::command]
pub(crate) async fn save_with_content(app_handle: AppHandle, content: String) -> FileResult {
    run_file_command(&app_handle, "save_with_content", |shell| {
        shell.save_with_content(&content)
    })
}

#[tauri::command]
pub(crate) async fn save_as_with_content(app_handle: AppHandle, content: String) -> FileResult {
    run_file_command(&app_handle, "save_as_with_content", |shell| {
        shell.save_as_with_content(&content)
    })
}

#[tauri::command]
pub(crate) async fn set_dirty(app_handle: AppHandle, dirty: bool) {
    let _ = run_shell_command(&app_handle, "set_dirty", |shell| shell.set_dirty(dirty));
}

#[tauri::command]
pub(crate) async fn new_document(app_handle: AppHandle) {
    let _ = run_shell_command(&app_handle, "new_document", |shell| shell.new_document());
}

#[tauri::command]
pub(crate) async fn confirm_discard(app_handle: AppHandle) -> bool {
    run_shell_command(&app_handle, "confirm_discard", |shell| shell.confirm_discard())
        .unwrap_or(false)
}

/// Called by the frontend once it may be closed without prompting, typically
/// after finishing the save requested by `app:save-and-quit`. A pending
/// save-and-quit is completed here by re-requesting the close.
#[tauri::command]
pub(crate) async fn allow_close_once(app_handle: AppHandle) {
    let close_pending =
        run_shell_command(&app_handle, "allow_close_once", |shell| shell.allow_close_once())
            .unwrap_or(false);
    if close_pending {
        log::info!("save-and-quit completed, closing main window");
        window_actions::request_main_window_close(&app_handle);
    }
}

#[tauri::command]
pub(crate) fn get_version() -> String {
    crate::app_version().to_string()
}
