use tauri::{AppHandle, Manager};

use crate::{document_shell::DocumentShell, tauri_host::TauriHost, ShellState};

/// Runs `task` against the document shell on the blocking pool.
///
/// Shell work may open modal dialogs, which must not block the UI thread.
pub fn spawn_shell_task<F>(app_handle: &AppHandle, action: &'static str, task: F)
where
    F: FnOnce(&AppHandle, &mut DocumentShell<TauriHost>) + Send + 'static,
{
    let app_handle = app_handle.clone();
    tauri::async_runtime::spawn_blocking(move || {
        let Some(state) = app_handle.try_state::<ShellState>() else {
            log::warn!("{action} skipped: document shell is not initialized");
            return;
        };
        if let Err(error) = state.with_shell(action, |shell| task(&app_handle, shell)) {
            log::error!("{error}");
        }
    });
}
