use tauri::{AppHandle, Manager, WebviewWindow};

use crate::MAIN_WINDOW_LABEL;

fn main_window(app_handle: &AppHandle, action: &str) -> Option<WebviewWindow> {
    let window = app_handle.get_webview_window(MAIN_WINDOW_LABEL);
    if window.is_none() {
        log::warn!("{action} skipped: main window not found");
    }
    window
}

pub fn set_main_window_title(app_handle: &AppHandle, title: &str) {
    let Some(window) = main_window(app_handle, "set_main_window_title") else {
        return;
    };
    if let Err(error) = window.set_title(title) {
        log::warn!("failed to set main window title: {error}");
    }
}

pub fn hide_main_window(app_handle: &AppHandle) {
    let Some(window) = main_window(app_handle, "hide_main_window") else {
        return;
    };
    if let Err(error) = window.hide() {
        log::warn!("failed to hide main window: {error}");
    }
}

pub fn focus_main_window(app_handle: &AppHandle) {
    let Some(window) = main_window(app_handle, "focus_main_window") else {
        return;
    };
    if let Err(error) = window.unminimize() {
        log::warn!("failed to unminimize main window: {error}");
    }
    if let Err(error) = window.show() {
        log::warn!("failed to show main window: {error}");
    }
    if let Err(error) = window.set_focus() {
        log::warn!("failed to focus main window: {error}");
    }
}

/// Asks the main window to close. This goes through the unsaved-changes check.
pub fn request_main_window_close(app_handle: &AppHandle) {
    let Some(window) = main_window(app_handle, "request_main_window_close") else {
        return;
    };
    if let Err(error) = window.close() {
        log::warn!("failed to request main window close: {error}");
    }
}

/// Closes the main window without emitting another close request.
pub fn destroy_main_window(app_handle: &AppHandle) {
    let Some(window) = main_window(app_handle, "destroy_main_window") else {
        return;
    };
    if let Err(error) = window.destroy() {
        log::error!("failed to close main window: {error}");
    }
}
