#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_menu;
mod app_menu_handler;
mod app_runtime;
mod app_types;
mod document_shell;
mod host_shell;
mod logging;
mod menu_actions;
mod recent_files;
mod recent_menu;
mod recent_paths;
mod shell_commands;
mod shell_dispatch;
mod tauri_host;
#[cfg(test)]
mod test_host;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::{AppMenuState, CloseDecision, ShellState};

fn main() {
    app_runtime::run();
}
