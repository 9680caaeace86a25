use log::LevelFilter;
use tauri::{plugin::TauriPlugin, Runtime};
use tauri_plugin_log::{Target, TargetKind};

use crate::DESKTOP_LOG_FILE_STEM;

fn default_log_level(debug_build: bool) -> LevelFilter {
    if debug_build {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Logs to stdout, the webview console and `<app log dir>/dia-desktop.log`.
pub(crate) fn build_log_plugin<R: Runtime>() -> TauriPlugin<R> {
    tauri_plugin_log::Builder::new()
        .level(default_log_level(cfg!(debug_assertions)))
        .level_for("tauri", LevelFilter::Warn)
        .level_for("tao", LevelFilter::Warn)
        .level_for("wry", LevelFilter::Warn)
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::Webview),
            Target::new(TargetKind::LogDir {
                file_name: Some(DESKTOP_LOG_FILE_STEM.to_string()),
            }),
        ])
        .build()
}
