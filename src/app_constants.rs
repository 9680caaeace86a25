pub const APP_NAME: &str = "dia";
pub const MAIN_WINDOW_LABEL: &str = "main";

pub const MAX_RECENT_FILES: usize = 10;
pub const RECENT_FILES_CONFIG_NAME: &str = "recent-files.json";
pub const CONFIG_DIR_ENV: &str = "DIA_CONFIG_DIR";

pub const WINDOW_TITLE_PREFIX: &str = "dia - ";
pub const UNTITLED_DOCUMENT_NAME: &str = "Untitled";
pub const DIRTY_TITLE_SUFFIX: &str = " *";

pub const DESKTOP_LOG_FILE_STEM: &str = "dia-desktop";

/// Version reported to the frontend. Release builds stamp `DIA_BUILD_VERSION`.
pub fn app_version() -> &'static str {
    option_env!("DIA_BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
