//! Capabilities the document shell needs from the native UI runtime.
//!
//! The shell core only talks to [`HostShell`]; the Tauri-backed implementation
//! lives in `tauri_host`, and tests substitute a recording double.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::{app_types::FileResult, recent_menu::RecentMenuEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum DialogError {
    #[error("dialog unavailable: {0}")]
    Unavailable(String),
    #[error("dialog failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileFilter {
    pub(crate) name: &'static str,
    pub(crate) extensions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileDialogOptions {
    pub(crate) title: &'static str,
    pub(crate) filters: &'static [FileFilter],
    pub(crate) default_file_name: Option<&'static str>,
}

/// A question dialog. The host answers with the label of the chosen button;
/// `buttons` is ordered affirmative first, cancel last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MessageDialogOptions {
    pub(crate) title: &'static str,
    pub(crate) message: &'static str,
    pub(crate) buttons: &'static [&'static str],
    pub(crate) default_button: &'static str,
    pub(crate) cancel_button: &'static str,
}

pub(crate) const EVENT_FILE_NEW: &str = "file:new";
pub(crate) const EVENT_FILE_OPEN_REQUEST: &str = "file:open-request";
pub(crate) const EVENT_FILE_SAVE: &str = "file:save";
pub(crate) const EVENT_FILE_SAVE_AS: &str = "file:save-as";
pub(crate) const EVENT_FILE_OPENED: &str = "file:opened";
pub(crate) const EVENT_SETTINGS_OPEN: &str = "settings:open";
pub(crate) const EVENT_ABOUT_OPEN: &str = "about:open";
pub(crate) const EVENT_THEME_SET: &str = "theme:set";
pub(crate) const EVENT_SAVE_AND_QUIT: &str = "app:save-and-quit";

/// Fire-and-forget notifications pushed to the editor frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FrontendEvent {
    FileNew,
    FileOpenRequest,
    FileSave,
    FileSaveAs,
    FileOpened(FileResult),
    SettingsOpen,
    AboutOpen,
    ThemeSet(String),
    SaveAndQuit,
}

impl FrontendEvent {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::FileNew => EVENT_FILE_NEW,
            Self::FileOpenRequest => EVENT_FILE_OPEN_REQUEST,
            Self::FileSave => EVENT_FILE_SAVE,
            Self::FileSaveAs => EVENT_FILE_SAVE_AS,
            Self::FileOpened(_) => EVENT_FILE_OPENED,
            Self::SettingsOpen => EVENT_SETTINGS_OPEN,
            Self::AboutOpen => EVENT_ABOUT_OPEN,
            Self::ThemeSet(_) => EVENT_THEME_SET,
            Self::SaveAndQuit => EVENT_SAVE_AND_QUIT,
        }
    }

    pub(crate) fn payload(&self) -> Option<Value> {
        match self {
            Self::FileOpened(result) => serde_json::to_value(result).ok(),
            Self::ThemeSet(theme) => Some(Value::String(theme.clone())),
            _ => None,
        }
    }
}

pub(crate) trait HostShell {
    /// `Ok(None)` means the user cancelled.
    fn show_open_dialog(&self, options: &FileDialogOptions)
        -> Result<Option<PathBuf>, DialogError>;

    /// `Ok(None)` means the user cancelled.
    fn show_save_dialog(&self, options: &FileDialogOptions)
        -> Result<Option<PathBuf>, DialogError>;

    fn show_message_dialog(&self, options: &MessageDialogOptions) -> Result<String, DialogError>;

    fn set_window_title(&self, title: &str);

    fn rebuild_recent_menu(&self, entries: &[RecentMenuEntry]);

    fn emit(&self, event: FrontendEvent);
}
