use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::Serialize;
use tauri::menu::Submenu;

use crate::{
    document_shell::DocumentShell, host_shell::HostShell, tauri_host::TauriHost,
    DIRTY_TITLE_SUFFIX, UNTITLED_DOCUMENT_NAME, WINDOW_TITLE_PREFIX,
};

/// Envelope returned to the frontend for every file operation. A non-empty
/// `error` marks failure; a fully empty result means the user cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl FileResult {
    pub(crate) fn opened(content: String, path: &Path) -> Self {
        Self {
            content: Some(content),
            file_path: Some(path.to_string_lossy().into_owned()),
            error: None,
        }
    }

    pub(crate) fn saved(path: &Path) -> Self {
        Self {
            content: None,
            file_path: Some(path.to_string_lossy().into_owned()),
            error: None,
        }
    }

    pub(crate) fn failure(reason: impl Into<String>) -> Self {
        Self {
            content: None,
            file_path: None,
            error: Some(reason.into()),
        }
    }

    pub(crate) fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|error| !error.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DocumentState {
    pub(crate) current_path: Option<PathBuf>,
    pub(crate) dirty: bool,
}

impl DocumentState {
    pub(crate) fn mark_clean_at(&mut self, path: &Path) {
        self.current_path = Some(path.to_path_buf());
        self.dirty = false;
    }

    pub(crate) fn reset(&mut self) {
        self.current_path = None;
        self.dirty = false;
    }

    pub(crate) fn window_title(&self) -> String {
        let name = self
            .current_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_DOCUMENT_NAME.to_string());

        let mut title = format!("{WINDOW_TITLE_PREFIX}{name}");
        if self.dirty {
            title.push_str(DIRTY_TITLE_SUFFIX);
        }
        title
    }
}

/// One-shot permission to close the main window without prompting.
///
/// `AwaitingSave` is entered when the user picked "Save" on quit and the
/// frontend is saving; it behaves like `Disarmed` if close is requested again
/// before the frontend calls `allow_close_once`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum CloseLatch {
    #[default]
    Disarmed,
    AwaitingSave,
    Armed,
}

impl CloseLatch {
    /// Disarms the latch and reports whether it was armed.
    pub(crate) fn consume(&mut self) -> bool {
        if *self == Self::Armed {
            *self = Self::Disarmed;
            return true;
        }
        false
    }

    /// Arms the latch and reports whether a save-and-quit was pending.
    pub(crate) fn arm(&mut self) -> bool {
        let was_awaiting_save = *self == Self::AwaitingSave;
        *self = Self::Armed;
        was_awaiting_save
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseDecision {
    Allow,
    Prevent,
}

pub(crate) struct ShellState<H: HostShell = TauriHost> {
    shell: Mutex<DocumentShell<H>>,
}

impl<H: HostShell> ShellState<H> {
    pub(crate) fn new(shell: DocumentShell<H>) -> Self {
        Self {
            shell: Mutex::new(shell),
        }
    }

    /// Runs `run` with exclusive access to the document shell.
    ///
    /// The lock is held for the whole call, including any modal dialog `run`
    /// opens. Other commands and menu tasks block on a runtime worker until
    /// the dialog returns, so shell operations never interleave.
    pub(crate) fn with_shell<T, F>(&self, action: &str, run: F) -> Result<T, String>
    where
        F: FnOnce(&mut DocumentShell<H>) -> T,
    {
        let mut shell = self
            .shell
            .lock()
            .map_err(|_| format!("Document shell lock poisoned during {action}."))?;
        Ok(run(&mut shell))
    }
}

#[derive(Clone)]
pub(crate) struct AppMenuState {
    pub(crate) recent_submenu: Submenu<tauri::Wry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_result_serializes_only_present_fields() {
        let opened = FileResult::opened("graph TD".to_string(), Path::new("diagram.mmd"));
        assert_eq!(
            serde_json::to_value(&opened).expect("encode"),
            serde_json::json!({ "content": "graph TD", "filePath": "diagram.mmd" })
        );
        assert_eq!(
            serde_json::to_value(FileResult::default()).expect("encode"),
            serde_json::json!({})
        );
    }

    #[test]
    fn file_result_empty_error_is_not_failure() {
        assert!(FileResult::failure("write error: denied").is_error());
        assert!(!FileResult::failure("").is_error());
        assert!(!FileResult::saved(Path::new("a.mmd")).is_error());
    }

    #[test]
    fn window_title_uses_base_name_and_dirty_suffix() {
        let mut document = DocumentState::default();
        assert_eq!(document.window_title(), "dia - Untitled");

        document.mark_clean_at(&PathBuf::from("charts").join("flow.mmd"));
        assert_eq!(document.window_title(), "dia - flow.mmd");

        document.dirty = true;
        assert_eq!(document.window_title(), "dia - flow.mmd *");

        document.reset();
        assert_eq!(document.window_title(), "dia - Untitled");
    }

    #[test]
    fn close_latch_consume_is_one_shot() {
        let mut latch = CloseLatch::default();
        assert!(!latch.consume());

        assert!(!latch.arm());
        assert!(latch.consume());
        assert!(!latch.consume());
        assert_eq!(latch, CloseLatch::Disarmed);
    }

    #[test]
    fn close_latch_arm_reports_pending_save_and_quit() {
        let mut latch = CloseLatch::AwaitingSave;
        assert!(!latch.consume());
        assert!(latch.arm());
        assert_eq!(latch, CloseLatch::Armed);
    }
}
