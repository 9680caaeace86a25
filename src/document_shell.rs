//! The document shell: owns the open document's state, the recent-files
//! registry and the close latch, and drives the host UI through [`HostShell`].
//!
//! Every operation runs to completion on the caller's thread. Dialogs block
//! until the user answers; persistence failures are logged and never undo a
//! foreground operation.

use std::{fs, path::Path};

use crate::{
    app_types::{CloseDecision, CloseLatch, DocumentState, FileResult},
    host_shell::{
        FileDialogOptions, FileFilter, FrontendEvent, HostShell, MessageDialogOptions,
    },
    recent_files::RecentFiles,
    recent_menu::build_recent_menu,
};

pub(crate) const OPEN_DIAGRAM_DIALOG: FileDialogOptions = FileDialogOptions {
    title: "Open Mermaid Diagram",
    filters: &[
        FileFilter {
            name: "Mermaid (*.mmd *.mermaid)",
            extensions: &["mmd", "mermaid"],
        },
        FileFilter {
            name: "All Files (*.*)",
            extensions: &["*"],
        },
    ],
    default_file_name: None,
};

pub(crate) const SAVE_DIAGRAM_DIALOG: FileDialogOptions = FileDialogOptions {
    title: "Save Mermaid Diagram",
    filters: &[
        FileFilter {
            name: "Mermaid (*.mmd)",
            extensions: &["mmd"],
        },
        FileFilter {
            name: "All Files (*.*)",
            extensions: &["*"],
        },
    ],
    default_file_name: Some("diagram.mmd"),
};

pub(crate) const BUTTON_YES: &str = "Yes";
pub(crate) const BUTTON_NO: &str = "No";
pub(crate) const BUTTON_SAVE: &str = "Save";
pub(crate) const BUTTON_DISCARD: &str = "Discard";
pub(crate) const BUTTON_CANCEL: &str = "Cancel";

pub(crate) const CONFIRM_DISCARD_DIALOG: MessageDialogOptions = MessageDialogOptions {
    title: "Unsaved Changes",
    message: "You have unsaved changes. Discard them?",
    buttons: &[BUTTON_YES, BUTTON_NO],
    default_button: BUTTON_NO,
    cancel_button: BUTTON_NO,
};

pub(crate) const SAVE_BEFORE_QUIT_DIALOG: MessageDialogOptions = MessageDialogOptions {
    title: "Unsaved Changes",
    message: "You have unsaved changes. Save before quitting?",
    buttons: &[BUTTON_SAVE, BUTTON_DISCARD, BUTTON_CANCEL],
    default_button: BUTTON_SAVE,
    cancel_button: BUTTON_CANCEL,
};

pub(crate) struct DocumentShell<H: HostShell> {
    host: H,
    recent_files: RecentFiles,
    document: DocumentState,
    close_latch: CloseLatch,
}

impl<H: HostShell> DocumentShell<H> {
    pub(crate) fn new(host: H, recent_files: RecentFiles) -> Self {
        Self {
            host,
            recent_files,
            document: DocumentState::default(),
            close_latch: CloseLatch::default(),
        }
    }

    pub(crate) fn startup(&mut self) {
        if let Err(error) = self.recent_files.load() {
            log::error!("failed to load recent files: {error}");
        }
        log::debug!("loaded {} recent files", self.recent_files.entries().len());
        self.refresh_menu();
        self.update_title();
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    #[cfg(test)]
    pub(crate) fn document(&self) -> &DocumentState {
        &self.document
    }

    #[cfg(test)]
    pub(crate) fn recent_files(&self) -> &[std::path::PathBuf] {
        self.recent_files.entries()
    }

    pub(crate) fn open_file(&mut self) -> FileResult {
        match self.host.show_open_dialog(&OPEN_DIAGRAM_DIALOG) {
            Ok(Some(path)) => self.open_file_path(&path),
            Ok(None) => FileResult::default(),
            Err(error) => {
                log::warn!("open dialog failed: {error}");
                FileResult::failure(format!("dialog error: {error}"))
            }
        }
    }

    pub(crate) fn open_file_path(&mut self, path: &Path) -> FileResult {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(error) => {
                log::warn!("failed to read {}: {error}", path.display());
                return FileResult::failure(format!("read error: {error}"));
            }
        };

        self.document.mark_clean_at(path);
        self.add_recent_file(path);
        self.update_title();
        log::info!("opened {}", path.display());
        FileResult::opened(String::from_utf8_lossy(&data).into_owned(), path)
    }

    /// Writes to the current document, or asks for a path when there is none.
    pub(crate) fn save_with_content(&mut self, content: &str) -> FileResult {
        match self.document.current_path.clone() {
            Some(path) => self.write(&path, content),
            None => self.save_as_with_content(content),
        }
    }

    pub(crate) fn save_as_with_content(&mut self, content: &str) -> FileResult {
        let path = match self.host.show_save_dialog(&SAVE_DIAGRAM_DIALOG) {
            Ok(Some(path)) => path,
            Ok(None) => return FileResult::default(),
            Err(error) => {
                log::warn!("save dialog failed: {error}");
                return FileResult::failure(format!("dialog error: {error}"));
            }
        };

        self.document.current_path = Some(path.clone());
        self.write(&path, content)
    }

    pub(crate) fn write(&mut self, path: &Path, content: &str) -> FileResult {
        if let Err(error) = fs::write(path, content) {
            log::warn!("failed to write {}: {error}", path.display());
            return FileResult::failure(format!("write error: {error}"));
        }

        self.document.mark_clean_at(path);
        self.add_recent_file(path);
        self.update_title();
        log::info!("saved {}", path.display());
        FileResult::saved(path)
    }

    pub(crate) fn set_dirty(&mut self, dirty: bool) {
        self.document.dirty = dirty;
        self.update_title();
    }

    pub(crate) fn new_document(&mut self) {
        self.document.reset();
        self.update_title();
    }

    /// Returns `true` when the caller may throw away the current edits.
    /// Dialog failures count as "keep them".
    pub(crate) fn confirm_discard(&mut self) -> bool {
        if !self.document.dirty {
            return true;
        }

        match self.host.show_message_dialog(&CONFIRM_DISCARD_DIALOG) {
            Ok(choice) => choice == BUTTON_YES,
            Err(error) => {
                log::warn!("discard confirmation failed: {error}");
                false
            }
        }
    }

    /// Lets the next close request through without prompting. Returns `true`
    /// when a save-and-quit was waiting on the frontend, in which case the
    /// caller should request the close again.
    pub(crate) fn allow_close_once(&mut self) -> bool {
        self.close_latch.arm()
    }

    pub(crate) fn before_close(&mut self) -> CloseDecision {
        if self.close_latch.consume() {
            log::debug!("close allowed by one-shot latch");
            return CloseDecision::Allow;
        }
        if !self.document.dirty {
            return CloseDecision::Allow;
        }

        let choice = match self.host.show_message_dialog(&SAVE_BEFORE_QUIT_DIALOG) {
            Ok(choice) => choice,
            Err(error) => {
                log::warn!("close confirmation failed, keeping window open: {error}");
                return CloseDecision::Prevent;
            }
        };

        match choice.as_str() {
            BUTTON_SAVE => {
                log::debug!("close deferred until the frontend saves");
                self.close_latch = CloseLatch::AwaitingSave;
                self.host.emit(FrontendEvent::SaveAndQuit);
                CloseDecision::Prevent
            }
            BUTTON_DISCARD => {
                log::debug!("close allowed, discarding unsaved changes");
                CloseDecision::Allow
            }
            _ => CloseDecision::Prevent,
        }
    }

    /// Opens a registry entry. Returns `None` if the user kept their edits.
    /// Entries that fail to open are dropped from the registry.
    pub(crate) fn open_recent_file(&mut self, path: &Path) -> Option<FileResult> {
        if !self.confirm_discard() {
            return None;
        }

        let result = self.open_file_path(path);
        if result.is_error() {
            log::warn!("removing unreadable recent file {}", path.display());
            self.remove_recent_file(path);
        }
        self.host.emit(FrontendEvent::FileOpened(result.clone()));
        Some(result)
    }

    pub(crate) fn add_recent_file(&mut self, path: &Path) {
        if self.recent_files.add(path) {
            self.persist_recent_files();
            self.refresh_menu();
        }
    }

    pub(crate) fn remove_recent_file(&mut self, path: &Path) {
        if self.recent_files.remove(path) {
            self.persist_recent_files();
            self.refresh_menu();
        }
    }

    pub(crate) fn clear_recent_files(&mut self) {
        self.recent_files.clear();
        self.persist_recent_files();
        self.refresh_menu();
    }

    fn persist_recent_files(&self) {
        if let Err(error) = self.recent_files.save() {
            log::error!("failed to persist recent files: {error}");
        }
    }

    pub(crate) fn refresh_menu(&self) {
        let entries = build_recent_menu(self.recent_files.entries());
        self.host.rebuild_recent_menu(&entries);
    }

    pub(crate) fn update_title(&self) {
        self.host.set_window_title(&self.document.window_title());
    }
}
