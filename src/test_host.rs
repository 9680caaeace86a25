use std::{cell::RefCell, collections::VecDeque, path::PathBuf};

use crate::{
    host_shell::{
        DialogError, FileDialogOptions, FrontendEvent, HostShell, MessageDialogOptions,
    },
    recent_menu::RecentMenuEntry,
};

type PathAnswer = Result<Option<PathBuf>, DialogError>;

/// Scripted [`HostShell`] that records everything the shell pushes to it.
/// Dialogs without a scripted answer fail with `DialogError::Unavailable`.
#[derive(Default)]
pub(crate) struct RecordingHost {
    open_answers: RefCell<VecDeque<PathAnswer>>,
    save_answers: RefCell<VecDeque<PathAnswer>>,
    message_answers: RefCell<VecDeque<Result<String, DialogError>>>,
    open_dialogs: RefCell<Vec<FileDialogOptions>>,
    save_dialogs: RefCell<Vec<FileDialogOptions>>,
    prompts: RefCell<Vec<MessageDialogOptions>>,
    titles: RefCell<Vec<String>>,
    menus: RefCell<Vec<Vec<RecentMenuEntry>>>,
    events: RefCell<Vec<FrontendEvent>>,
}

impl RecordingHost {
    pub(crate) fn answer_open(&self, answer: PathAnswer) {
        self.open_answers.borrow_mut().push_back(answer);
    }

    pub(crate) fn answer_save(&self, answer: PathAnswer) {
        self.save_answers.borrow_mut().push_back(answer);
    }

    pub(crate) fn answer_message(&self, answer: Result<String, DialogError>) {
        self.message_answers.borrow_mut().push_back(answer);
    }

    pub(crate) fn open_dialogs(&self) -> Vec<FileDialogOptions> {
        self.open_dialogs.borrow().clone()
    }

    pub(crate) fn save_dialogs(&self) -> Vec<FileDialogOptions> {
        self.save_dialogs.borrow().clone()
    }

    pub(crate) fn save_dialogs_shown(&self) -> usize {
        self.save_dialogs.borrow().len()
    }

    pub(crate) fn prompts_shown(&self) -> usize {
        self.prompts.borrow().len()
    }

    pub(crate) fn last_title(&self) -> Option<String> {
        self.titles.borrow().last().cloned()
    }

    pub(crate) fn last_menu(&self) -> Option<Vec<RecentMenuEntry>> {
        self.menus.borrow().last().cloned()
    }

    pub(crate) fn menu_rebuilds(&self) -> usize {
        self.menus.borrow().len()
    }

    pub(crate) fn events(&self) -> Vec<FrontendEvent> {
        self.events.borrow().clone()
    }

    fn unanswered(kind: &str) -> DialogError {
        DialogError::Unavailable(format!("no scripted answer for {kind} dialog"))
    }
}

impl HostShell for RecordingHost {
    fn show_open_dialog(&self, options: &FileDialogOptions) -> PathAnswer {
        self.open_dialogs.borrow_mut().push(*options);
        self.open_answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unanswered("open")))
    }

    fn show_save_dialog(&self, options: &FileDialogOptions) -> PathAnswer {
        self.save_dialogs.borrow_mut().push(*options);
        self.save_answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unanswered("save")))
    }

    fn show_message_dialog(&self, options: &MessageDialogOptions) -> Result<String, DialogError> {
        self.prompts.borrow_mut().push(*options);
        self.message_answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unanswered("message")))
    }

    fn set_window_title(&self, title: &str) {
        self.titles.borrow_mut().push(title.to_string());
    }

    fn rebuild_recent_menu(&self, entries: &[RecentMenuEntry]) {
        self.menus.borrow_mut().push(entries.to_vec());
    }

    fn emit(&self, event: FrontendEvent) {
        self.events.borrow_mut().push(event);
    }
}
