use std::path::PathBuf;

use tauri::{AppHandle, Emitter, Manager, WebviewWindow};
use tauri_plugin_dialog::{
    DialogExt, FileDialogBuilder, MessageDialogButtons, MessageDialogKind, MessageDialogResult,
};

use crate::{
    app_menu,
    host_shell::{
        DialogError, FileDialogOptions, FrontendEvent, HostShell, MessageDialogOptions,
    },
    recent_menu::RecentMenuEntry,
    window_actions, MAIN_WINDOW_LABEL,
};

/// [`HostShell`] backed by the running Tauri application.
pub(crate) struct TauriHost {
    app_handle: AppHandle,
}

impl TauriHost {
    pub(crate) fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }

    fn main_window(&self) -> Result<WebviewWindow, DialogError> {
        self.app_handle
            .get_webview_window(MAIN_WINDOW_LABEL)
            .ok_or_else(|| DialogError::Unavailable("main window not found".to_string()))
    }

    fn file_dialog(
        &self,
        options: &FileDialogOptions,
    ) -> Result<FileDialogBuilder<tauri::Wry>, DialogError> {
        let window = self.main_window()?;
        let mut dialog = self
            .app_handle
            .dialog()
            .file()
            .set_title(options.title)
            .set_parent(&window);
        for filter in options.filters {
            dialog = dialog.add_filter(filter.name, filter.extensions);
        }
        if let Some(file_name) = options.default_file_name {
            dialog = dialog.set_file_name(file_name);
        }
        Ok(dialog)
    }
}

fn into_path_buf(
    picked: Option<tauri_plugin_dialog::FilePath>,
) -> Result<Option<PathBuf>, DialogError> {
    picked
        .map(|path| {
            path.into_path()
                .map_err(|error| DialogError::Failed(format!("unusable path: {error}")))
        })
        .transpose()
}

fn message_dialog_buttons(buttons: &[&str]) -> Result<MessageDialogButtons, DialogError> {
    match buttons {
        [affirmative, negative] => Ok(MessageDialogButtons::OkCancelCustom(
            affirmative.to_string(),
            negative.to_string(),
        )),
        [affirmative, negative, cancel] => Ok(MessageDialogButtons::YesNoCancelCustom(
            affirmative.to_string(),
            negative.to_string(),
            cancel.to_string(),
        )),
        other => Err(DialogError::Failed(format!(
            "unsupported dialog layout with {} buttons",
            other.len()
        ))),
    }
}

/// Maps the toolkit's answer back onto the caller's button labels. Some
/// platforms report custom buttons by role rather than by label.
fn chosen_button_label(
    result: &MessageDialogResult,
    options: &MessageDialogOptions,
) -> Option<String> {
    let label = match result {
        MessageDialogResult::Custom(label) => return Some(label.clone()),
        MessageDialogResult::Yes | MessageDialogResult::Ok => options.buttons.first(),
        MessageDialogResult::No => options.buttons.get(1),
        MessageDialogResult::Cancel => Some(&options.cancel_button),
    };
    label.map(|label| label.to_string())
}

impl HostShell for TauriHost {
    fn show_open_dialog(
        &self,
        options: &FileDialogOptions,
    ) -> Result<Option<PathBuf>, DialogError> {
        into_path_buf(self.file_dialog(options)?.blocking_pick_file())
    }

    fn show_save_dialog(
        &self,
        options: &FileDialogOptions,
    ) -> Result<Option<PathBuf>, DialogError> {
        into_path_buf(self.file_dialog(options)?.blocking_save_file())
    }

    fn show_message_dialog(&self, options: &MessageDialogOptions) -> Result<String, DialogError> {
        let window = self.main_window()?;
        let buttons = message_dialog_buttons(options.buttons)?;
        log::debug!(
            "showing '{}' dialog, default '{}'",
            options.title,
            options.default_button
        );

        let result = self
            .app_handle
            .dialog()
            .message(options.message)
            .title(options.title)
            .kind(MessageDialogKind::Warning)
            .buttons(buttons)
            .parent(&window)
            .blocking_show_with_result();

        chosen_button_label(&result, options)
            .ok_or_else(|| DialogError::Failed(format!("unexpected dialog result {result:?}")))
    }

    fn set_window_title(&self, title: &str) {
        window_actions::set_main_window_title(&self.app_handle, title);
    }

    fn rebuild_recent_menu(&self, entries: &[RecentMenuEntry]) {
        if let Err(error) = app_menu::rebuild_recent_submenu(&self.app_handle, entries) {
            log::warn!("failed to rebuild recent files menu: {error}");
        }
    }

    fn emit(&self, event: FrontendEvent) {
        emit_frontend_event(&self.app_handle, &event);
    }
}

pub(crate) fn emit_frontend_event(app_handle: &AppHandle, event: &FrontendEvent) {
    if let Err(error) = app_handle.emit(event.name(), event.payload()) {
        log::warn!("failed to emit {}: {error}", event.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_shell::{CONFIRM_DISCARD_DIALOG, SAVE_BEFORE_QUIT_DIALOG};

    #[test]
    fn chosen_button_label_prefers_custom_labels() {
        assert_eq!(
            chosen_button_label(
                &MessageDialogResult::Custom("Discard".to_string()),
                &SAVE_BEFORE_QUIT_DIALOG
            )
            .as_deref(),
            Some("Discard")
        );
    }

    #[test]
    fn chosen_button_label_maps_roles_onto_button_order() {
        let three_way = &SAVE_BEFORE_QUIT_DIALOG;
        assert_eq!(
            chosen_button_label(&MessageDialogResult::Yes, three_way).as_deref(),
            Some("Save")
        );
        assert_eq!(
            chosen_button_label(&MessageDialogResult::No, three_way).as_deref(),
            Some("Discard")
        );
        assert_eq!(
            chosen_button_label(&MessageDialogResult::Cancel, three_way).as_deref(),
            Some("Cancel")
        );

        let two_way = &CONFIRM_DISCARD_DIALOG;
        assert_eq!(
            chosen_button_label(&MessageDialogResult::Ok, two_way).as_deref(),
            Some("Yes")
        );
        assert_eq!(
            chosen_button_label(&MessageDialogResult::Cancel, two_way).as_deref(),
            Some("No")
        );
    }

    #[test]
    fn message_dialog_buttons_rejects_unsupported_layouts() {
        assert!(matches!(
            message_dialog_buttons(&["Yes", "No"]),
            Ok(MessageDialogButtons::OkCancelCustom(_, _))
        ));
        assert!(matches!(
            message_dialog_buttons(&["Save", "Discard", "Cancel"]),
            Ok(MessageDialogButtons::YesNoCancelCustom(_, _, _))
        ));
        assert!(message_dialog_buttons(&["Ok"]).is_err());
    }
}
