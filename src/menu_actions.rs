use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

pub const MENU_ABOUT: &str = "app_about";
pub const MENU_SETTINGS: &str = "app_settings";
pub const MENU_HIDE: &str = "app_hide";
pub const MENU_QUIT: &str = "app_quit";
pub const MENU_FILE_NEW: &str = "file_new";
pub const MENU_FILE_OPEN: &str = "file_open";
pub const MENU_FILE_SAVE: &str = "file_save";
pub const MENU_FILE_SAVE_AS: &str = "file_save_as";
pub const MENU_OPEN_RECENT: &str = "file_open_recent";
pub const MENU_NO_RECENT_FILES: &str = "recent_none";
pub const MENU_CLEAR_RECENT: &str = "recent_clear";

pub const RECENT_FILE_MENU_PREFIX: &str = "recent_file:";
pub const THEME_MENU_PREFIX: &str = "theme:";

/// Theme ids understood by the frontend, with their menu labels.
pub const THEMES: &[(&str, &str)] = &[
    ("default", "Default"),
    ("dark", "Dark"),
    ("forest", "Forest"),
    ("neutral", "Neutral"),
    ("catppuccin", "Catppuccin"),
    ("dracula", "Dracula"),
    ("nord", "Nord"),
    ("synthwave", "Synthwave"),
    ("rose", "Rose"),
    ("ocean", "Ocean"),
    ("solarized", "Solarized"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    NewFile,
    OpenRequest,
    Save,
    SaveAs,
    Settings,
    About,
    HideWindow,
    Quit,
    SetTheme(String),
    OpenRecent(PathBuf),
    ClearRecent,
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    if let Some(encoded) = menu_id.strip_prefix(RECENT_FILE_MENU_PREFIX) {
        return decode_path(encoded).map(MenuAction::OpenRecent);
    }
    if let Some(theme) = menu_id.strip_prefix(THEME_MENU_PREFIX) {
        return THEMES
            .iter()
            .any(|(id, _)| *id == theme)
            .then(|| MenuAction::SetTheme(theme.to_string()));
    }

    match menu_id {
        MENU_FILE_NEW => Some(MenuAction::NewFile),
        MENU_FILE_OPEN => Some(MenuAction::OpenRequest),
        MENU_FILE_SAVE => Some(MenuAction::Save),
        MENU_FILE_SAVE_AS => Some(MenuAction::SaveAs),
        MENU_SETTINGS => Some(MenuAction::Settings),
        MENU_ABOUT => Some(MenuAction::About),
        MENU_HIDE => Some(MenuAction::HideWindow),
        MENU_QUIT => Some(MenuAction::Quit),
        MENU_CLEAR_RECENT => Some(MenuAction::ClearRecent),
        _ => None,
    }
}

pub fn recent_file_menu_id(path: &Path) -> String {
    format!(
        "{RECENT_FILE_MENU_PREFIX}{}",
        URL_SAFE_NO_PAD.encode(path.to_string_lossy().as_bytes())
    )
}

pub fn theme_menu_id(theme: &str) -> String {
    format!("{THEME_MENU_PREFIX}{theme}")
}

fn decode_path(encoded: &str) -> Option<PathBuf> {
    URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_fixed_actions() {
        assert_eq!(
            action_from_menu_id(MENU_FILE_NEW),
            Some(MenuAction::NewFile)
        );
        assert_eq!(
            action_from_menu_id(MENU_FILE_OPEN),
            Some(MenuAction::OpenRequest)
        );
        assert_eq!(action_from_menu_id(MENU_FILE_SAVE), Some(MenuAction::Save));
        assert_eq!(
            action_from_menu_id(MENU_FILE_SAVE_AS),
            Some(MenuAction::SaveAs)
        );
        assert_eq!(
            action_from_menu_id(MENU_SETTINGS),
            Some(MenuAction::Settings)
        );
        assert_eq!(action_from_menu_id(MENU_ABOUT), Some(MenuAction::About));
        assert_eq!(
            action_from_menu_id(MENU_HIDE),
            Some(MenuAction::HideWindow)
        );
        assert_eq!(action_from_menu_id(MENU_QUIT), Some(MenuAction::Quit));
        assert_eq!(
            action_from_menu_id(MENU_CLEAR_RECENT),
            Some(MenuAction::ClearRecent)
        );
    }

    #[test]
    fn action_from_menu_id_decodes_recent_file_path() {
        let path = PathBuf::from("diagrams").join("flow chart (v2).mmd");
        assert_eq!(
            action_from_menu_id(&recent_file_menu_id(&path)),
            Some(MenuAction::OpenRecent(path))
        );
        assert_eq!(action_from_menu_id("recent_file:!!not-base64"), None);
    }

    #[test]
    fn action_from_menu_id_accepts_known_themes_only() {
        assert_eq!(
            action_from_menu_id(&theme_menu_id("dracula")),
            Some(MenuAction::SetTheme("dracula".to_string()))
        );
        assert_eq!(action_from_menu_id(&theme_menu_id("sepia")), None);
    }

    #[test]
    fn action_from_menu_id_returns_none_for_placeholder_and_unknown_ids() {
        assert_eq!(action_from_menu_id(MENU_NO_RECENT_FILES), None);
        assert_eq!(action_from_menu_id(MENU_OPEN_RECENT), None);
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }
}
