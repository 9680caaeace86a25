use std::path::{Path, PathBuf};

pub(crate) const NO_RECENT_FILES_LABEL: &str = "No Recent Files";
pub(crate) const CLEAR_RECENT_FILES_LABEL: &str = "Clear Menu";

/// One row of the "Open Recent" submenu, derived from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecentMenuEntry {
    OpenRecent { label: String, path: PathBuf },
    NoRecentFiles,
    Separator,
    ClearRecent,
}

impl RecentMenuEntry {
    pub(crate) fn label(&self) -> Option<&str> {
        match self {
            Self::OpenRecent { label, .. } => Some(label),
            Self::NoRecentFiles => Some(NO_RECENT_FILES_LABEL),
            Self::Separator => None,
            Self::ClearRecent => Some(CLEAR_RECENT_FILES_LABEL),
        }
    }
}

pub(crate) fn build_recent_menu(paths: &[PathBuf]) -> Vec<RecentMenuEntry> {
    let mut entries: Vec<RecentMenuEntry> = paths
        .iter()
        .map(|path| RecentMenuEntry::OpenRecent {
            label: recent_menu_label(path),
            path: path.clone(),
        })
        .collect();

    if entries.is_empty() {
        entries.push(RecentMenuEntry::NoRecentFiles);
    }
    entries.push(RecentMenuEntry::Separator);
    entries.push(RecentMenuEntry::ClearRecent);
    entries
}

/// `name (parent dir)`, or just the name when the file sits in the working
/// directory.
pub(crate) fn recent_menu_label(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return path.display().to_string();
    };
    let name = name.to_string_lossy();

    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && dir != Path::new(".") => {
            format!("{name} ({})", dir.display())
        }
        _ => name.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_recent_menu_shows_disabled_placeholder_when_empty() {
        assert_eq!(
            build_recent_menu(&[]),
            vec![
                RecentMenuEntry::NoRecentFiles,
                RecentMenuEntry::Separator,
                RecentMenuEntry::ClearRecent,
            ]
        );
    }

    #[test]
    fn build_recent_menu_lists_paths_in_registry_order() {
        let first = PathBuf::from("docs").join("first.mmd");
        let second = PathBuf::from("second.mmd");

        let entries = build_recent_menu(&[first.clone(), second.clone()]);

        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            RecentMenuEntry::OpenRecent {
                label: format!("first.mmd ({})", Path::new("docs").display()),
                path: first,
            }
        );
        assert_eq!(entries[1].label(), Some("second.mmd"));
        assert_eq!(entries[2], RecentMenuEntry::Separator);
        assert_eq!(entries[3].label(), Some(CLEAR_RECENT_FILES_LABEL));
    }

    #[cfg(unix)]
    #[test]
    fn recent_menu_label_annotates_parent_directory() {
        assert_eq!(
            recent_menu_label(Path::new("/home/ada/flow.mmd")),
            "flow.mmd (/home/ada)"
        );
        assert_eq!(recent_menu_label(Path::new("./flow.mmd")), "flow.mmd");
        assert_eq!(recent_menu_label(Path::new("/")), "/");
    }
}
