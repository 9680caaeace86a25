use std::{
    collections::HashSet,
    env,
    path::{Component, Path, PathBuf},
};

use crate::MAX_RECENT_FILES;

/// Lexically cleans `raw`: drops `.` segments, folds `name/..` pairs and never
/// climbs above the root. An input that reduces to the current directory
/// yields an empty path.
pub(crate) fn clean_path(raw: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in raw.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Returns the registry form of `raw`, or `None` when it does not name a file.
///
/// Relative inputs are anchored at the process working directory; if that
/// cannot be read the cleaned relative path is kept as is. Paths that are not
/// valid UTF-8 are rejected: entries are persisted as JSON strings and carried
/// in menu ids, both of which need the exact path text.
pub(crate) fn normalize_recent_path(raw: &Path) -> Option<PathBuf> {
    raw.to_str()?;
    let cleaned = clean_path(raw);
    if cleaned.as_os_str().is_empty() {
        return None;
    }
    if cleaned.is_absolute() {
        return Some(cleaned);
    }

    match env::current_dir() {
        Ok(cwd) => Some(clean_path(&cwd.join(&cleaned))),
        Err(_) => Some(cleaned),
    }
}

pub(crate) fn normalize_recent_files<I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut result = Vec::with_capacity(MAX_RECENT_FILES);
    let mut seen = HashSet::with_capacity(MAX_RECENT_FILES);

    for path in paths {
        let Some(clean_path) = normalize_recent_path(&path) else {
            continue;
        };
        if !seen.insert(clean_path.clone()) {
            continue;
        }
        result.push(clean_path);
        if result.len() >= MAX_RECENT_FILES {
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_recent_path_rejects_empty_and_current_dir() {
        assert_eq!(normalize_recent_path(Path::new("")), None);
        assert_eq!(normalize_recent_path(Path::new(".")), None);
        assert_eq!(normalize_recent_path(Path::new("./a/..")), None);
    }

    #[cfg(unix)]
    #[test]
    fn normalize_recent_path_rejects_non_utf8_paths() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let raw = Path::new("/tmp").join(OsStr::from_bytes(b"bad\xff.mmd"));
        assert_eq!(normalize_recent_path(&raw), None);
    }

    #[test]
    fn normalize_recent_path_anchors_relative_paths_at_cwd() {
        let cwd = env::current_dir().expect("cwd should be readable in tests");
        assert_eq!(
            normalize_recent_path(Path::new("notes/./flow.mmd")),
            Some(cwd.join("notes").join("flow.mmd"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn clean_path_folds_dot_segments_lexically() {
        assert_eq!(clean_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean_path(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(clean_path(Path::new("../x/../../y")), PathBuf::from("../../y"));
        assert_eq!(clean_path(Path::new("a//b/")), PathBuf::from("a/b"));
    }

    #[cfg(unix)]
    #[test]
    fn normalize_recent_files_dedups_and_caps_in_first_seen_order() {
        let mut raw: Vec<PathBuf> = vec![
            PathBuf::from("/b"),
            PathBuf::from("/a/../b"),
            PathBuf::from(""),
            PathBuf::from("/a"),
        ];
        raw.extend((0..20).map(|index| PathBuf::from(format!("/n{index}"))));

        let normalized = normalize_recent_files(raw);

        assert_eq!(normalized.len(), MAX_RECENT_FILES);
        assert_eq!(normalized[0], PathBuf::from("/b"));
        assert_eq!(normalized[1], PathBuf::from("/a"));
        assert_eq!(normalized[2], PathBuf::from("/n0"));
        assert_eq!(normalized[9], PathBuf::from("/n7"));
    }
}
