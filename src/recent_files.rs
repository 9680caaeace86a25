//! Recent-files registry: a bounded, deduplicated, most-recent-first list of
//! document paths persisted as a JSON array under the user config directory.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use thiserror::Error;

use crate::{
    recent_paths::{normalize_recent_files, normalize_recent_path},
    APP_NAME, CONFIG_DIR_ENV, MAX_RECENT_FILES, RECENT_FILES_CONFIG_NAME,
};

#[derive(Debug, Error)]
pub(crate) enum RecentFilesError {
    #[error("resolve user config dir: no platform config directory available")]
    ConfigDirUnavailable,

    #[error("read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("mkdir {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("encode recent files: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// On-disk location of the recent-files list.
///
/// The path is resolved on first use and then cached for the life of the
/// store. A failed resolution is not cached, so it surfaces on every call.
#[derive(Debug, Default)]
pub(crate) struct RecentFilesStore {
    path: OnceLock<PathBuf>,
}

impl RecentFilesStore {
    pub(crate) fn user_config() -> Self {
        Self::default()
    }

    pub(crate) fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: OnceLock::from(path.into()),
        }
    }

    pub(crate) fn path(&self) -> Result<&Path, RecentFilesError> {
        if let Some(path) = self.path.get() {
            return Ok(path);
        }

        let resolved = recent_files_path(
            env::var_os(CONFIG_DIR_ENV).map(PathBuf::from),
            dirs::config_dir(),
        )?;
        Ok(self.path.get_or_init(|| resolved))
    }

    pub(crate) fn load(&self) -> Result<Vec<PathBuf>, RecentFilesError> {
        let path = self.path()?;
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(RecentFilesError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        // Older builds wrote `null` for an empty list.
        let recent: Option<Vec<PathBuf>> =
            serde_json::from_str(&raw).map_err(|source| RecentFilesError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(normalize_recent_files(recent.unwrap_or_default()))
    }

    pub(crate) fn save(&self, entries: &[PathBuf]) -> Result<(), RecentFilesError> {
        let path = self.path()?;
        if let Some(parent_dir) = path.parent() {
            fs::create_dir_all(parent_dir).map_err(|source| RecentFilesError::CreateDir {
                path: parent_dir.to_path_buf(),
                source,
            })?;
        }

        let mut serialized =
            serde_json::to_string_pretty(entries).map_err(RecentFilesError::Encode)?;
        serialized.push('\n');

        fs::write(path, serialized).map_err(|source| RecentFilesError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn recent_files_path(
    override_dir: Option<PathBuf>,
    platform_config_dir: Option<PathBuf>,
) -> Result<PathBuf, RecentFilesError> {
    let config_dir = override_dir
        .filter(|dir| !dir.as_os_str().is_empty())
        .or(platform_config_dir)
        .ok_or(RecentFilesError::ConfigDirUnavailable)?;

    Ok(config_dir.join(APP_NAME).join(RECENT_FILES_CONFIG_NAME))
}

#[derive(Debug)]
pub(crate) struct RecentFiles {
    entries: Vec<PathBuf>,
    store: RecentFilesStore,
}

impl RecentFiles {
    pub(crate) fn new(store: RecentFilesStore) -> Self {
        Self {
            entries: Vec::new(),
            store,
        }
    }

    pub(crate) fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Replaces the in-memory list with the persisted one. On failure the
    /// list is left empty and the error is returned for the caller to log.
    pub(crate) fn load(&mut self) -> Result<(), RecentFilesError> {
        match self.store.load() {
            Ok(entries) => {
                self.entries = entries;
                Ok(())
            }
            Err(error) => {
                self.entries.clear();
                Err(error)
            }
        }
    }

    pub(crate) fn save(&self) -> Result<(), RecentFilesError> {
        self.store.save(&self.entries)
    }

    /// Moves `path` to the front. Returns `false` when `path` is not a valid
    /// entry and nothing changed.
    pub(crate) fn add(&mut self, path: &Path) -> bool {
        let Some(clean_path) = normalize_recent_path(path) else {
            return false;
        };

        let mut next = Vec::with_capacity(MAX_RECENT_FILES);
        next.extend(
            self.entries
                .drain(..)
                .filter(|entry| *entry != clean_path)
                .take(MAX_RECENT_FILES - 1),
        );
        next.insert(0, clean_path);

        self.entries = next;
        true
    }

    /// Returns `true` only if an entry was actually removed.
    pub(crate) fn remove(&mut self, path: &Path) -> bool {
        let Some(clean_path) = normalize_recent_path(path) else {
            return false;
        };

        let before = self.entries.len();
        self.entries.retain(|entry| *entry != clean_path);
        self.entries.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
