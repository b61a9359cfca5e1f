//! File-backed preference store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ThemeStore;
use crate::theme::Theme;

/// On-disk wire form: a single-key JSON object, `{"theme":"dark"}`.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    theme: Theme,
}

/// Durable single-entry store at a caller-supplied path.
///
/// Survives restarts; scoped to whatever directory the host hands it, the
/// way a browser store is scoped to an origin. Faults are absorbed: a
/// missing, unreadable, or unrecognizable file loads as `None`, and a
/// failed write leaves the previous entry in place.
///
/// # Example
///
/// ```rust
/// use duotone::{FileStore, Theme, ThemeStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = FileStore::new(dir.path().join("theme.json"));
/// assert_eq!(store.load(), None);
///
/// store.save(Theme::Dark);
/// assert_eq!(store.load(), Some(Theme::Dark));
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path. Nothing is touched on
    /// disk until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileStore {
    fn load(&self) -> Option<Theme> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return None,
        };

        match serde_json::from_str::<Record>(&contents) {
            Ok(record) => Some(record.theme),
            Err(err) => {
                debug!(path = %self.path.display(), %err, "ignoring unreadable theme entry");
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), %err, "failed to create store directory");
                return;
            }
        }

        // Record is two copyable fields deep; serialization cannot fail.
        let contents = match serde_json::to_string(&Record { theme }) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(%err, "failed to serialize theme entry");
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, contents) {
            warn!(path = %self.path.display(), %err, "failed to persist theme entry");
        }
    }
}
