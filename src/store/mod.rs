//! Persistent storage for the user's explicit theme choice.
//!
//! A store holds at most one value under the well-known [`THEME_KEY`].
//! Storage is modeled as optionally absent rather than failable: backends
//! swallow their own faults and report an unusable entry as `None`, so the
//! controller never sees an error from this layer.

mod file;

pub use file::FileStore;

use crate::theme::Theme;

/// Key under which the preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Capability trait for the single-entry preference store.
///
/// `load` returning `None` means no explicit choice exists, which makes the
/// OS preference (or the default) authoritative for the applied theme.
pub trait ThemeStore {
    /// Returns the stored preference, if any.
    fn load(&self) -> Option<Theme>;

    /// Persists an explicit preference.
    fn save(&mut self, theme: Theme);
}

/// In-process store with no durability, for tests and embedding hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    entry: Option<Theme>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds an explicit preference.
    pub fn with_preference(theme: Theme) -> Self {
        Self { entry: Some(theme) }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.entry
    }

    fn save(&mut self, theme: Theme) {
        self.entry = Some(theme);
    }
}
