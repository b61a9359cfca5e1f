//! The theme preference value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme '{0}', expected 'light' or 'dark'")]
pub struct ParseThemeError(pub String);

/// One of the two mutually exclusive presentation modes.
///
/// The serialized form is the lowercase name, matching both the persisted
/// value and the document attribute value.
///
/// # Example
///
/// ```rust
/// use duotone::Theme;
///
/// assert_eq!(Theme::Dark.as_str(), "dark");
/// assert_eq!(Theme::Dark.toggled(), Theme::Light);
/// assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Returns the lowercase name used for storage and the view attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    /// The theme applied when neither a stored preference nor an OS
    /// preference is available.
    fn default() -> Self {
        Theme::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
