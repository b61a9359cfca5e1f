//! In-memory stand-in for the themed document.

use super::{ViewBinding, THEME_TRANSITION};
use crate::theme::Theme;

/// A document-shaped value with no rendering behind it.
///
/// Holds exactly the state the controller touches: the root theme
/// attribute, the body's transition declaration, and whether the toggle
/// control exists. Non-browser hosts can use it directly; tests use it to
/// observe controller effects.
///
/// # Example
///
/// ```rust
/// use duotone::{HeadlessPage, Theme, ViewBinding};
///
/// let mut page = HeadlessPage::with_toggle();
/// page.apply_theme(Theme::Dark);
/// assert_eq!(page.applied_theme().as_deref(), Some("dark"));
/// assert!(page.has_toggle_control());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    theme_attr: Option<String>,
    body_transition: Option<String>,
    toggle_present: bool,
}

impl HeadlessPage {
    /// Creates a page without a toggle control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page that contains the toggle control.
    pub fn with_toggle() -> Self {
        Self {
            toggle_present: true,
            ..Self::default()
        }
    }

    /// Overwrites the raw theme attribute, bypassing the typed setter.
    ///
    /// Mirrors out-of-band attribute mutation (markup, other scripts).
    pub fn set_raw_theme_attr(&mut self, value: impl Into<String>) {
        self.theme_attr = Some(value.into());
    }

    /// Returns the body's transition declaration, if asserted.
    pub fn body_transition(&self) -> Option<&str> {
        self.body_transition.as_deref()
    }
}

impl ViewBinding for HeadlessPage {
    fn applied_theme(&self) -> Option<String> {
        self.theme_attr.clone()
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme_attr = Some(theme.as_str().to_string());
    }

    fn prepare_transition(&mut self) {
        self.body_transition = Some(THEME_TRANSITION.to_string());
    }

    fn has_toggle_control(&self) -> bool {
        self.toggle_present
    }
}
