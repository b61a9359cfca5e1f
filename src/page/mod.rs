//! The view side of the controller: the themed surface being driven.
//!
//! In a browser this is the document — a `data-theme` attribute on the root
//! element, an inline transition declaration on the body, and an optional
//! toggle control. [`ViewBinding`] abstracts that surface so the controller
//! can drive a real document or the in-memory [`HeadlessPage`] alike.

mod headless;

pub use headless::HeadlessPage;

use crate::theme::Theme;

/// Attribute on the root element that styling rules consume.
pub const THEME_ATTR: &str = "data-theme";

/// Well-known id of the optional toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Inline transition declaration asserted on the body at toggle time, so
/// the style recalculation animates rather than snaps.
pub const THEME_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

/// Capability trait for the themed view.
pub trait ViewBinding {
    /// Returns the raw value of the root theme attribute, if set.
    ///
    /// The raw string matters: toggling treats `"dark"` as dark and any
    /// other value, recognized or not, as something to flip to dark.
    fn applied_theme(&self) -> Option<String>;

    /// Sets the root theme attribute.
    fn apply_theme(&mut self, theme: Theme);

    /// Asserts the [`THEME_TRANSITION`] declaration on the body.
    ///
    /// Idempotent: re-asserting an already-set declaration is a no-op.
    fn prepare_transition(&mut self);

    /// Whether the view contains the toggle control.
    fn has_toggle_control(&self) -> bool;
}
