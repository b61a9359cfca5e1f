//! OS color-scheme detection.

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::preference::Theme;

/// Query for the operating system's ambient color-scheme preference.
///
/// This is the "does the OS prefer dark mode" predicate. Change
/// notifications are delivered by the host calling
/// [`ThemeController::handle_scheme_change`](crate::ThemeController::handle_scheme_change);
/// the trait itself only answers the current value.
pub trait SchemeQuery {
    /// Returns true if the OS currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

/// [`SchemeQuery`] backed by the operating system's reported preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemScheme;

impl SchemeQuery for SystemScheme {
    fn prefers_dark(&self) -> bool {
        detect_scheme() == Theme::Dark
    }
}

type SchemeDetector = fn() -> Theme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used to determine the OS color-scheme preference.
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_scheme() -> Theme {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_scheme_detector() -> Theme {
    match detect_os_scheme() {
        OsSchemeMode::Dark => Theme::Dark,
        OsSchemeMode::Light => Theme::Light,
    }
}
