//! The theme preference value and OS color-scheme detection.
//!
//! This module provides:
//!
//! - [`Theme`]: The light/dark preference enum
//! - [`SchemeQuery`]: Capability trait for the OS color-scheme predicate
//! - [`SystemScheme`]: OS-backed implementation with a test override

mod detect;
mod preference;

pub use detect::{set_scheme_detector, SchemeQuery, SystemScheme};
pub use preference::{ParseThemeError, Theme};
