//! Light/dark theme preference control with OS color-scheme fallback.
//!
//! `duotone` keeps a view's effective theme in sync with three inputs: the
//! user's explicit, persisted choice; the operating system's ambient
//! color-scheme preference; and a `light` default. The precedence is fixed:
//! an explicit choice always wins, the OS preference fills in until one
//! exists, and the default covers hosts with neither.
//!
//! The browser-shaped ambient state is modeled as injected capabilities, so
//! the controller logic runs and tests without a real document:
//!
//! - [`ThemeStore`]: the persistent single-key preference store
//!   ([`MemoryStore`], [`FileStore`])
//! - [`ViewBinding`]: the themed surface being driven ([`HeadlessPage`])
//! - [`SchemeQuery`]: the "does the OS prefer dark" predicate
//!   ([`SystemScheme`])
//!
//! Every capability is optional in spirit: a missing toggle control, an
//! absent scheme capability, or an unusable store entry disables the
//! dependent behavior instead of raising an error.
//!
//! # Example
//!
//! ```rust
//! use duotone::{HeadlessPage, MemoryStore, Theme, ThemeController, ThemeStore, ViewBinding};
//!
//! let mut controller = ThemeController::new(MemoryStore::new(), HeadlessPage::with_toggle());
//!
//! // Page-ready pass: no stored choice, no scheme capability, so the
//! // default applies.
//! let bindings = controller.bind();
//! assert_eq!(controller.view().applied_theme().as_deref(), Some("light"));
//!
//! // The user toggles; the choice is applied and persisted.
//! assert!(bindings.toggle);
//! controller.handle_toggle();
//! assert_eq!(controller.store().load(), Some(Theme::Dark));
//! ```

mod controller;
mod page;
mod store;
mod theme;

pub use controller::{Bindings, ThemeController};
pub use page::{HeadlessPage, ViewBinding, THEME_ATTR, THEME_TRANSITION, TOGGLE_ID};
pub use store::{FileStore, MemoryStore, ThemeStore, THEME_KEY};
pub use theme::{set_scheme_detector, ParseThemeError, SchemeQuery, SystemScheme, Theme};
