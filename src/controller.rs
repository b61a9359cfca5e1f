//! The theme preference controller.

use tracing::debug;

use crate::page::ViewBinding;
use crate::store::ThemeStore;
use crate::theme::{SchemeQuery, SystemScheme, Theme};

/// Which event handlers the host should wire after [`ThemeController::bind`].
///
/// Absence of either handler is inert, not an error: a page without the
/// toggle control simply never delivers toggle events, and a host without a
/// scheme capability never delivers scheme-change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    /// Deliver toggle activations to [`ThemeController::handle_toggle`].
    pub toggle: bool,
    /// Deliver OS scheme changes to [`ThemeController::handle_scheme_change`].
    pub scheme: bool,
}

/// Drives the effective theme of a view from a stored preference, the OS
/// color-scheme preference, and user toggle events.
///
/// The controller is event-driven and fully synchronous: each of the three
/// entry points ([`handle_ready`](Self::handle_ready),
/// [`handle_toggle`](Self::handle_toggle),
/// [`handle_scheme_change`](Self::handle_scheme_change)) is a short
/// sequence of reads and writes against the injected capabilities, and the
/// host delivers events one at a time.
///
/// After any entry point returns, a stored preference (when present) equals
/// the applied theme; when absent, the applied theme tracks the OS
/// preference without ever being persisted.
///
/// # Example
///
/// ```rust
/// use duotone::{HeadlessPage, MemoryStore, Theme, ThemeController, ThemeStore, ViewBinding};
///
/// let mut controller = ThemeController::new(MemoryStore::new(), HeadlessPage::with_toggle());
/// let bindings = controller.bind();
/// assert!(bindings.toggle);
///
/// controller.handle_toggle();
/// assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
/// assert_eq!(controller.store().load(), Some(Theme::Dark));
/// ```
#[derive(Debug)]
pub struct ThemeController<S, V, Q = SystemScheme> {
    store: S,
    view: V,
    scheme: Option<Q>,
}

impl<S: ThemeStore, V: ViewBinding> ThemeController<S, V, SystemScheme> {
    /// Creates a controller with no OS scheme capability.
    pub fn new(store: S, view: V) -> Self {
        Self {
            store,
            view,
            scheme: None,
        }
    }

    /// Creates a controller that queries the operating system's preference.
    pub fn with_system_scheme(store: S, view: V) -> Self {
        Self::with_scheme(store, view, SystemScheme)
    }
}

impl<S: ThemeStore, V: ViewBinding, Q: SchemeQuery> ThemeController<S, V, Q> {
    /// Creates a controller with an explicit scheme capability.
    pub fn with_scheme(store: S, view: V, scheme: Q) -> Self {
        Self {
            store,
            view,
            scheme: Some(scheme),
        }
    }

    /// Runs the page-ready pass and reports which handlers to wire.
    pub fn bind(&mut self) -> Bindings {
        self.handle_ready();
        Bindings {
            toggle: self.view.has_toggle_control(),
            scheme: self.scheme.is_some(),
        }
    }

    /// Page-ready entry point.
    ///
    /// Applies the stored preference, falling back to [`Theme::Light`].
    /// Then, when a scheme capability exists and no preference is stored,
    /// lets a dark OS preference override the default. Never writes the
    /// store.
    pub fn handle_ready(&mut self) {
        let stored = self.store.load();
        let effective = stored.unwrap_or_default();
        self.view.apply_theme(effective);
        debug!(theme = %effective, stored = stored.is_some(), "applied theme on ready");

        if let Some(scheme) = &self.scheme {
            if stored.is_none() && scheme.prefers_dark() {
                self.view.apply_theme(Theme::Dark);
                debug!("no stored preference, following dark OS scheme");
            }
        }
    }

    /// Toggle-activation entry point.
    ///
    /// Flips the applied theme (`"dark"` becomes light, anything else
    /// becomes dark), persists the result as the user's explicit choice,
    /// and asserts the body transition so the restyle animates.
    pub fn handle_toggle(&mut self) {
        let next = match self.view.applied_theme().as_deref() {
            Some("dark") => Theme::Light,
            _ => Theme::Dark,
        };

        self.view.apply_theme(next);
        self.store.save(next);
        self.view.prepare_transition();
        debug!(theme = %next, "toggled theme");
    }

    /// OS scheme-change entry point.
    ///
    /// The store is re-checked on every firing: once an explicit choice
    /// exists the event is ignored forever, otherwise the applied theme
    /// follows the new OS value.
    pub fn handle_scheme_change(&mut self, prefers_dark: bool) {
        if self.store.load().is_some() {
            debug!("ignoring OS scheme change, explicit preference set");
            return;
        }

        let theme = if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        };
        self.view.apply_theme(theme);
        debug!(theme = %theme, "followed OS scheme change");
    }

    /// Returns the preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the driven view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the controller, returning the store and view.
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HeadlessPage;
    use crate::store::MemoryStore;

    /// Scheme capability with a fixed answer.
    struct FixedScheme(bool);

    impl SchemeQuery for FixedScheme {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_ready_defaults_to_light() {
        let mut controller = ThemeController::new(MemoryStore::new(), HeadlessPage::new());
        controller.handle_ready();

        assert_eq!(controller.view().applied_theme().as_deref(), Some("light"));
        assert_eq!(controller.store().load(), None);
    }

    #[test]
    fn test_ready_applies_stored_preference() {
        let mut controller = ThemeController::with_scheme(
            MemoryStore::with_preference(Theme::Dark),
            HeadlessPage::new(),
            FixedScheme(false),
        );
        controller.handle_ready();

        assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
    }

    #[test]
    fn test_ready_follows_dark_os_scheme_without_preference() {
        let mut controller = ThemeController::with_scheme(
            MemoryStore::new(),
            HeadlessPage::new(),
            FixedScheme(true),
        );
        controller.handle_ready();

        assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
        // Following the OS never writes the store.
        assert_eq!(controller.store().load(), None);
    }

    #[test]
    fn test_ready_ignores_os_scheme_with_preference() {
        let mut controller = ThemeController::with_scheme(
            MemoryStore::with_preference(Theme::Light),
            HeadlessPage::new(),
            FixedScheme(true),
        );
        controller.handle_ready();

        assert_eq!(controller.view().applied_theme().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_flips_persists_and_animates() {
        let mut controller = ThemeController::new(MemoryStore::new(), HeadlessPage::with_toggle());
        controller.handle_ready();

        controller.handle_toggle();
        assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
        assert_eq!(controller.store().load(), Some(Theme::Dark));
        assert!(controller.view().body_transition().is_some());

        controller.handle_toggle();
        assert_eq!(controller.view().applied_theme().as_deref(), Some("light"));
        assert_eq!(controller.store().load(), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_sends_unknown_attr_to_dark() {
        let mut page = HeadlessPage::with_toggle();
        page.set_raw_theme_attr("sepia");

        let mut controller = ThemeController::new(MemoryStore::new(), page);
        controller.handle_toggle();

        assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
        assert_eq!(controller.store().load(), Some(Theme::Dark));
    }

    #[test]
    fn test_toggle_with_unset_attr_goes_dark() {
        let mut controller = ThemeController::new(MemoryStore::new(), HeadlessPage::with_toggle());
        controller.handle_toggle();

        assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
    }

    #[test]
    fn test_scheme_change_follows_os_without_preference() {
        let mut controller = ThemeController::with_scheme(
            MemoryStore::new(),
            HeadlessPage::new(),
            FixedScheme(false),
        );
        controller.handle_ready();

        controller.handle_scheme_change(true);
        assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));

        controller.handle_scheme_change(false);
        assert_eq!(controller.view().applied_theme().as_deref(), Some("light"));
    }

    #[test]
    fn test_scheme_change_is_idempotent() {
        let mut controller = ThemeController::with_scheme(
            MemoryStore::new(),
            HeadlessPage::new(),
            FixedScheme(false),
        );
        controller.handle_ready();

        for _ in 0..3 {
            controller.handle_scheme_change(true);
            assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
        }
    }

    #[test]
    fn test_scheme_change_never_overrides_explicit_choice() {
        let mut controller = ThemeController::with_scheme(
            MemoryStore::new(),
            HeadlessPage::with_toggle(),
            FixedScheme(false),
        );
        controller.handle_ready();
        controller.handle_toggle();
        assert_eq!(controller.store().load(), Some(Theme::Dark));

        controller.handle_scheme_change(false);
        controller.handle_scheme_change(true);
        controller.handle_scheme_change(false);

        assert_eq!(controller.view().applied_theme().as_deref(), Some("dark"));
    }

    #[test]
    fn test_bind_reports_capabilities() {
        let mut with_both = ThemeController::with_scheme(
            MemoryStore::new(),
            HeadlessPage::with_toggle(),
            FixedScheme(false),
        );
        assert_eq!(
            with_both.bind(),
            Bindings {
                toggle: true,
                scheme: true
            }
        );

        let mut bare = ThemeController::new(MemoryStore::new(), HeadlessPage::new());
        assert_eq!(
            bare.bind(),
            Bindings {
                toggle: false,
                scheme: false
            }
        );
    }

    #[test]
    fn test_bind_runs_ready_pass() {
        let mut controller = ThemeController::new(MemoryStore::new(), HeadlessPage::new());
        controller.bind();
        assert_eq!(controller.view().applied_theme().as_deref(), Some("light"));
    }

    #[test]
    fn test_into_parts() {
        let mut controller = ThemeController::new(MemoryStore::new(), HeadlessPage::with_toggle());
        controller.bind();
        controller.handle_toggle();

        let (store, view) = controller.into_parts();
        assert_eq!(store.load(), Some(Theme::Dark));
        assert_eq!(view.applied_theme().as_deref(), Some("dark"));
    }
}
