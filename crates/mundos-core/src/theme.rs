//! World theme store.
//!
//! The world pages paint their navigation bar and buttons from a
//! [`WorldTheme`]. The active theme lives in a [`ThemeStore`], a shared
//! observable cell: clones of a store share one state, and subscribers are
//! called after every transition.
//!
//! ## State machine
//!
//! ```text
//! Default --set_theme(t)--> Custom(t) --set_theme(u)--> Custom(u)
//!    ^                          |
//!    +--------reset()-----------+
//! ```
//!
//! There is no automatic way back to `Default`; callers reset explicitly.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A named color palette from which a [`WorldTheme`] is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Display name of the palette
    pub name: &'static str,
    /// Dominant color, start of gradients
    pub primary: &'static str,
    /// End color of the navigation gradient
    pub secondary: &'static str,
    /// Highlight color for badges, links and buttons
    pub accent: &'static str,
}

impl ColorScheme {
    /// Palette used outside of any world
    pub const DEFAULT: ColorScheme = ColorScheme {
        name: "Cosmos",
        primary: "#4f46e5",
        secondary: "#7c3aed",
        accent: "#22d3ee",
    };
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Style tokens applied to a world page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldTheme {
    /// Background of the navigation bar
    pub nav_gradient: String,
    /// Accent color for highlighted text and borders
    pub accent_color: String,
    /// Background of primary buttons
    pub button_gradient: String,
}

impl WorldTheme {
    /// Derive the style tokens for a palette
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            nav_gradient: format!(
                "linear-gradient(90deg, {}, {})",
                scheme.primary, scheme.secondary
            ),
            accent_color: scheme.accent.to_string(),
            button_gradient: format!(
                "linear-gradient(135deg, {}, {})",
                scheme.accent, scheme.primary
            ),
        }
    }
}

impl Default for WorldTheme {
    fn default() -> Self {
        Self::from_scheme(&ColorScheme::DEFAULT)
    }
}

/// Current state of a [`ThemeStore`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeState {
    /// No theme has been set (or the store was reset)
    #[default]
    Default,
    /// A theme was set explicitly
    Custom(WorldTheme),
}

impl ThemeState {
    /// The theme this state renders with
    pub fn theme(&self) -> WorldTheme {
        match self {
            ThemeState::Default => WorldTheme::default(),
            ThemeState::Custom(theme) => theme.clone(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ThemeState::Custom(_))
    }
}

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn(&WorldTheme)>;

#[derive(Default)]
struct Inner {
    state: ThemeState,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

/// Shared, observable holder of the active world theme.
///
/// Single-threaded by construction (`Rc`), matching the UI event loop.
#[derive(Clone, Default)]
pub struct ThemeStore {
    inner: Rc<RefCell<Inner>>,
}

impl ThemeStore {
    /// Create a store in the `Default` state
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme currently in effect
    pub fn theme(&self) -> WorldTheme {
        self.inner.borrow().state.theme()
    }

    /// Snapshot of the state machine
    pub fn state(&self) -> ThemeState {
        self.inner.borrow().state.clone()
    }

    /// Transition to `Custom(theme)` and notify subscribers
    pub fn set_theme(&self, theme: WorldTheme) {
        tracing::debug!(accent = %theme.accent_color, "World theme set");
        self.inner.borrow_mut().state = ThemeState::Custom(theme);
        self.notify();
    }

    /// Transition back to `Default` and notify subscribers
    pub fn reset(&self) {
        tracing::debug!("World theme reset");
        self.inner.borrow_mut().state = ThemeState::Default;
        self.notify();
    }

    /// Register a callback invoked with the new theme after each transition
    pub fn subscribe(&self, listener: impl Fn(&WorldTheme) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let mut inner = self.inner.borrow_mut();
        let id = Subscription(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != subscription);
        inner.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Release the borrow first: listeners are allowed to read the store.
        let (theme, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.state.theme(), listeners)
        };
        for listener in listeners {
            listener(&theme);
        }
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ThemeStore")
            .field("state", &inner.state)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ocean() -> WorldTheme {
        WorldTheme::from_scheme(&ColorScheme {
            name: "Océano",
            primary: "#0ea5e9",
            secondary: "#1e3a8a",
            accent: "#5eead4",
        })
    }

    #[test]
    fn starts_with_default_scheme() {
        let store = ThemeStore::new();
        assert_eq!(store.state(), ThemeState::Default);
        assert_eq!(store.theme(), WorldTheme::from_scheme(&ColorScheme::DEFAULT));
    }

    #[test]
    fn derived_tokens() {
        let theme = WorldTheme::from_scheme(&ColorScheme::DEFAULT);
        assert_eq!(theme.nav_gradient, "linear-gradient(90deg, #4f46e5, #7c3aed)");
        assert_eq!(theme.accent_color, "#22d3ee");
        assert_eq!(theme.button_gradient, "linear-gradient(135deg, #22d3ee, #4f46e5)");
    }

    #[test]
    fn set_theme_is_read_back_exactly() {
        let store = ThemeStore::new();
        let theme = WorldTheme {
            nav_gradient: "navy".to_string(),
            accent_color: "gold".to_string(),
            button_gradient: "none".to_string(),
        };
        store.set_theme(theme.clone());
        assert_eq!(store.theme(), theme);
        assert!(store.state().is_custom());
    }

    #[test]
    fn no_automatic_return_to_default() {
        let store = ThemeStore::new();
        store.set_theme(ocean());
        store.set_theme(ocean());
        assert_eq!(store.state(), ThemeState::Custom(ocean()));

        store.reset();
        assert_eq!(store.state(), ThemeState::Default);
        assert_eq!(store.theme(), WorldTheme::default());
    }

    #[test]
    fn clones_share_state() {
        let provider = ThemeStore::new();
        let consumer = provider.clone();
        consumer.set_theme(ocean());
        assert_eq!(provider.theme(), ocean());
        assert_eq!(provider, consumer);
        assert_ne!(provider, ThemeStore::new());
    }

    #[test]
    fn subscribers_see_every_transition() {
        let store = ThemeStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |theme| sink.borrow_mut().push(theme.accent_color.clone()));

        store.set_theme(ocean());
        store.reset();

        assert_eq!(*seen.borrow(), vec!["#5eead4".to_string(), "#22d3ee".to_string()]);
    }

    #[test]
    fn subscriber_may_read_store() {
        let store = ThemeStore::new();
        let reader = store.clone();
        let matched = Rc::new(Cell::new(false));
        let flag = Rc::clone(&matched);
        store.subscribe(move |theme| flag.set(reader.theme() == *theme));

        store.set_theme(ocean());
        assert!(matched.get());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = ThemeStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set_theme(ocean());
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.reset();

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }
}
