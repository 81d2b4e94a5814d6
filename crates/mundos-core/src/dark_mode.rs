//! Forced dark mode for world pages.
//!
//! World pages always render dark. When a world page is entered with dark
//! mode off, the [`ForcedDarkController`] turns it on and remembers that it
//! did so; leaving the world pages turns it back off. If the user already had
//! dark mode on, the controller leaves the flag alone in both directions.
//!
//! ```text
//!            world page, flag unset / add dark
//!   Idle ------------------------------------> ForcedActive
//!    ^                                              |
//!    +----------------------------------------------+
//!            non-world page / remove dark
//! ```

use std::collections::BTreeSet;

use crate::world::is_world_page;

/// Class marking the document root as dark
pub const DARK_CLASS: &str = "dark";

/// The rendering host's document-wide dark flag.
///
/// Only add/remove semantics are required; how the flag is drawn is up to
/// the host.
pub trait DarkModeHost {
    /// Whether the dark flag is currently set
    fn is_dark(&self) -> bool;

    /// Set the dark flag
    fn add_dark(&mut self);

    /// Clear the dark flag
    fn remove_dark(&mut self);
}

/// In-memory root element: a set of class names.
///
/// The app renders [`DocumentRoot::class_attr`] on its outermost element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: BTreeSet<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root that starts dark, e.g. from a saved user preference
    pub fn with_dark(dark: bool) -> Self {
        let mut root = Self::new();
        if dark {
            root.add_dark();
        }
        root
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Flip the dark flag. Returns the new value.
    pub fn toggle_dark(&mut self) -> bool {
        if self.is_dark() {
            self.remove_dark();
        } else {
            self.add_dark();
        }
        self.is_dark()
    }

    /// Space separated class list, sorted
    pub fn class_attr(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl DarkModeHost for DocumentRoot {
    fn is_dark(&self) -> bool {
        self.has_class(DARK_CLASS)
    }

    fn add_dark(&mut self) {
        self.add_class(DARK_CLASS);
    }

    fn remove_dark(&mut self) {
        self.remove_class(DARK_CLASS);
    }
}

/// Ownership of the dark flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForcedDark {
    /// The controller does not own the dark flag
    #[default]
    Idle,
    /// The controller set the dark flag and must clear it on leaving
    ForcedActive,
}

/// What a call to [`ForcedDarkController::on_navigate`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Dark flag set, controller now owns it
    Forced,
    /// Dark flag cleared, ownership released
    Released,
    /// Nothing changed
    Unchanged,
}

/// Keeps world pages dark without clobbering the user's own choice.
///
/// Call [`on_navigate`](Self::on_navigate) on every route change. The dark
/// flag is cleared by the controller if and only if the controller set it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForcedDarkController {
    state: ForcedDark,
}

impl ForcedDarkController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ForcedDark {
        self.state
    }

    /// Whether this controller set the dark flag currently in effect
    pub fn owns_dark(&self) -> bool {
        self.state == ForcedDark::ForcedActive
    }

    /// Re-evaluate for a new route path.
    pub fn on_navigate<H: DarkModeHost + ?Sized>(&mut self, path: &str, host: &mut H) -> Transition {
        let world = is_world_page(path);

        match (world, self.state) {
            (true, ForcedDark::Idle) if !host.is_dark() => {
                host.add_dark();
                self.state = ForcedDark::ForcedActive;
                tracing::debug!(path, "Forcing dark mode on world page");
                Transition::Forced
            }
            (false, ForcedDark::ForcedActive) => {
                host.remove_dark();
                self.state = ForcedDark::Idle;
                tracing::debug!(path, "Released forced dark mode");
                Transition::Released
            }
            _ => Transition::Unchanged,
        }
    }
}
