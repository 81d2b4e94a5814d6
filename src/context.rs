//! Shared state providers for Mundos.
//!
//! [`App`](crate::app::App) provides these once; pages and components reach
//! them through the `use_*` hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_session();
//! if let Some(user) = session.user() {
//!     // ...
//! }
//!
//! let themes = use_world_theme();
//! themes.set_theme(world.theme());
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use mundos_core::{
    DocumentRoot, ForcedDarkController, LocalSession, MundosResult, SessionProvider, ThemeStore,
    User, WorldTheme,
};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the email to sign in with on launch (if set via --user).
pub fn get_initial_user() -> Option<String> {
    crate::get_initial_user()
}

/// Session provider plus a reactive copy of the current user.
///
/// The provider is the source of truth; every mutation goes through here so
/// the signal stays in step and components re-render.
#[derive(Clone)]
pub struct AppSession {
    provider: LocalSession,
    user: Signal<Option<User>>,
}

impl AppSession {
    pub fn new(provider: LocalSession, user: Signal<Option<User>>) -> Self {
        Self { provider, user }
    }

    /// The signed-in user (subscribes the caller to changes)
    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn sign_in(&self, email: &str, password: &str) -> MundosResult<User> {
        let user = self.provider.sign_in(email, password)?;
        self.refresh();
        Ok(user)
    }

    pub fn logout(&self) {
        self.provider.logout();
        self.refresh();
    }

    /// Credit XP to the signed-in user, returning the new total
    pub fn award_xp(&self, amount: u64) -> Option<u64> {
        let total = self.provider.award_xp(amount);
        self.refresh();
        total
    }

    fn refresh(&self) {
        let mut user = self.user;
        user.set(self.provider.current_user());
    }
}

/// Hook to access the session from context.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// The world theme store plus the signal its subscriber keeps updated.
#[derive(Clone)]
pub struct WorldThemeHandle {
    store: ThemeStore,
    current: Signal<WorldTheme>,
}

impl WorldThemeHandle {
    pub fn new(store: ThemeStore, current: Signal<WorldTheme>) -> Self {
        Self { store, current }
    }

    /// The active theme (subscribes the caller to changes)
    pub fn theme(&self) -> WorldTheme {
        self.current.read().clone()
    }

    pub fn set_theme(&self, theme: WorldTheme) {
        self.store.set_theme(theme);
    }

    /// Return to the default scheme
    pub fn reset(&self) {
        self.store.reset();
    }
}

/// Hook to access the world theme from context.
pub fn use_world_theme() -> WorldThemeHandle {
    use_context::<WorldThemeHandle>()
}

/// Hook to access the document root (dark flag and other root classes).
pub fn use_document_root() -> Signal<DocumentRoot> {
    use_context::<Signal<DocumentRoot>>()
}

/// Hook to access the single forced dark mode controller.
pub fn use_dark_controller() -> Signal<ForcedDarkController> {
    use_context::<Signal<ForcedDarkController>>()
}
