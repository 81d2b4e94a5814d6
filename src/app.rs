use dioxus::prelude::*;
use mundos_core::{
    DocumentRoot, ForcedDarkController, LocalSession, Preferences, SessionProvider, ThemeStore,
    User, WorldTheme,
};

use crate::components::Shell;
use crate::context::{get_data_dir, get_initial_user, AppSession, WorldThemeHandle};
use crate::pages::{Dashboard, Ejercicios, Landing, Login, Mundo, NotFound, Perfil};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/login` - Sign in
/// - `/dashboard` - Signed-in home with XP and world overview
/// - `/ejercicios` - World index (always dark)
/// - `/ejercicios/mundos/:id` - A single world (always dark, world theme)
/// - `/perfil` - Profile and logout
///
/// Every route renders inside [`Shell`], which owns the nav header, the
/// auth gate and the forced dark mode effect.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/ejercicios")]
        Ejercicios {},
        #[route("/ejercicios/mundos/:id")]
        Mundo { id: u32 },
        #[route("/perfil")]
        Perfil {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, session, world theme, the document root and
/// routing.
#[component]
pub fn App() -> Element {
    // Session
    let provider = use_hook(|| {
        let provider = LocalSession::new();
        if let Some(email) = get_initial_user() {
            if let Err(e) = provider.sign_in(&email, "local") {
                tracing::error!("Failed to sign in as {}: {}", email, e);
            }
        }
        provider
    });
    let user: Signal<Option<User>> = use_signal(|| provider.current_user());
    use_context_provider(|| AppSession::new(provider, user));

    // World theme store, mirrored into a signal for rendering
    let current_theme: Signal<WorldTheme> = use_signal(WorldTheme::default);
    let themes = use_hook(|| {
        let store = ThemeStore::new();
        store.subscribe(move |theme| {
            let mut current_theme = current_theme;
            current_theme.set(theme.clone());
        });
        WorldThemeHandle::new(store, current_theme)
    });
    use_context_provider(|| themes);

    // Document root: starts from the saved preference
    let root: Signal<DocumentRoot> = use_signal(|| {
        let prefs = Preferences::load(&get_data_dir());
        DocumentRoot::with_dark(prefs.dark_mode)
    });
    let controller: Signal<ForcedDarkController> = use_signal(ForcedDarkController::new);
    use_context_provider(|| root);
    use_context_provider(|| controller);

    let root_class = root.read().class_attr();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root {root_class}",
            Router::<Route> {}
        }
    }
}
