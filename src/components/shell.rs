//! Shell layout.
//!
//! Wraps every route. On each path change it runs the forced dark mode
//! controller and, for gated routes, redirects signed-out users to login.

use dioxus::prelude::*;
use mundos_core::requires_auth;

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{use_dark_controller, use_document_root, use_session};

#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let navigator = use_navigator();
    let session = use_session();

    let mut root = use_document_root();
    let mut controller = use_dark_controller();

    // Keyed on path: world pages force dark, leaving them releases it
    use_effect(use_reactive((&path,), move |(path,)| {
        let transition = controller.write().on_navigate(&path, &mut *root.write());
        tracing::debug!(%path, ?transition, "Route changed");
    }));

    let needs_login = requires_auth(&path) && session.user().is_none();

    use_effect(use_reactive((&needs_login,), move |(needs_login,)| {
        if needs_login {
            tracing::info!("Signed out on a gated page, redirecting to login");
            navigator.replace(Route::Login {});
        }
    }));

    rsx! {
        NavHeader { path: path.clone() }
        main { class: "page",
            if needs_login {
                div { class: "loading-state",
                    p { class: "loading-message", "Redirigiendo al inicio de sesión..." }
                }
            } else {
                Outlet::<Route> {}
            }
        }
    }
}
