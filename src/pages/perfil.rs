//! Perfil - account details and logout.

use dioxus::prelude::*;
use mundos_core::WORLDS;
use mundos_ui::{Button, ButtonVariant, XpBadge};

use crate::app::Route;
use crate::context::use_session;

#[component]
pub fn Perfil() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let Some(user) = session.user() else {
        return rsx! {};
    };

    let available_xp: u64 = WORLDS.iter().map(|w| w.total_xp()).sum();

    let logout = move |_: ()| {
        session.logout();
        navigator.push(Route::Landing {});
    };

    rsx! {
        section { class: "perfil",
            h1 { class: "page-title", "{user.display_name}" }
            p { class: "body-text muted", "{user.email}" }

            div { class: "perfil-stats",
                XpBadge { xp: user.xp }
                span { class: "body-text", "de {available_xp} XP disponibles" }
            }

            Button { variant: ButtonVariant::Ghost, onclick: logout, "Cerrar sesión" }
        }
    }
}
