//! Ejercicios - world index.
//!
//! Always rendered dark. Entering the index puts the world theme back on the
//! default scheme.

use dioxus::prelude::*;
use mundos_core::{format_time, WORLDS};
use mundos_ui::GemIcon;

use crate::app::Route;
use crate::context::use_world_theme;

#[component]
pub fn Ejercicios() -> Element {
    let themes = use_world_theme();

    use_effect(move || {
        themes.reset();
    });

    rsx! {
        section { class: "ejercicios",
            h1 { class: "page-title", "Elige tu mundo" }

            div { class: "world-grid",
                {WORLDS.iter().map(|world| {
                    let length = format_time(world.total_seconds());
                    let background = world.theme().nav_gradient;
                    rsx! {
                        Link {
                            key: "{world.id}",
                            to: Route::Mundo { id: world.id },
                            class: "world-card world-card--portal",
                            style: "background: {background};",
                            GemIcon { size: 32, animated: true, color: world.scheme.accent.to_string() }
                            h3 { class: "world-card-title", "{world.name}" }
                            p { class: "body-text", "{world.tagline}" }
                            p { class: "world-card-meta", "{length}" }
                        }
                    }
                })}
            }
        }
    }
}
