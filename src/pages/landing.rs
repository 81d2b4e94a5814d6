//! Landing page - marketing entry point.
//!
//! Signed-in visitors get a shortcut to their dashboard instead of the
//! sign-in call to action.

use dioxus::prelude::*;
use mundos_core::{format_time, WORLDS};
use mundos_ui::GemIcon;

use crate::app::Route;
use crate::context::use_session;

#[component]
pub fn Landing() -> Element {
    let session = use_session();
    let signed_in = session.user().is_some();

    let total_seconds: u64 = WORLDS.iter().map(|w| w.total_seconds()).sum();
    let exercise_count: usize = WORLDS.iter().map(|w| w.exercises.len()).sum();
    let world_count = WORLDS.len();
    let practice = format_time(total_seconds);

    rsx! {
        section { class: "landing",
            header { class: "landing-header",
                GemIcon { size: 72, animated: true }
                h1 { class: "page-title", "Mundos" }
                p { class: "tagline", "Ejercicios guiados, un mundo a la vez." }

                if signed_in {
                    Link { to: Route::Dashboard {}, class: "btn-enter", "Ir a mi panel" }
                } else {
                    Link { to: Route::Login {}, class: "btn-enter", "Empezar ahora" }
                }
            }

            section { class: "feature-grid",
                div { class: "feature-card",
                    h2 { class: "section-header", "{world_count} mundos" }
                    p { class: "body-text",
                        "Cada mundo tiene su propio ambiente y su propio ritmo."
                    }
                }
                div { class: "feature-card",
                    h2 { class: "section-header", "{exercise_count} ejercicios" }
                    p { class: "body-text",
                        "En total, {practice} de práctica guiada."
                    }
                }
                div { class: "feature-card",
                    h2 { class: "section-header", "Gana XP" }
                    p { class: "body-text",
                        "Completa ejercicios, suma experiencia y colecciona gemas."
                    }
                }
            }
        }
    }
}
