//! Dashboard - signed-in home.
//!
//! Greets the user, shows their XP and lists the worlds with their length.

use chrono::Timelike;
use dioxus::prelude::*;
use mundos_core::{format_time, greeting_for_hour, WORLDS};
use mundos_ui::XpBadge;

use crate::app::Route;
use crate::context::use_session;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let Some(user) = session.user() else {
        return rsx! {};
    };

    let greeting = greeting_for_hour(chrono::Local::now().hour());

    rsx! {
        section { class: "dashboard",
            header { class: "dashboard-header",
                h1 { class: "page-title", "{greeting}, {user.display_name}" }
                XpBadge { xp: user.xp }
            }

            h2 { class: "section-header", "Tus mundos" }
            div { class: "world-grid",
                {WORLDS.iter().map(|world| {
                    let meta = format!(
                        "{} ejercicios · {} · hasta {} XP",
                        world.exercises.len(),
                        format_time(world.total_seconds()),
                        world.total_xp(),
                    );
                    rsx! {
                        Link {
                            key: "{world.id}",
                            to: Route::Mundo { id: world.id },
                            class: "world-card",
                            style: "border-color: {world.scheme.accent};",
                            h3 { class: "world-card-title", "{world.name}" }
                            p { class: "body-text", "{world.tagline}" }
                            p { class: "world-card-meta", "{meta}" }
                        }
                    }
                })}
            }

            Link { to: Route::Ejercicios {}, class: "btn-primary", "Ver todos los ejercicios" }
        }
    }
}
