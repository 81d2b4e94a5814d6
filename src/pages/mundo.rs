//! Mundo - a single world and its exercises.
//!
//! Applies the world's color scheme to the world theme whenever the world id
//! changes.

use std::collections::HashSet;

use dioxus::prelude::*;
use mundos_core::{find_world, format_duration, format_time};
use mundos_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::{use_session, use_world_theme};

#[component]
pub fn Mundo(id: u32) -> Element {
    let themes = use_world_theme();
    let session = use_session();
    let completed: Signal<HashSet<u32>> = use_signal(HashSet::new);

    let effect_themes = themes.clone();
    use_effect(use_reactive((&id,), move |(id,)| match find_world(id) {
        Ok(world) => effect_themes.set_theme(world.theme()),
        Err(e) => {
            tracing::warn!("{}", e);
            effect_themes.reset();
        }
    }));

    let world = match find_world(id) {
        Ok(world) => world,
        Err(_) => {
            return rsx! {
                section { class: "not-found",
                    h1 { class: "page-title", "Este mundo no existe" }
                    Link { to: Route::Ejercicios {}, class: "btn-primary", "Volver a los mundos" }
                }
            };
        }
    };

    let theme = themes.theme();

    rsx! {
        section { class: "mundo",
            header { class: "mundo-header",
                h1 { class: "page-title", style: "color: {theme.accent_color};", "{world.name}" }
                p { class: "tagline", "{world.tagline}" }
            }

            ul { class: "exercise-list",
                {world.exercises.iter().map(|exercise| {
                    let exercise = *exercise;
                    let session = session.clone();
                    let mut completed = completed;
                    let done = completed.read().contains(&exercise.id);
                    let length = format_time(exercise.duration_secs);
                    let video = format_duration(f64::from(exercise.video_secs));
                    rsx! {
                        li { key: "{exercise.id}", class: "exercise-item",
                            div { class: "exercise-info",
                                h3 { class: "exercise-title", "{exercise.title}" }
                                p { class: "exercise-meta",
                                    span { "{length}" }
                                    if video.is_empty() {
                                        span { class: "exercise-video muted", "sin vídeo" }
                                    } else {
                                        span { class: "exercise-video", "vídeo {video}" }
                                    }
                                    span { class: "exercise-xp", "+{exercise.xp} XP" }
                                }
                            }
                            Button {
                                variant: ButtonVariant::World,
                                background: theme.button_gradient.clone(),
                                disabled: done,
                                onclick: move |_| {
                                    if let Some(total) = session.award_xp(u64::from(exercise.xp)) {
                                        tracing::info!(exercise = exercise.id, total, "Exercise completed");
                                    }
                                    completed.write().insert(exercise.id);
                                },
                                if done { "Completado" } else { "Completar" }
                            }
                        }
                    }
                })}
            }
        }
    }
}
