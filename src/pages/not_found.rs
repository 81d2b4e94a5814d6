use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "not-found",
            h1 { class: "page-title", "Página no encontrada" }
            p { class: "body-text muted", "{path}" }
            Link { to: Route::Landing {}, class: "btn-primary", "Volver al inicio" }
        }
    }
}
