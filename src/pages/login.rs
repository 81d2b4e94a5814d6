//! Login page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_session;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Already signed in: nothing to do here
    let signed_in = session.user().is_some();
    use_effect(use_reactive((&signed_in,), move |(signed_in,)| {
        if signed_in {
            navigator.replace(Route::Dashboard {});
        }
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match session.sign_in(&email(), &password()) {
            Ok(_) => {
                error.set(None);
                navigator.push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::warn!("Sign in rejected: {}", e);
                error.set(Some("Correo o contraseña no válidos.".to_string()));
            }
        }
    };

    rsx! {
        section { class: "login",
            h1 { class: "page-title", "Iniciar sesión" }

            form { class: "login-form", onsubmit: on_submit,
                label { class: "field-label", r#for: "email", "Correo" }
                input {
                    id: "email",
                    class: "text-input",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "field-label", r#for: "password", "Contraseña" }
                input {
                    id: "password",
                    class: "text-input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(message) = error() {
                    p { class: "error-message", role: "alert", "{message}" }
                }

                button { class: "btn-primary", r#type: "submit", "Entrar" }
            }
        }
    }
}
