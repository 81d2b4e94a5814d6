//! Theme Toggle Component
//!
//! Sun/moon switch for the user's own dark mode choice. Callers hide it on
//! world pages, which are always dark.

use dioxus::prelude::*;

/// Accessible label describing what pressing the toggle does
pub fn toggle_label(dark: bool) -> &'static str {
    if dark {
        "Cambiar a modo claro"
    } else {
        "Cambiar a modo oscuro"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ThemeToggleProps {
    /// Whether dark mode is currently on
    pub dark: bool,
    /// Called when the toggle is pressed
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let label = toggle_label(props.dark);

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            "aria-label": "{label}",
            title: "{label}",
            onclick: move |_| {
                tracing::debug!(dark = props.dark, "Theme toggle pressed");
                props.on_toggle.call(());
            },

            if props.dark {
                // Lucide sun icon
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    circle { cx: "12", cy: "12", r: "4" }
                    path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
                }
            } else {
                // Lucide moon icon
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_describe_next_state() {
        assert_eq!(toggle_label(true), "Cambiar a modo claro");
        assert_eq!(toggle_label(false), "Cambiar a modo oscuro");
    }
}
