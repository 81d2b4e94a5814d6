//! Navigation Header Component
//!
//! App title with the gem mark, nav links, XP badge and the theme toggle.
//! On world pages the bar is painted with the world theme and the toggle is
//! hidden.

use dioxus::prelude::*;
use mundos_core::{is_world_page, theme_toggle_visible, DarkModeHost, Preferences};
use mundos_ui::{GemIcon, ThemeToggle, XpBadge};

use crate::app::Route;
use crate::context::{get_data_dir, use_document_root, use_session, use_world_theme};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Dashboard,
    Ejercicios,
    Perfil,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [
        NavLocation::Dashboard,
        NavLocation::Ejercicios,
        NavLocation::Perfil,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Dashboard => "Inicio",
            NavLocation::Ejercicios => "Ejercicios",
            NavLocation::Perfil => "Perfil",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Ejercicios => Route::Ejercicios {},
            NavLocation::Perfil => Route::Perfil {},
        }
    }

    /// The location a path belongs to, if any
    pub fn for_path(path: &str) -> Option<NavLocation> {
        if path == "/dashboard" {
            Some(NavLocation::Dashboard)
        } else if path.starts_with("/ejercicios") {
            Some(NavLocation::Ejercicios)
        } else if path == "/perfil" {
            Some(NavLocation::Perfil)
        } else {
            None
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current route path
    pub path: String,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let session = use_session();
    let themes = use_world_theme();
    let mut root = use_document_root();

    let user = session.user();
    let current = NavLocation::for_path(&props.path);
    let world = is_world_page(&props.path);
    let theme = themes.theme();
    let dark = root.read().is_dark();

    let header_style = if world {
        format!("background: {};", theme.nav_gradient)
    } else {
        String::new()
    };

    let on_toggle = move |_: ()| {
        let dark = root.write().toggle_dark();
        let prefs = Preferences { dark_mode: dark };
        if let Err(e) = prefs.save(&get_data_dir()) {
            tracing::error!("Failed to save preferences: {}", e);
        }
    };

    rsx! {
        header {
            class: if world { "nav-header world" } else { "nav-header" },
            style: "{header_style}",
            div { class: "nav-header-inner",
                Link { to: Route::Landing {}, class: "nav-title",
                    GemIcon { size: 28, animated: true, color: theme.accent_color.clone() }
                    span { class: "app-title", "Mundos" }
                }

                if user.is_some() {
                    nav { class: "nav-links",
                        for location in NavLocation::ALL {
                            Link {
                                to: location.route(),
                                class: if Some(location) == current { "nav-link active" } else { "nav-link" },
                                "{location.display_name()}"
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    if let Some(user) = user {
                        XpBadge { xp: user.xp, accent: theme.accent_color.clone() }
                    } else {
                        Link { to: Route::Login {}, class: "nav-link", "Entrar" }
                    }
                    if theme_toggle_visible(&props.path) {
                        ThemeToggle { dark: dark, on_toggle: on_toggle }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_location_for_path() {
        assert_eq!(NavLocation::for_path("/dashboard"), Some(NavLocation::Dashboard));
        assert_eq!(NavLocation::for_path("/ejercicios"), Some(NavLocation::Ejercicios));
        assert_eq!(NavLocation::for_path("/ejercicios/mundos/2"), Some(NavLocation::Ejercicios));
        assert_eq!(NavLocation::for_path("/perfil"), Some(NavLocation::Perfil));
        assert_eq!(NavLocation::for_path("/"), None);
    }

    #[test]
    fn nav_location_routes_round_trip_paths() {
        for location in NavLocation::ALL {
            let path = location.route().to_string();
            assert_eq!(NavLocation::for_path(&path), Some(location));
        }
    }
}
