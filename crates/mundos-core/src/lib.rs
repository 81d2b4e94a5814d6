//! Mundos Core Library
//!
//! Pure logic behind the Mundos exercise platform front-end.
//!
//! ## Overview
//!
//! - **Duration formatting**: verbose (`"1 min 5 seg"`) and compact (`"01:15"`)
//! - **World themes**: an observable store holding the active color theme
//! - **Forced dark mode**: world pages always render dark without clobbering
//!   a dark mode the user chose
//!
//! Nothing in this crate depends on a UI tree; the desktop app wires these
//! pieces into Dioxus signals and effects.
//!
//! ## Quick Start
//!
//! ```
//! use mundos_core::dark_mode::{DarkModeHost, DocumentRoot, ForcedDarkController};
//! use mundos_core::duration::{format_duration, format_time};
//!
//! assert_eq!(format_time(65), "1 min 5 seg");
//! assert_eq!(format_duration(75.0), "01:15");
//!
//! let mut root = DocumentRoot::default();
//! let mut controller = ForcedDarkController::new();
//! controller.on_navigate("/ejercicios/mundos/1", &mut root);
//! assert!(root.is_dark());
//! controller.on_navigate("/dashboard", &mut root);
//! assert!(!root.is_dark());
//! ```

pub mod catalog;
pub mod dark_mode;
pub mod duration;
pub mod error;
pub mod greeting;
pub mod preferences;
pub mod session;
pub mod theme;
pub mod world;

// Re-exports
pub use catalog::{find_world, Exercise, World, WORLDS};
pub use dark_mode::{DarkModeHost, DocumentRoot, ForcedDark, ForcedDarkController, Transition};
pub use duration::{format_duration, format_time, format_time_signed};
pub use error::{MundosError, MundosResult};
pub use greeting::greeting_for_hour;
pub use preferences::Preferences;
pub use session::{requires_auth, LocalSession, SessionProvider, User};
pub use theme::{ColorScheme, Subscription, ThemeState, ThemeStore, WorldTheme};
pub use world::{is_world_page, theme_toggle_visible};
