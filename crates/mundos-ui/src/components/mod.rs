//! Reusable UI components.
//!
//! Styling comes from the global stylesheet in the app crate; components
//! only pick class names and the occasional inline style.

mod button;
mod gem_icon;
mod theme_toggle;
mod xp_badge;

pub use button::*;
pub use gem_icon::*;
pub use theme_toggle::*;
pub use xp_badge::*;
