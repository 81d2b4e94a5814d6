//! Mundos UI Components
//!
//! Small Dioxus widgets shared by the Mundos pages:
//! - **XpBadge**: compact experience points counter
//! - **GemIcon**: the gem mark, optionally animated
//! - **ThemeToggle**: sun/moon switch for the user's dark mode choice
//! - **Button**: styled buttons, including world-themed ones

pub mod components;

pub use components::*;
