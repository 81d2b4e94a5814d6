//! App-level components for Mundos.
//!
//! Widgets shared with other crates live in `mundos-ui`; these ones need the
//! router or the app context.

mod nav_header;
mod shell;

pub use nav_header::{NavHeader, NavLocation};
pub use shell::Shell;
