//! Visual theme for Mundos.

mod styles;

pub use styles::GLOBAL_STYLES;
