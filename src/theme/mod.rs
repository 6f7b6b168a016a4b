//! Theme for the portfolio page.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
