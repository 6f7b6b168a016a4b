//! Portfolio UI Components
//!
//! Dioxus building blocks shared by the portfolio pages: buttons, rating
//! stars, carousel controls, tech pills, section status lines and the
//! page backdrop.
//!
//! ## Palette
//!
//! - **Emerald (#10b981)**: accents, active indicators, primary actions
//! - **Zinc (#18181b / #27272a)**: surfaces and borders
//! - **Amber (#fbbf24)**: rating stars
//! - **Black (#000000)**: page background
//!
//! Styling lives in the application's global stylesheet; components only
//! attach class names.

pub mod components;

pub use components::*;
