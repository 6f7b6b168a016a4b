//! Color constants for the portfolio theme.
//!
//! Mirrors the custom properties declared at the top of `GLOBAL_STYLES`;
//! use these where a color has to be passed as a component prop.

#![allow(dead_code)]

// === SURFACES ===
pub const PAGE_BLACK: &str = "#000000";
pub const ZINC_900: &str = "#18181b";
pub const ZINC_800: &str = "#27272a";
pub const ZINC_700: &str = "#3f3f46";

// === ACCENTS ===
pub const EMERALD: &str = "#10b981";
pub const EMERALD_GLOW: &str = "rgba(16, 185, 129, 0.35)";
pub const AMBER: &str = "#fbbf24";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_MUTED: &str = "#a1a1aa";
