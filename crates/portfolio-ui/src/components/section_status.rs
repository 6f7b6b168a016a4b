//! Section Status Component
//!
//! Placeholder line shown in a data-backed section while records load or
//! when the store returned nothing.

use dioxus::prelude::*;

/// Load state of a data-backed section
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Empty,
}

impl LoadState {
    /// State after a listing of `count` records arrived.
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            LoadState::Empty
        } else {
            LoadState::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Renders nothing once the section is ready.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionStatus {
///         state: LoadState::from_count(proofs.len()),
///         empty_label: "No client proofs yet.",
///     }
/// }
/// ```
#[component]
pub fn SectionStatus(
    state: LoadState,
    #[props(default = "Loading...".to_string())] loading_label: String,
    #[props(default = "Nothing to show yet.".to_string())] empty_label: String,
) -> Element {
    match state {
        LoadState::Ready => rsx! {},
        LoadState::Loading => rsx! {
            div { class: "section-status loading",
                span { class: "spinner", "aria-hidden": "true" }
                span { "{loading_label}" }
            }
        },
        LoadState::Empty => rsx! {
            div { class: "section-status empty", "{empty_label}" }
        },
    }
}
