//! Star row for testimonial cards.

use dioxus::prelude::*;
use portfolio_core::records::MAX_STARS;

/// Filled flags for each of the [`MAX_STARS`] positions.
pub fn star_fills(filled: u8) -> Vec<bool> {
    (0..MAX_STARS).map(|i| i < filled).collect()
}

/// Draws `filled` solid stars out of five.
#[component]
pub fn StarRating(filled: u8) -> Element {
    let label = format!("{} out of {} stars", filled.min(MAX_STARS), MAX_STARS);

    rsx! {
        div { class: "star-rating", role: "img", "aria-label": "{label}",
            for (i, on) in star_fills(filled).into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: if on { "star filled" } else { "star" },
                    "★"
                }
            }
        }
    }
}
