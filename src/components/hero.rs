//! Hero section.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant};

use super::nav_header::scroll_to_section;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "section-inner",
                div { class: "hero-badge",
                    span { class: "pulse" }
                    "Available for new projects"
                }
                h1 {
                    "Building "
                    span { class: "accent", "digital products" }
                    " people love to use"
                }
                p { class: "lead",
                    "Full-stack developer shipping mobile apps, web platforms and blockchain "
                    "products for clients around the world."
                }
                div { class: "hero-actions",
                    Button {
                        onclick: move |_| scroll_to_section("projects"),
                        "View My Work"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| scroll_to_section("contact"),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}
