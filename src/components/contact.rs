//! Contact section and page footer.

use dioxus::prelude::*;
use portfolio_core::catalog::{NAV_SECTIONS, SOCIAL_LINKS};
use portfolio_ui::{Button, ButtonVariant};

use super::nav_header::scroll_to_section;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact",
            div { class: "section-inner",
                div { class: "contact-card",
                    h2 { class: "section-title",
                        "Let's build "
                        span { class: "accent", "something great" }
                    }
                    p { class: "section-subtitle", style: "margin: 0 auto;",
                        "Have a project in mind? I usually reply within a day."
                    }
                    div { class: "social-links",
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                class: "social-link",
                                href: "{link.href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                span { "{link.icon}" }
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            nav {
                for (id, label) in NAV_SECTIONS.iter().copied() {
                    Button {
                        key: "f-{id}",
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| scroll_to_section(id),
                        "{label}"
                    }
                }
            }
            p { "Designed and built with care." }
        }
    }
}
