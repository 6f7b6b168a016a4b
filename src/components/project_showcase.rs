//! Project showcase: one card per category, each opening a modal with the
//! category's projects.

use dioxus::prelude::*;
use portfolio_core::catalog::{ProjectCategory, PROJECT_CATEGORIES};
use portfolio_ui::{CloseButton, TechPills};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[component]
pub fn ProjectShowcase() -> Element {
    let mut open: Signal<Option<&'static ProjectCategory>> = use_signal(|| None);

    rsx! {
        section { id: "projects",
            div { class: "section-inner",
                h2 { class: "section-title",
                    "Featured "
                    span { class: "accent", "Work" }
                }
                p { class: "section-subtitle",
                    "A selection of products across mobile, web and blockchain."
                }
                div { class: "category-grid",
                    for category in PROJECT_CATEGORIES.iter() {
                        button {
                            key: "{category.slug}",
                            class: "category-card {category.accent.class()}",
                            r#type: "button",
                            onclick: move |_| open.set(Some(category)),
                            div { class: "icon", "{category.icon}" }
                            h3 { "{category.name}" }
                            p { class: "section-subtitle", style: "margin: 0 0 1rem;",
                                "{category.description}"
                            }
                            div { class: "count", "{category.total_projects}+ projects" }
                            TechPills { items: owned(category.technologies), limit: 3 }
                        }
                    }
                }
            }
        }

        if let Some(category) = open() {
            CategoryModal { category, on_close: move |_| open.set(None) }
        }
    }
}

#[component]
fn CategoryModal(category: &'static ProjectCategory, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| on_close.call(()) }

                h2 { class: "section-title", "{category.icon} {category.name}" }
                p { class: "section-subtitle", "{category.description}" }

                div { class: "project-list",
                    for project in category.projects.iter() {
                        article { key: "{project.title}", class: "project-card",
                            h3 { style: "margin: 0;", "{project.title}" }
                            div { class: "meta",
                                span { class: project.status.class(), "● {project.status.label()}" }
                                span { "{project.users} users" }
                                span { "{project.duration}" }
                            }
                            p { class: "section-subtitle", style: "margin: 0 0 1rem;",
                                "{project.description}"
                            }
                            TechPills { items: owned(project.tech) }
                            ul {
                                for feature in project.features.iter() {
                                    li { key: "{feature}", "{feature}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
