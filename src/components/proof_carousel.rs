//! Client proofs carousel (`#clients`).

use dioxus::prelude::*;
use portfolio_core::config::CarouselConfig;
use portfolio_core::records::ClientProofRecord;
use portfolio_core::store::or_empty;
use portfolio_ui::{CarouselFrame, CarouselInput, LoadState, SectionStatus};

use super::proof_modal::ProofModal;
use super::use_carousel::use_carousel;
use crate::context::use_store;

#[component]
pub fn ProofCarousel() -> Element {
    let store = use_store();
    let carousel = use_carousel("client-proofs", CarouselConfig::proofs_timings);
    let view = carousel.view;
    let mut selected: Signal<Option<ClientProofRecord>> = use_signal(|| None);

    let proofs = use_resource(move || {
        let store = store.clone();
        async move { or_empty("client proofs", store.list_client_proofs().await) }
    });

    let counted = carousel.driver.clone();
    use_effect(move || {
        if let Some(list) = &*proofs.read() {
            counted.replace_items(list.len());
        }
    });

    let (state, records) = match &*proofs.read() {
        None => (LoadState::Loading, Vec::new()),
        Some(list) => (LoadState::from_count(list.len()), list.clone()),
    };
    let current = view();
    let visible = current.slice(&records).to_vec();
    let driver = carousel.driver.clone();

    rsx! {
        section { id: "clients",
            div { class: "section-inner",
                h2 { class: "section-title",
                    "Client "
                    span { class: "accent", "Proofs" }
                }
                p { class: "section-subtitle",
                    "Real projects, real payments. Screenshots submitted by the clients themselves."
                }

                SectionStatus {
                    state,
                    loading_label: "Loading client proofs...".to_string(),
                    empty_label: "No client proofs yet.".to_string(),
                }

                if state.is_ready() {
                    CarouselFrame {
                        view: current.clone(),
                        label: "Client proofs".to_string(),
                        on_input: move |input: CarouselInput| {
                            input.apply(&driver);
                        },
                        for record in visible {
                            {
                                let id = record.id.clone();
                                let opened = record.clone();
                                rsx! {
                                    ProofCard {
                                        key: "{id}",
                                        record,
                                        on_open: move |_| selected.set(Some(opened.clone())),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(record) = selected() {
            ProofModal { record, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn ProofCard(record: ClientProofRecord, on_open: EventHandler<()>) -> Element {
    let cover = record.cover_image().cloned();
    let image_count = record.image_count.unwrap_or(record.images.len() as u32);

    rsx! {
        button {
            class: "proof-card",
            r#type: "button",
            onclick: move |_| on_open.call(()),
            if let Some(image) = cover {
                img {
                    class: "cover",
                    src: "{image.url}",
                    alt: image.alt_text(0),
                    loading: "lazy",
                }
            } else {
                div { class: "cover placeholder", "No screenshot" }
            }
            div { class: "body",
                h3 { style: "margin: 0;", "{record.display_name()}" }
                if let Some(budget) = record.budget_label() {
                    div { class: "budget", "{budget}" }
                }
                div { class: "badges",
                    if let Some(project_type) = &record.project_type {
                        span { class: "pill", "{project_type}" }
                    }
                    if let Some(payment_type) = &record.payment_type {
                        span { class: "pill", "{payment_type}" }
                    }
                    if image_count > 1 {
                        span { class: "pill more", "{image_count} images" }
                    }
                }
            }
        }
    }
}
