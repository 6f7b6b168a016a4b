//! Proof detail modal with a wrapping image gallery.
//!
//! Escape closes; ArrowLeft/ArrowRight page through the screenshots.

use dioxus::prelude::*;
use portfolio_core::gallery::GalleryCursor;
use portfolio_core::records::ClientProofRecord;
use portfolio_ui::{ButtonVariant, CloseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalKey {
    Close,
    Back,
    Forward,
}

fn modal_key(key: &Key) -> Option<ModalKey> {
    match key {
        Key::Escape => Some(ModalKey::Close),
        Key::ArrowLeft => Some(ModalKey::Back),
        Key::ArrowRight => Some(ModalKey::Forward),
        _ => None,
    }
}

#[component]
pub fn ProofModal(record: ClientProofRecord, on_close: EventHandler<()>) -> Element {
    let image_total = record.images.len();
    let mut cursor = use_signal(|| GalleryCursor::new(image_total));

    let position = cursor().index();
    let has_multiple = cursor().has_multiple();
    let current_image = record.images.get(position).cloned();
    let arrow = ButtonVariant::Arrow.class();

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| match modal_key(&e.key()) {
                Some(ModalKey::Close) => on_close.call(()),
                Some(ModalKey::Back) => cursor.write().step_back(),
                Some(ModalKey::Forward) => cursor.write().step_forward(),
                None => {}
            },

            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| on_close.call(()) }

                h2 { class: "section-title", "{record.display_name()}" }

                if let Some(image) = current_image {
                    div { class: "gallery",
                        img { key: "{image.url}", src: "{image.url}", alt: image.alt_text(position) }
                        if has_multiple {
                            button {
                                class: "{arrow} arrow-left",
                                r#type: "button",
                                "aria-label": "Previous image",
                                onclick: move |_| cursor.write().step_back(),
                                "‹"
                            }
                            button {
                                class: "{arrow} arrow-right",
                                r#type: "button",
                                "aria-label": "Next image",
                                onclick: move |_| cursor.write().step_forward(),
                                "›"
                            }
                            div { class: "gallery-counter", "{position + 1} / {image_total}" }
                        }
                    }
                    if has_multiple {
                        div { class: "gallery-thumbs",
                            for (i, thumb) in record.images.iter().enumerate() {
                                button {
                                    key: "{i}",
                                    class: if i == position { "active" } else { "" },
                                    r#type: "button",
                                    "aria-label": "Show image {i + 1}",
                                    onclick: move |_| cursor.write().select(i),
                                    img { src: "{thumb.url}", alt: thumb.alt_text(i) }
                                }
                            }
                        }
                    }
                } else {
                    div { class: "section-status empty", "No screenshots attached." }
                }

                div { class: "detail-grid",
                    Detail { label: "Project", value: record.project_type.clone() }
                    Detail { label: "Payment", value: record.payment_type.clone() }
                    Detail { label: "Budget", value: record.budget_label() }
                    Detail {
                        label: "Submitted",
                        value: record.submitted_at.map(|t| t.format("%b %-d, %Y").to_string()),
                    }
                }
            }
        }
    }
}

#[component]
fn Detail(label: &'static str, #[props(!optional)] value: Option<String>) -> Element {
    let value = value.unwrap_or_else(|| "—".to_string());
    rsx! {
        div {
            div { class: "label", "{label}" }
            div { "{value}" }
        }
    }
}
