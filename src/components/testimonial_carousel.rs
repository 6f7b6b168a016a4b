//! Testimonials carousel (`#testimonials`) with aggregate stats.

use dioxus::prelude::*;
use portfolio_core::config::CarouselConfig;
use portfolio_core::records::{TestimonialRecord, TestimonialStats};
use portfolio_core::store::or_empty;
use portfolio_ui::{CarouselFrame, CarouselInput, LoadState, SectionStatus, StarRating};

use super::use_carousel::use_carousel;
use crate::context::use_store;

#[component]
pub fn TestimonialCarousel() -> Element {
    let store = use_store();
    let carousel = use_carousel("testimonials", CarouselConfig::testimonials_timings);

    let reviews = use_resource(move || {
        let store = store.clone();
        async move { or_empty("testimonials", store.list_testimonials().await) }
    });

    let counted = carousel.driver.clone();
    use_effect(move || {
        if let Some(list) = &*reviews.read() {
            counted.replace_items(list.len());
        }
    });

    let (state, records) = match &*reviews.read() {
        None => (LoadState::Loading, Vec::new()),
        Some(list) => (LoadState::from_count(list.len()), list.clone()),
    };
    let stats = TestimonialStats::from_records(&records);
    let current = (carousel.view)();
    let visible = current.slice(&records).to_vec();
    let driver = carousel.driver.clone();

    rsx! {
        section { id: "testimonials",
            div { class: "section-inner",
                h2 { class: "section-title",
                    "Client "
                    span { class: "accent", "Testimonials" }
                }
                p { class: "section-subtitle", "What clients say after we ship." }

                div { class: "testimonial-stats",
                    StatFigure { value: stats.review_label(), label: "Reviews" }
                    StatFigure { value: stats.rating_label(), label: "Average rating" }
                    StatFigure { value: stats.value_label(), label: "Project value" }
                }

                SectionStatus {
                    state,
                    loading_label: "Loading testimonials...".to_string(),
                    empty_label: "No testimonials yet.".to_string(),
                }

                if state.is_ready() {
                    CarouselFrame {
                        view: current.clone(),
                        label: "Testimonials".to_string(),
                        on_input: move |input: CarouselInput| {
                            input.apply(&driver);
                        },
                        for record in visible {
                            TestimonialCard { key: "{record.id}", record: record.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatFigure(value: String, label: &'static str) -> Element {
    rsx! {
        div {
            div { class: "value", "{value}" }
            div { class: "label", "{label}" }
        }
    }
}

#[component]
fn TestimonialCard(record: TestimonialRecord) -> Element {
    let subtitle = [record.project_name.as_deref(), record.country.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        article { class: "testimonial-card",
            StarRating { filled: record.star_count() }
            p { class: "review",
                "“{record.review.clone().unwrap_or_default()}”"
            }
            if let Some(amount) = &record.amount {
                span { class: "pill", "{amount}" }
            }
            div { class: "author",
                div { class: "avatar", "{record.initials()}" }
                div {
                    div { style: "font-weight: 600;", "{record.display_name()}" }
                    if !subtitle.is_empty() {
                        div { class: "label", style: "color: var(--text-muted); font-size: 0.85rem;",
                            "{subtitle}"
                        }
                    }
                }
            }
        }
    }
}
