//! Carousel Frame
//!
//! Wraps a carousel track with the pointer, touch and keyboard handlers the
//! page carousels share, plus the arrows and indicator dots. Every DOM event
//! is reported as a [`CarouselInput`]; the owner applies it to its driver.

use dioxus::prelude::*;
use portfolio_core::carousel::{CarouselDriver, CarouselPhase, CarouselView, Direction};

use super::carousel_controls::{CarouselArrows, IndicatorDots};

/// A user interaction with a carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselInput {
    Navigate(Direction),
    JumpTo(usize),
    PointerEnter,
    PointerLeave,
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
    Key(String),
}

impl CarouselInput {
    /// Feed this input to `driver`. Returns false for unhandled keys.
    pub fn apply(self, driver: &CarouselDriver) -> bool {
        match self {
            CarouselInput::Navigate(direction) => driver.advance(direction),
            CarouselInput::JumpTo(index) => driver.jump_to(index),
            CarouselInput::PointerEnter => driver.pointer_enter(),
            CarouselInput::PointerLeave => driver.pointer_leave(),
            CarouselInput::TouchStart(x) => driver.touch_start(x),
            CarouselInput::TouchMove(x) => driver.touch_move(x),
            CarouselInput::TouchEnd => driver.touch_end(),
            CarouselInput::Key(key) => {
                let handled = driver.key(&key);
                if !handled {
                    tracing::trace!(%key, "Ignoring carousel key");
                }
                return handled;
            }
        }
        true
    }
}

fn touch_x(event: &TouchEvent) -> Option<f64> {
    event.touches().first().map(|t| t.client_coordinates().x)
}

/// CSS class of the frame for a phase.
pub fn frame_class(phase: CarouselPhase) -> &'static str {
    match phase {
        CarouselPhase::Disabled => "carousel-frame static",
        CarouselPhase::Autoplay => "carousel-frame playing",
        CarouselPhase::Paused => "carousel-frame paused",
        CarouselPhase::Dragging => "carousel-frame dragging",
    }
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CarouselFrame {
///         view: view(),
///         label: "Client proofs",
///         on_input: move |input: CarouselInput| { input.apply(&driver); },
///         for card in view().slice(&proofs) { ProofCard { .. } }
///     }
/// }
/// ```
#[component]
pub fn CarouselFrame(
    view: CarouselView,
    label: String,
    on_input: EventHandler<CarouselInput>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: frame_class(view.phase),
            tabindex: "0",
            role: "region",
            "aria-roledescription": "carousel",
            "aria-label": "{label}",
            onmouseenter: move |_| on_input.call(CarouselInput::PointerEnter),
            onmouseleave: move |_| on_input.call(CarouselInput::PointerLeave),
            ontouchstart: move |e| {
                if let Some(x) = touch_x(&e) {
                    on_input.call(CarouselInput::TouchStart(x));
                }
            },
            ontouchmove: move |e| {
                if let Some(x) = touch_x(&e) {
                    on_input.call(CarouselInput::TouchMove(x));
                }
            },
            ontouchend: move |_| on_input.call(CarouselInput::TouchEnd),
            onkeydown: move |e| {
                if Direction::from_key(&e.key().to_string()).is_some() {
                    e.prevent_default();
                    on_input.call(CarouselInput::Key(e.key().to_string()));
                }
            },

            div { class: "carousel-viewport",
                CarouselArrows {
                    view: view.clone(),
                    on_navigate: move |direction| on_input.call(CarouselInput::Navigate(direction)),
                }
                div { class: "carousel-track", {children} }
            }
            IndicatorDots {
                view: view.clone(),
                on_select: move |page| on_input.call(CarouselInput::JumpTo(page)),
            }
        }
    }
}
