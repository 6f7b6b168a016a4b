//! Carousel Controls
//!
//! Paging arrows and indicator dots. Both read a [`CarouselView`] and only
//! render while the carousel is pageable.

use dioxus::prelude::*;
use portfolio_core::carousel::{CarouselView, Direction};

use super::button::{join_classes, ButtonVariant};

/// Left and right paging arrows.
///
/// An arrow at a bound stays visible but disabled, since manual paging
/// clamps instead of wrapping.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CarouselArrows {
///         view: view(),
///         on_navigate: move |direction| driver.advance(direction),
///     }
/// }
/// ```
#[component]
pub fn CarouselArrows(view: CarouselView, on_navigate: EventHandler<Direction>) -> Element {
    if !view.show_controls {
        return rsx! {};
    }
    let left_class = join_classes(ButtonVariant::Arrow.class(), Some("arrow-left"));
    let right_class = join_classes(ButtonVariant::Arrow.class(), Some("arrow-right"));

    rsx! {
        button {
            class: "{left_class}",
            r#type: "button",
            "aria-label": "Previous",
            disabled: !view.can_go_left,
            onclick: move |_| on_navigate.call(Direction::Left),
            "‹"
        }
        button {
            class: "{right_class}",
            r#type: "button",
            "aria-label": "Next",
            disabled: !view.can_go_right,
            onclick: move |_| on_navigate.call(Direction::Right),
            "›"
        }
    }
}

/// CSS class for indicator dot `page`.
pub fn dot_class(view: &CarouselView, page: usize) -> &'static str {
    if view.is_current_page(page) {
        "indicator-dot active"
    } else {
        "indicator-dot"
    }
}

/// One dot per valid index; clicking jumps there.
#[component]
pub fn IndicatorDots(view: CarouselView, on_select: EventHandler<usize>) -> Element {
    if !view.show_controls {
        return rsx! {};
    }

    rsx! {
        div { class: "indicator-dots", role: "tablist",
            for page in 0..view.page_count {
                button {
                    key: "{page}",
                    class: dot_class(&view, page),
                    r#type: "button",
                    role: "tab",
                    "aria-label": "Go to slide {page + 1}",
                    "aria-selected": if view.is_current_page(page) { "true" } else { "false" },
                    onclick: move |_| on_select.call(page),
                }
            }
        }
    }
}
