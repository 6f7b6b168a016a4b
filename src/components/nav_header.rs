//! Navigation Header Component
//!
//! Fixed header that turns opaque once the page scrolls past
//! [`SCROLL_THRESHOLD`]. Desktop shows inline section links; narrow windows
//! get a toggled menu instead. Links scroll smoothly to their section.

use dioxus::prelude::*;
use portfolio_core::catalog::NAV_SECTIONS;
use portfolio_ui::{Button, ButtonVariant};

/// Vertical scroll offset (px) past which the header gets its background.
pub const SCROLL_THRESHOLD: f64 = 50.0;

// Reports the scroll offset now and on every scroll event.
const SCROLL_LISTENER: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener('scroll', report, { passive: true });
    report();
"#;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    }
}

/// Script that smooth-scrolls to the element with `id`.
pub fn scroll_script(id: &str) -> String {
    let id = id.replace(['\\', '\''], "");
    format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        id
    )
}

/// Smooth-scroll the page to section `id`.
pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&scroll_script(id));
}

#[component]
pub fn NavHeader() -> Element {
    let mut scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER);
        while let Ok(offset) = listener.recv::<f64>().await {
            let next = is_scrolled(offset);
            if next != *scrolled.peek() {
                scrolled.set(next);
            }
        }
        tracing::debug!("Scroll listener closed");
    });

    let go_to = move |id: &'static str| {
        let mut menu_open = menu_open;
        menu_open.set(false);
        scroll_to_section(id);
    };

    rsx! {
        header { class: header_class(scrolled() || menu_open()),
            div { class: "header-inner",
                a {
                    class: "brand",
                    href: "#",
                    onclick: move |e| {
                        e.prevent_default();
                        go_to("hero");
                    },
                    "nevix"
                    span { class: "dot", "." }
                    "Dev"
                }

                nav { class: "nav-links",
                    for (id, label) in NAV_SECTIONS.iter().copied() {
                        Button {
                            key: "{id}",
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| go_to(id),
                            "{label}"
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    class: "menu-toggle".to_string(),
                    aria_label: if menu_open() { "Close menu".to_string() } else { "Open menu".to_string() },
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "\u{00D7}" } else { "☰" }
                }
            }
        }

        if menu_open() {
            nav { class: "mobile-menu",
                for (id, label) in NAV_SECTIONS.iter().copied() {
                    Button {
                        key: "m-{id}",
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| go_to(id),
                        "{label}"
                    }
                }
            }
        }
    }
}
