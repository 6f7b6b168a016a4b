//! Greeting intro: rotating "hello" in several languages, then the page.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use portfolio_core::greeting::{GreetingFrame, GreetingSequence};
use portfolio_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_app_context;

/// Redraw period; finer than the greeting step so milestones land on time.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[component]
pub fn Greeting() -> Element {
    let navigator = use_navigator();
    let skip_intro = use_app_context().skip_intro;
    let sequence = GreetingSequence::default();
    let mut frame: Signal<GreetingFrame> = use_signal(|| sequence.frame_at(Duration::ZERO));

    use_future(move || async move {
        if skip_intro {
            navigator.replace(Route::Home {});
            return;
        }
        let mounted = Instant::now();
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            let next = sequence.frame_at(mounted.elapsed());
            if next.complete {
                tracing::debug!("Greeting intro finished");
                navigator.replace(Route::Home {});
                return;
            }
            if next != *frame.peek() {
                frame.set(next);
            }
        }
    });

    let current = frame();
    let greeting = current.greeting;

    rsx! {
        main {
            class: if current.fading { "greeting-screen fading" } else { "greeting-screen" },
            div { key: "{greeting.text}", class: "greeting-text", "{greeting.text}" }
            div { class: "greeting-language", "{greeting.language}" }
            p {
                class: if current.show_welcome { "greeting-welcome visible" } else { "greeting-welcome" },
                "Welcome to my portfolio"
            }
            div { class: "greeting-skip",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| { navigator.replace(Route::Home {}); },
                    "Skip intro →"
                }
            }
        }
    }
}
