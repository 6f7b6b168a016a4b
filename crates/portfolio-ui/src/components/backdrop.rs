//! Page Backdrop
//!
//! Two layers sit behind the page content:
//!
//! - [`StaticBackdrop`]: a dark radial gradient with a faint ring pattern,
//!   always rendered and cheap on any device
//! - [`SmokeLayer`]: drifting blurred puffs animated in CSS, mounted only
//!   when the capability check enables it

use dioxus::prelude::*;

/// One blurred puff in the smoke layer, in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokePuff {
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub delay_s: f32,
    pub duration_s: f32,
}

/// Deterministic puff layout: spread along a golden-angle spiral so the
/// layer looks the same on every launch.
pub fn smoke_puffs(count: usize) -> Vec<SmokePuff> {
    const GOLDEN_ANGLE: f32 = 2.399_963;
    (0..count)
        .map(|i| {
            let t = i as f32 + 0.5;
            let radius = (t / count.max(1) as f32).sqrt() * 45.0;
            let angle = t * GOLDEN_ANGLE;
            SmokePuff {
                left: 50.0 + radius * angle.cos(),
                top: 50.0 + radius * angle.sin(),
                size: 28.0 + (i % 4) as f32 * 8.0,
                delay_s: (i % 6) as f32 * -3.0,
                duration_s: 18.0 + (i % 5) as f32 * 4.0,
            }
        })
        .collect()
}

/// Ring pattern behind the hero: one centre ring and six around it.
#[component]
pub fn StaticBackdrop(
    #[props(default = 0.08)] opacity: f32,
    #[props(default = "#10b981".to_string())] stroke_color: String,
) -> Element {
    rsx! {
        div { class: "backdrop-static", "aria-hidden": "true",
            svg {
                view_box: "0 0 200 200",
                "preserveAspectRatio": "xMidYMid slice",
                style: "opacity: {opacity}; width: 100%; height: 100%;",
                g {
                    fill: "none",
                    stroke: "{stroke_color}",
                    stroke_width: "0.4",
                    circle { cx: "100", cy: "100", r: "30" }
                    circle { cx: "100", cy: "70", r: "30" }
                    circle { cx: "126", cy: "85", r: "30" }
                    circle { cx: "126", cy: "115", r: "30" }
                    circle { cx: "100", cy: "130", r: "30" }
                    circle { cx: "74", cy: "115", r: "30" }
                    circle { cx: "74", cy: "85", r: "30" }
                }
            }
        }
    }
}

/// Animated smoke. `visible` drives the fade-in.
#[component]
pub fn SmokeLayer(#[props(default = 9)] puffs: usize, visible: bool) -> Element {
    let layout = smoke_puffs(puffs);

    rsx! {
        div {
            class: if visible { "backdrop-smoke visible" } else { "backdrop-smoke" },
            "aria-hidden": "true",
            for (i, puff) in layout.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "smoke-puff",
                    style: "left: {puff.left}%; top: {puff.top}%; width: {puff.size}vmax; height: {puff.size}vmax; animation-delay: {puff.delay_s}s; animation-duration: {puff.duration_s}s;",
                }
            }
        }
    }
}
