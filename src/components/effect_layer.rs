//! Decorative backdrop gated on device capability.
//!
//! The static backdrop always renders. The animated smoke layer is decided
//! once per mount: on a capable device it mounts after the policy's defer
//! delay and then fades in; otherwise it never mounts.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::capability::{decide, CapabilitySnapshot, EffectDecision, SystemProbe};
use portfolio_ui::{SmokeLayer, StaticBackdrop};

use crate::context::use_app_context;
use crate::theme::colors::EMERALD;

/// Gap between mounting the smoke layer and starting its fade-in.
const FADE_IN_DELAY: Duration = Duration::from_millis(50);

/// What the layer draws for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layers {
    backdrop: bool,
    /// `Some(visible)` once the smoke layer is mounted
    smoke: Option<bool>,
}

fn layers(decision: &EffectDecision, mounted: bool, visible: bool) -> Layers {
    Layers {
        backdrop: true,
        smoke: (decision.is_enabled() && mounted).then_some(visible),
    }
}

#[component]
pub fn EffectLayer() -> Element {
    let context = use_app_context();
    let decision = use_hook(move || {
        let probe = SystemProbe::new(context.config.effect.overrides.clone(), context.started)
            .with_viewport_width(context.window_width);
        let snapshot = CapabilitySnapshot::capture(&probe);
        let decision = decide(&snapshot, &context.config.effect.policy);
        match &decision {
            EffectDecision::Enabled { defer } => {
                tracing::info!(defer_ms = defer.as_millis() as u64, "Background effect enabled")
            }
            EffectDecision::Disabled { reason } => {
                tracing::info!(%reason, "Background effect disabled")
            }
        }
        decision
    });

    let mut mounted = use_signal(|| false);
    let mut visible = use_signal(|| false);

    let scheduled = decision.clone();
    use_future(move || {
        let decision = scheduled.clone();
        async move {
            let EffectDecision::Enabled { defer } = decision else {
                return;
            };
            tokio::time::sleep(defer).await;
            mounted.set(true);
            tokio::time::sleep(FADE_IN_DELAY).await;
            visible.set(true);
        }
    });

    let frame = layers(&decision, mounted(), visible());

    rsx! {
        if frame.backdrop {
            StaticBackdrop { stroke_color: EMERALD.to_string() }
        }
        if let Some(visible) = frame.smoke {
            SmokeLayer { visible }
        }
    }
}
