//! Headline figures under the hero.

use dioxus::prelude::*;
use portfolio_core::catalog::HEADLINE_STATS;

#[component]
pub fn StatsBar() -> Element {
    rsx! {
        section { class: "stats-bar",
            div { class: "stats-grid",
                for stat in HEADLINE_STATS.iter() {
                    div { key: "{stat.label}", class: "stat-card",
                        div { class: "icon", "{stat.icon}" }
                        div { class: "value", "{stat.value}" }
                        div { class: "label", "{stat.label}" }
                    }
                }
            }
        }
    }
}
