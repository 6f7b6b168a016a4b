//! About section with the skill list.

use dioxus::prelude::*;
use portfolio_core::catalog::SKILLS;
use portfolio_ui::TechPills;

#[component]
pub fn About() -> Element {
    let skills: Vec<String> = SKILLS.iter().map(|s| s.to_string()).collect();

    rsx! {
        section { id: "about",
            div { class: "section-inner",
                h2 { class: "section-title",
                    "About "
                    span { class: "accent", "Me" }
                }
                p { class: "section-subtitle",
                    "I design and build products end to end: from the first wireframe to the "
                    "store listing. Six years of shipping for startups and agencies taught me to "
                    "keep things simple, fast and maintainable."
                }
                TechPills { items: skills }
            }
        }
    }
}
