//! Tech Pills Component
//!
//! A row of technology tags, optionally truncated with a `+N` pill.

use dioxus::prelude::*;

/// Split `items` into the shown prefix and the hidden count.
pub fn visible_pills<'a>(items: &'a [String], limit: Option<usize>) -> (&'a [String], usize) {
    match limit {
        Some(limit) if items.len() > limit => (&items[..limit], items.len() - limit),
        _ => (items, 0),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TechPillsProps {
    pub items: Vec<String>,
    /// Show at most this many before collapsing into `+N`
    #[props(default)]
    pub limit: Option<usize>,
    #[props(default)]
    pub class: Option<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TechPills {
///         items: project.tech.iter().map(|t| t.to_string()).collect(),
///         limit: Some(3),
///     }
/// }
/// ```
#[component]
pub fn TechPills(props: TechPillsProps) -> Element {
    let (shown, hidden) = visible_pills(&props.items, props.limit);
    let class = super::button::join_classes("tech-pills", props.class.as_deref());

    rsx! {
        div { class: "{class}",
            for item in shown.iter() {
                span { key: "{item}", class: "pill", "{item}" }
            }
            if hidden > 0 {
                span { class: "pill more", "+{hidden}" }
            }
        }
    }
}
