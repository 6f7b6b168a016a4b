//! Button Components
//!
//! - Primary: filled emerald call to action
//! - Outline: bordered secondary action
//! - Ghost: text-only, used in the header and footers
//! - Arrow: round carousel paging button

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Arrow,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Arrow => "btn-arrow",
        }
    }
}

/// Join a base class with optional extras.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible label, for icon-only content
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| show_projects.set(true),
///         "View Projects"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());
    let aria_label = props.aria_label.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            "aria-label": if aria_label.is_empty() { None } else { Some(aria_label) },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon, used by the modals
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "icon-btn close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Arrow.class(), "btn-arrow");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_classes("btn-arrow", None), "btn-arrow");
        assert_eq!(join_classes("btn-arrow", Some("  ")), "btn-arrow");
        assert_eq!(join_classes("btn-arrow", Some("left")), "btn-arrow left");
    }
}
