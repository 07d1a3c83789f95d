//! Badge Component
//!
//! Small pill used for skills and project technologies.

use dioxus::prelude::*;

use super::merge_class;

/// Badge style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    /// Filled with the secondary colour
    #[default]
    Secondary,
    /// Bordered, primary-tinted
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    /// Render as a link to this URL, opened in a new window
    #[props(default)]
    pub href: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Pill badge, optionally linking somewhere
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge { variant: BadgeVariant::Outline, "Fastify" }
///     Badge { href: "https://graphql.org/".to_string(), "◈" }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let base = format!("badge {}", props.variant.class());
    let full_class = merge_class(&base, props.class.as_deref());

    match props.href {
        Some(href) => rsx! {
            a {
                class: "{full_class} badge-link",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                {props.children}
            }
        },
        None => rsx! {
            span { class: "{full_class}", {props.children} }
        },
    }
}
