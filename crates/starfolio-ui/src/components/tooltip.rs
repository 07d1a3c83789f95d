//! Tooltip Component
//!
//! CSS-only hover/focus tooltip. The bubble is always in the DOM and shown by
//! `.tooltip:hover` / `.tooltip:focus-within`, so no state is kept.

use dioxus::prelude::*;

/// Side of the trigger the bubble appears on
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TooltipSide {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl TooltipSide {
    pub fn class(&self) -> &'static str {
        match self {
            TooltipSide::Top => "tooltip-top",
            TooltipSide::Bottom => "tooltip-bottom",
            TooltipSide::Left => "tooltip-left",
            TooltipSide::Right => "tooltip-right",
        }
    }
}

/// Properties for the Tooltip component
#[derive(Clone, PartialEq, Props)]
pub struct TooltipProps {
    /// Bubble text
    pub text: String,
    #[props(default)]
    pub side: TooltipSide,
    /// The trigger
    pub children: Element,
}

/// Wraps a trigger element with a hover tooltip
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Tooltip { text: "Explore my project portfolio".to_string(),
///         Button { "View Projects" }
///     }
/// }
/// ```
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let side = props.side.class();

    rsx! {
        span { class: "tooltip {side}",
            {props.children}
            span { class: "tooltip-content", role: "tooltip", "{props.text}" }
        }
    }
}
