//! Scroll Area Component

use dioxus::prelude::*;

/// Bordered box with its own vertical scrollbar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ScrollArea { max_height: "60vh".to_string(),
///         div { dangerous_inner_html: "{html}" }
///     }
/// }
/// ```
#[component]
pub fn ScrollArea(
    /// CSS max-height of the visible area
    #[props(default = "60vh".to_string())]
    max_height: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let full_class = super::merge_class("scroll-area", class.as_deref());
    rsx! {
        div {
            class: "{full_class}",
            style: "max-height: {max_height};",
            tabindex: "0",
            {children}
        }
    }
}
