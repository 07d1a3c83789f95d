//! Card Primitives
//!
//! Translucent panel with optional header, content and footer sections.
//!
//! ```text
//! ┌─ Card ──────────────────────────────┐
//! │ CardHeader                          │
//! │   CardTitle / CardDescription       │
//! │ CardContent                         │
//! │ CardFooter                          │
//! └─────────────────────────────────────┘
//! ```

use dioxus::prelude::*;

use super::merge_class;

/// Card container
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         CardHeader {
///             CardTitle { "Renderize.app" }
///             CardDescription { "Convert images to text with AI" }
///         }
///         CardContent { "..." }
///         CardFooter { "..." }
///     }
/// }
/// ```
#[component]
pub fn Card(
    /// Extra CSS classes
    #[props(default)]
    class: Option<String>,
    /// Inline style (animation delays)
    #[props(default)]
    style: Option<String>,
    children: Element,
) -> Element {
    let full_class = merge_class("card", class.as_deref());

    rsx! {
        div { class: "{full_class}", style: style, {children} }
    }
}

#[component]
pub fn CardHeader(#[props(default)] class: Option<String>, children: Element) -> Element {
    let full_class = merge_class("card-header", class.as_deref());
    rsx! {
        div { class: "{full_class}", {children} }
    }
}

#[component]
pub fn CardTitle(#[props(default)] class: Option<String>, children: Element) -> Element {
    let full_class = merge_class("card-title", class.as_deref());
    rsx! {
        h3 { class: "{full_class}", {children} }
    }
}

#[component]
pub fn CardDescription(#[props(default)] class: Option<String>, children: Element) -> Element {
    let full_class = merge_class("card-description", class.as_deref());
    rsx! {
        div { class: "{full_class}", {children} }
    }
}

#[component]
pub fn CardContent(#[props(default)] class: Option<String>, children: Element) -> Element {
    let full_class = merge_class("card-content", class.as_deref());
    rsx! {
        div { class: "{full_class}", {children} }
    }
}

#[component]
pub fn CardFooter(#[props(default)] class: Option<String>, children: Element) -> Element {
    let full_class = merge_class("card-footer", class.as_deref());
    rsx! {
        div { class: "{full_class}", {children} }
    }
}
