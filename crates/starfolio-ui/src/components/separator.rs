//! Separator Component

use dioxus::prelude::*;

/// Thin horizontal rule between card sections
#[component]
pub fn Separator(#[props(default)] class: Option<String>) -> Element {
    let full_class = super::merge_class("separator", class.as_deref());
    rsx! {
        div { class: "{full_class}", role: "separator" }
    }
}
