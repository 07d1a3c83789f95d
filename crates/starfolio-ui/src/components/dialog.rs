//! Dialog Component
//!
//! Modal overlay with a title bar. Clicking the overlay, pressing Escape or
//! the close button all call `on_close`; the caller owns the open state.

use dioxus::prelude::*;

use super::CloseButton;

/// Whether a key press should dismiss the dialog
pub fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

/// Properties for the Dialog component
#[derive(Clone, PartialEq, Props)]
pub struct DialogProps {
    /// Whether to show the dialog
    pub open: bool,
    /// Callback when the dialog is dismissed
    pub on_close: EventHandler<()>,
    pub title: String,
    /// Muted line under the title
    #[props(default)]
    pub description: Option<String>,
    pub children: Element,
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// let mut open = use_signal(|| false);
///
/// rsx! {
///     Dialog {
///         open: open(),
///         on_close: move |_| open.set(false),
///         title: "Renderize.app".to_string(),
///         description: "Detailed information about the project".to_string(),
///         p { "..." }
///     }
/// }
/// ```
#[component]
pub fn Dialog(props: DialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if is_dismiss_key(&e.key()) {
                    on_close.call(());
                }
            },

            div {
                class: "dialog",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                tabindex: "-1",
                onmounted: move |e| async move {
                    let _ = e.set_focus(true).await;
                },
                onclick: move |e| e.stop_propagation(),

                div { class: "dialog-header",
                    div {
                        h2 { class: "dialog-title", "{props.title}" }
                        if let Some(description) = &props.description {
                            p { class: "dialog-description", "{description}" }
                        }
                    }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses() {
        assert!(is_dismiss_key(&Key::Escape));
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::Character("q".to_string())));
    }
}
