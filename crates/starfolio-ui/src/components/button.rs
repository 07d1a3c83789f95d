//! Button Components
//!
//! Button styles used across both pages:
//! - Primary: tinted with the primary colour (project actions, navigation)
//! - Outline: bordered, transparent background
//! - Ghost: no border, subtle hover
//!
//! Sizes are independent of the variant; `Icon` makes a square button for a
//! single glyph.

use dioxus::prelude::*;

use super::merge_class;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary-tinted background, primary text
    #[default]
    Primary,
    /// Transparent with a border
    Outline,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    /// Square, sized for one icon
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Small => "btn-sm",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    merge_class(&format!("btn {} {}", variant.class(), size.class()), extra)
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible label for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
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
///         variant: ButtonVariant::Primary,
///         onclick: move |_| navigator.push(Route::Projects {}),
///         "View Projects"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the ButtonLink component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonLinkProps {
    /// Link target
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Open in a new window (external links)
    #[props(default = true)]
    pub external: bool,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor styled as a button, for external links
#[component]
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());
    let target = if props.external { Some("_blank") } else { None };
    let rel = if props.external { Some("noopener noreferrer") } else { None };

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: target,
            rel: rel,
            "aria-label": props.aria_label.clone(),
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = merge_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
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
    }

    #[test]
    fn button_size_classes() {
        assert_eq!(ButtonSize::Default.class(), "btn-md");
        assert_eq!(ButtonSize::Small.class(), "btn-sm");
        assert_eq!(ButtonSize::Icon.class(), "btn-icon");
    }

    #[test]
    fn button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }

    #[test]
    fn button_class_composition() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Icon, Some("social-github")),
            "btn btn-outline btn-icon social-github"
        );
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Small, None),
            "btn btn-primary btn-sm"
        );
    }
}
