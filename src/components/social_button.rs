//! Social link buttons.

use dioxus::prelude::*;
use starfolio_core::SocialLink;
use starfolio_ui::{ButtonLink, ButtonSize, ButtonVariant, Tooltip};

/// `mailto:` links open the mail client instead of a new window
fn opens_new_window(href: &str) -> bool {
    !href.starts_with("mailto:")
}

/// Brand-coloured link button with a tooltip.
///
/// Icon-only unless the link carries a label.
#[component]
pub fn SocialButton(link: SocialLink) -> Element {
    let size = if link.label.is_some() {
        ButtonSize::Default
    } else {
        ButtonSize::Icon
    };
    let class = format!("social-btn {}", link.kind.class());
    let external = opens_new_window(&link.href);
    let aria_label = link.label.clone().unwrap_or_else(|| link.tooltip.clone());

    rsx! {
        Tooltip { text: link.tooltip.clone(),
            ButtonLink {
                href: link.href.clone(),
                variant: ButtonVariant::Outline,
                size,
                external,
                aria_label,
                class,
                span { class: "social-glyph", "{link.kind.glyph()}" }
                if let Some(label) = link.label.clone() {
                    span { "{label}" }
                }
            }
        }
    }
}

/// "Want the source?" corner link
#[component]
pub fn SourceLink(href: String, tooltip: String) -> Element {
    rsx! {
        div { class: "source-corner",
            Tooltip { text: tooltip,
                ButtonLink {
                    href,
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    class: "source-link".to_string(),
                    span { class: "tech-glyph", "</>" }
                    "Want the source?"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mail_links_stay_in_window() {
        assert!(!opens_new_window("mailto:michael@vynx.tech"));
        assert!(opens_new_window("https://github.com/spooderman11"));
    }
}
