//! Landing page profile card.

use dioxus::prelude::*;
use starfolio_ui::{
    Avatar, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Separator, Tooltip,
};

use super::{SkillBadges, SocialButton, SourceLink, TypewriterText};
use crate::context::{use_config, use_content};

/// Profile card: identity, cycling tagline, about/skills/experience, links.
///
/// Sections fade up one after another using the configured stagger.
#[component]
pub fn ProfileCard(on_view_projects: EventHandler<()>) -> Element {
    let content = use_content();
    let motion = use_config().motion;
    let profile = content.profile.clone();
    let duration = motion.item_duration();
    let item_style = move |i: usize| {
        format!("animation-delay: {}; animation-duration: {};", motion.item_delay(i), duration)
    };

    rsx! {
        Card { class: "profile-card enter-fade".to_string(),
            SourceLink {
                href: profile.source_url.clone(),
                tooltip: profile.source_tooltip.clone(),
            }

            div { class: "enter-rise", style: item_style(0),
                CardHeader { class: "profile-header".to_string(),
                    Avatar {
                        src: profile.avatar_url.clone(),
                        alt: profile.name.clone(),
                        fallback: profile.avatar_fallback.clone(),
                    }
                    div {
                        CardTitle { class: "profile-name".to_string(), "{profile.name}" }
                        CardDescription { class: "profile-tagline".to_string(),
                            TypewriterText { phrases: profile.taglines.clone() }
                        }
                    }
                }
            }

            Separator {}

            CardContent { class: "profile-sections".to_string(),
                div { class: "enter-rise", style: item_style(1),
                    section { class: "profile-section",
                        h4 { "About Me" }
                        p { "{profile.about}" }
                    }
                    section { class: "profile-section",
                        h4 { "Skills" }
                        SkillBadges { skills: content.skills.clone() }
                    }
                }
                div { class: "enter-rise", style: item_style(2),
                    section { class: "profile-section",
                        h4 { "Experience" }
                        ul {
                            for entry in profile.experience.iter() {
                                li { key: "{entry}", "{entry}" }
                            }
                        }
                    }
                    section { class: "profile-section",
                        h4 { "Education" }
                        p { "{profile.education}" }
                    }
                }
            }

            Separator {}

            div { class: "enter-rise", style: item_style(3),
                CardFooter { class: "profile-footer".to_string(),
                    div { class: "social-row",
                        for link in content.socials.iter() {
                            SocialButton { key: "{link.href}", link: link.clone() }
                        }
                    }
                    div { class: "profile-actions",
                        SocialButton { link: profile.contact.clone() }
                        Tooltip { text: "Explore my project portfolio".to_string(),
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| on_view_projects.call(()),
                                "View Projects"
                                span { "aria-hidden": "true", "\u{2192}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
