//! Skill badges with tooltips.

use dioxus::prelude::*;
use starfolio_core::Skill;
use starfolio_ui::{Badge, BadgeVariant, Tooltip};

use crate::context::use_config;

/// Row of clickable skill badges, staggered in one after another
#[component]
pub fn SkillBadges(skills: Vec<Skill>) -> Element {
    let motion = use_config().motion;
    let duration = motion.item_duration();

    rsx! {
        div { class: "badge-row",
            for (i, skill) in skills.into_iter().enumerate() {
                div {
                    key: "{skill.name}",
                    class: "enter-rise",
                    style: "animation-delay: {motion.item_delay(i)}; animation-duration: {duration};",
                    Tooltip { text: skill.tooltip(),
                        Badge {
                            variant: BadgeVariant::Secondary,
                            href: skill.url.clone(),
                            span {
                                class: "tech-glyph {skill.icon.class()}",
                                "aria-label": "{skill.name}",
                                "{skill.icon.glyph()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
