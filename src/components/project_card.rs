//! Project cards and their detail dialog.

use dioxus::prelude::*;
use starfolio_core::Project;
use starfolio_ui::{
    Badge, BadgeVariant, Button, ButtonLink, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardHeader, CardTitle, Dialog, ScrollArea,
};
use tracing::debug;

use crate::context::use_config;

/// One project: title, description, technology badges and actions.
///
/// `index` sets the entrance delay so cards appear one after another.
#[component]
pub fn ProjectCard(project: Project, index: usize) -> Element {
    let motion = use_config().motion;
    let mut details_open = use_signal(|| false);
    let delay = motion.card_delay(index);
    let duration = motion.item_duration();
    let title = project.title.clone();

    rsx! {
        div {
            class: "enter-rise",
            style: "animation-delay: {delay}; animation-duration: {duration};",
            Card { class: "project-card".to_string(),
                CardHeader {
                    CardTitle { "{project.title}" }
                    CardDescription { "{project.description}" }
                }
                CardContent {
                    div { class: "badge-row",
                        for tech in project.technologies.iter() {
                            Badge { key: "{tech.name}", variant: BadgeVariant::Outline,
                                span { class: "tech-glyph {tech.icon.class()}", "{tech.icon.glyph()}" }
                                "{tech.name}"
                            }
                        }
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            debug!(project = %title, "opening project details");
                            details_open.set(true);
                        },
                        "Project Details"
                    }
                    ButtonLink {
                        href: project.live_url.clone(),
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        "Live Demo"
                    }
                }
            }
            ProjectDetails {
                project: project.clone(),
                open: details_open(),
                on_close: move |_| details_open.set(false),
            }
        }
    }
}

/// Modal with a project's rendered Markdown write-up
#[component]
pub fn ProjectDetails(project: Project, open: bool, on_close: EventHandler<()>) -> Element {
    if !open {
        return rsx! {};
    }
    let html = project.details_html();

    rsx! {
        Dialog {
            open,
            on_close,
            title: project.title.clone(),
            description: "Detailed information about the project".to_string(),
            ScrollArea {
                div { class: "prose", dangerous_inner_html: "{html}" }
            }
        }
    }
}
