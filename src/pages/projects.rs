//! Projects page - grid of project cards with detail dialogs.

use dioxus::prelude::*;
use starfolio_ui::{ButtonSize, ButtonVariant};

use crate::app::Route;
use crate::components::{ProjectCard, Starfield};
use crate::context::use_content;

#[component]
pub fn Projects() -> Element {
    let content = use_content();
    let back_class = format!(
        "btn {} {} back-link",
        ButtonVariant::Primary.class(),
        ButtonSize::Default.class()
    );

    rsx! {
        Starfield {}
        main { class: "page",
            div { class: "page-content",
                h1 { class: "page-title", "My Projects" }
                div { class: "project-grid",
                    for (index, project) in content.projects.iter().enumerate() {
                        ProjectCard { key: "{project.title}", project: project.clone(), index }
                    }
                }
                div { style: "text-align: center;",
                    Link {
                        to: Route::Home {},
                        class: back_class,
                        "Back to Home"
                    }
                }
            }
        }
    }
}
