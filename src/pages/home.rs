//! Home page - profile card over the starfield.
//!
//! Also honours `--route projects` on first render.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{ProfileCard, Starfield};
use crate::context::{use_site, use_start_page_applied};

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let start_page = use_site().start_page;
    let mut start_applied = use_start_page_applied();

    // Jump to the requested start page once per launch
    use_effect(move || {
        if !start_applied() {
            start_applied.set(true);
            tracing::info!("Opening start page {:?}", start_page);
            navigator.replace(start_page.route());
        }
    });

    rsx! {
        Starfield {}
        main { class: "page page-home",
            ProfileCard {
                on_view_projects: move |_| {
                    navigator.push(Route::Projects {});
                },
            }
        }
    }
}
