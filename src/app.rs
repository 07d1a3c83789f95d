use dioxus::prelude::*;

use crate::context::{get_site, StartPageApplied};
use crate::pages::{Home, Projects};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the profile card
/// - `/projects` - Project cards with detail dialogs
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/projects")]
    Projects {},
}

/// Page opened at launch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StartPage {
    #[default]
    Home,
    Projects,
}

impl StartPage {
    pub fn route(&self) -> Route {
        match self {
            StartPage::Home => Route::Home {},
            StartPage::Projects => Route::Projects {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, site context and routing. The theme is fixed at
/// startup and applied once here as a class on the root element.
#[component]
pub fn App() -> Element {
    let site = use_hook(get_site);
    let theme_class = site.config.theme.class();

    use_context_provider(|| site.clone());
    let applied = use_signal(|| site.start_page == StartPage::Home);
    use_context_provider(|| StartPageApplied(applied));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root {theme_class}",
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_page_routes() {
        assert!(StartPage::Home.route() == Route::Home {});
        assert!(StartPage::Projects.route() == Route::Projects {});
    }

    #[test]
    fn routes_render_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Projects {}.to_string(), "/projects");
    }
}
