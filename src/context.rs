//! Site context provider for Starfolio.
//!
//! Provides the configuration and content to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| get_site());
//!
//! // In child components
//! let content = use_content();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use starfolio_core::{SiteConfig, SiteContent};

use crate::app::StartPage;

/// Read-only site state shared by every page.
///
/// Config and content are fixed for the lifetime of the process, so they are
/// shared behind `Arc` rather than signals.
#[derive(Clone, Debug, Default)]
pub struct SiteContext {
    pub config: Arc<SiteConfig>,
    pub content: Arc<SiteContent>,
    pub start_page: StartPage,
}

impl SiteContext {
    pub fn new(config: SiteConfig, content: SiteContent, start_page: StartPage) -> Self {
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            start_page,
        }
    }
}

/// Get the startup site context.
/// Uses the global context set from command line args.
pub fn get_site() -> SiteContext {
    crate::get_site()
}

/// Hook to access the whole site context.
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}

pub fn use_config() -> Arc<SiteConfig> {
    use_site().config
}

pub fn use_content() -> Arc<SiteContent> {
    use_site().content
}

/// Whether the `--route` start page has already been applied.
///
/// Set once by the first page that honours it, so navigating back to the
/// landing page later does not bounce the user again.
#[derive(Clone, Copy)]
pub struct StartPageApplied(pub Signal<bool>);

pub fn use_start_page_applied() -> Signal<bool> {
    use_context::<StartPageApplied>().0
}
