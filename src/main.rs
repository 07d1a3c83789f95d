#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use starfolio_core::{logging, SiteConfig, SiteContent, Theme};

use crate::app::StartPage;
use crate::context::SiteContext;

/// Site configuration and content, set once from the command line
static SITE: OnceLock<SiteContext> = OnceLock::new();

/// Get the startup site context (defaults when launched without `main`)
pub fn get_site() -> SiteContext {
    SITE.get().cloned().unwrap_or_default()
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

/// Starfolio - personal portfolio over an animated starfield
#[derive(Parser, Debug)]
#[command(name = "starfolio-desktop")]
#[command(about = "Starfolio - personal portfolio with a starfield backdrop")]
struct Args {
    /// Config file (JSON); defaults to <config dir>/starfolio/config.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content file (JSON) replacing the built-in profile and projects
    #[arg(long)]
    content: Option<PathBuf>,

    /// Override the configured theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeArg>,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long, default_value = logging::DEFAULT_FILTER)]
    log_level: String,

    /// Page to open first
    #[arg(short, long, value_enum, default_value_t = StartPage::Home)]
    route: StartPage,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(&args.log_level);

    let mut config = SiteConfig::load_or_default(args.config.as_deref())
        .context("failed to load site config")?;
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }

    let content = match &args.content {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => SiteContent::default(),
    };

    let title = format!("{} · Portfolio", content.profile.name);
    let background = theme::window_background(config.theme);
    tracing::info!(
        "Starting '{}' with theme {:?}, {} projects",
        title,
        config.theme,
        content.projects.len()
    );

    let _ = SITE.set(SiteContext::new(config, content, args.route));

    // Configure desktop window
    let window = Config::new()
        .with_background_color(background)
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
