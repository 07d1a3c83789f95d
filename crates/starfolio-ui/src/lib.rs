//! Starfolio UI Components
//!
//! Dioxus building blocks for the portfolio pages: cards, badges, buttons,
//! tooltips and dialogs. Components only emit markup and class names; the
//! look comes from the global stylesheet in the application crate.
//!
//! ## Class conventions
//!
//! - Variant enums expose `class()` returning a stable CSS class
//! - Every component accepts an optional `class` for extra classes
//! - Brand colours (GitHub, Discord, ...) are applied by the caller

pub mod components;

pub use components::*;
