//! Reusable UI components
//!
//! Translucent cards over the starfield, with pill badges and CSS-only
//! tooltips.

mod avatar;
mod badge;
mod button;
mod card;
mod dialog;
mod scroll_area;
mod separator;
mod tooltip;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use scroll_area::*;
pub use separator::*;
pub use tooltip::*;

/// Join a base class with optional extra classes
pub(crate) fn merge_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_class_variants() {
        assert_eq!(merge_class("card", None), "card");
        assert_eq!(merge_class("card", Some("")), "card");
        assert_eq!(merge_class("card", Some("wide")), "card wide");
    }
}
