//! Colour constants needed outside the stylesheet.
//!
//! The CSS custom properties in `styles.rs` are the source of truth for
//! page colours; these only cover what the window itself paints.

use starfolio_core::Theme;

/// Dark window background (`--background` of `.app-root.dark`)
pub const SPACE_BLACK: (u8, u8, u8, u8) = (2, 3, 8, 255);

/// Light window background (`--background` of `.app-root.light`)
pub const PAPER: (u8, u8, u8, u8) = (244, 244, 245, 255);

/// Colour painted by the webview before the stylesheet loads
pub fn window_background(theme: Theme) -> (u8, u8, u8, u8) {
    match theme {
        Theme::Dark => SPACE_BLACK,
        Theme::Light => PAPER,
    }
}
