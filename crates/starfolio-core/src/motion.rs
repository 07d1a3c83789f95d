//! Entrance animation timing.
//!
//! Containers fade in and reveal their children one after another; the
//! delays computed here are handed to CSS as `animation-delay` values.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Delay before the first child of a container appears
    pub delay_children_secs: f32,
    /// Gap between successive children
    pub stagger_children_secs: f32,
    /// Fade/slide duration of a single item
    pub item_duration_secs: f32,
    /// Gap between successive project cards
    pub card_stagger_secs: f32,
    /// Half-period of the typewriter caret blink
    pub caret_blink_secs: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            delay_children_secs: 0.1,
            stagger_children_secs: 0.1,
            item_duration_secs: 0.3,
            card_stagger_secs: 0.1,
            caret_blink_secs: 0.5,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> SiteResult<()> {
        let fields = [
            ("delay_children_secs", self.delay_children_secs),
            ("stagger_children_secs", self.stagger_children_secs),
            ("item_duration_secs", self.item_duration_secs),
            ("card_stagger_secs", self.card_stagger_secs),
            ("caret_blink_secs", self.caret_blink_secs),
        ];
        for (name, value) in fields {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SiteError::InvalidConfiguration(format!(
                    "motion {name} must be a non-negative number of seconds"
                )));
            }
        }
        Ok(())
    }

    /// Delay of the `index`-th child inside a staggered container
    pub fn item_delay(&self, index: usize) -> String {
        css_seconds(self.delay_children_secs + index as f32 * self.stagger_children_secs)
    }

    /// Delay of the `index`-th project card
    pub fn card_delay(&self, index: usize) -> String {
        css_seconds(index as f32 * self.card_stagger_secs)
    }

    pub fn item_duration(&self) -> String {
        css_seconds(self.item_duration_secs)
    }

    pub fn caret_blink(&self) -> String {
        css_seconds(self.caret_blink_secs)
    }
}

/// Format seconds as a CSS time value
pub fn css_seconds(secs: f32) -> String {
    format!("{:.2}s", secs.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_delays_stagger() {
        let motion = MotionConfig::default();
        assert_eq!(motion.item_delay(0), "0.10s");
        assert_eq!(motion.item_delay(1), "0.20s");
        assert_eq!(motion.item_delay(4), "0.50s");
    }

    #[test]
    fn test_card_delays_start_at_zero() {
        let motion = MotionConfig::default();
        assert_eq!(motion.card_delay(0), "0.00s");
        assert_eq!(motion.card_delay(2), "0.20s");
    }

    #[test]
    fn test_durations() {
        let motion = MotionConfig::default();
        assert_eq!(motion.item_duration(), "0.30s");
        assert_eq!(motion.caret_blink(), "0.50s");
    }

    #[test]
    fn test_negative_rejected() {
        let motion = MotionConfig {
            stagger_children_secs: -0.1,
            ..Default::default()
        };
        assert!(motion.validate().is_err());
        assert!(MotionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_css_seconds_clamps() {
        assert_eq!(css_seconds(-1.0), "0.00s");
        assert_eq!(css_seconds(1.234), "1.23s");
    }
}
