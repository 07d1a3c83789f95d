//! Typewriter sequencer
//!
//! Cycles through a fixed list of phrases, revealing and deleting them one
//! character at a time.
//!
//! ## State machine
//!
//! ```text
//! ┌──────────┐ type_interval  ┌──────────┐ pause_after_complete ┌──────────┐
//! │  Typing  │───────────────▶│  Paused  │─────────────────────▶│ Deleting │
//! │ cursor++ │ (last char)    │ (frozen) │                      │ cursor-- │
//! └──────────┘                └──────────┘                      └──────────┘
//!      ▲                                                              │
//!      └──────────── cursor == 0: phrase_index = (i + 1) % len ───────┘
//! ```
//!
//! [`Typewriter`] is a pure state machine: every call to [`Typewriter::tick`]
//! corresponds to one firing of the single pending timer, and
//! [`Typewriter::next_delay`] says how long that timer should be armed for.
//! [`TypewriterDriver`] runs the machine on tokio timers and [`Timeline`]
//! runs it on a simulated clock.

mod driver;
mod timeline;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{SiteError, SiteResult};

pub use driver::TypewriterDriver;
pub use timeline::Timeline;

/// Delay between revealing successive characters while typing
pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 30;

/// Delay between removing successive characters while deleting
pub const DEFAULT_DELETE_INTERVAL_MS: u64 = 15;

/// Hold time after a phrase is fully typed, before deletion starts
pub const DEFAULT_PAUSE_AFTER_COMPLETE_MS: u64 = 2000;

/// Timing parameters for the typewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_interval_ms: u64,
    pub delete_interval_ms: u64,
    pub pause_after_complete_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: DEFAULT_TYPE_INTERVAL_MS,
            delete_interval_ms: DEFAULT_DELETE_INTERVAL_MS,
            pause_after_complete_ms: DEFAULT_PAUSE_AFTER_COMPLETE_MS,
        }
    }
}

impl TypewriterConfig {
    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_interval_ms)
    }

    pub fn pause_after_complete(&self) -> Duration {
        Duration::from_millis(self.pause_after_complete_ms)
    }

    /// Reject intervals that would make the timer loop spin.
    ///
    /// A zero pause is allowed: deletion then starts on the next timer firing.
    pub fn validate(&self) -> SiteResult<()> {
        if self.type_interval_ms == 0 {
            return Err(SiteError::InvalidConfiguration(
                "typewriter type_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.delete_interval_ms == 0 {
            return Err(SiteError::InvalidConfiguration(
                "typewriter delete_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Which transition rule applies when the pending timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Typing,
    /// Current phrase is fully shown; waiting out the pause before deletion
    Paused,
    Deleting,
}

/// What a single [`Typewriter::tick`] changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A character was appended to the display
    Revealed(char),
    /// An empty phrase finished "typing"
    Paused,
    /// The pause elapsed; nothing visible changed
    DeletionStarted,
    /// A character was removed from the display
    Removed(char),
    /// The display emptied and the sequencer moved on to the given phrase
    Advanced { phrase_index: usize },
}

/// Cloneable view of the sequencer, published to subscribers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypewriterSnapshot {
    pub displayed: String,
    pub phrase_index: usize,
    pub cursor: usize,
    pub mode: Mode,
}

/// Character-by-character phrase cycler
///
/// # Example
///
/// ```
/// use starfolio_core::typewriter::{Typewriter, TypewriterConfig};
///
/// let mut tw = Typewriter::new(vec!["Hi".to_string()], TypewriterConfig::default()).unwrap();
/// tw.tick();
/// assert_eq!(tw.displayed(), "H");
/// ```
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    displayed: String,
    phrase_index: usize,
    cursor: usize,
    mode: Mode,
}

impl Typewriter {
    /// Create a sequencer positioned at the start of the first phrase.
    ///
    /// Fails with [`SiteError::InvalidConfiguration`] when `phrases` is empty
    /// or when the config has a zero type/delete interval.
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(SiteError::InvalidConfiguration(
                "typewriter needs at least one phrase".to_string(),
            ));
        }
        config.validate()?;

        Ok(Self {
            phrases,
            config,
            displayed: String::new(),
            phrase_index: 0,
            cursor: 0,
            mode: Mode::Typing,
        })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of characters of the current phrase on display
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    fn current_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// How long the pending timer is armed for in the current mode
    pub fn next_delay(&self) -> Duration {
        match self.mode {
            Mode::Typing => self.config.type_interval(),
            Mode::Paused => self.config.pause_after_complete(),
            Mode::Deleting => self.config.delete_interval(),
        }
    }

    /// Apply one timer firing.
    pub fn tick(&mut self) -> Transition {
        let transition = match self.mode {
            Mode::Typing => self.type_next(),
            Mode::Paused => {
                self.mode = Mode::Deleting;
                Transition::DeletionStarted
            }
            Mode::Deleting => self.delete_last(),
        };
        trace!(
            ?transition,
            phrase_index = self.phrase_index,
            cursor = self.cursor,
            "typewriter tick"
        );
        transition
    }

    fn type_next(&mut self) -> Transition {
        match self.current_phrase().chars().nth(self.cursor) {
            Some(ch) => {
                self.displayed.push(ch);
                self.cursor += 1;
                if self.cursor == self.current_len() {
                    self.mode = Mode::Paused;
                }
                Transition::Revealed(ch)
            }
            None => {
                self.mode = Mode::Paused;
                Transition::Paused
            }
        }
    }

    fn delete_last(&mut self) -> Transition {
        let removed = self.displayed.pop();
        self.cursor = self.cursor.saturating_sub(1);

        match removed {
            Some(ch) if self.cursor > 0 => Transition::Removed(ch),
            _ => self.advance(),
        }
    }

    fn advance(&mut self) -> Transition {
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        self.cursor = 0;
        self.displayed.clear();
        self.mode = Mode::Typing;
        Transition::Advanced {
            phrase_index: self.phrase_index,
        }
    }

    pub fn snapshot(&self) -> TypewriterSnapshot {
        TypewriterSnapshot {
            displayed: self.displayed.clone(),
            phrase_index: self.phrase_index,
            cursor: self.cursor,
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().copied(), TypewriterConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let result = Typewriter::new(Vec::<String>::new(), TypewriterConfig::default());
        assert!(matches!(result, Err(SiteError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let config = TypewriterConfig {
            type_interval_ms: 0,
            ..Default::default()
        };
        assert!(Typewriter::new(["a"], config).is_err());

        let config = TypewriterConfig {
            delete_interval_ms: 0,
            ..Default::default()
        };
        assert!(Typewriter::new(["a"], config).is_err());

        let config = TypewriterConfig {
            pause_after_complete_ms: 0,
            ..Default::default()
        };
        assert!(Typewriter::new(["a"], config).is_ok());
    }

    #[test]
    fn test_initial_state() {
        let tw = typewriter(&["Hi", "Bye"]);
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.cursor(), 0);
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.next_delay(), Duration::from_millis(30));
    }

    #[test]
    fn test_types_then_pauses() {
        let mut tw = typewriter(&["Hi"]);
        assert_eq!(tw.tick(), Transition::Revealed('H'));
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.tick(), Transition::Revealed('i'));
        assert_eq!(tw.displayed(), "Hi");
        assert_eq!(tw.mode(), Mode::Paused);
        assert_eq!(tw.next_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_pause_freezes_display() {
        let mut tw = typewriter(&["Hi"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick(), Transition::DeletionStarted);
        assert_eq!(tw.displayed(), "Hi");
        assert_eq!(tw.cursor(), 2);
        assert_eq!(tw.mode(), Mode::Deleting);
        assert_eq!(tw.next_delay(), Duration::from_millis(15));
    }

    #[test]
    fn test_deleting_wraps_to_next_phrase() {
        let mut tw = typewriter(&["Hi", "Bye"]);
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.tick(), Transition::Removed('i'));
        assert_eq!(tw.displayed(), "H");
        assert_eq!(tw.tick(), Transition::Advanced { phrase_index: 1 });
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.tick(), Transition::Revealed('B'));
    }

    #[test]
    fn test_single_phrase_cycles() {
        let mut tw = typewriter(&["ab"]);
        // type 2, pause 1, delete 2
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.tick(), Transition::Revealed('a'));
    }

    #[test]
    fn test_empty_phrase_is_skipped_through() {
        let mut tw = typewriter(&["", "x"]);
        assert_eq!(tw.tick(), Transition::Paused);
        assert_eq!(tw.tick(), Transition::DeletionStarted);
        assert_eq!(tw.tick(), Transition::Advanced { phrase_index: 1 });
        assert_eq!(tw.tick(), Transition::Revealed('x'));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = typewriter(&["héllo ✨"]);
        for _ in 0..7 {
            tw.tick();
        }
        assert_eq!(tw.displayed(), "héllo ✨");
        assert_eq!(tw.cursor(), 7);
        assert_eq!(tw.mode(), Mode::Paused);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut tw = typewriter(&["Web Developer"]);
        tw.tick();
        tw.tick();
        let snap = tw.snapshot();
        assert_eq!(snap.displayed, "We");
        assert_eq!(snap.cursor, 2);
        assert_eq!(snap.phrase_index, 0);
        assert_eq!(snap.mode, Mode::Typing);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: TypewriterConfig =
            serde_json::from_str(r#"{ "type_interval_ms": 50 }"#).unwrap();
        assert_eq!(config.type_interval_ms, 50);
        assert_eq!(config.delete_interval_ms, DEFAULT_DELETE_INTERVAL_MS);
        assert_eq!(config.pause_after_complete_ms, DEFAULT_PAUSE_AFTER_COMPLETE_MS);
    }
}
