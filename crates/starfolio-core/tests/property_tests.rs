//! Property-based tests for the typewriter state machine
//!
//! Uses proptest to verify the prefix invariant and cyclic ordering for
//! arbitrary phrase lists and configurations.

use std::time::Duration;

use proptest::prelude::*;
use starfolio_core::{Mode, Timeline, Transition, Typewriter, TypewriterConfig};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Phrases of printable characters, including multi-byte ones and the empty phrase
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 /éü✨]{0,12}").expect("valid regex")
}

fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(phrase_strategy(), 1..5)
}

fn config_strategy() -> impl Strategy<Value = TypewriterConfig> {
    (1..50u64, 1..50u64, 0..3000u64).prop_map(|(t, d, p)| TypewriterConfig {
        type_interval_ms: t,
        delete_interval_ms: d,
        pause_after_complete_ms: p,
    })
}

fn assert_prefix_invariant(tw: &Typewriter) -> Result<(), TestCaseError> {
    let phrase = tw.current_phrase();
    let len = phrase.chars().count();
    prop_assert!(tw.phrase_index() < tw.phrases().len());
    prop_assert!(tw.cursor() <= len);
    let expected: String = phrase.chars().take(tw.cursor()).collect();
    prop_assert_eq!(tw.displayed(), expected.as_str());
    Ok(())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// displayed is always the first `cursor` characters of the current phrase
    #[test]
    fn displayed_is_prefix_at_every_step(
        phrases in phrases_strategy(),
        config in config_strategy(),
        steps in 0..400usize,
    ) {
        let mut tw = Typewriter::new(phrases, config).unwrap();
        assert_prefix_invariant(&tw)?;
        for _ in 0..steps {
            tw.tick();
            assert_prefix_invariant(&tw)?;
        }
    }

    /// The invariant also holds at arbitrary simulated instants
    #[test]
    fn displayed_is_prefix_at_any_time(
        phrases in phrases_strategy(),
        config in config_strategy(),
        checkpoints in prop::collection::vec(0..20_000u64, 1..20),
    ) {
        let mut checkpoints = checkpoints;
        checkpoints.sort_unstable();

        let mut tl = Timeline::new(Typewriter::new(phrases, config).unwrap());
        for at in checkpoints {
            tl.advance_to(Duration::from_millis(at));
            assert_prefix_invariant(tl.typewriter())?;
        }
    }

    /// After phrase i comes phrase (i + 1) mod len, forever
    #[test]
    fn advances_cyclically(phrases in phrases_strategy(), cycles in 1..4usize) {
        let len = phrases.len();
        let mut tw = Typewriter::new(phrases, TypewriterConfig::default()).unwrap();
        let mut order = Vec::new();

        while order.len() < cycles * len {
            if let Transition::Advanced { phrase_index } = tw.tick() {
                order.push(phrase_index);
            }
        }

        for (i, idx) in order.iter().enumerate() {
            prop_assert_eq!(*idx, (i + 1) % len);
        }
    }

    /// Every non-empty phrase is fully shown before it is deleted
    #[test]
    fn every_phrase_reaches_pause_fully_typed(phrases in phrases_strategy()) {
        let mut tw = Typewriter::new(phrases.clone(), TypewriterConfig::default()).unwrap();
        let mut paused_on = Vec::new();

        while paused_on.len() < phrases.len() {
            let before = tw.mode();
            tw.tick();
            if before != Mode::Paused && tw.mode() == Mode::Paused {
                paused_on.push(tw.displayed().to_string());
            }
        }

        prop_assert_eq!(paused_on, phrases);
    }

    /// Typing n characters takes at least n type intervals
    #[test]
    fn typing_time_lower_bound(phrase in "[a-z]{1,20}", config in config_strategy()) {
        let n = phrase.chars().count() as u64;
        let mut tl = Timeline::new(Typewriter::new([phrase], config).unwrap());

        loop {
            let (when, _) = tl.step();
            if tl.typewriter().mode() == Mode::Paused {
                prop_assert!(when >= Duration::from_millis(config.type_interval_ms * n));
                break;
            }
        }
    }
}
