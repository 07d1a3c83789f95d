//! Typewriter scenarios replayed on a simulated clock.

use std::time::Duration;

use starfolio_core::{Mode, Timeline, Transition, Typewriter, TypewriterConfig};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn timeline(phrases: &[&str]) -> Timeline {
    let tw = Typewriter::new(phrases.iter().copied(), TypewriterConfig::default())
        .expect("valid phrases");
    Timeline::new(tw)
}

#[test]
fn hi_bye_scenario() {
    let mut tl = timeline(&["Hi", "Bye"]);

    assert_eq!(tl.displayed(), "");

    tl.advance_to(ms(30));
    assert_eq!(tl.displayed(), "H");

    tl.advance_to(ms(60));
    assert_eq!(tl.displayed(), "Hi");
    assert_eq!(tl.typewriter().mode(), Mode::Paused);

    // Held for the whole pause
    tl.advance_to(ms(2059));
    assert_eq!(tl.displayed(), "Hi");
    assert_eq!(tl.typewriter().mode(), Mode::Paused);

    let fired = tl.advance_to(ms(2060));
    assert_eq!(fired, vec![(ms(2060), Transition::DeletionStarted)]);
    assert_eq!(tl.displayed(), "Hi");

    tl.advance_to(ms(2075));
    assert_eq!(tl.displayed(), "H");

    tl.advance_to(ms(2090));
    assert_eq!(tl.displayed(), "");
    assert_eq!(tl.typewriter().phrase_index(), 1);
    assert_eq!(tl.typewriter().mode(), Mode::Typing);

    tl.advance_to(ms(2119));
    assert_eq!(tl.displayed(), "");
    tl.advance_to(ms(2120));
    assert_eq!(tl.displayed(), "B");
}

#[test]
fn typing_and_deleting_take_at_least_their_intervals() {
    let phrase = "Full Stack Engineer";
    let n = phrase.chars().count() as u64;
    let mut tl = timeline(&[phrase]);

    let mut typed_at = None;
    let mut deleting_from = None;
    let mut cleared_at = None;

    while cleared_at.is_none() {
        let (when, transition) = tl.step();
        match transition {
            Transition::Revealed(_) if tl.typewriter().mode() == Mode::Paused => typed_at = Some(when),
            Transition::DeletionStarted => deleting_from = Some(when),
            Transition::Advanced { .. } => cleared_at = Some(when),
            _ => {}
        }
    }

    let typed_at = typed_at.expect("phrase fully typed");
    let deleting_from = deleting_from.expect("deletion started");
    let cleared_at = cleared_at.expect("phrase cleared");

    assert!(typed_at >= ms(30 * n));
    assert_eq!(deleting_from - typed_at, ms(2000));
    assert!(cleared_at - deleting_from >= ms(15 * n));
}

#[test]
fn single_phrase_repeats_without_stalling() {
    let mut tl = timeline(&["Hi"]);
    let mut full_displays = 0;

    // Five full cycles: 2 reveals, 1 pause, 2 removals each
    for _ in 0..25 {
        tl.step();
        if tl.displayed() == "Hi" && tl.typewriter().mode() == Mode::Paused {
            full_displays += 1;
        }
        assert_eq!(tl.typewriter().phrase_index(), 0);
    }

    assert_eq!(full_displays, 5);
}

#[test]
fn phrases_are_shown_in_cyclic_order() {
    let phrases = ["Web Developer", "Full Stack Engineer", "UI/UX Enthusiast"];
    let mut tl = timeline(&phrases);
    let mut shown = Vec::new();

    while shown.len() < 2 * phrases.len() {
        tl.step();
        if tl.typewriter().mode() == Mode::Paused && tl.displayed() == tl.typewriter().current_phrase() {
            if shown.last().map(String::as_str) != Some(tl.displayed()) {
                shown.push(tl.displayed().to_string());
            }
        }
    }

    let expected: Vec<String> = phrases
        .iter()
        .chain(phrases.iter())
        .map(|s| s.to_string())
        .collect();
    assert_eq!(shown, expected);
}

#[test]
fn cycle_duration_matches_config() {
    let config = TypewriterConfig {
        type_interval_ms: 10,
        delete_interval_ms: 5,
        pause_after_complete_ms: 100,
    };
    let tw = Typewriter::new(["abc"], config).unwrap();
    let mut tl = Timeline::new(tw);

    loop {
        let (when, transition) = tl.step();
        if let Transition::Advanced { phrase_index } = transition {
            assert_eq!(phrase_index, 0);
            // 3 reveals + pause + 3 removals
            assert_eq!(when, ms(3 * 10 + 100 + 3 * 5));
            break;
        }
    }
}
