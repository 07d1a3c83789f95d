//! Simulated clock for the typewriter.
//!
//! Runs the same single-pending-timer schedule as the driver, but against a
//! virtual "now" so tests and previews can ask what was on screen at any
//! instant without sleeping.

use std::time::Duration;

use super::{Transition, Typewriter, TypewriterSnapshot};

/// A typewriter paired with a virtual clock
#[derive(Debug, Clone)]
pub struct Timeline {
    typewriter: Typewriter,
    now: Duration,
    /// When the pending timer fires
    due: Duration,
}

impl Timeline {
    /// Start the clock at zero with the first timer armed.
    pub fn new(typewriter: Typewriter) -> Self {
        let due = typewriter.next_delay();
        Self {
            typewriter,
            now: Duration::ZERO,
            due,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Virtual time at which the next transition happens
    pub fn next_due(&self) -> Duration {
        self.due
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn displayed(&self) -> &str {
        self.typewriter.displayed()
    }

    pub fn snapshot(&self) -> TypewriterSnapshot {
        self.typewriter.snapshot()
    }

    /// Fire every timer due at or before `at` and move the clock to `at`.
    ///
    /// Returns the transitions that happened, each with its virtual time.
    /// Moving backwards is a no-op.
    pub fn advance_to(&mut self, at: Duration) -> Vec<(Duration, Transition)> {
        let mut fired = Vec::new();
        while self.due <= at {
            let when = self.due;
            fired.push((when, self.typewriter.tick()));
            self.due = when + self.typewriter.next_delay();
        }
        self.now = self.now.max(at);
        fired
    }

    pub fn advance_by(&mut self, elapsed: Duration) -> Vec<(Duration, Transition)> {
        self.advance_to(self.now + elapsed)
    }

    /// Jump straight to the next transition.
    pub fn step(&mut self) -> (Duration, Transition) {
        let when = self.due;
        let transition = self.typewriter.tick();
        self.due = when + self.typewriter.next_delay();
        self.now = when;
        (when, transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::TypewriterConfig;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_nothing_fires_before_first_interval() {
        let tw = Typewriter::new(["Hi"], TypewriterConfig::default()).unwrap();
        let mut timeline = Timeline::new(tw);
        assert!(timeline.advance_to(ms(29)).is_empty());
        assert_eq!(timeline.displayed(), "");
        assert_eq!(timeline.now(), ms(29));
    }

    #[test]
    fn test_advance_fires_in_order() {
        let tw = Typewriter::new(["Hi"], TypewriterConfig::default()).unwrap();
        let mut timeline = Timeline::new(tw);
        let fired = timeline.advance_to(ms(60));
        assert_eq!(
            fired,
            vec![
                (ms(30), Transition::Revealed('H')),
                (ms(60), Transition::Revealed('i')),
            ]
        );
        assert_eq!(timeline.next_due(), ms(2060));
    }

    #[test]
    fn test_step_moves_clock() {
        let tw = Typewriter::new(["Hi"], TypewriterConfig::default()).unwrap();
        let mut timeline = Timeline::new(tw);
        assert_eq!(timeline.step(), (ms(30), Transition::Revealed('H')));
        assert_eq!(timeline.now(), ms(30));
    }

    #[test]
    fn test_moving_backwards_is_noop() {
        let tw = Typewriter::new(["Hi"], TypewriterConfig::default()).unwrap();
        let mut timeline = Timeline::new(tw);
        timeline.advance_to(ms(100));
        assert!(timeline.advance_to(ms(10)).is_empty());
        assert_eq!(timeline.now(), ms(100));
    }
}
