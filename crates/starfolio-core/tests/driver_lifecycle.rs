//! TypewriterDriver on tokio's paused clock.
//!
//! Checks are taken one millisecond after each expected transition so the
//! driver's timer always fires before the test's own sleep wakes up.

use std::time::Duration;

use starfolio_core::{Mode, Typewriter, TypewriterConfig, TypewriterDriver};
use tokio::time::{sleep_until, Instant};

fn typewriter(phrases: &[&str]) -> Typewriter {
    Typewriter::new(phrases.iter().copied(), TypewriterConfig::default()).expect("valid phrases")
}

async fn at(start: Instant, ms: u64) {
    sleep_until(start + Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn driver_follows_hi_bye_schedule() {
    let start = Instant::now();
    let driver = TypewriterDriver::spawn(typewriter(&["Hi", "Bye"]));

    assert_eq!(driver.snapshot().displayed, "");

    at(start, 31).await;
    assert_eq!(driver.snapshot().displayed, "H");

    at(start, 61).await;
    assert_eq!(driver.snapshot().displayed, "Hi");
    assert_eq!(driver.snapshot().mode, Mode::Paused);

    at(start, 2059).await;
    assert_eq!(driver.snapshot().mode, Mode::Paused);

    at(start, 2061).await;
    assert_eq!(driver.snapshot().mode, Mode::Deleting);
    assert_eq!(driver.snapshot().displayed, "Hi");

    at(start, 2076).await;
    assert_eq!(driver.snapshot().displayed, "H");

    at(start, 2091).await;
    let snap = driver.snapshot();
    assert_eq!(snap.displayed, "");
    assert_eq!(snap.phrase_index, 1);

    at(start, 2121).await;
    assert_eq!(driver.snapshot().displayed, "B");

    driver.stop();
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_change() {
    let driver = TypewriterDriver::spawn(typewriter(&["abc"]));
    let mut rx = driver.subscribe();

    let mut seen = Vec::new();
    while seen.len() < 3 {
        rx.changed().await.expect("driver alive");
        seen.push(rx.borrow_and_update().displayed.clone());
    }

    assert_eq!(seen, vec!["a", "ab", "abc"]);
    driver.stop();
}

#[tokio::test(start_paused = true)]
async fn stop_during_pause_freezes_display() {
    let start = Instant::now();
    let driver = TypewriterDriver::spawn(typewriter(&["Hi", "Bye"]));
    let mut rx = driver.subscribe();

    at(start, 1000).await;
    assert_eq!(driver.snapshot().mode, Mode::Paused);
    rx.borrow_and_update();

    driver.stop();
    assert!(driver.is_stopped());

    at(start, 60_000).await;
    assert!(!rx.has_changed().unwrap_or(false));
    assert_eq!(driver.snapshot().displayed, "Hi");
    assert_eq!(driver.snapshot().mode, Mode::Paused);
}

#[tokio::test(start_paused = true)]
async fn stop_mid_typing_freezes_display() {
    let start = Instant::now();
    let driver = TypewriterDriver::spawn(typewriter(&["Full Stack Engineer"]));

    at(start, 100).await;
    let frozen = driver.snapshot();
    assert_eq!(frozen.displayed, "Ful");

    driver.stop();
    at(start, 10_000).await;
    assert_eq!(driver.snapshot(), frozen);
}

#[tokio::test(start_paused = true)]
async fn dropping_driver_releases_timer() {
    let start = Instant::now();
    let driver = TypewriterDriver::spawn(typewriter(&["Hi"]));
    let rx = driver.subscribe();

    at(start, 61).await;
    drop(driver);

    at(start, 10_000).await;
    assert_eq!(rx.borrow().displayed, "Hi");
    assert!(!matches!(rx.has_changed(), Ok(true)));
}

#[tokio::test(start_paused = true)]
async fn externally_polled_loop_ends_on_stop() {
    let start = Instant::now();
    let driver = TypewriterDriver::new(typewriter(&["Hi"]));
    let handle = tokio::spawn(driver.run());

    at(start, 31).await;
    assert_eq!(driver.snapshot().displayed, "H");

    // A second loop must not double the typing speed
    driver.run().await;

    driver.stop();
    handle.await.expect("loop exits cleanly");
    assert_eq!(driver.snapshot().displayed, "H");
}
