//! Timer-driven typewriter
//!
//! Runs a [`Typewriter`] on tokio timers and publishes snapshots through a
//! `watch` channel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  TypewriterDriver                                               │
//! │  ├── shared: Arc<Mutex<DriverState>>                            │
//! │  │   ├── typewriter (the only writer)                           │
//! │  │   ├── tx: watch::Sender<TypewriterSnapshot>                  │
//! │  │   └── stopped: bool                                          │
//! │  ├── cancel: CancellationToken  (wakes the pending sleep)       │
//! │  └── task: Option<JoinHandle>   (only when spawned on tokio)    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The timer loop ticks and publishes while holding the state lock and
//! re-checks `stopped` first, so once [`TypewriterDriver::stop`] returns no
//! further snapshot can be published.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{Typewriter, TypewriterSnapshot};

struct DriverState {
    typewriter: Typewriter,
    tx: watch::Sender<TypewriterSnapshot>,
    stopped: bool,
    running: bool,
}

/// Owns one typewriter and its single pending timer
///
/// # Example
///
/// ```ignore
/// let driver = TypewriterDriver::spawn(typewriter);
/// let mut rx = driver.subscribe();
///
/// while rx.changed().await.is_ok() {
///     println!("{}", rx.borrow().displayed);
/// }
///
/// // On teardown
/// driver.stop();
/// ```
pub struct TypewriterDriver {
    shared: Arc<Mutex<DriverState>>,
    rx: watch::Receiver<TypewriterSnapshot>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl TypewriterDriver {
    /// Create a driver without starting its timer loop.
    ///
    /// Poll [`TypewriterDriver::run`] on any executor to start it; the UI does
    /// this from a component-scoped task.
    pub fn new(typewriter: Typewriter) -> Self {
        let (tx, rx) = watch::channel(typewriter.snapshot());
        let shared = Arc::new(Mutex::new(DriverState {
            typewriter,
            tx,
            stopped: false,
            running: false,
        }));

        Self {
            shared,
            rx,
            cancel: CancellationToken::new(),
            task: None,
        }
    }

    /// Create a driver and run its timer loop on the current tokio runtime.
    pub fn spawn(typewriter: Typewriter) -> Self {
        let mut driver = Self::new(typewriter);
        driver.task = Some(tokio::spawn(driver.run()));
        driver
    }

    /// The timer loop.
    ///
    /// Resolves once the driver is stopped. Only the first call drives the
    /// typewriter; later calls resolve immediately.
    pub fn run(&self) -> impl Future<Output = ()> + Send + 'static {
        let shared = Arc::clone(&self.shared);
        let cancel = self.cancel.clone();

        async move {
            {
                let mut state = shared.lock();
                if state.running || state.stopped {
                    warn!("typewriter timer loop already running or stopped");
                    return;
                }
                state.running = true;
            }
            debug!("typewriter driver started");

            loop {
                let delay = {
                    let state = shared.lock();
                    if state.stopped {
                        break;
                    }
                    state.typewriter.next_delay()
                };

                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(delay) => {}
                }

                let mut guard = shared.lock();
                let state = &mut *guard;
                if state.stopped {
                    break;
                }
                state.typewriter.tick();
                state.tx.send_replace(state.typewriter.snapshot());
            }

            debug!("typewriter driver finished");
        }
    }

    /// Receiver of every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<TypewriterSnapshot> {
        self.rx.clone()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> TypewriterSnapshot {
        self.rx.borrow().clone()
    }

    /// Cancel the pending timer and stop all further transitions.
    ///
    /// Idempotent.
    pub fn stop(&self) {
        {
            let mut state = self.shared.lock();
            if state.stopped {
                return;
            }
            state.stopped = true;
        }
        self.cancel.cancel();
        if let Some(task) = &self.task {
            task.abort();
        }
        debug!("typewriter driver stopped");
    }

    pub fn is_stopped(&self) -> bool {
        self.shared.lock().stopped
    }
}

impl Drop for TypewriterDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
