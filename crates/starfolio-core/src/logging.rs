//! Console logging setup.
//!
//! ```ignore
//! use starfolio_core::logging::init_logging;
//!
//! init_logging("info");
//! tracing::info!("ready");
//! ```
//!
//! `RUST_LOG` wins over the filter passed in, so
//! `RUST_LOG=starfolio_core=trace` shows every typewriter transition.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the caller supplies one
pub const DEFAULT_FILTER: &str = "info";

/// Build the effective filter: `RUST_LOG` if set and valid, else `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed, which makes
/// repeated calls (tests, relaunches) harmless.
pub fn init_logging(fallback: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(true)
        .try_init()
        .is_ok()
}
