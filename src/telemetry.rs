//! Tracing setup for hosts embedding the engine.
//!
//! The engine only emits `tracing` events; installing a subscriber is the
//! host's job. These helpers install the usual fmt subscriber filtered by
//! `RUST_LOG`, falling back to `info`.

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Panics if one is already set.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Install the global subscriber unless one is already set.
///
/// Returns false when another subscriber was already installed, which is
/// the normal case when several tests call it.
pub fn try_init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
