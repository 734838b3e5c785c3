//! `tracing` subscriber bootstrap.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary. `init_tracing` is the default one for callers that have none.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `filter` (e.g. `"info"` or
/// `"tessera_client=debug"`). `RUST_LOG`, when set, takes precedence.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(filter: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
