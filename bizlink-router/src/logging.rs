//! Subscriber setup for hosts that do not install their own.

use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber honoring `RUST_LOG`.
///
/// Without `RUST_LOG` the level is `debug` when `verbose`, `info` otherwise.
/// Returns false if a global subscriber was already set.
pub fn init_tracing(verbose: bool) -> bool {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
