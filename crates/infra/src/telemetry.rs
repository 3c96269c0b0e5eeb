//! Tracing setup

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter defaults to `info` and can be overridden through `RUST_LOG`.
/// Calling this twice is a no-op instead of a panic, so tests can call it
/// freely.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
