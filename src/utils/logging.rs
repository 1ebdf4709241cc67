//! Logging initialization
//!
//! Installs a tracing subscriber with environment-based filtering. Embedders
//! that already manage their own subscriber can skip this entirely; the core
//! only emits events through the `tracing` macros.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Filter defaults to `info` and can be overridden with `RUST_LOG`. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
