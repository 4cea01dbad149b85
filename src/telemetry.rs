//! Telemetry initialization.
//!
//! Diagnostics flow through `tracing` to stderr, filtered by `RUST_LOG`.
//! The default filter is `warn` so per-file skip notices are visible on a
//! normal run without drowning it in traversal detail; `RUST_LOG=debug`
//! shows every collected file.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Call once, before any run output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
