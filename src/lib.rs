//! sheaf library crate — re-exports for integration tests.
//!
//! The primary interface is the `sheaf` binary. This lib.rs exposes internal
//! modules so that integration tests can exercise the collector, config, and
//! error types directly without going through the CLI.

pub mod collect;
pub mod config;
pub mod error;
pub mod format;
pub mod telemetry;
