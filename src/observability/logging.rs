//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Configure the log filter from config and environment
//!
//! # Design Decisions
//! - RUST_LOG wins over the configured default filter
//! - Purely observational: no control flow depends on logging

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `default_filter` applies when RUST_LOG is unset (e.g. "info" or
/// "sensor_bridge=debug"). Safe to call more than once; later calls are
/// no-ops.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
