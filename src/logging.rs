//! Tracing setup for the binary
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary so tests and embedders stay quiet.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber
///
/// `RUST_LOG` wins when set. Otherwise only this crate logs, at `warn`, or at
/// `debug` when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let level = if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };

        let filter = match std::env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
