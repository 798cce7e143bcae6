//! Structured logging via `tracing`
//!
//! Events go to stderr so stdout only ever carries the generated document.
//! `RUST_LOG` takes precedence over the level picked on the command line.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialize the global logging subscriber.
///
/// Subsequent calls are silently ignored.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
