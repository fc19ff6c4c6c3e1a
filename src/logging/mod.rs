// Logging module for structured logging using the tracing crate

use std::error::Error;

/// Initialize the tracing subscriber for diagnostic logging
///
/// User-facing progress lines go straight to stdout; the subscriber
/// carries per-step diagnostics on stderr, filtered through `RUST_LOG`
/// with an `info` default.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_subscriber() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()?;

    Ok(())
}
