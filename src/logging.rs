//! Logging setup for the salary engine binary.

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` when a
/// global subscriber was already installed; the existing one is kept and the
/// failure is logged through it.
pub fn init(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "Logging already initialised, keeping existing subscriber");
            false
        }
    }
}
