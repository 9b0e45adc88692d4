//! Diagnostics, through `tracing`.

use tracing_subscriber::EnvFilter;

/// Filter used when neither the command line nor `RUST_LOG` sets one.
const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber.
///
/// `level` wins over `RUST_LOG`. Calling this more than once is harmless: only
/// the first subscriber is kept.
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    // Already set up (by a previous call or a test harness): keep it.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
