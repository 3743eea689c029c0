//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber with the given default level.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}
