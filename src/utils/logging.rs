//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for reports.

use tracing_subscriber::EnvFilter;

use crate::error::{SuperVideoError, SuperVideoResult};

/// Default filter when neither `RUST_LOG` nor a configured level is present
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str, json: bool) -> SuperVideoResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            SuperVideoError::configuration(format!("Invalid log level '{}': {}", level, e))
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed (tests); keep the existing one
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    Ok(())
}
