use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Installs the global tracing subscriber, filtered by the configured level.
///
/// `level` accepts anything [`EnvFilter`] understands, e.g. `debug` or
/// `skit_db=trace,info`.
///
/// ## Errors
/// Returns an error if the level is not a valid filter directive or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> CoreResult<()> {
    let filter = EnvFilter::try_new(config.level.as_str())
        .map_err(|e| CoreError::InvalidInput(format!("log level {:?}: {e}", config.level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| CoreError::LoggingError(e.to_string()))?;

    tracing::debug!(level = %config.level, "Tracing initialized");

    Ok(())
}
