use diesel::connection::Connection;
use skit_core::config::DatabaseConfig;

use crate::error::DbResult;

/// ## Summary
/// Opens a single connection to the configured database.
///
/// The caller owns the connection; closing it is a matter of dropping it.
///
/// ## Errors
/// Returns an error if the connection cannot be established.
#[tracing::instrument(skip(config))]
pub fn establish<C: Connection>(config: &DatabaseConfig) -> DbResult<C> {
    tracing::debug!("Establishing database connection");

    let conn = C::establish(&config.url)?;

    tracing::info!("Database connection established");

    Ok(conn)
}
