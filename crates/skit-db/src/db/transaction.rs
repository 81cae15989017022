//! Transactional execution of a unit of work.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skit_db::db::options::TxOptions;
//! use skit_db::db::transaction::exec_tx;
//!
//! exec_tx(&mut conn, &TxOptions::default(), |tx| {
//!     diesel::insert_into(users::table)
//!         .values(users::name.eq("alice"))
//!         .execute(tx.conn())?;
//!     Ok(())
//! })?;
//! ```
//!
//! ## Outcomes
//! - `Ok` from the unit of work commits; a failed commit is reported as
//!   [`TxError::Commit`].
//! - `Err` from the unit of work rolls back and is reported as
//!   [`TxError::UnitOfWork`].
//! - A panic in the unit of work rolls back while unwinding and keeps
//!   propagating. It never becomes an error value.
//!
//! Rollback undoes every open level, savepoints the unit of work left open
//! included. Rollback failures are logged and otherwise ignored.

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::result::QueryResult;

use crate::db::dialect::TxConnection;
use crate::db::options::TxOptions;
use crate::error::{DbResult, TxError, TxResult};

/// An open transaction on a borrowed connection.
///
/// Handed to the unit of work by [`exec_tx`]. If it is dropped while still
/// armed, which only happens when the unit of work panics, the transaction
/// is rolled back.
pub struct Tx<'conn, C: TxConnection> {
    conn: &'conn mut C,
    armed: bool,
}

impl<'conn, C: TxConnection> Tx<'conn, C> {
    fn begin(conn: &'conn mut C, options: &TxOptions) -> DbResult<Self> {
        options.ensure_live()?;

        let sql = C::begin_statement(options)?;
        AnsiTransactionManager::begin_transaction_sql(&mut *conn, &sql)?;

        Ok(Self { conn, armed: true })
    }

    /// The connection the transaction runs on.
    pub fn conn(&mut self) -> &mut C {
        &mut *self.conn
    }

    /// ## Summary
    /// Rolls the transaction back immediately.
    ///
    /// A unit of work that rolls back and then returns `Ok` makes the final
    /// commit fail, since no transaction is active any more.
    ///
    /// ## Errors
    /// Returns the driver error if the rollback fails.
    pub fn rollback(&mut self) -> QueryResult<()> {
        <AnsiTransactionManager as TransactionManager<C>>::rollback_transaction(&mut *self.conn)
    }

    fn commit(mut self) -> QueryResult<()> {
        self.armed = false;
        <AnsiTransactionManager as TransactionManager<C>>::commit_transaction(&mut *self.conn)
    }

    fn abandon(mut self) {
        self.armed = false;
        rollback_quietly(&mut *self.conn);
    }
}

impl<C: TxConnection> Drop for Tx<'_, C> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("Unit of work panicked, rolling back");
            rollback_quietly(&mut *self.conn);
        }
    }
}

/// Rolls back every open level, savepoints left behind by the unit of work
/// included, stopping at the first failure.
fn rollback_quietly<C: TxConnection>(conn: &mut C) {
    loop {
        if let Err(e) = <AnsiTransactionManager as TransactionManager<C>>::rollback_transaction(conn) {
            tracing::warn!(error = %e, "Rollback failed");
            return;
        }

        match <AnsiTransactionManager as TransactionManager<C>>::transaction_manager_status_mut(conn)
            .transaction_depth()
        {
            Ok(Some(depth)) => tracing::debug!(depth = depth.get(), "Rolling back enclosing level"),
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Transaction state unavailable after rollback");
                return;
            }
        }
    }
}

/// ## Summary
/// Runs `work` inside a transaction on `conn` and returns its value.
///
/// The transaction is committed only if `work` returns `Ok` and the commit
/// succeeds. Every other path rolls back or never opened a transaction.
///
/// ## Errors
/// - [`TxError::Begin`] if the options' token is cancelled, the deadline has
///   passed, an option is unsupported by the backend, or the driver fails to
///   open the transaction (for instance because one is already open).
/// - [`TxError::UnitOfWork`] if `work` fails; the transaction is rolled back.
/// - [`TxError::Commit`] if the commit fails.
///
/// ## Panics
/// Re-raises any panic from `work` after rolling the transaction back.
#[tracing::instrument(skip_all, fields(isolation = %options.isolation, read_only = options.read_only))]
pub fn exec_tx<C, T, F>(conn: &mut C, options: &TxOptions, work: F) -> TxResult<T>
where
    C: TxConnection,
    F: FnOnce(&mut Tx<'_, C>) -> anyhow::Result<T>,
{
    let mut tx = Tx::begin(conn, options).map_err(|e| {
        tracing::debug!(error = %e, "Failed to begin transaction");
        TxError::Begin(e)
    })?;

    tracing::trace!("Transaction opened");

    let value = match work(&mut tx) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Unit of work failed, rolling back");
            tx.abandon();
            return Err(TxError::UnitOfWork(e));
        }
    };

    tx.commit().map_err(|e| {
        tracing::debug!(error = %e, "Failed to commit transaction");
        TxError::Commit(e)
    })?;

    tracing::trace!("Transaction committed");

    Ok(value)
}

/// ## Summary
/// Runs `work` inside a transaction opened with the backend defaults.
///
/// ## Errors
/// See [`exec_tx`].
pub fn with_transaction<C, T, F>(conn: &mut C, work: F) -> TxResult<T>
where
    C: TxConnection,
    F: FnOnce(&mut Tx<'_, C>) -> anyhow::Result<T>,
{
    exec_tx(conn, &TxOptions::default(), work)
}
