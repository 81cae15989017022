//! Backend-specific statements for opening a transaction.

use std::borrow::Cow;

use diesel::connection::{AnsiTransactionManager, Connection};
use skit_core::types::IsolationLevel;

use crate::db::options::TxOptions;
use crate::error::{DbError, DbResult};

/// A diesel connection that [`exec_tx`](crate::db::transaction::exec_tx) can
/// drive.
///
/// The connection must use [`AnsiTransactionManager`] so the executor can open
/// the transaction with a custom BEGIN statement and commit or roll back
/// through diesel's bookkeeping.
pub trait TxConnection: Connection<TransactionManager = AnsiTransactionManager> {
    /// ## Summary
    /// Renders the statement opening a transaction with `options`.
    ///
    /// ## Errors
    /// Returns [`DbError::UnsupportedOption`] if the backend cannot honour an
    /// option.
    fn begin_statement(options: &TxOptions) -> DbResult<Cow<'static, str>>;
}

/// ## Summary
/// BEGIN statement for SQLite.
///
/// SQLite transactions are always serializable. Lower levels get a deferred
/// transaction; `Serializable` reserves the write lock up front with
/// `BEGIN IMMEDIATE`.
///
/// ## Errors
/// Read-only transactions are not supported.
pub fn sqlite_begin_statement(options: &TxOptions) -> DbResult<Cow<'static, str>> {
    if options.read_only {
        return Err(DbError::UnsupportedOption("read_only"));
    }

    let sql = match options.isolation {
        IsolationLevel::Serializable => "BEGIN IMMEDIATE",
        IsolationLevel::Default
        | IsolationLevel::ReadUncommitted
        | IsolationLevel::ReadCommitted
        | IsolationLevel::RepeatableRead => "BEGIN DEFERRED",
    };
    Ok(Cow::Borrowed(sql))
}

/// BEGIN statement in standard SQL, as understood by PostgreSQL.
#[must_use]
pub fn ansi_begin_statement(options: &TxOptions) -> String {
    let mut sql = String::from("BEGIN TRANSACTION");
    if let Some(level) = options.isolation.sql_keywords() {
        sql.push_str(" ISOLATION LEVEL ");
        sql.push_str(level);
    }
    if options.read_only {
        sql.push_str(" READ ONLY");
    }
    sql
}

#[cfg(feature = "sqlite")]
impl TxConnection for diesel::sqlite::SqliteConnection {
    fn begin_statement(options: &TxOptions) -> DbResult<Cow<'static, str>> {
        sqlite_begin_statement(options)
    }
}

#[cfg(feature = "postgres")]
impl TxConnection for diesel::pg::PgConnection {
    fn begin_statement(options: &TxOptions) -> DbResult<Cow<'static, str>> {
        Ok(Cow::Owned(ansi_begin_statement(options)))
    }
}
