//! Test fixtures for executor tests.
//!
//! Provides an in-memory database with a single `users` table and helpers to
//! insert and count rows.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::error::{TxPhase, TxResult};

diesel::table! {
    users (id) {
        id -> Integer,
        name -> Text,
    }
}

/// Opens a fresh in-memory database with an empty `users` table.
#[must_use]
pub fn setup_test_db() -> SqliteConnection {
    let mut conn =
        SqliteConnection::establish(":memory:").expect("in-memory database should open");
    conn.batch_execute("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .expect("users table should be created");
    conn
}

/// Inserts a user with the given name.
pub fn insert_user(conn: &mut SqliteConnection, name: &str) -> QueryResult<usize> {
    diesel::insert_into(users::table)
        .values(users::name.eq(name))
        .execute(conn)
}

/// Counts the rows in `users`.
#[must_use]
pub fn count_users(conn: &mut SqliteConnection) -> i64 {
    users::table
        .count()
        .get_result(conn)
        .expect("users should be countable")
}

/// Asserts that `result` failed in the given phase.
#[track_caller]
pub fn assert_tx_phase<T: std::fmt::Debug>(result: &TxResult<T>, phase: TxPhase) {
    match result {
        Ok(value) => panic!("expected a {phase} failure, got Ok({value:?})"),
        Err(err) => assert_eq!(err.phase(), phase, "unexpected failure: {err}"),
    }
}
