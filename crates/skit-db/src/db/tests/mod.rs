//! Executor scenarios against an in-memory SQLite database.

mod fixtures;
