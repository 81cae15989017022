//! Transactional execution over diesel connections.
//!
//! See [`db::transaction::exec_tx`] for the commit/rollback discipline.

pub mod db;
pub mod error;
