use std::time::{Duration, Instant};

use skit_core::config::TransactionConfig;
use skit_core::types::IsolationLevel;

use crate::db::cancel::CancelToken;
use crate::error::{DbError, DbResult};

/// Options for opening a transaction.
///
/// `TxOptions::default()` requests the backend defaults with no cancellation
/// and no deadline.
#[derive(Debug, Clone, Default)]
pub struct TxOptions {
    pub isolation: IsolationLevel,
    pub read_only: bool,
    pub cancel: Option<CancelToken>,
    pub deadline: Option<Instant>,
}

impl TxOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_isolation(mut self, isolation: IsolationLevel) -> Self {
        self.isolation = isolation;
        self
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the deadline to `timeout` from now. A timeout too large to be
    /// represented clears the deadline instead.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    /// ## Summary
    /// Checks that the transaction may still be opened.
    ///
    /// ## Errors
    /// Returns [`DbError::Cancelled`] if the token was cancelled, or
    /// [`DbError::DeadlineExceeded`] if the deadline has passed.
    pub fn ensure_live(&self) -> DbResult<()> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(DbError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(DbError::DeadlineExceeded);
        }
        Ok(())
    }
}

impl From<&TransactionConfig> for TxOptions {
    fn from(config: &TransactionConfig) -> Self {
        Self::new()
            .with_isolation(config.isolation)
            .read_only(config.read_only)
    }
}
