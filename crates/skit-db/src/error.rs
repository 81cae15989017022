use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Connection error: {0}")]
    ConnectionError(#[from] diesel::result::ConnectionError),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Deadline exceeded")]
    DeadlineExceeded,

    #[error("Unsupported transaction option: {0}")]
    UnsupportedOption(&'static str),

    #[error(transparent)]
    CoreError(#[from] skit_core::error::CoreError),
}

pub type DbResult<T> = std::result::Result<T, DbError>;

/// The stage of [`exec_tx`](crate::db::transaction::exec_tx) that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxPhase {
    Begin,
    UnitOfWork,
    Commit,
}

impl TxPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "begin transaction",
            Self::UnitOfWork => "unit of work",
            Self::Commit => "commit transaction",
        }
    }
}

impl std::fmt::Display for TxPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction failure, tagged with the phase that produced it.
///
/// Displays as `"<phase>: <cause>"`; the cause is available through
/// [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum TxError {
    #[error("begin transaction: {0}")]
    Begin(#[source] DbError),

    #[error("unit of work: {0}")]
    UnitOfWork(#[source] anyhow::Error),

    #[error("commit transaction: {0}")]
    Commit(#[source] diesel::result::Error),
}

impl TxError {
    #[must_use]
    pub const fn phase(&self) -> TxPhase {
        match self {
            Self::Begin(_) => TxPhase::Begin,
            Self::UnitOfWork(_) => TxPhase::UnitOfWork,
            Self::Commit(_) => TxPhase::Commit,
        }
    }
}

pub type TxResult<T> = std::result::Result<T, TxError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_phase_tags() {
        let begin = TxError::Begin(DbError::Cancelled);
        assert_eq!(begin.phase(), TxPhase::Begin);
        assert_eq!(begin.to_string(), "begin transaction: Operation cancelled");

        let work = TxError::UnitOfWork(anyhow::anyhow!("business logic error"));
        assert_eq!(work.phase(), TxPhase::UnitOfWork);
        assert_eq!(work.to_string(), "unit of work: business logic error");

        let commit = TxError::Commit(diesel::result::Error::NotInTransaction);
        assert_eq!(commit.phase(), TxPhase::Commit);
        assert!(commit.to_string().starts_with("commit transaction: "));
    }

    #[test]
    fn test_source_is_cause() {
        let err = TxError::Begin(DbError::DeadlineExceeded);
        let source = err.source().expect("begin failure should carry its cause");
        assert!(matches!(
            source.downcast_ref::<DbError>(),
            Some(DbError::DeadlineExceeded)
        ));
    }
}
