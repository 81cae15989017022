use serde::Deserialize;

/// Transaction isolation level without database dependencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationLevel {
    /// Whatever the backend uses when none is requested.
    #[default]
    Default,
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ReadUncommitted => "read_uncommitted",
            Self::ReadCommitted => "read_committed",
            Self::RepeatableRead => "repeatable_read",
            Self::Serializable => "serializable",
        }
    }

    /// ## Summary
    /// Returns the SQL keywords naming this level, or `None` for
    /// [`IsolationLevel::Default`].
    #[must_use]
    pub const fn sql_keywords(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::ReadUncommitted => Some("READ UNCOMMITTED"),
            Self::ReadCommitted => Some("READ COMMITTED"),
            Self::RepeatableRead => Some("REPEATABLE READ"),
            Self::Serializable => Some("SERIALIZABLE"),
        }
    }
}

impl std::fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_keywords() {
        assert_eq!(IsolationLevel::default(), IsolationLevel::Default);
        assert_eq!(IsolationLevel::Default.sql_keywords(), None);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            IsolationLevel::RepeatableRead.sql_keywords(),
            Some("REPEATABLE READ")
        );
        assert_eq!(IsolationLevel::Serializable.to_string(), "serializable");
    }
}
