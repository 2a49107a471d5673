/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Lookup or delete target does not exist
    #[error("your requested item is not found")]
    NotFound,

    /// Signup with an email that is already taken
    #[error("your item already exists")]
    Conflict,

    /// Malformed caller input (e.g. an undecodable cursor)
    #[error("given param is not valid: {0}")]
    BadInput(String),

    /// The use-case deadline elapsed before the repository answered
    #[error("deadline exceeded")]
    Timeout,

    /// An update or delete touched a number of rows other than one
    #[error("unexpected behavior, total affected: {0}")]
    UnexpectedRowsAffected(u64),

    /// Database errors (for storage implementations)
    #[error("database error: {0}")]
    Database(String),

    /// Other errors
    #[error("internal server error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Create a bad input error
    pub fn bad_input(msg: impl Into<String>) -> Self {
        Self::BadInput(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_client_facing() {
        assert_eq!(
            RosterError::NotFound.to_string(),
            "your requested item is not found"
        );
        assert_eq!(RosterError::Conflict.to_string(), "your item already exists");
        assert_eq!(
            RosterError::UnexpectedRowsAffected(2).to_string(),
            "unexpected behavior, total affected: 2"
        );
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            RosterError::bad_input("cursor"),
            RosterError::BadInput("cursor".to_string())
        );
        assert_eq!(
            RosterError::internal("boom").to_string(),
            "internal server error: boom"
        );
    }
}
