//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - business logic failures.
///
/// Each variant maps to one HTTP status; the message is shown to the client
/// except for `Internal`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            // Lost the race between the explicit email check and the write.
            RepoError::Constraint(_) => DomainError::BadRequest("Email already exists".to_string()),
            RepoError::NotFound => DomainError::NotFound("Resource not found".to_string()),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired | AuthError::InvalidToken(_) => {
                DomainError::Unauthorized("Invalid or expired token".to_string())
            }
            AuthError::HashingError(msg) | AuthError::Signing(msg) => DomainError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_mapping() {
        assert_eq!(
            DomainError::from(RepoError::Constraint("users_email_key".into())),
            DomainError::BadRequest("Email already exists".to_string())
        );
        assert_eq!(
            DomainError::from(RepoError::NotFound),
            DomainError::NotFound("Resource not found".to_string())
        );
        assert!(matches!(
            DomainError::from(RepoError::Query("syntax error".into())),
            DomainError::Internal(msg) if msg.contains("syntax error")
        ));
        assert!(matches!(
            DomainError::from(RepoError::Connection("refused".into())),
            DomainError::Internal(_)
        ));
    }

    #[test]
    fn test_auth_error_mapping() {
        let expected = DomainError::Unauthorized("Invalid or expired token".to_string());
        assert_eq!(DomainError::from(AuthError::TokenExpired), expected);
        assert_eq!(DomainError::from(AuthError::InvalidToken("bad".into())), expected);
        assert_eq!(
            DomainError::from(AuthError::HashingError("oom".into())),
            DomainError::Internal("oom".to_string())
        );
    }
}
