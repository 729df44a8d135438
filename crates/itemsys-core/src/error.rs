//! Common error types for backend service calls

use thiserror::Error;

/// Result type for backend service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure categories a backend call can surface.
///
/// Every error a service implementation returns is classified into one of
/// these buckets; the REST layer maps each bucket onto exactly one HTTP
/// status.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The referenced entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend rejected the request (business-rule or precondition failure)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The call did not complete before the request deadline
    #[error("backend call timed out")]
    DeadlineExceeded,

    /// The request was cancelled (client went away)
    #[error("request cancelled")]
    Cancelled,

    /// The backend could not be reached
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::InvalidArgument(_) => 400,
            // Unreachable and generic failures share the 500 bucket; the
            // gateway cannot tell a transient outage from a permanent one.
            ServiceError::DeadlineExceeded
            | ServiceError::Cancelled
            | ServiceError::Unavailable(_)
            | ServiceError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_translation_table() {
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), 404);
        assert_eq!(ServiceError::InvalidArgument("x".into()).status_code(), 400);
        assert_eq!(ServiceError::DeadlineExceeded.status_code(), 500);
        assert_eq!(ServiceError::Cancelled.status_code(), 500);
        assert_eq!(ServiceError::Unavailable("x".into()).status_code(), 500);
        assert_eq!(ServiceError::Internal("x".into()).status_code(), 500);
    }
}
