//! API error translation and the uniform error envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use itemsys_core::ServiceError;

use crate::bind::BindError;

/// API error type that converts to HTTP responses.
///
/// Constructed exclusively by the error translator; route code never builds
/// one by hand.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error; carries only a user-safe message
    Internal(String),
}

/// Uniform error envelope written for every non-success response
#[derive(Serialize)]
struct ErrorEnvelope {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        // Log errors at appropriate levels
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %message, "API error");
        } else {
            tracing::debug!(status = status.as_u16(), %message, "API client error");
        }

        (status, Json(ErrorEnvelope { error: message })).into_response()
    }
}

impl From<BindError> for ApiError {
    fn from(err: BindError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            ServiceError::DeadlineExceeded => {
                tracing::error!("backend call exceeded the request deadline");
                ApiError::Internal("backend request timed out".to_string())
            }
            ServiceError::Cancelled => ApiError::Internal("request cancelled".to_string()),
            // Internal detail stays in the server log; clients get a
            // generic message with no backend addresses or error text.
            ServiceError::Unavailable(detail) => {
                tracing::error!(%detail, "backend unreachable");
                ApiError::Internal("backend request failed".to_string())
            }
            ServiceError::Internal(detail) => {
                tracing::error!(%detail, "backend call failed");
                ApiError::Internal("backend request failed".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn backend_failures_map_onto_the_status_table() {
        assert_eq!(
            status_of(ServiceError::NotFound("gone".into()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::InvalidArgument("bad".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::DeadlineExceeded.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ServiceError::Unavailable("refused".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ServiceError::Internal("boom".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_echoed_to_the_client() {
        let err: ApiError = ServiceError::Internal("pg: connection refused at 10.0.0.7".into()).into();
        match err {
            ApiError::Internal(msg) => assert_eq!(msg, "backend request failed"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
