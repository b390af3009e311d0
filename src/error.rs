//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code; every non-2xx response carries the
//! same JSON body shape, a single human-readable `detail` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "detail": "pedido not found: 42"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No pedido row exists with the requested id.
    #[error("pedido not found: {0}")]
    PedidoNotFound(i32),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Storage connectivity or query failure.
    #[error("database error: {0}")]
    Database(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::PedidoNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ServiceError::PedidoNotFound(42);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "pedido not found: 42");
    }

    #[test]
    fn invalid_request_maps_to_400() {
        let err = ServiceError::InvalidRequest("cantidad must be positive".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_maps_to_500() {
        let err = ServiceError::Database("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_is_flat_detail() {
        let err = ServiceError::InvalidRequest("producto must not be empty".to_string());
        let body = ErrorResponse {
            detail: err.to_string(),
        };
        let json = serde_json::to_value(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({"detail": "invalid request: producto must not be empty"})
        );
    }
}
