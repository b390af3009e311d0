//! System DTOs for the health and ping endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for `GET /api/health`.
///
/// Always delivered with HTTP 200; failure lives in the body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"` when the database answered the probe, `"error"` otherwise.
    pub status: String,
    /// Value returned by the probe query; present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<i32>,
    /// Failure description; present only on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Response body for `GET /api/ping`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    /// Fixed acknowledgement payload.
    pub message: &'static str,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn health_response_omits_absent_fields() {
        let ok = HealthResponse {
            status: "ok".to_string(),
            db: Some(1),
            detail: None,
        };
        let Ok(json) = serde_json::to_value(&ok) else {
            panic!("serialization failed");
        };
        assert_eq!(json, serde_json::json!({"status": "ok", "db": 1}));

        let degraded = HealthResponse {
            status: "error".to_string(),
            db: None,
            detail: Some("connection refused".to_string()),
        };
        let Ok(json) = serde_json::to_value(&degraded) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "detail": "connection refused"})
        );
    }
}
