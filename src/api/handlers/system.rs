//! System endpoints: database health probe and ping.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{HealthResponse, PingResponse};
use crate::app_state::AppState;
use crate::service::HealthStatus;

/// `GET /api/health` — Database connectivity probe.
///
/// Never fails the request: probe errors are reported inside a 200
/// response body.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    summary = "Health check",
    description = "Pings the database with a trivial query. Always responds 200; a probe failure is reported in the body as status \"error\" with a detail message.",
    responses(
        (status = 200, description = "Probe outcome, ok or error", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = match state.pedidos.health().await {
        HealthStatus::Ok { db } => HealthResponse {
            status: "ok".to_string(),
            db: Some(db),
            detail: None,
        },
        HealthStatus::Error { detail } => HealthResponse {
            status: "error".to_string(),
            db: None,
            detail: Some(detail),
        },
    };
    (StatusCode::OK, Json(body))
}

/// `GET /api/ping` — Fixed acknowledgement, no dependencies.
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "System",
    summary = "Ping",
    description = "Returns a fixed pong payload without touching the database.",
    responses(
        (status = 200, description = "Acknowledgement", body = PingResponse),
    )
)]
pub async fn ping_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(PingResponse { message: "pong" }))
}

/// System routes, nested under `/api` by the caller.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ping", get(ping_handler))
}
