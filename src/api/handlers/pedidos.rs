//! Pedido handlers: create, list, get by id, and stats.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreatePedidoRequest, CreatePedidoResponse, StatsResponse};
use crate::app_state::AppState;
use crate::domain::Pedido;
use crate::error::{ErrorResponse, ServiceError};

/// `POST /api/pedidos` — Create a new pedido.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidRequest`] on validation failure and
/// [`ServiceError::Database`] if the insert fails.
#[utoipa::path(
    post,
    path = "/api/pedidos",
    tag = "Pedidos",
    summary = "Create a pedido",
    description = "Inserts one order row. The storage layer assigns the id and creation timestamp, applies the default estado, and computes the total as cantidad * precio_unitario.",
    request_body = CreatePedidoRequest,
    responses(
        (status = 200, description = "Pedido created", body = CreatePedidoResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_pedido(
    State(state): State<AppState>,
    Json(req): Json<CreatePedidoRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let nuevo = req.into_nuevo()?;
    let pedido = state.pedidos.create(&nuevo).await?;
    Ok((StatusCode::OK, Json(CreatePedidoResponse::new(pedido))))
}

/// `GET /api/pedidos` — List all pedidos, newest first.
///
/// # Errors
///
/// Returns [`ServiceError::Database`] on query failure.
#[utoipa::path(
    get,
    path = "/api/pedidos",
    tag = "Pedidos",
    summary = "List pedidos",
    description = "Returns every order, sorted by creation timestamp descending. No filtering or pagination.",
    responses(
        (status = 200, description = "All pedidos, newest first", body = Vec<Pedido>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_pedidos(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let pedidos = state.pedidos.list().await?;
    Ok(Json(pedidos))
}

/// `GET /api/pedidos/{id}` — Get a single pedido by id.
///
/// # Errors
///
/// Returns [`ServiceError::PedidoNotFound`] when no row matches and
/// [`ServiceError::Database`] on other query failures.
#[utoipa::path(
    get,
    path = "/api/pedidos/{id}",
    tag = "Pedidos",
    summary = "Get a pedido",
    description = "Fetches one order by its server-assigned id.",
    params(
        ("id" = i32, Path, description = "Pedido id"),
    ),
    responses(
        (status = 200, description = "The requested pedido", body = Pedido),
        (status = 404, description = "No pedido with that id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_pedido(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let pedido = state.pedidos.get(id).await?;
    Ok(Json(pedido))
}

/// `GET /api/stats` — Order aggregates.
///
/// # Errors
///
/// Returns [`ServiceError::Database`] on query failure.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Pedidos",
    summary = "Order statistics",
    description = "Returns the total order count, the sum of all totals, a per-estado count map, and the query timestamp.",
    responses(
        (status = 200, description = "Aggregate snapshot", body = StatsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let stats = state.pedidos.stats().await?;
    Ok(Json(StatsResponse {
        total_pedidos: stats.total_pedidos,
        valor_total: stats.valor_total,
        pedidos_por_estado: stats.pedidos_por_estado,
        fecha_consulta: stats.fecha_consulta,
    }))
}

/// Pedido routes, nested under `/api` by the caller.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pedidos", get(list_pedidos).post(create_pedido))
        .route("/pedidos/{id}", get(get_pedido))
        .route("/stats", get(stats_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use tower::ServiceExt;

    use crate::api;
    use crate::app_state::AppState;
    use crate::persistence::PedidoStore;
    use crate::service::PedidoService;

    /// Full router over a lazily-connected pool aimed at an unroutable
    /// port, so any handler that touches storage fails fast and the
    /// rest run without a live database.
    fn app() -> Router {
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .database("pedido")
            .username("pedido_user")
            .password("pedido_password");
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(250))
            .connect_lazy_with(options);
        let state = AppState {
            pedidos: Arc::new(PedidoService::new(PedidoStore::new(pool))),
        };
        api::build_router().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await;
        let Ok(bytes) = bytes else {
            panic!("failed to read response body");
        };
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("response body is not JSON");
        };
        json
    }

    #[tokio::test]
    async fn ping_responds_pong_without_database() {
        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .ok();
        let Some(request) = request else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "pong"})
        );
    }

    #[tokio::test]
    async fn health_reports_error_in_band_when_database_unreachable() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .ok();
        let Some(request) = request else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };

        // Degraded health is still HTTP 200; failure lives in the body.
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.get("status"), Some(&serde_json::json!("error")));
        assert!(
            json.get("detail")
                .and_then(serde_json::Value::as_str)
                .is_some_and(|d| !d.is_empty())
        );
        assert_eq!(json.get("db"), None);
    }

    #[tokio::test]
    async fn create_rejects_non_positive_cantidad_with_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/pedidos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"cliente":"Ana","producto":"Widget","cantidad":0,"precio_unitario":2.5}"#,
            ))
            .ok();
        let Some(request) = request else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(
            json.get("detail")
                .and_then(serde_json::Value::as_str)
                .is_some_and(|d| d.contains("cantidad"))
        );
    }

    #[tokio::test]
    async fn create_rejects_blank_cliente_with_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/pedidos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"cliente":"  ","producto":"Widget","cantidad":1,"precio_unitario":"2.5"}"#,
            ))
            .ok();
        let Some(request) = request else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_with_non_numeric_id_is_a_client_error() {
        let request = Request::builder()
            .uri("/api/pedidos/not-a-number")
            .body(Body::empty())
            .ok();
        let Some(request) = request else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_surfaces_storage_failure_as_500_detail() {
        let request = Request::builder()
            .uri("/api/pedidos")
            .body(Body::empty())
            .ok();
        let Some(request) = request else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(json.get("detail").is_some());
    }
}
