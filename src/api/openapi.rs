//! OpenAPI document for the pedido endpoints.
//!
//! - Swagger UI: `/docs` (behind the default-on `swagger-ui` feature)
//! - OpenAPI JSON: `/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::api::dto::{
    CreatePedidoRequest, CreatePedidoResponse, HealthResponse, PingResponse, StatsResponse,
};
use crate::domain::Pedido;
use crate::error::ErrorResponse;

/// Aggregated OpenAPI 3 document for every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Pedidos API",
        description = "Minimal order-management REST service: create, list, fetch, and summarize pedidos backed by a single PostgreSQL table.",
        license(name = "MIT")
    ),
    paths(
        crate::api::handlers::system::health_handler,
        crate::api::handlers::system::ping_handler,
        crate::api::handlers::pedidos::create_pedido,
        crate::api::handlers::pedidos::list_pedidos,
        crate::api::handlers::pedidos::get_pedido,
        crate::api::handlers::pedidos::stats_handler,
    ),
    components(schemas(
        Pedido,
        CreatePedidoRequest,
        CreatePedidoResponse,
        StatsResponse,
        HealthResponse,
        PingResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Pedidos", description = "Order CRUD and aggregates"),
        (name = "System", description = "Health probe and ping")
    )
)]
pub struct ApiDoc;
