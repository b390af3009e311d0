//! REST API layer: route handlers, DTOs, router composition, and the
//! OpenAPI document.
//!
//! All endpoints are mounted under `/api`.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints, plus the
/// Swagger UI when the `swagger-ui` feature is enabled.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().nest("/api", handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}
