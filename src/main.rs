//! pedidos-backend server entry point.
//!
//! Loads configuration, builds the connection pool, applies the schema
//! migration, and starts the Axum HTTP server.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pedidos_backend::api;
use pedidos_backend::app_state::AppState;
use pedidos_backend::config::ServiceConfig;
use pedidos_backend::persistence::PedidoStore;
use pedidos_backend::service::PedidoService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting pedidos-backend");

    // Build the connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect_with(config.connect_options())
        .await
        .context("failed to connect to PostgreSQL")?;

    // Apply the schema migration before serving traffic
    let store = PedidoStore::new(pool);
    store
        .run_migrations()
        .await
        .context("failed to apply schema migrations")?;
    tracing::info!("schema migrations applied");

    // Build application state
    let app_state = AppState {
        pedidos: Arc::new(PedidoService::new(store)),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("failed to bind listener")?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
