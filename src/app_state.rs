//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::PedidoService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pedido service for all order operations.
    pub pedidos: Arc<PedidoService>,
}
