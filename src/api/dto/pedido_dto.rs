//! Pedido DTOs for the create, list, get, and stats operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NuevoPedido, Pedido};
use crate::error::ServiceError;

/// Request body for `POST /api/pedidos`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePedidoRequest {
    /// Customer name, must be non-blank.
    pub cliente: String,
    /// Product name, must be non-blank.
    pub producto: String,
    /// Quantity ordered, must be positive.
    pub cantidad: i32,
    /// Unit price, must not be negative. Accepted as a JSON number or
    /// string.
    #[schema(value_type = f64, example = 2.5)]
    pub precio_unitario: Decimal,
    /// Optional free-text notes.
    #[serde(default)]
    pub observaciones: Option<String>,
}

impl CreatePedidoRequest {
    /// Validates this request into a [`NuevoPedido`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] naming the offending
    /// field when a create invariant is violated.
    pub fn into_nuevo(self) -> Result<NuevoPedido, ServiceError> {
        NuevoPedido::new(
            self.cliente,
            self.producto,
            self.cantidad,
            self.precio_unitario,
            self.observaciones,
        )
    }
}

/// Response body for `POST /api/pedidos`: the persisted row plus a
/// confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePedidoResponse {
    /// Human-readable confirmation.
    pub mensaje: String,
    /// The persisted order as returned by the storage layer.
    #[serde(flatten)]
    pub pedido: Pedido,
}

impl CreatePedidoResponse {
    /// Wraps a freshly persisted pedido with the confirmation message.
    #[must_use]
    pub fn new(pedido: Pedido) -> Self {
        Self {
            mensaje: "Pedido creado exitosamente".to_string(),
            pedido,
        }
    }
}

/// Response body for `GET /api/stats`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Total number of orders.
    pub total_pedidos: i64,
    /// Sum of all order totals; zero when no orders exist.
    #[schema(value_type = String, example = "7.50")]
    pub valor_total: Decimal,
    /// Count of orders per estado value.
    pub pedidos_por_estado: HashMap<String, i64>,
    /// Timestamp at which the aggregates were queried.
    pub fecha_consulta: DateTime<Utc>,
}
