//! The pedido entity and its validated create input.
//!
//! [`Pedido`] is the sole domain entity: one persisted order row, used
//! both as the sqlx row mapping and as the wire representation.
//! [`NuevoPedido`] is the validated create input; its constructor is the
//! single place where the quantity and price invariants are enforced, so
//! the storage layer never re-checks them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::ServiceError;

/// A persisted order row from the `pedidos` table.
///
/// `id`, `total`, `estado`, and `fecha_creacion` are produced by the
/// storage layer on insert; the remaining fields echo client input.
/// `total` is a generated column and always equals
/// `cantidad * precio_unitario`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pedido {
    /// Server-assigned unique id, immutable.
    pub id: i32,
    /// Customer name.
    pub cliente: String,
    /// Product name.
    pub producto: String,
    /// Quantity ordered.
    pub cantidad: i32,
    /// Unit price. Serialized as a JSON string to avoid precision loss.
    pub precio_unitario: Decimal,
    /// Derived total, computed by the storage engine.
    pub total: Decimal,
    /// Optional free-text notes.
    pub observaciones: Option<String>,
    /// Status string; defaults to `"pendiente"`, set once and read.
    pub estado: String,
    /// Creation timestamp, set by the storage layer at insert time.
    pub fecha_creacion: DateTime<Utc>,
}

/// Validated input for creating a pedido.
///
/// A value of this type always satisfies the create invariants:
/// `cliente` and `producto` are non-blank, `cantidad` is positive, and
/// `precio_unitario` is non-negative.
#[derive(Debug, Clone)]
pub struct NuevoPedido {
    cliente: String,
    producto: String,
    cantidad: i32,
    precio_unitario: Decimal,
    observaciones: Option<String>,
}

impl NuevoPedido {
    /// Validates raw create input into a [`NuevoPedido`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] naming the offending
    /// field when a create invariant is violated.
    pub fn new(
        cliente: String,
        producto: String,
        cantidad: i32,
        precio_unitario: Decimal,
        observaciones: Option<String>,
    ) -> Result<Self, ServiceError> {
        if cliente.trim().is_empty() {
            return Err(ServiceError::InvalidRequest(
                "cliente must not be empty".to_string(),
            ));
        }
        if producto.trim().is_empty() {
            return Err(ServiceError::InvalidRequest(
                "producto must not be empty".to_string(),
            ));
        }
        if cantidad <= 0 {
            return Err(ServiceError::InvalidRequest(format!(
                "cantidad must be positive, got {cantidad}"
            )));
        }
        if precio_unitario < Decimal::ZERO {
            return Err(ServiceError::InvalidRequest(format!(
                "precio_unitario must not be negative, got {precio_unitario}"
            )));
        }

        Ok(Self {
            cliente,
            producto,
            cantidad,
            precio_unitario,
            observaciones,
        })
    }

    /// Customer name.
    #[must_use]
    pub fn cliente(&self) -> &str {
        &self.cliente
    }

    /// Product name.
    #[must_use]
    pub fn producto(&self) -> &str {
        &self.producto
    }

    /// Quantity ordered, always positive.
    #[must_use]
    pub const fn cantidad(&self) -> i32 {
        self.cantidad
    }

    /// Unit price, never negative.
    #[must_use]
    pub const fn precio_unitario(&self) -> Decimal {
        self.precio_unitario
    }

    /// Optional free-text notes.
    #[must_use]
    pub fn observaciones(&self) -> Option<&str> {
        self.observaciones.as_deref()
    }
}

/// Aggregate snapshot returned by the stats operation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PedidoStats {
    /// Total number of orders.
    pub total_pedidos: i64,
    /// Sum of all order totals; zero when no orders exist.
    pub valor_total: Decimal,
    /// Count of orders per estado value; empty when no orders exist.
    pub pedidos_por_estado: HashMap<String, i64>,
    /// Timestamp at which the aggregates were queried.
    pub fecha_consulta: DateTime<Utc>,
}
