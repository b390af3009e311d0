//! Pedido service: the order service component over the injected store.

use crate::domain::{NuevoPedido, Pedido, PedidoStats};
use crate::error::ServiceError;
use crate::persistence::PedidoStore;

/// Outcome of the database connectivity probe.
///
/// The probe never fails the request: errors are captured in the
/// [`HealthStatus::Error`] variant and reported inside a 200 response
/// body instead of being raised to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The database answered the probe query.
    Ok {
        /// Value returned by the `SELECT 1` probe.
        db: i32,
    },
    /// The database could not be reached.
    Error {
        /// Human-readable failure description.
        detail: String,
    },
}

/// Stateless coordinator for all pedido operations.
///
/// Owns the injected [`PedidoStore`]; every operation is a one-shot
/// request/response against durable storage with no coordination
/// between in-flight requests. Handlers call this service, never the
/// store directly.
#[derive(Debug, Clone)]
pub struct PedidoService {
    store: PedidoStore,
}

impl PedidoService {
    /// Creates a new `PedidoService` over the given store.
    #[must_use]
    pub fn new(store: PedidoStore) -> Self {
        Self { store }
    }

    /// Probes database connectivity.
    ///
    /// Never returns an error: probe failures are folded into
    /// [`HealthStatus::Error`] so the health endpoint can report them
    /// in-band.
    pub async fn health(&self) -> HealthStatus {
        match self.store.ping().await {
            Ok(db) => HealthStatus::Ok { db },
            Err(err) => {
                tracing::warn!(error = %err, "database health probe failed");
                HealthStatus::Error {
                    detail: err.to_string(),
                }
            }
        }
    }

    /// Creates a new pedido from validated input.
    ///
    /// The storage layer assigns `id` and `fecha_creacion`, applies the
    /// default `estado`, and computes `total`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] if the insert fails.
    pub async fn create(&self, nuevo: &NuevoPedido) -> Result<Pedido, ServiceError> {
        let pedido = self.store.insert(nuevo).await?;
        tracing::info!(
            id = pedido.id,
            cliente = %pedido.cliente,
            total = %pedido.total,
            "pedido created"
        );
        Ok(pedido)
    }

    /// Returns all pedidos, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] on query failure.
    pub async fn list(&self) -> Result<Vec<Pedido>, ServiceError> {
        self.store.list().await
    }

    /// Returns a single pedido by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PedidoNotFound`] when no row matches and
    /// [`ServiceError::Database`] on other query failures.
    pub async fn get(&self, id: i32) -> Result<Pedido, ServiceError> {
        self.store.get(id).await
    }

    /// Returns the order aggregates: total count, summed value, and
    /// per-estado counts, stamped with the query time.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] on query failure.
    pub async fn stats(&self) -> Result<PedidoStats, ServiceError> {
        self.store.stats().await
    }
}
