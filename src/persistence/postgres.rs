//! PostgreSQL implementation of the persistence layer.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::migrate::Migrator;

use crate::domain::{NuevoPedido, Pedido, PedidoStats};
use crate::error::ServiceError;

/// Schema migrations embedded from `migrations/` at compile time.
static MIGRATOR: Migrator = sqlx::migrate!();

/// PostgreSQL-backed pedido store using `sqlx::PgPool`.
///
/// Each method executes a single SQL statement. The connection is
/// acquired from the pool for the duration of the statement and released
/// unconditionally on every exit path.
#[derive(Debug, Clone)]
pub struct PedidoStore {
    pool: PgPool,
}

impl PedidoStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    ///
    /// Idempotent: already-applied versions are skipped. Runs once from
    /// `main` before the listener binds; request handling never creates
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] if a migration cannot be
    /// applied.
    pub async fn run_migrations(&self) -> Result<(), ServiceError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))
    }

    /// Probes database connectivity with a trivial query.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] when the database cannot be
    /// reached.
    pub async fn ping(&self) -> Result<i32, ServiceError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))
    }

    /// Inserts one pedido row, letting PostgreSQL assign `id`, `total`,
    /// `estado`, and `fecha_creacion`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] on insert failure.
    pub async fn insert(&self, nuevo: &NuevoPedido) -> Result<Pedido, ServiceError> {
        sqlx::query_as::<_, Pedido>(
            "INSERT INTO pedidos (cliente, producto, cantidad, precio_unitario, observaciones) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, cliente, producto, cantidad, precio_unitario, total, \
                       observaciones, estado, fecha_creacion",
        )
        .bind(nuevo.cliente())
        .bind(nuevo.producto())
        .bind(nuevo.cantidad())
        .bind(nuevo.precio_unitario())
        .bind(nuevo.observaciones())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))
    }

    /// Returns all pedidos, newest first. Ids break ties between rows
    /// created in the same instant.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] on query failure.
    pub async fn list(&self) -> Result<Vec<Pedido>, ServiceError> {
        sqlx::query_as::<_, Pedido>(
            "SELECT id, cliente, producto, cantidad, precio_unitario, total, \
                    observaciones, estado, fecha_creacion \
             FROM pedidos ORDER BY fecha_creacion DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))
    }

    /// Returns a single pedido by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PedidoNotFound`] when no row matches and
    /// [`ServiceError::Database`] on other query failures.
    pub async fn get(&self, id: i32) -> Result<Pedido, ServiceError> {
        sqlx::query_as::<_, Pedido>(
            "SELECT id, cliente, producto, cantidad, precio_unitario, total, \
                    observaciones, estado, fecha_creacion \
             FROM pedidos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?
        .ok_or(ServiceError::PedidoNotFound(id))
    }

    /// Computes the order aggregates in a single grouped statement.
    ///
    /// The overall count and value are folded from the per-estado rows,
    /// so an empty table yields zero totals and an empty map.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Database`] on query failure.
    pub async fn stats(&self) -> Result<PedidoStats, ServiceError> {
        let rows = sqlx::query_as::<_, (String, i64, Decimal)>(
            "SELECT estado, COUNT(*), COALESCE(SUM(total), 0) \
             FROM pedidos GROUP BY estado",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

        Ok(fold_stats(rows))
    }
}

/// Folds the per-estado rows into the aggregate snapshot.
///
/// An empty input yields zero totals and an empty map.
fn fold_stats(rows: Vec<(String, i64, Decimal)>) -> PedidoStats {
    let mut total_pedidos = 0i64;
    let mut valor_total = Decimal::ZERO;
    let mut pedidos_por_estado = HashMap::with_capacity(rows.len());
    for (estado, count, suma) in rows {
        total_pedidos += count;
        valor_total += suma;
        pedidos_por_estado.insert(estado, count);
    }

    PedidoStats {
        total_pedidos,
        valor_total,
        pedidos_por_estado,
        fecha_consulta: Utc::now(),
    }
}
