//! Persistence layer: PostgreSQL access for pedido rows.
//!
//! [`PedidoStore`] wraps a `sqlx::PgPool` with one method per SQL
//! statement, plus the embedded startup migration. sqlx errors are
//! stringified at this boundary into [`crate::error::ServiceError`].

pub mod postgres;

pub use postgres::PedidoStore;
