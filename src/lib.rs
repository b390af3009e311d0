//! # pedidos-backend
//!
//! Minimal order-management REST service backed by a single PostgreSQL
//! `pedidos` table.
//!
//! Clients create, list, fetch-by-id, and summarize orders; each request
//! executes one SQL statement against a shared connection pool. There is
//! no business logic beyond a derived total (a generated column) and
//! per-estado grouping counts.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PedidoService (service/)
//!     │
//!     ├── PedidoStore (persistence/)
//!     │
//!     └── PostgreSQL (pedidos table)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
