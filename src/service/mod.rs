//! Service layer: the order service component.
//!
//! [`PedidoService`] owns the injected [`crate::persistence::PedidoStore`]
//! and coordinates every pedido operation as a stateless one-shot call.

pub mod pedido_service;

pub use pedido_service::{HealthStatus, PedidoService};
