//! Domain layer: the pedido entity, validated inputs, and aggregates.
//!
//! There is exactly one entity in this system, the order row. No state
//! machine exists for `estado`: the storage layer assigns the default
//! value once and the service only ever reads it back.

pub mod pedido;

pub use pedido::{NuevoPedido, Pedido, PedidoStats};
