//! Data Transfer Objects for REST request/response serialization.
//!
//! Monetary amounts are `rust_decimal::Decimal` values, serialized as
//! JSON strings to prevent precision loss; on input they are accepted
//! as either JSON numbers or strings.

pub mod pedido_dto;
pub mod system_dto;

pub use pedido_dto::*;
pub use system_dto::*;
