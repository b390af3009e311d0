//! REST endpoint handlers organized by resource.

pub mod pedidos;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes; the caller nests them under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(pedidos::routes()).merge(system::routes())
}
