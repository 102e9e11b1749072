//! # meeple-api
//!
//! HTTP surface of the board-game review service: models, services that
//! resolve resource existence, and the axum router.

pub mod catalog;
pub mod controllers;
pub mod models;
pub mod services;
pub mod state;

use axum::Router;
use meeple_core::{catch_panic_layer, default_cors, default_trace, route_not_found};

pub use state::AppState;

/// Assemble every route over `state`. Unmatched paths and unsupported
/// methods answer `Route Not Found`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(controllers::api_controller::routes())
        .merge(controllers::category_controller::routes())
        .merge(controllers::review_controller::routes())
        .merge(controllers::comment_controller::routes())
        .merge(controllers::user_controller::routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(state)
        .layer(catch_panic_layer())
        .layer(default_cors())
        .layer(default_trace())
}
