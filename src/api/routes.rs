//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Balance
        .route(
            "/api/subaccount/balance",
            post(handlers::subaccount_balance).options(handlers::balance_preflight),
        )
        .with_state(state)
}
