pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::improvements::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Improvements API
        .route(
            "/api/v1/improvements/preview",
            post(handlers::handle_preview),
        )
        .route(
            "/api/v1/improvements/generate",
            post(handlers::handle_generate),
        )
        .with_state(state)
}
