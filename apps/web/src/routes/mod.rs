pub mod health;

use axum::{routing::get, Router};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_submit),
        )
        .fallback(handlers::handle_not_found)
        .with_state(state)
}
