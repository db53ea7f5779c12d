pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Interview API
        .route(
            "/api/start-interview",
            post(handlers::handle_start_interview),
        )
        .route("/api/submit-answer", post(handlers::handle_submit_answer))
        .route(
            "/api/complete-interview",
            post(handlers::handle_complete_interview),
        )
        .with_state(state)
}
