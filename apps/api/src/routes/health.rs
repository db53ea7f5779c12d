use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Static liveness message.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Interview API is running" }))
}

/// GET /health
/// Returns a status object with service version, model and live session count.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interview-api",
        "model": state.llm.model_name(),
        "sessions": state.sessions.len().await
    }))
}
