//! Liveness endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health — service status with current session load.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let active_sessions = state.sessions.read().await.len();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": active_sessions,
        "max_sessions": state.max_sessions,
    }))
}
