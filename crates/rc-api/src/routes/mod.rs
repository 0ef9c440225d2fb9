//! API route definitions and router builder.

pub mod health;
pub mod pipeline;
pub mod sessions;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Session endpoints
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/{id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/sessions/{id}/generate", post(sessions::generate))
        .route("/sessions/{id}/optimize", post(sessions::optimize))
        .route("/sessions/{id}/comparison", get(sessions::comparison))
        .route("/sessions/{id}/history", get(sessions::history))
        // Stateless stage endpoints
        .route("/extract", post(pipeline::extract))
        .route("/normalize", post(pipeline::normalize_instruction))
        .route("/adjust", post(pipeline::adjust));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
