//! Shared test harness for E2E integration tests.
//!
//! Drives the real API router in-process via `tower::oneshot`, so every
//! request runs through routing, extraction, the engine, and serialization.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use rc_api::routes::build_router;
use rc_api::state::AppState;
use rc_engine::{EngineConfig, Pipeline};

/// E2E test harness wrapping the API router and its state.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness with the default pipeline (no latency, default limits).
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let pipeline = Pipeline::from_config(config).unwrap();
        let state = AppState::new(pipeline);
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Send a request and return (status, JSON body). Empty bodies map to `Null`.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// POST /api/v1/sessions and return the new session ID.
    pub async fn create_session(&self) -> String {
        let (status, json) = self
            .send(Request::post("/api/v1/sessions").body(Body::empty()).unwrap())
            .await;
        assert_eq!(status, StatusCode::CREATED);
        json["id"].as_str().unwrap().to_string()
    }

    pub async fn generate(&self, session_id: &str, instruction: &str) -> (StatusCode, Value) {
        self.post(
            &format!("/api/v1/sessions/{session_id}/generate"),
            json!({ "instruction": instruction }),
        )
        .await
    }

    pub async fn optimize(&self, session_id: &str, score: i64, notes: &str) -> (StatusCode, Value) {
        self.post(
            &format!("/api/v1/sessions/{session_id}/optimize"),
            json!({ "score": score, "notes": notes }),
        )
        .await
    }
}
