//! Shared application state for the Axum server.
//!
//! Sessions live in memory only; each request locks the map, touches exactly
//! one session, and releases it. The map is capped at `max_sessions`.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use rc_engine::{CookingSession, Pipeline};

/// Session cap used when none is configured.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// Active cooking sessions keyed by session ID.
    pub sessions: Arc<RwLock<HashMap<Uuid, CookingSession>>>,
    /// Configured generate/optimize pipeline.
    pub pipeline: Pipeline,
    /// Upper bound on concurrently open sessions.
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            pipeline,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Pipeline::default())
    }
}
