//! Session endpoints: generate an SOP, run optimization cycles, and read
//! back the original-vs-optimized comparison and feedback history.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use rc_engine::{CookingSession, Feedback};
use rc_protocol::{Adjustment, CommandPayload, Comparison, FeedbackEntry, SessionSnapshot};

/// Request body for generating an SOP.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Natural-language cooking instruction.
    pub instruction: String,
}

/// Request body for one optimization cycle.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    /// Taste score; validated to 1-10 by the engine.
    pub score: i64,
    /// Free-text tasting notes.
    #[serde(default)]
    pub notes: String,
}

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session '{id}' not found"))
}

/// POST /api/v1/sessions — open a new cooking session.
pub async fn create_session(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<SessionSnapshot>)> {
    let session = CookingSession::new();
    let snapshot = session.snapshot();

    let mut sessions = state.sessions.write().await;
    if sessions.len() >= state.max_sessions {
        tracing::warn!(max_sessions = state.max_sessions, "session limit reached");
        return Err(ApiError::Unavailable(format!(
            "session limit of {} reached; delete an existing session first",
            state.max_sessions
        )));
    }
    sessions.insert(session.id(), session);
    tracing::info!(session_id = %snapshot.id, active = sessions.len(), "session created");

    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/sessions/:id — current session state.
pub async fn get_session(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<SessionSnapshot>> {
    let Path(id) = id?;
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(session.snapshot()))
}

/// DELETE /api/v1/sessions/:id — end a session and drop its state.
pub async fn delete_session(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state
        .sessions
        .write()
        .await
        .remove(&id)
        .ok_or_else(|| session_not_found(id))?;
    tracing::info!(session_id = %id, "session closed");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/generate — turn instruction text into the
/// session's reference SOP.
pub async fn generate(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<Json<CommandPayload>> {
    let Path(id) = id?;
    let Json(req) = body?;

    // Fail fast before spending the parse latency on a dead session.
    if !state.sessions.read().await.contains_key(&id) {
        return Err(session_not_found(id));
    }

    let payload = state.pipeline.generate(&req.instruction).await?;

    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    let payload = session.load(payload).clone();
    tracing::info!(session_id = %id, step_id = %payload.step_id, "session SOP replaced");

    Ok(Json(payload))
}

/// POST /api/v1/sessions/:id/optimize — apply taste feedback to the
/// session's original SOP.
pub async fn optimize(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<OptimizeRequest>, JsonRejection>,
) -> ApiResult<Json<Adjustment>> {
    let Path(id) = id?;
    let Json(req) = body?;
    let feedback = Feedback::new(req.score, req.notes)?;

    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    let adjustment = session.optimize(&state.pipeline, feedback)?;

    Ok(Json(adjustment.clone()))
}

/// GET /api/v1/sessions/:id/comparison — original vs optimized parameters.
pub async fn comparison(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<Comparison>> {
    let Path(id) = id?;
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    session
        .comparison()
        .map(Json)
        .ok_or_else(|| ApiError::Conflict(format!("session '{id}' has no optimization yet")))
}

/// GET /api/v1/sessions/:id/history — feedback cycles for the current SOP.
pub async fn history(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<Vec<FeedbackEntry>>> {
    let Path(id) = id?;
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(session.history().to_vec()))
}
