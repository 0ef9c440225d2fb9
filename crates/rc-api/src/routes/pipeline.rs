//! Stateless pipeline endpoints, one per stage.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;
use rc_engine::{Feedback, normalize};
use rc_protocol::{Adjustment, CommandPayload, ExtractedInstruction};

/// Request body for extraction.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub instruction: String,
}

/// Request body for a one-off adjustment.
#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub payload: CommandPayload,
    pub score: i64,
    #[serde(default)]
    pub notes: String,
}

/// POST /api/v1/extract — instruction text to categorical fields.
pub async fn extract(
    State(state): State<AppState>,
    body: Result<Json<ExtractRequest>, JsonRejection>,
) -> ApiResult<Json<ExtractedInstruction>> {
    let Json(req) = body?;
    Ok(Json(state.pipeline.extract(&req.instruction).await?))
}

/// POST /api/v1/normalize — categorical fields to a command payload.
pub async fn normalize_instruction(
    body: Result<Json<ExtractedInstruction>, JsonRejection>,
) -> ApiResult<Json<CommandPayload>> {
    let Json(instr) = body?;
    Ok(Json(normalize(&instr)))
}

/// POST /api/v1/adjust — apply feedback to a caller-supplied payload.
pub async fn adjust(
    State(state): State<AppState>,
    body: Result<Json<AdjustRequest>, JsonRejection>,
) -> ApiResult<Json<Adjustment>> {
    let Json(req) = body?;
    let feedback = Feedback::new(req.score, req.notes)?;
    Ok(Json(state.pipeline.optimize(&req.payload, &feedback)))
}
