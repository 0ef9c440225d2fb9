use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feedback::{Adjustment, AdjustmentRule, FeedbackRecord};
use crate::payload::{CommandPayload, Parameters};

/// One optimization cycle recorded in a session's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub feedback: FeedbackRecord,
    pub rule: AdjustmentRule,
    /// Payload produced by this cycle.
    pub payload: CommandPayload,
    pub recorded_at: DateTime<Utc>,
}

/// Original vs optimized parameters for side-by-side display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub step_id: Uuid,
    pub original: Parameters,
    pub optimized: Parameters,
    pub rule: AdjustmentRule,
    pub rationale: String,
}

/// Serializable view of a cooking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Payload from the latest generate request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<CommandPayload>,
    /// Most recent optimization of `original`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized: Option<Adjustment>,
    pub history: Vec<FeedbackEntry>,
}
