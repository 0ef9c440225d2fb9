use serde::{Deserialize, Serialize};

use crate::payload::CommandPayload;

/// Human tasting feedback supplied for one optimization cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Taste score, 1 (inedible) to 10 (perfect).
    pub score: u8,
    /// Free-text tasting notes.
    #[serde(default)]
    pub notes: String,
}

/// Which row of the adjustment table fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    /// Score high enough; parameters left alone.
    Stable,
    /// Notes mention burning; temperature and time reduced.
    Burnt,
    /// Notes mention rawness; temperature and time increased.
    Undercooked,
    /// Low score with no recognizable reason; small time bump.
    Unclear,
}

impl AdjustmentRule {
    /// Human-readable rationale shown next to the optimized parameters.
    pub fn rationale(&self) -> &'static str {
        match self {
            Self::Stable => "stable, no change",
            Self::Burnt => "reduced temp & time (burnt detected)",
            Self::Undercooked => "increased energy (undercooked)",
            Self::Unclear => "score low, reason unclear; small adjustment",
        }
    }
}

/// Adjustable parameter that may hit a configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterField {
    TemperatureCelsius,
    DurationSeconds,
}

/// Record of an adjusted value being pulled back inside its limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampHit {
    pub field: ParameterField,
    /// Value the rule table asked for.
    pub requested: i32,
    /// Value actually written into the payload.
    pub applied: i32,
}

/// Result of one feedback adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Newly derived payload. The input payload is never modified.
    pub payload: CommandPayload,
    pub rule: AdjustmentRule,
    pub rationale: String,
    /// Limits that fired while applying the rule (empty in the common case).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clamps: Vec<ClampHit>,
}

impl Adjustment {
    pub fn was_clamped(&self) -> bool {
        !self.clamps.is_empty()
    }
}
