//! Per-user cooking session: the generated SOP, its latest optimization,
//! and the feedback history.
//!
//! Optimizations always run against the original payload, never against a
//! previous optimization.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use rc_protocol::{Adjustment, CommandPayload, Comparison, FeedbackEntry, SessionSnapshot};

use crate::error::{EngineError, EngineResult};
use crate::feedback::Feedback;
use crate::pipeline::Pipeline;

#[derive(Debug, Clone)]
pub struct CookingSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    original: Option<CommandPayload>,
    latest: Option<Adjustment>,
    history: Vec<FeedbackEntry>,
}

impl CookingSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
            original: None,
            latest: None,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn original(&self) -> Option<&CommandPayload> {
        self.original.as_ref()
    }

    pub fn latest(&self) -> Option<&Adjustment> {
        self.latest.as_ref()
    }

    pub fn history(&self) -> &[FeedbackEntry] {
        &self.history
    }

    /// Generate a new SOP and make it the session's reference payload.
    pub async fn generate(
        &mut self,
        pipeline: &Pipeline,
        text: &str,
    ) -> EngineResult<&CommandPayload> {
        let payload = pipeline.generate(text).await?;
        Ok(self.load(payload))
    }

    /// Replace the reference payload. Clears the previous optimization and
    /// history, which belonged to the old payload.
    pub fn load(&mut self, payload: CommandPayload) -> &CommandPayload {
        self.latest = None;
        self.history.clear();
        self.original.insert(payload)
    }

    /// Run one optimization cycle against the original payload.
    pub fn optimize(
        &mut self,
        pipeline: &Pipeline,
        feedback: Feedback,
    ) -> EngineResult<&Adjustment> {
        let original = self.original.as_ref().ok_or(EngineError::NoActivePayload)?;
        let adjustment = pipeline.optimize(original, &feedback);

        self.history.push(FeedbackEntry {
            feedback: feedback.to_record(),
            rule: adjustment.rule,
            payload: adjustment.payload.clone(),
            recorded_at: Utc::now(),
        });
        tracing::debug!(
            session_id = %self.id,
            cycles = self.history.len(),
            "feedback recorded"
        );
        Ok(self.latest.insert(adjustment))
    }

    /// Original vs latest optimized parameters, if an optimization has run.
    pub fn comparison(&self) -> Option<Comparison> {
        let original = self.original.as_ref()?;
        let latest = self.latest.as_ref()?;
        Some(Comparison {
            step_id: original.step_id,
            original: original.parameters,
            optimized: latest.payload.parameters,
            rule: latest.rule,
            rationale: latest.rationale.clone(),
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            created_at: self.created_at,
            original: self.original.clone(),
            optimized: self.latest.clone(),
            history: self.history.clone(),
        }
    }
}

impl Default for CookingSession {
    fn default() -> Self {
        Self::new()
    }
}
