//! Generate/optimize pipeline: parser + normalizer + adjuster, wired with
//! the engine configuration.

use std::sync::Arc;

use rc_protocol::{Adjustment, CommandPayload, ExtractedInstruction};

use crate::adjuster::adjust_with_limits;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::feedback::Feedback;
use crate::normalizer::normalize;
use crate::parser::{DelayedParser, InstructionParser, RuleBasedParser};

/// Configured pipeline. Cheap to clone; the parser is shared.
#[derive(Clone)]
pub struct Pipeline {
    parser: Arc<dyn InstructionParser>,
    config: EngineConfig,
}

impl Pipeline {
    pub fn new(parser: Arc<dyn InstructionParser>, config: EngineConfig) -> Self {
        Self { parser, config }
    }

    /// Rule-based parser, wrapped in a delay when `parse_latency_ms` is set.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        config.limits.validate()?;
        let parser: Arc<dyn InstructionParser> = if config.parse_latency_ms > 0 {
            Arc::new(DelayedParser::new(
                Box::new(RuleBasedParser::new()),
                config.parse_latency(),
            ))
        } else {
            Arc::new(RuleBasedParser::new())
        };
        Ok(Self::new(parser, config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and parse instruction text.
    pub async fn extract(&self, text: &str) -> EngineResult<ExtractedInstruction> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyInstruction);
        }
        Ok(self.parser.parse(text).await)
    }

    /// Text to a fresh command payload.
    pub async fn generate(&self, text: &str) -> EngineResult<CommandPayload> {
        let instr = self.extract(text).await?;
        let payload = normalize(&instr);
        tracing::info!(
            step_id = %payload.step_id,
            parser = self.parser.name(),
            ingredient = %payload.ingredient,
            action = %payload.action,
            "SOP generated"
        );
        Ok(payload)
    }

    /// Apply feedback to a payload under the configured limits.
    pub fn optimize(&self, payload: &CommandPayload, feedback: &Feedback) -> Adjustment {
        let adjustment =
            adjust_with_limits(payload, feedback.score, &feedback.notes, &self.config.limits);
        tracing::info!(
            step_id = %payload.step_id,
            score = feedback.score.value(),
            rule = ?adjustment.rule,
            clamped = adjustment.was_clamped(),
            "optimization cycle complete"
        );
        adjustment
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Arc::new(RuleBasedParser::new()), EngineConfig::default())
    }
}
