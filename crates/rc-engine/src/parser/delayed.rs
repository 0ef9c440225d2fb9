//! Parser wrapper that simulates model "thinking" time.
//!
//! The delay carries no semantic weight; it only reproduces the pause an
//! operator would see from a real model. Zero delay skips the sleep.

use std::time::Duration;

use async_trait::async_trait;
use rc_protocol::ExtractedInstruction;

use super::InstructionParser;

/// Sleeps for a fixed delay, then delegates to the inner parser.
pub struct DelayedParser {
    inner: Box<dyn InstructionParser>,
    delay: Duration,
}

impl DelayedParser {
    pub fn new(inner: Box<dyn InstructionParser>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl InstructionParser for DelayedParser {
    async fn parse(&self, text: &str) -> ExtractedInstruction {
        if !self.delay.is_zero() {
            tracing::debug!(
                delay_ms = self.delay.as_millis() as u64,
                parser = self.inner.name(),
                "simulating parse latency"
            );
            tokio::time::sleep(self.delay).await;
        }
        self.inner.parse(text).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
