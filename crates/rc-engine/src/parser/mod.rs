//! Instruction parsing: free-text cooking instructions into categorical fields.
//!
//! - **Rule-based**: ordered keyword tables, always succeeds.
//! - **Delayed**: wraps another parser with a simulated processing delay.

pub mod delayed;
pub mod rules;

use async_trait::async_trait;
use rc_protocol::ExtractedInstruction;

/// Trait for parsers that turn instruction text into an `ExtractedInstruction`.
#[async_trait]
pub trait InstructionParser: Send + Sync {
    /// Parse instruction text. Unmatched fields fall back to their defaults.
    async fn parse(&self, text: &str) -> ExtractedInstruction;

    /// Name of this parser (for logging).
    fn name(&self) -> &str;
}

pub use delayed::DelayedParser;
pub use rules::{RuleBasedParser, extract};
