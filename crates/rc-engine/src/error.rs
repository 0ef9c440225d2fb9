//! Engine error types.

use thiserror::Error;

/// Errors raised at the engine boundary. The rule tables themselves never fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("taste score {score} is out of range (expected 1-10)")]
    InvalidScore { score: i64 },

    #[error("instruction text is empty")]
    EmptyInstruction,

    #[error("no payload generated yet; generate one before optimizing")]
    NoActivePayload,

    #[error("invalid parameter limits: {0}")]
    InvalidLimits(String),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
