//! Robotic recipe engine core.
//!
//! Turns free-text cooking instructions into structured SOP payloads and
//! adjusts those payloads from human taste feedback.

pub mod adjuster;
pub mod config;
pub mod error;
pub mod feedback;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod session;

pub use adjuster::{adjust, adjust_with_limits};
pub use config::{EngineConfig, ParameterLimits};
pub use error::{EngineError, EngineResult};
pub use feedback::{Feedback, TasteScore};
pub use normalizer::normalize;
pub use parser::{DelayedParser, InstructionParser, RuleBasedParser, extract};
pub use pipeline::Pipeline;
pub use session::CookingSession;
