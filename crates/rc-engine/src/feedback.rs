//! Validated taste feedback.

use rc_protocol::FeedbackRecord;

use crate::error::{EngineError, EngineResult};

/// Taste score guaranteed to lie in 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TasteScore(u8);

impl TasteScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    /// Scores at or above this are considered stable.
    pub const STABLE_THRESHOLD: u8 = 7;

    pub fn new(score: i64) -> EngineResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&score) {
            Ok(Self(score as u8))
        } else {
            Err(EngineError::InvalidScore { score })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_stable(&self) -> bool {
        self.0 >= Self::STABLE_THRESHOLD
    }
}

/// Feedback that has passed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub score: TasteScore,
    pub notes: String,
}

impl Feedback {
    pub fn new(score: i64, notes: impl Into<String>) -> EngineResult<Self> {
        Ok(Self {
            score: TasteScore::new(score)?,
            notes: notes.into(),
        })
    }

    pub fn to_record(&self) -> FeedbackRecord {
        FeedbackRecord {
            score: self.score.value(),
            notes: self.notes.clone(),
        }
    }
}

impl TryFrom<FeedbackRecord> for Feedback {
    type Error = EngineError;

    fn try_from(record: FeedbackRecord) -> EngineResult<Self> {
        Self::new(i64::from(record.score), record.notes)
    }
}
