use std::fmt;

use serde::{Deserialize, Serialize};

/// Ingredient vocabulary recognized by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Onion,
    /// Fallback when no vocabulary entry matches.
    GenericVegetable,
}

/// Cooking action the robot should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingAction {
    Saute,
    Boil,
    /// Fallback when neither "saute" nor "boil" is mentioned.
    Cook,
}

/// Burner heat level requested by the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    Low,
    Medium,
    High,
    /// Any heat level string outside the vocabulary. Never produced by the
    /// extractor, only by external producers of `ExtractedInstruction` JSON.
    #[serde(other)]
    Unrecognized,
}

impl Ingredient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onion => "onion",
            Self::GenericVegetable => "generic_vegetable",
        }
    }
}

impl CookingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saute => "saute",
            Self::Boil => "boil",
            Self::Cook => "cook",
        }
    }
}

impl HeatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CookingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical fields pulled out of a free-text cooking instruction.
///
/// Every field always carries a value; the extractor applies defaults when
/// no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedInstruction {
    pub ingredient: Ingredient,
    pub action: CookingAction,
    pub heat_level: HeatLevel,
}
