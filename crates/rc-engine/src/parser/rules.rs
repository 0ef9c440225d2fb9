//! Rule-based instruction extractor.
//!
//! Each field is decided by its own keyword table, checked in order against
//! the lowercased text. The first matching keyword wins; no match means the
//! field's default.

use async_trait::async_trait;

use super::InstructionParser;
use rc_protocol::{CookingAction, ExtractedInstruction, HeatLevel, Ingredient};

/// Ingredient vocabulary. Extend by adding entries.
const INGREDIENT_RULES: &[(&str, Ingredient)] = &[("onion", Ingredient::Onion)];
const DEFAULT_INGREDIENT: Ingredient = Ingredient::GenericVegetable;

const ACTION_RULES: &[(&str, CookingAction)] = &[
    ("saute", CookingAction::Saute),
    ("boil", CookingAction::Boil),
];
const DEFAULT_ACTION: CookingAction = CookingAction::Cook;

// "high" is checked before "low" so "high, then low" reads as high.
const HEAT_RULES: &[(&str, HeatLevel)] = &[("high", HeatLevel::High), ("low", HeatLevel::Low)];
const DEFAULT_HEAT: HeatLevel = HeatLevel::Medium;

/// Keyword-table parser.
pub struct RuleBasedParser;

impl RuleBasedParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InstructionParser for RuleBasedParser {
    async fn parse(&self, text: &str) -> ExtractedInstruction {
        extract(text)
    }

    fn name(&self) -> &str {
        "rules"
    }
}

/// Extract categorical fields from instruction text. Never fails.
pub fn extract(text: &str) -> ExtractedInstruction {
    let lower = text.to_lowercase();

    let instr = ExtractedInstruction {
        ingredient: first_match(&lower, INGREDIENT_RULES).unwrap_or(DEFAULT_INGREDIENT),
        action: first_match(&lower, ACTION_RULES).unwrap_or(DEFAULT_ACTION),
        heat_level: first_match(&lower, HEAT_RULES).unwrap_or(DEFAULT_HEAT),
    };

    tracing::debug!(
        ingredient = %instr.ingredient,
        action = %instr.action,
        heat_level = %instr.heat_level,
        "instruction extracted"
    );
    instr
}

/// Return the value of the first rule whose keyword occurs in `text`.
fn first_match<T: Copy>(text: &str, rules: &[(&str, T)]) -> Option<T> {
    rules
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, value)| *value)
}
