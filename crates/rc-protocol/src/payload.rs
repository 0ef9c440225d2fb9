use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::instruction::{CookingAction, Ingredient};

/// Numeric machine parameters of a cooking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// Target pan temperature.
    pub temperature_celsius: i32,
    /// How long the step runs.
    pub duration_seconds: i32,
    /// Stirrer speed. Fixed by the action, never adjusted by feedback.
    pub stir_rpm: u32,
}

/// Structured robotic command ("SOP" step) sent to the cooking hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPayload {
    /// Unique step ID (UUIDv7 for time-sortability).
    pub step_id: Uuid,
    pub ingredient: Ingredient,
    pub action: CookingAction,
    pub parameters: Parameters,
}

impl CommandPayload {
    /// Create a payload with a freshly generated step ID.
    pub fn new(ingredient: Ingredient, action: CookingAction, parameters: Parameters) -> Self {
        Self {
            step_id: Uuid::now_v7(),
            ingredient,
            action,
            parameters,
        }
    }

    /// Derive a payload for the same step with different parameters.
    pub fn with_parameters(&self, parameters: Parameters) -> Self {
        Self {
            parameters,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CommandPayload {
        CommandPayload::new(
            Ingredient::Onion,
            CookingAction::Saute,
            Parameters {
                temperature_celsius: 160,
                duration_seconds: 240,
                stir_rpm: 40,
            },
        )
    }

    #[test]
    fn payload_json_shape_is_stable() {
        let payload = sample();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["step_id"].is_string());
        assert_eq!(json["ingredient"], "onion");
        assert_eq!(json["action"], "saute");
        assert_eq!(json["parameters"]["temperature_celsius"], 160);
        assert_eq!(json["parameters"]["duration_seconds"], 240);
        assert_eq!(json["parameters"]["stir_rpm"], 40);
    }

    #[test]
    fn step_ids_are_unique() {
        let a = sample();
        let b = sample();
        assert_ne!(a.step_id, b.step_id);
    }

    #[test]
    fn with_parameters_keeps_identity() {
        let original = sample();
        let derived = original.with_parameters(Parameters {
            temperature_celsius: 145,
            ..original.parameters
        });
        assert_eq!(derived.step_id, original.step_id);
        assert_eq!(derived.parameters.temperature_celsius, 145);
        assert_eq!(original.parameters.temperature_celsius, 160);
    }
}
