//! Parameter normalization ("quantization"): categorical instruction fields
//! to numeric machine parameters via fixed lookup tables.

use rc_protocol::{CommandPayload, CookingAction, ExtractedInstruction, HeatLevel, Parameters};

/// Temperature used when the heat level is outside the table.
pub const DEFAULT_TEMPERATURE_CELSIUS: i32 = 160;

/// Step timing for a saute.
pub const SAUTE_DURATION_SECONDS: i32 = 240;
pub const SAUTE_STIR_RPM: u32 = 40;

/// Step timing for every other action.
pub const DEFAULT_DURATION_SECONDS: i32 = 600;
pub const DEFAULT_STIR_RPM: u32 = 0;

/// Map a heat level to a target pan temperature.
pub fn temperature_for(heat: HeatLevel) -> i32 {
    match heat {
        HeatLevel::Low => 120,
        HeatLevel::Medium => 160,
        HeatLevel::High => 210,
        HeatLevel::Unrecognized => DEFAULT_TEMPERATURE_CELSIUS,
    }
}

/// Map an action to `(duration_seconds, stir_rpm)`.
pub fn timing_for(action: CookingAction) -> (i32, u32) {
    match action {
        CookingAction::Saute => (SAUTE_DURATION_SECONDS, SAUTE_STIR_RPM),
        _ => (DEFAULT_DURATION_SECONDS, DEFAULT_STIR_RPM),
    }
}

/// Build a command payload from an extracted instruction.
///
/// Parameters depend only on `heat_level` and `action`; every call gets a
/// fresh `step_id`.
pub fn normalize(instr: &ExtractedInstruction) -> CommandPayload {
    let (duration_seconds, stir_rpm) = timing_for(instr.action);
    let payload = CommandPayload::new(
        instr.ingredient,
        instr.action,
        Parameters {
            temperature_celsius: temperature_for(instr.heat_level),
            duration_seconds,
            stir_rpm,
        },
    );

    tracing::debug!(
        step_id = %payload.step_id,
        temperature_celsius = payload.parameters.temperature_celsius,
        duration_seconds = payload.parameters.duration_seconds,
        stir_rpm = payload.parameters.stir_rpm,
        "instruction normalized"
    );
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_protocol::Ingredient;

    fn instr(action: CookingAction, heat_level: HeatLevel) -> ExtractedInstruction {
        ExtractedInstruction {
            ingredient: Ingredient::Onion,
            action,
            heat_level,
        }
    }

    #[test]
    fn saute_on_medium() {
        let payload = normalize(&instr(CookingAction::Saute, HeatLevel::Medium));
        assert_eq!(payload.ingredient, Ingredient::Onion);
        assert_eq!(payload.action, CookingAction::Saute);
        assert_eq!(
            payload.parameters,
            Parameters {
                temperature_celsius: 160,
                duration_seconds: 240,
                stir_rpm: 40,
            }
        );
    }

    #[test]
    fn boil_on_high() {
        let payload = normalize(&instr(CookingAction::Boil, HeatLevel::High));
        assert_eq!(
            payload.parameters,
            Parameters {
                temperature_celsius: 210,
                duration_seconds: 600,
                stir_rpm: 0,
            }
        );
    }

    #[test]
    fn heat_table() {
        assert_eq!(temperature_for(HeatLevel::Low), 120);
        assert_eq!(temperature_for(HeatLevel::Medium), 160);
        assert_eq!(temperature_for(HeatLevel::High), 210);
        assert_eq!(temperature_for(HeatLevel::Unrecognized), 160);
    }

    #[test]
    fn cook_uses_default_timing() {
        assert_eq!(timing_for(CookingAction::Cook), (600, 0));
        assert_eq!(timing_for(CookingAction::Boil), (600, 0));
        assert_eq!(timing_for(CookingAction::Saute), (240, 40));
    }

    #[test]
    fn parameters_ignore_ingredient() {
        let a = normalize(&instr(CookingAction::Cook, HeatLevel::Low));
        let b = normalize(&ExtractedInstruction {
            ingredient: Ingredient::GenericVegetable,
            ..instr(CookingAction::Cook, HeatLevel::Low)
        });
        assert_eq!(a.parameters, b.parameters);
        assert_ne!(a.step_id, b.step_id);
    }
}
