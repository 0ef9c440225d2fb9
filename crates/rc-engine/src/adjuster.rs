//! Feedback adjuster: derives a revised payload from a taste score and notes.
//!
//! Rules, evaluated in order (notes matched case-insensitively):
//! - score >= 7: no change
//! - notes mention "burnt": temperature -15, duration -30
//! - notes mention "raw": temperature +10, duration +45
//! - otherwise: duration +10
//!
//! Shifted results are clamped to `ParameterLimits`; every clamp that fires
//! is reported on the returned `Adjustment`. A stable verdict returns the
//! parameters exactly as given, even when they sit outside the limits.
//! `stir_rpm` is never touched.

use rc_protocol::{Adjustment, AdjustmentRule, ClampHit, CommandPayload, ParameterField, Parameters};

use crate::config::ParameterLimits;
use crate::feedback::TasteScore;

/// `(temperature delta, duration delta)` applied by each rule.
fn deltas(rule: AdjustmentRule) -> (i32, i32) {
    match rule {
        AdjustmentRule::Stable => (0, 0),
        AdjustmentRule::Burnt => (-15, -30),
        AdjustmentRule::Undercooked => (10, 45),
        AdjustmentRule::Unclear => (0, 10),
    }
}

/// Pick the adjustment rule for a score and its tasting notes.
pub fn select_rule(score: TasteScore, notes: &str) -> AdjustmentRule {
    if score.is_stable() {
        return AdjustmentRule::Stable;
    }
    let notes = notes.to_lowercase();
    if notes.contains("burnt") {
        AdjustmentRule::Burnt
    } else if notes.contains("raw") {
        AdjustmentRule::Undercooked
    } else {
        AdjustmentRule::Unclear
    }
}

/// Adjust a payload using the default parameter limits.
pub fn adjust(payload: &CommandPayload, score: TasteScore, notes: &str) -> Adjustment {
    adjust_with_limits(payload, score, notes, &ParameterLimits::default())
}

/// Adjust a payload, clamping the result to `limits`.
pub fn adjust_with_limits(
    payload: &CommandPayload,
    score: TasteScore,
    notes: &str,
    limits: &ParameterLimits,
) -> Adjustment {
    let rule = select_rule(score, notes);
    tracing::debug!(
        step_id = %payload.step_id,
        score = score.value(),
        rule = ?rule,
        "feedback rule selected"
    );

    if rule == AdjustmentRule::Stable {
        return Adjustment {
            payload: payload.clone(),
            rule,
            rationale: rule.rationale().to_string(),
            clamps: Vec::new(),
        };
    }

    let (temp_delta, duration_delta) = deltas(rule);
    let current = payload.parameters;
    let mut clamps = Vec::new();

    let temperature_celsius = clamp_field(
        ParameterField::TemperatureCelsius,
        current.temperature_celsius.saturating_add(temp_delta),
        limits.min_temperature_celsius,
        limits.max_temperature_celsius,
        &mut clamps,
    );
    let duration_seconds = clamp_field(
        ParameterField::DurationSeconds,
        current.duration_seconds.saturating_add(duration_delta),
        limits.min_duration_seconds,
        limits.max_duration_seconds,
        &mut clamps,
    );

    for hit in &clamps {
        tracing::warn!(
            step_id = %payload.step_id,
            field = ?hit.field,
            requested = hit.requested,
            applied = hit.applied,
            "adjusted parameter clamped to limit"
        );
    }
    Adjustment {
        payload: payload.with_parameters(Parameters {
            temperature_celsius,
            duration_seconds,
            stir_rpm: current.stir_rpm,
        }),
        rule,
        rationale: rule.rationale().to_string(),
        clamps,
    }
}

fn clamp_field(
    field: ParameterField,
    requested: i32,
    min: i32,
    max: i32,
    clamps: &mut Vec<ClampHit>,
) -> i32 {
    let applied = requested.clamp(min, max);
    if applied != requested {
        clamps.push(ClampHit {
            field,
            requested,
            applied,
        });
    }
    applied
}
