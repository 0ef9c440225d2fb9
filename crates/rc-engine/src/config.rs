//! Engine configuration, loadable from TOML.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Simulated "thinking" delay before extraction, in milliseconds.
    #[serde(default)]
    pub parse_latency_ms: u64,
    /// Physical limits applied to adjusted parameters.
    #[serde(default)]
    pub limits: ParameterLimits,
}

impl EngineConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.limits.validate()?;
        Ok(config)
    }

    pub fn parse_latency(&self) -> Duration {
        Duration::from_millis(self.parse_latency_ms)
    }
}

/// Inclusive bounds for the parameters the adjuster may shift.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct ParameterLimits {
    #[serde(default = "default_min_temperature")]
    pub min_temperature_celsius: i32,
    #[serde(default = "default_max_temperature")]
    pub max_temperature_celsius: i32,
    #[serde(default = "default_min_duration")]
    pub min_duration_seconds: i32,
    #[serde(default = "default_max_duration")]
    pub max_duration_seconds: i32,
}

fn default_min_temperature() -> i32 {
    0
}

fn default_max_temperature() -> i32 {
    300
}

fn default_min_duration() -> i32 {
    0
}

fn default_max_duration() -> i32 {
    7200
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            min_temperature_celsius: default_min_temperature(),
            max_temperature_celsius: default_max_temperature(),
            min_duration_seconds: default_min_duration(),
            max_duration_seconds: default_max_duration(),
        }
    }
}

impl ParameterLimits {
    /// Reject limits whose minimum exceeds their maximum.
    pub fn validate(&self) -> EngineResult<()> {
        if self.min_temperature_celsius > self.max_temperature_celsius {
            return Err(EngineError::InvalidLimits(format!(
                "temperature min {} exceeds max {}",
                self.min_temperature_celsius, self.max_temperature_celsius
            )));
        }
        if self.min_duration_seconds > self.max_duration_seconds {
            return Err(EngineError::InvalidLimits(format!(
                "duration min {} exceeds max {}",
                self.min_duration_seconds, self.max_duration_seconds
            )));
        }
        Ok(())
    }
}
