//! API server configuration.

use anyhow::Context;
use rc_engine::EngineConfig;

use crate::state::DEFAULT_MAX_SESSIONS;

/// Top-level API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Maximum number of open sessions.
    pub max_sessions: usize,
    /// Pipeline settings (parse latency, parameter limits).
    pub engine: EngineConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from environment variables.
    ///
    /// - `RC_ENGINE_CONFIG`: optional TOML file with engine settings
    /// - `RC_HOST`, `RC_PORT`: listen address
    /// - `RC_PARSE_LATENCY_MS`: overrides the file's parse latency
    /// - `RC_MAX_SESSIONS`: cap on open sessions
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut engine = match var("RC_ENGINE_CONFIG") {
            Some(path) => EngineConfig::from_file(&path)
                .with_context(|| format!("failed to load engine config from {path}"))?,
            None => EngineConfig::default(),
        };
        if let Some(latency) = var("RC_PARSE_LATENCY_MS") {
            engine.parse_latency_ms = latency
                .parse()
                .with_context(|| format!("RC_PARSE_LATENCY_MS is not a number: {latency}"))?;
        }

        let port = match var("RC_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("RC_PORT is not a valid port: {port}"))?,
            None => default_port(),
        };

        let max_sessions = match var("RC_MAX_SESSIONS") {
            Some(max) => max
                .parse()
                .with_context(|| format!("RC_MAX_SESSIONS is not a number: {max}"))?,
            None => DEFAULT_MAX_SESSIONS,
        };
        anyhow::ensure!(max_sessions > 0, "RC_MAX_SESSIONS must be at least 1");

        Ok(Self {
            host: var("RC_HOST").unwrap_or_else(default_host),
            port,
            max_sessions,
            engine,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_sessions: DEFAULT_MAX_SESSIONS,
            engine: EngineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_sessions, 1024);
        assert_eq!(config.engine.parse_latency_ms, 0);
    }

    #[test]
    fn no_vars_matches_default() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn vars_override_defaults() {
        let config = from_map(&[
            ("RC_HOST", "127.0.0.1"),
            ("RC_PORT", "8080"),
            ("RC_PARSE_LATENCY_MS", "1000"),
            ("RC_MAX_SESSIONS", "16"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_sessions, 16);
        assert_eq!(config.engine.parse_latency_ms, 1000);
    }

    #[test]
    fn zero_session_cap_is_an_error() {
        assert!(from_map(&[("RC_MAX_SESSIONS", "0")]).is_err());
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(from_map(&[("RC_PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn missing_engine_config_file_is_an_error() {
        assert!(from_map(&[("RC_ENGINE_CONFIG", "/nonexistent/engine.toml")]).is_err());
    }
}
