//! Command runner. Each command returns pretty-printed JSON for stdout.

use anyhow::Context;
use rc_engine::{CookingSession, EngineConfig, Feedback, Pipeline};

use crate::cli::{Cli, Command};

/// Resolve the engine config from the CLI flags.
pub fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("failed to load engine config from {path}"))?,
        None => EngineConfig::default(),
    };
    if let Some(latency_ms) = cli.latency_ms {
        config.parse_latency_ms = latency_ms;
    }
    Ok(config)
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let pipeline = Pipeline::from_config(load_config(&cli)?)?;

    let output = match cli.command {
        Command::Extract { text } => {
            let instr = pipeline.extract(&text).await?;
            serde_json::to_string_pretty(&instr)?
        }
        Command::Generate { text } => {
            let payload = pipeline.generate(&text).await?;
            serde_json::to_string_pretty(&payload)?
        }
        Command::Optimize { text, score, notes } => {
            // Validate feedback before paying for the parse.
            let feedback = Feedback::new(score, notes)?;
            let mut session = CookingSession::new();
            session.generate(&pipeline, &text).await?;
            session.optimize(&pipeline, feedback)?;
            let comparison = session
                .comparison()
                .context("optimization produced no comparison")?;
            serde_json::to_string_pretty(&comparison)?
        }
    };
    Ok(output)
}
