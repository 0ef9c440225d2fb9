use clap::{Parser, Subcommand};

/// Turn free-text cooking instructions into robotic SOP commands.
#[derive(Parser, Debug)]
#[command(name = "rc-cli")]
#[command(version)]
#[command(about = "Robotic recipe engine: instructions in, SOP JSON out.", long_about = None)]
pub struct Cli {
    /// Engine config file (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Simulated parse latency in milliseconds (overrides the config file)
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the categorical fields extracted from an instruction
    Extract {
        /// Cooking instruction text
        text: String,
    },

    /// Generate an SOP payload from an instruction
    Generate {
        /// Cooking instruction text
        text: String,
    },

    /// Generate an SOP, then apply one round of taste feedback
    Optimize {
        /// Cooking instruction text
        text: String,

        /// Taste score (1-10)
        #[arg(short, long, allow_negative_numbers = true)]
        score: i64,

        /// Tasting notes, e.g. "edges slightly burnt"
        #[arg(short, long, default_value = "")]
        notes: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generate() {
        let cli = Cli::try_parse_from(["rc-cli", "generate", "boil on high"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Command::Generate { text } => assert_eq!(text, "boil on high"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_optimize_with_global_config() {
        let cli = Cli::try_parse_from([
            "rc-cli",
            "optimize",
            "saute onions",
            "--score",
            "5",
            "--notes",
            "tastes raw",
            "--config",
            "engine.toml",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("engine.toml"));
        match cli.command {
            Command::Optimize { text, score, notes } => {
                assert_eq!(text, "saute onions");
                assert_eq!(score, 5);
                assert_eq!(notes, "tastes raw");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn optimize_requires_score() {
        assert!(Cli::try_parse_from(["rc-cli", "optimize", "saute onions"]).is_err());
    }

    #[test]
    fn notes_default_to_empty() {
        let cli = Cli::try_parse_from(["rc-cli", "optimize", "boil", "-s", "3"]).unwrap();
        match cli.command {
            Command::Optimize { notes, .. } => assert!(notes.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
