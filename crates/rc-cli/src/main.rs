//! rc-cli — generate and optimize robotic cooking SOPs from the terminal.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rc_cli::cli::Cli;
use rc_cli::commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "rc-cli starting");

    let output = commands::run(cli).await?;
    println!("{output}");
    Ok(())
}
