use std::process::ExitCode;

use clap::{Parser, Subcommand};
use required_reviewer_gate::config::GateConfig;
use tracing_subscriber::EnvFilter;

/// Fail a pull request run until the required reviewer has approved it.
#[derive(Debug, Parser)]
#[command(name = "required-reviewer-gate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the pull request in the current event (reads GitHub Actions environment)
    Check(GateConfig),
}

fn main() -> ExitCode {
    // stdout is reserved for workflow commands; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("required_reviewer_gate=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(config) => required_reviewer_gate::run_check(&config),
    }
}
