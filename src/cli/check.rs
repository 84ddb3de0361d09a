use std::process::ExitCode;

use crate::config::GateConfig;
use crate::decision::{self, GateError};
use crate::github::GitHubClient;
use crate::protocol::{EventContext, Outcome};

/// Execute the check subcommand: load the event, run the gate, report the outcome.
///
/// Every runtime error (unreadable event, missing reviewer, API failure)
/// ends as a failed outcome: its full diagnostic goes to stderr, a one-line
/// `::error::` command goes to stdout and the exit status is 1. Skipped and
/// passed runs print nothing on stdout and exit 0.
pub fn run(config: &GateConfig) -> ExitCode {
    let outcome = match execute(config) {
        Ok(outcome) => outcome,
        Err(e) => {
            let message = e.to_string();
            eprintln!("{:?}", miette::Report::new(e));
            Outcome::Failed(message)
        }
    };

    tracing::info!(%outcome, "review gate finished");
    if let Some(command) = outcome.workflow_command() {
        println!("{command}");
    }
    ExitCode::from(outcome.exit_status())
}

fn execute(config: &GateConfig) -> Result<Outcome, GateError> {
    let ctx = EventContext::load(config.event_path(), config.repository())?;
    let reviewers = config.reviewer_source();
    let client = GitHubClient::new(config.client_config());
    decision::check(&ctx, &reviewers, &client)
}
