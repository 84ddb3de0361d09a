pub mod config;
pub mod decision;
pub mod domain;
pub mod github;
pub mod protocol;
pub mod reviewers;

pub(crate) mod cli;

/// Run the check subcommand: read the event, ask GitHub for reviews, report the outcome.
///
/// Called by `main.rs` once arguments are parsed; returns the status the
/// workflow step should exit with. To run the gate against other reviewer
/// or review sources, call [`decision::evaluate`] with your own
/// [`reviewers::ReviewerSource`] and [`github::ReviewService`].
pub fn run_check(config: &config::GateConfig) -> std::process::ExitCode {
    cli::check::run(config)
}
