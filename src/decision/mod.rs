mod approval;
mod reason;

pub use approval::{has_approval, states_by};

use crate::github::{GitHubError, ReviewService};
use crate::protocol::{EventContext, EventError, Outcome};
use crate::reviewers::{ReviewerError, ReviewerSource};

/// Any error that ends a gate run early. Each becomes a failed outcome.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Reviewer(#[from] ReviewerError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    GitHub(#[from] GitHubError),
}

/// Run the gate: decide whether the required reviewer has approved the pull request.
///
/// - No pull request in the event → `Skipped` (nothing else is consulted)
/// - Reviewer source empty or unreadable → `Err`
/// - Review listing fails → `Err`
/// - Some review by the reviewer in state `APPROVED` → `Passed`
/// - Otherwise → `Failed` naming the reviewer
///
/// Makes at most one call to `service`.
pub fn check(
    ctx: &EventContext,
    reviewers: &impl ReviewerSource,
    service: &impl ReviewService,
) -> Result<Outcome, GateError> {
    let Some(number) = ctx.pull_request() else {
        tracing::info!("not a pull request event, skipping");
        return Ok(Outcome::Skipped);
    };

    let reviewer = reviewers.required_reviewer()?;
    let repo = ctx.repository()?;
    tracing::info!(%repo, pull_request = number, %reviewer, "checking for required approval");

    let reviews = service.list_reviews(repo, number)?;
    tracing::debug!(
        reviews = reviews.len(),
        states = ?states_by(&reviews, &reviewer),
        "fetched reviews"
    );

    if has_approval(&reviews, &reviewer) {
        Ok(Outcome::Passed)
    } else {
        Ok(Outcome::Failed(reason::not_approved(&reviewer)))
    }
}

/// [`check`] with every error folded into `Outcome::Failed`.
///
/// # Examples
///
/// ```
/// use required_reviewer_gate::decision::evaluate;
/// use required_reviewer_gate::domain::RepoId;
/// use required_reviewer_gate::github::{GitHubError, Review, ReviewService};
/// use required_reviewer_gate::protocol::{EventContext, Outcome};
/// use required_reviewer_gate::reviewers::FileReviewerSource;
///
/// struct NoReviews;
///
/// impl ReviewService for NoReviews {
///     fn list_reviews(&self, _: &RepoId, _: u64) -> Result<Vec<Review>, GitHubError> {
///         Ok(vec![])
///     }
/// }
///
/// // Not a pull request event → skipped without reading anything
/// let ctx = EventContext::new(None, None);
/// let outcome = evaluate(&ctx, &FileReviewerSource::default(), &NoReviews);
/// assert_eq!(outcome, Outcome::Skipped);
/// ```
pub fn evaluate(
    ctx: &EventContext,
    reviewers: &impl ReviewerSource,
    service: &impl ReviewService,
) -> Outcome {
    check(ctx, reviewers, service).unwrap_or_else(|e| Outcome::Failed(e.to_string()))
}

#[cfg(test)]
mod tests;
