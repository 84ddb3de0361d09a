use crate::domain::{Login, ReviewState};
use crate::github::Review;

/// Whether any review was left by `reviewer` in state `APPROVED`.
///
/// Order does not matter: a later `CHANGES_REQUESTED` or `COMMENTED` review
/// by the same person does not cancel an earlier approval, and approvals
/// are not invalidated by new pushes.
pub fn has_approval(reviews: &[Review], reviewer: &Login) -> bool {
    reviews
        .iter()
        .any(|r| r.author_login().is_some_and(|login| reviewer == login) && r.state.is_approved())
}

/// The states of every review `reviewer` has left, in list order.
pub fn states_by<'a>(reviews: &'a [Review], reviewer: &Login) -> Vec<&'a ReviewState> {
    reviews
        .iter()
        .filter(|r| r.author_login().is_some_and(|login| reviewer == login))
        .map(|r| &r.state)
        .collect()
}
