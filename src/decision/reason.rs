use crate::domain::Login;

/// Failure message for a pull request the required reviewer has not approved.
pub(crate) fn not_approved(reviewer: &Login) -> String {
    format!("Reviewer {reviewer} needs to approve the PR")
}
