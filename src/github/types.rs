use serde::Deserialize;

use crate::domain::ReviewState;

/// A pull request review as returned by `GET /repos/{owner}/{repo}/pulls/{n}/reviews`.
///
/// Only the author and the state are read; every other field is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// `null` for reviews left by accounts that have since been deleted.
    pub user: Option<User>,
    pub state: ReviewState,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
}

impl Review {
    pub fn author_login(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}

/// Error body GitHub sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
