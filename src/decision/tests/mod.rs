
use std::cell::Cell;
use std::path::PathBuf;

use crate::domain::{Login, RepoId, ReviewState};
use crate::github::{GitHubError, Review, ReviewService, User};
use crate::protocol::EventContext;
use crate::reviewers::{ReviewerError, ReviewerSource};

fn review(login: &str, state: &str) -> Review {
    Review {
        user: Some(User {
            login: login.to_string(),
        }),
        state: ReviewState::from_token(state),
    }
}

fn ghost_review(state: &str) -> Review {
    Review {
        user: None,
        state: ReviewState::from_token(state),
    }
}

fn login(name: &str) -> Login {
    Login::new(name).expect("test login should be non-empty")
}

fn pr_context(number: u64) -> EventContext {
    let repo: RepoId = "octo-org/widgets".parse().expect("test repo should parse");
    EventContext::new(Some(number), Some(repo))
}

/// Reviewer source with a fixed answer that counts how often it is asked.
struct FixedReviewer {
    login: Option<&'static str>,
    calls: Cell<u32>,
}

impl FixedReviewer {
    fn named(login: &'static str) -> Self {
        FixedReviewer {
            login: Some(login),
            calls: Cell::new(0),
        }
    }

    fn empty() -> Self {
        FixedReviewer {
            login: None,
            calls: Cell::new(0),
        }
    }
}

impl ReviewerSource for FixedReviewer {
    fn required_reviewer(&self) -> Result<Login, ReviewerError> {
        self.calls.set(self.calls.get() + 1);
        self.login
            .and_then(Login::new)
            .ok_or_else(|| ReviewerError::Empty {
                path: PathBuf::from("REVIEWERS"),
            })
    }
}

/// Review service returning canned reviews, or failing, and counting calls.
struct CannedReviews {
    reviews: Option<Vec<Review>>,
    calls: Cell<u32>,
}

impl CannedReviews {
    fn with(reviews: Vec<Review>) -> Self {
        CannedReviews {
            reviews: Some(reviews),
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        CannedReviews {
            reviews: None,
            calls: Cell::new(0),
        }
    }
}

impl ReviewService for CannedReviews {
    fn list_reviews(&self, repo: &RepoId, number: u64) -> Result<Vec<Review>, GitHubError> {
        self.calls.set(self.calls.get() + 1);
        self.reviews.clone().ok_or_else(|| GitHubError::Status {
            status: 500,
            endpoint: format!("/repos/{repo}/pulls/{number}/reviews"),
            message: "Server Error".to_string(),
        })
    }
}
