pub mod client;
pub mod types;

pub use client::{GitHubClient, GitHubClientConfig, DEFAULT_API_URL};
pub use types::{Review, User};

use crate::domain::RepoId;

/// Errors from talking to the review service.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GitHubError {
    #[error("no GitHub token provided")]
    #[diagnostic(
        code(gate::github::token),
        help("pass the `github-token` input, or --token when running by hand")
    )]
    MissingToken,
    #[error("GitHub rejected the token (401 Unauthorized)")]
    #[diagnostic(code(gate::github::unauthorized))]
    Unauthorized,
    #[error("GitHub resource not found: {endpoint}")]
    #[diagnostic(
        code(gate::github::not_found),
        help("check the repository name and that the token can read pull requests")
    )]
    NotFound { endpoint: String },
    #[error("GitHub request to {endpoint} failed ({status}): {message}")]
    #[diagnostic(code(gate::github::status))]
    Status {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("GitHub request failed: {0}")]
    #[diagnostic(code(gate::github::request))]
    Request(#[from] reqwest::Error),
    #[error("unexpected response from {endpoint}: {source}")]
    #[diagnostic(code(gate::github::decode))]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A service that can list the reviews left on a pull request.
pub trait ReviewService {
    fn list_reviews(&self, repo: &RepoId, number: u64) -> Result<Vec<Review>, GitHubError>;
}
