//! Blocking GitHub REST client for the one endpoint the gate needs.

use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;

use super::types::{ApiErrorBody, Review};
use super::{GitHubError, ReviewService};
use crate::domain::RepoId;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size the reviews endpoint accepts.
pub const REVIEWS_PER_PAGE: u32 = 100;

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub API client configuration.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL of the REST API (e.g., `https://api.github.com`).
    pub api_url: String,

    /// Token sent as a bearer credential. Checked when a request is made.
    pub token: Option<String>,
}

/// GitHub API client.
///
/// Construction does no I/O. The underlying HTTP client is built when a
/// request is made.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    config: GitHubClientConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Self {
        Self { config }
    }

    fn http(&self) -> Result<Client, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        Ok(Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Turn a non-2xx response into the matching error.
    fn error_for_status(response: Response, endpoint: &str) -> GitHubError {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => GitHubError::Unauthorized,
            StatusCode::NOT_FOUND => GitHubError::NotFound {
                endpoint: endpoint.to_string(),
            },
            _ => {
                let body = response.text().unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map(|b| b.message)
                    .unwrap_or(body);
                GitHubError::Status {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    message,
                }
            }
        }
    }
}

impl ReviewService for GitHubClient {
    /// Fetch the first page of reviews, at the largest page size.
    ///
    /// One request only. If GitHub reports further pages they are not
    /// fetched; a warning is logged instead.
    fn list_reviews(&self, repo: &RepoId, number: u64) -> Result<Vec<Review>, GitHubError> {
        let token = self
            .config
            .token
            .as_deref()
            .ok_or(GitHubError::MissingToken)?;

        let endpoint = format!(
            "/repos/{}/{}/pulls/{}/reviews",
            repo.owner(),
            repo.name(),
            number
        );
        tracing::debug!(%endpoint, "listing pull request reviews");

        let response = self
            .http()?
            .get(self.api_url(&endpoint))
            .bearer_auth(token)
            .query(&[("per_page", REVIEWS_PER_PAGE)])
            .send()?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response, &endpoint));
        }

        if has_next_page(response.headers()) {
            tracing::warn!(
                %repo,
                pull_request = number,
                "more than {REVIEWS_PER_PAGE} reviews; only the first page is checked"
            );
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|source| GitHubError::Decode { endpoint, source })
    }
}

/// Whether a `Link` header advertises a `rel="next"` page.
fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|link| {
            link.split(';')
                .skip(1)
                .any(|param| param.trim() == r#"rel="next""#)
        })
}
