use std::path::{Path, PathBuf};

use crate::github::{GitHubClientConfig, DEFAULT_API_URL};
use crate::reviewers::{FileReviewerSource, DEFAULT_REVIEWERS_FILE};

/// Settings for one gate run.
///
/// Every value can come from a flag or from the environment GitHub Actions
/// sets up for a step, so the action needs no arguments at all. Action
/// inputs arrive as `INPUT_<NAME>` with the input name upper-cased and its
/// hyphens kept.
#[derive(Debug, Clone, clap::Args)]
pub struct GateConfig {
    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Repository as owner/repo (defaults to the event payload's repository)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Token used to read pull request reviews
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// File holding the login of the required reviewer
    #[arg(long, env = "INPUT_REVIEWERS-FILE", default_value = DEFAULT_REVIEWERS_FILE)]
    pub reviewers_file: PathBuf,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl GateConfig {
    /// The event payload path, ignoring an empty value.
    pub fn event_path(&self) -> Option<&Path> {
        self.event_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// The explicit repository, ignoring a blank value. Parsed when the gate
    /// needs it, so a malformed value only fails pull request runs.
    pub fn repository(&self) -> Option<&str> {
        self.repository
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// The token, ignoring an empty or blank value.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn reviewer_source(&self) -> FileReviewerSource {
        FileReviewerSource::new(&self.reviewers_file)
    }

    pub fn client_config(&self) -> GitHubClientConfig {
        GitHubClientConfig {
            api_url: self.api_url.clone(),
            token: self.token().map(String::from),
        }
    }
}
