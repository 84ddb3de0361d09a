use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::domain::{RepoId, RepoIdError};

/// The subset of a GitHub Actions event payload the gate reads.
///
/// Every field is optional and read leniently: the same binary runs on any
/// trigger, only pull request events carry `pull_request`, and a field of an
/// unexpected type reads as absent. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub pull_request: Option<PullRequestRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<RepositoryRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PullRequestRef {
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RepositoryRef {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub owner: Option<OwnerRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OwnerRef {
    #[serde(default, deserialize_with = "lenient")]
    pub login: Option<String>,
}

impl RepositoryRef {
    fn repo_id(&self) -> Option<RepoId> {
        let owner = self.owner.as_ref()?.login.as_deref()?;
        RepoId::new(owner, self.name.as_deref()?).ok()
    }
}

/// Deserialize a field, reading a value of the wrong shape as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Errors raised while building or querying an [`EventContext`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EventError {
    #[error("failed to read event payload {}: {source}", .path.display())]
    #[diagnostic(code(gate::event::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("event payload {} is not valid JSON: {source}", .path.display())]
    #[diagnostic(code(gate::event::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Repository(#[from] RepoIdError),
    #[error("could not determine the repository: set GITHUB_REPOSITORY like 'owner/repo'")]
    #[diagnostic(
        code(gate::event::repository),
        help("pass --repository owner/repo when running outside GitHub Actions")
    )]
    MissingRepository,
}

/// Read-only view of the triggering event, passed explicitly to the gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventContext {
    pull_request: Option<u64>,
    repository: Option<Result<RepoId, RepoIdError>>,
}

impl EventContext {
    pub fn new(pull_request: Option<u64>, repository: Option<RepoId>) -> Self {
        EventContext {
            pull_request: pull_request.filter(|n| *n != 0),
            repository: repository.map(Ok),
        }
    }

    /// Load the payload at `event_path` and combine it with an explicit repository.
    ///
    /// A missing path (not configured, or no file on disk) yields an empty
    /// payload: the run is then a non-PR event and skips. A file that exists
    /// but cannot be read, or is not JSON, is an error.
    pub fn load(event_path: Option<&Path>, repository: Option<&str>) -> Result<Self, EventError> {
        let payload = match event_path {
            Some(path) => read_payload(path)?,
            None => {
                tracing::warn!("no event payload path configured; treating as an empty event");
                EventPayload::default()
            }
        };
        Ok(Self::from_payload(&payload, repository))
    }

    /// Build a context from a parsed payload.
    ///
    /// A non-blank explicit `repository` wins and is only parsed once the
    /// repository is asked for, so a malformed value fails pull request runs
    /// but not skipped ones. Otherwise the payload's `repository` object is
    /// used when it names a valid owner and repository.
    pub fn from_payload(payload: &EventPayload, repository: Option<&str>) -> Self {
        let explicit = repository
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::parse::<RepoId>);
        let repository = explicit.or_else(|| {
            payload
                .repository
                .as_ref()
                .and_then(RepositoryRef::repo_id)
                .map(Ok)
        });
        EventContext {
            pull_request: payload
                .pull_request
                .as_ref()
                .and_then(|pr| pr.number)
                .filter(|n| *n != 0),
            repository,
        }
    }

    /// The pull request number, or `None` for non-PR events.
    pub fn pull_request(&self) -> Option<u64> {
        self.pull_request
    }

    /// The repository the event belongs to.
    ///
    /// Resolved lazily so that events which skip never fail on it.
    pub fn repository(&self) -> Result<&RepoId, EventError> {
        match &self.repository {
            Some(Ok(repo)) => Ok(repo),
            Some(Err(e)) => Err(e.clone().into()),
            None => Err(EventError::MissingRepository),
        }
    }
}

fn read_payload(path: &Path) -> Result<EventPayload, EventError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "event payload does not exist; treating as an empty event");
            return Ok(EventPayload::default());
        }
        Err(source) => {
            return Err(EventError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| EventError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    match serde_json::from_value(value) {
        Ok(payload) => Ok(payload),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "event payload is not an object; treating as an empty event"
            );
            Ok(EventPayload::default())
        }
    }
}
