use std::str::FromStr;

/// Errors from parsing an `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum RepoIdError {
    #[error("repository must look like 'owner/repo', got '{0}'")]
    #[diagnostic(
        code(gate::repository::format),
        help("set GITHUB_REPOSITORY or pass --repository owner/repo")
    )]
    Malformed(String),
}

/// A repository identifier: owner (user or organization) and repository name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Build from already-separated parts.
    ///
    /// Returns an error if either part is empty or contains a `/`.
    pub fn new(owner: &str, name: &str) -> Result<Self, RepoIdError> {
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || owner.contains('/') || name.contains('/') {
            return Err(RepoIdError::Malformed(format!("{owner}/{name}")));
        }
        Ok(RepoId {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoId {
    type Err = RepoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name)) => {
                RepoId::new(owner, name).map_err(|_| RepoIdError::Malformed(s.to_string()))
            }
            None => Err(RepoIdError::Malformed(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
