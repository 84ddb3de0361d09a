//! Resolution of the reviewer whose approval the gate requires.
//!
//! The gate only depends on [`ReviewerSource`]. Today the single
//! implementation reads one login from a `REVIEWERS` file; a resolver that
//! picks owners per changed path can replace it without touching the
//! approval check.

use std::path::{Path, PathBuf};

use crate::domain::Login;

pub const DEFAULT_REVIEWERS_FILE: &str = "REVIEWERS";

/// Errors that can occur when resolving the required reviewer.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReviewerError {
    #[error("No reviewer found in {} file", .path.display())]
    #[diagnostic(
        code(gate::reviewers::empty),
        help("put the login of the required reviewer in the file")
    )]
    Empty { path: PathBuf },
    #[error("failed to read reviewers file {}: {source}", .path.display())]
    #[diagnostic(code(gate::reviewers::read))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can name the reviewer who must approve.
pub trait ReviewerSource {
    fn required_reviewer(&self) -> Result<Login, ReviewerError>;
}

/// Reads the required reviewer from a plain-text file.
///
/// The whole file, trimmed, is one login. There is no per-line or per-path
/// parsing.
#[derive(Debug, Clone)]
pub struct FileReviewerSource {
    path: PathBuf,
}

impl FileReviewerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileReviewerSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileReviewerSource {
    fn default() -> Self {
        FileReviewerSource::new(DEFAULT_REVIEWERS_FILE)
    }
}

impl ReviewerSource for FileReviewerSource {
    fn required_reviewer(&self) -> Result<Login, ReviewerError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| ReviewerError::Unreadable {
                path: self.path.clone(),
                source,
            })?;
        Login::new(&content).ok_or_else(|| ReviewerError::Empty {
            path: self.path.clone(),
        })
    }
}
