/// The terminal result of one gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event is not a pull request; nothing to check.
    Skipped,
    /// The run must fail with this human-readable reason.
    Failed(String),
    /// The required reviewer has approved.
    Passed,
}

impl Outcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Outcome::Failed(reason.into())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Process exit status the host uses to mark the step failed.
    pub fn exit_status(&self) -> u8 {
        if self.is_failure() {
            1
        } else {
            0
        }
    }

    /// The workflow command announcing a failure, if any.
    ///
    /// Success has no explicit signal: Skipped and Passed return `None`.
    pub fn workflow_command(&self) -> Option<String> {
        match self {
            Outcome::Failed(reason) => Some(format!("::error::{}", escape_data(reason))),
            Outcome::Skipped | Outcome::Passed => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Skipped => f.write_str("skipped"),
            Outcome::Failed(reason) => write!(f, "failed: {reason}"),
            Outcome::Passed => f.write_str("passed"),
        }
    }
}

/// Escape workflow command data so multi-line messages stay one command.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
