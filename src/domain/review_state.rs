use serde::{Deserialize, Deserializer};

/// The state token carried by a pull request review.
///
/// GitHub documents a handful of states but the set is open-ended, so
/// unrecognised tokens are kept verbatim in [`ReviewState::Other`] rather
/// than failing deserialization of the whole review list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
    Other(String),
}

impl ReviewState {
    /// Map a wire token to a state. Matching is exact: `approved` is not `APPROVED`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "APPROVED" => ReviewState::Approved,
            "CHANGES_REQUESTED" => ReviewState::ChangesRequested,
            "COMMENTED" => ReviewState::Commented,
            "DISMISSED" => ReviewState::Dismissed,
            "PENDING" => ReviewState::Pending,
            other => ReviewState::Other(other.to_string()),
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            ReviewState::Approved => "APPROVED",
            ReviewState::ChangesRequested => "CHANGES_REQUESTED",
            ReviewState::Commented => "COMMENTED",
            ReviewState::Dismissed => "DISMISSED",
            ReviewState::Pending => "PENDING",
            ReviewState::Other(token) => token.as_str(),
        }
    }

    pub fn is_approved(&self) -> bool {
        *self == ReviewState::Approved
    }
}

impl<'de> Deserialize<'de> for ReviewState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(ReviewState::from_token(&token))
    }
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}
