pub mod login;
pub mod repo;
pub mod review_state;

pub use login::Login;
pub use repo::{RepoId, RepoIdError};
pub use review_state::ReviewState;
