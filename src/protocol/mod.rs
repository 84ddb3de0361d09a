pub mod input;
pub mod output;

pub use input::{EventContext, EventError, EventPayload};
pub use output::Outcome;
