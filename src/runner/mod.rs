//! Poll loop orchestration.

pub mod poll;

pub use poll::{PollLoop, PollProgress, PollReport, PollState, MIN_ATTEMPT_BUDGET};
