//! Readiness checkers.
//!
//! A [`Checker`] performs exactly one readiness attempt against a target and
//! reports an [`AttemptOutcome`]. The poll loop in [`crate::runner`] only sees
//! this trait, so it stays independent of the protocol being probed.
//!
//! # Architecture
//!
//! - [`http`] - HTTP prober ([`HttpChecker`])
//! - [`expectation`] - Status code and body evaluators

pub mod expectation;
pub mod http;

use std::fmt;
use std::time::Duration;

pub use expectation::{match_body, match_status_code, HttpExpectations};
pub use http::{HttpChecker, ProbeOutcome};

/// A target that can be probed for readiness.
pub trait Checker {
    /// Short protocol name used in logs (e.g. "http").
    fn name(&self) -> &str;

    /// Human-readable description of what is being probed.
    fn target(&self) -> String;

    /// Upper bound for a single attempt.
    fn attempt_timeout(&self) -> Duration;

    /// Perform one attempt.
    ///
    /// `budget` is never larger than [`Checker::attempt_timeout`] and may be
    /// smaller when the overall deadline is close. Implementations must not
    /// retry internally.
    fn check(&self, budget: Duration) -> AttemptOutcome;
}

/// Result of a single readiness attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The target answered and met every configured expectation.
    Ready,

    /// The request/response cycle did not complete.
    TransportFailure { cause: String },

    /// The target answered, but not the way the expectations require.
    ExpectationMismatch { detail: String },
}

impl AttemptOutcome {
    /// Whether this attempt ends polling.
    pub fn is_ready(&self) -> bool {
        matches!(self, AttemptOutcome::Ready)
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Ready => write!(f, "ready"),
            AttemptOutcome::TransportFailure { cause } => write!(f, "unreachable: {}", cause),
            AttemptOutcome::ExpectationMismatch { detail } => write!(f, "not ready: {}", detail),
        }
    }
}
