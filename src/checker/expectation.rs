//! Expectation evaluators for HTTP responses.
//!
//! Each evaluator is a pure predicate. An unset expectation is vacuously
//! satisfied. When an expectation is set, the evaluator logs the actual and
//! expected values before comparing them.

use regex::Regex;
use tracing::{debug, info};

use crate::ui::format::truncate;

/// Number of body characters shown in per-attempt log lines.
pub const BODY_PREVIEW_LEN: usize = 50;

/// Check a response status code against an optional expectation.
pub fn match_status_code(expected: Option<u16>, actual: u16) -> bool {
    let Some(expected) = expected else {
        return true;
    };

    info!(
        actual,
        expect = expected,
        "Checking http response code expectation"
    );

    actual == expected
}

/// Search a response body for an optional pattern.
///
/// The pattern may match anywhere in the body; it is not anchored.
pub fn match_body(pattern: Option<&Regex>, body: &str) -> bool {
    let Some(pattern) = pattern else {
        return true;
    };

    debug!(response = body, "Full response body");
    info!(
        actual = %truncate(body, BODY_PREVIEW_LEN),
        expect = pattern.as_str(),
        "Checking http response body expectation"
    );

    pattern.is_match(body)
}

/// The constraints an HTTP response must satisfy to count as ready.
#[derive(Debug, Clone, Default)]
pub struct HttpExpectations {
    /// Required status code, if any.
    pub status_code: Option<u16>,
    /// Pattern the body must contain, if any.
    pub body: Option<Regex>,
}

impl HttpExpectations {
    /// Whether any response at all is acceptable.
    pub fn is_empty(&self) -> bool {
        self.status_code.is_none() && self.body.is_none()
    }

    /// Evaluate every configured expectation; all must hold.
    pub fn evaluate(&self, status_code: u16, body: &str) -> bool {
        let status_ok = match_status_code(self.status_code, status_code);
        let body_ok = match_body(self.body.as_ref(), body);
        status_ok && body_ok
    }

    /// Describe which expectations a response fails, for user-facing output.
    pub fn describe_mismatch(&self, status_code: u16, body: &str) -> String {
        let mut problems = Vec::new();

        if let Some(expected) = self.status_code {
            if expected != status_code {
                problems.push(format!("status {} (expected {})", status_code, expected));
            }
        }

        if let Some(pattern) = &self.body {
            if !pattern.is_match(body) {
                problems.push(format!(
                    "body \"{}\" does not match /{}/",
                    truncate(body, BODY_PREVIEW_LEN),
                    pattern.as_str()
                ));
            }
        }

        problems.join("; ")
    }
}
