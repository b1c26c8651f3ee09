//! HTTP readiness checker.
//!
//! Issues one GET per attempt and evaluates the response against the
//! configured [`HttpExpectations`](super::HttpExpectations). A single client
//! is reused across attempts so keep-alive connections can be pooled, but
//! every request carries its own timeout.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::build_info;
use crate::config::ProbeConfig;
use crate::error::{Result, WaitupError};

use super::{AttemptOutcome, Checker};

/// Raw result of one HTTP request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A response was received. `body` holds the full body when a body
    /// expectation is configured and is empty otherwise.
    Success { status_code: u16, body: String },

    /// The cycle did not complete (DNS, connect, timeout, TLS, malformed response).
    TransportFailure { cause: String },
}

/// Probes an HTTP endpoint.
pub struct HttpChecker {
    client: Client,
    config: ProbeConfig,
}

impl HttpChecker {
    /// Create a checker for the given configuration.
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(build_info::user_agent())
            .timeout(config.connection_timeout)
            .build()
            .map_err(|e| {
                WaitupError::Other(anyhow::Error::new(e).context("building HTTP client"))
            })?;

        Ok(Self { client, config })
    }

    /// Send one request.
    ///
    /// `budget` bounds the entire request, including redirects and the body
    /// read. The body is only read when a body expectation needs it; a slow
    /// or endless body must not keep an otherwise ready target from being
    /// ready. The response is dropped before returning on every path, which
    /// releases the connection back to the pool or closes it.
    pub fn probe(&self, budget: Duration) -> ProbeOutcome {
        info!(address = %self.config.address, "Checking HTTP connection ...");

        let response = match self
            .client
            .get(self.config.address.clone())
            .timeout(budget)
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                let cause = describe_error(&e);
                debug!(error = %cause, "HTTP request failed");
                return ProbeOutcome::TransportFailure { cause };
            }
        };

        let status_code = response.status().as_u16();

        if self.config.expectations.body.is_none() {
            drop(response);
            return ProbeOutcome::Success {
                status_code,
                body: String::new(),
            };
        }

        match response.text() {
            Ok(body) => ProbeOutcome::Success { status_code, body },
            Err(e) => {
                let cause = describe_error(&e);
                debug!(status_code, error = %cause, "Failed to read HTTP response body");
                ProbeOutcome::TransportFailure { cause }
            }
        }
    }
}

impl Checker for HttpChecker {
    fn name(&self) -> &str {
        "http"
    }

    fn target(&self) -> String {
        self.config.address.to_string()
    }

    fn attempt_timeout(&self) -> Duration {
        self.config.connection_timeout
    }

    fn check(&self, budget: Duration) -> AttemptOutcome {
        match self.probe(budget) {
            ProbeOutcome::Success { status_code, body } => {
                let expectations = &self.config.expectations;
                if expectations.evaluate(status_code, &body) {
                    AttemptOutcome::Ready
                } else {
                    AttemptOutcome::ExpectationMismatch {
                        detail: expectations.describe_mismatch(status_code, &body),
                    }
                }
            }
            ProbeOutcome::TransportFailure { cause } => AttemptOutcome::TransportFailure { cause },
        }
    }
}

/// Flatten a reqwest error and its sources into one line.
///
/// reqwest's own message is usually just "error sending request"; the
/// useful part (connection refused, dns error, ...) sits further down.
fn describe_error(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_redirect() {
        "redirect"
    } else if err.is_body() || err.is_decode() {
        "body"
    } else {
        "request"
    };

    let mut message = format!("{}: {}", kind, err);
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
