//! Target and per-attempt settings for the HTTP checker.

use std::time::Duration;

use regex::Regex;
use reqwest::Url;

use crate::checker::expectation::HttpExpectations;
use crate::error::{Result, WaitupError};

/// Default bound on a single probe attempt.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Immutable configuration for probing one HTTP endpoint.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Absolute http(s) URL to request.
    pub address: Url,
    /// Bounds each attempt: connect, redirects and body read.
    pub connection_timeout: Duration,
    /// What a response must look like to count as ready.
    pub expectations: HttpExpectations,
}

impl ProbeConfig {
    /// Validate raw values and build a probe configuration.
    ///
    /// An expected status of `0` and an empty body pattern both mean
    /// "no constraint". The body pattern is compiled here so an invalid
    /// regular expression is reported before polling starts.
    pub fn new(
        address: &str,
        connection_timeout: Duration,
        expect_status_code: Option<u16>,
        expect_body: Option<&str>,
    ) -> Result<Self> {
        let address = parse_address(address)?;

        if connection_timeout.is_zero() {
            return Err(WaitupError::ConfigValidationError {
                message: "connection timeout must be greater than zero".to_string(),
            });
        }

        let status_code = expect_status_code.filter(|code| *code != 0);
        let body = match expect_body.filter(|pattern| !pattern.is_empty()) {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| WaitupError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            address,
            connection_timeout,
            expectations: HttpExpectations { status_code, body },
        })
    }
}

fn parse_address(raw: &str) -> Result<Url> {
    let invalid = |message: String| WaitupError::InvalidAddress {
        address: raw.to_string(),
        message,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme '{}', expected http or https",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}
