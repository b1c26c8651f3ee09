//! Duration parsing for command-line values.

use std::time::Duration;

/// Parse a human-readable duration such as `500ms`, `10s` or `1m30s`.
///
/// A bare integer is read as whole seconds, so `--timeout 30` works too.
/// Intended for use as a clap `value_parser`.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("duration must not be empty".to_string());
    }

    if let Ok(secs) = trimmed.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    humantime::parse_duration(trimmed).map_err(|e| format!("invalid duration '{}': {}", input, e))
}
