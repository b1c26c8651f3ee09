//! Formatting helpers for user-facing and diagnostic output.

use std::time::Duration;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}

/// Shorten `s` to at most `max_chars` characters for display.
///
/// When the text is cut, the last three characters of the limit are given
/// to an ellipsis, so a 100-character body truncated to 50 keeps its first
/// 47 characters. Limits of three or less keep `max_chars` characters and
/// append the ellipsis after them. Counts `char`s, never splitting UTF-8.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let keep = if max_chars > ELLIPSIS.len() {
        max_chars - ELLIPSIS.len()
    } else {
        max_chars
    };

    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
