//! Visual theme and styling.

use console::Style;

/// waitup's visual theme.
#[derive(Debug, Clone)]
pub struct WaitupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for WaitupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitupTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a single attempt line.
    pub fn format_attempt(&self, number: u32, detail: &str) -> String {
        format!(
            "{} {}",
            self.dim.apply_to(format!("[#{}]", number)),
            self.dim.apply_to(detail)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = WaitupTheme::plain();
        let msg = theme.format_success("Ready");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Ready"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = WaitupTheme::plain();
        let msg = theme.format_error("Timed out");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Timed out"));
    }

    #[test]
    fn theme_formats_attempt() {
        let theme = WaitupTheme::plain();
        assert_eq!(
            theme.format_attempt(3, "unreachable: connection refused"),
            "[#3] unreachable: connection refused"
        );
    }

    #[test]
    fn default_impl_matches_new() {
        let default = WaitupTheme::default();
        let new = WaitupTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
