//! Progress spinner shown while waiting.
//!
//! Every visible spinner is drawn through one shared [`MultiProgress`], so
//! anything else that writes to the terminal while a spinner is ticking
//! (status lines, `tracing` output) can clear it first with [`suspend`].

use console::Term;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::LazyLock;
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

use super::theme::WaitupTheme;
use super::SpinnerHandle;

static PROGRESS: LazyLock<MultiProgress> = LazyLock::new(MultiProgress::new);

/// Run `f` with every active spinner cleared from the terminal.
pub fn suspend<R>(f: impl FnOnce() -> R) -> R {
    PROGRESS.suspend(f)
}

/// stderr writer for `tracing` that keeps log lines from tearing spinners.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinnerAwareStderr;

impl Write for SpinnerAwareStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        suspend(|| io::stderr().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        suspend(|| io::stderr().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for SpinnerAwareStderr {
    type Writer = SpinnerAwareStderr;

    fn make_writer(&'a self) -> Self::Writer {
        *self
    }
}

/// A progress spinner for the poll loop.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: WaitupTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: WaitupTheme) -> Self {
        let bar = PROGRESS.add(ProgressBar::new_spinner());
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                .template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't show.
    ///
    /// Errors it finishes with are still written to stderr.
    pub fn hidden(theme: WaitupTheme) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme,
        }
    }

    fn finish_with(&mut self, line: String) {
        self.bar.set_style(ProgressStyle::with_template("{msg}").unwrap_or_else(|_| {
            ProgressStyle::default_spinner()
        }));
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        if self.bar.is_hidden() {
            Term::stderr().write_line(&line).ok();
        }
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner() {
        let spinner = ProgressSpinner::hidden(WaitupTheme::plain());
        assert!(spinner.bar.is_hidden());
    }

    #[test]
    fn hidden_spinner_keeps_last_message() {
        let mut spinner = ProgressSpinner::hidden(WaitupTheme::plain());
        spinner.set_message("attempt 2");
        assert_eq!(spinner.bar.message(), "attempt 2");
    }

    #[test]
    fn spinner_finish_success() {
        let mut spinner = ProgressSpinner::hidden(WaitupTheme::plain());
        spinner.finish_success("ready");
        assert!(spinner.bar.is_finished());
        assert!(spinner.bar.message().contains("ready"));
    }

    #[test]
    fn hidden_spinner_finish_error() {
        let mut spinner = ProgressSpinner::hidden(WaitupTheme::plain());
        spinner.finish_error("timed out");
        assert!(spinner.bar.is_finished());
        assert!(spinner.bar.message().contains("✗ timed out"));
    }

    #[test]
    fn suspend_returns_closure_result() {
        assert_eq!(suspend(|| 42), 42);
    }

    #[test]
    fn log_writer_accepts_whole_lines() {
        let mut writer = SpinnerAwareStderr.make_writer();
        writer.write_all(b"waitup test log line\n").unwrap();
        writer.flush().unwrap();
    }
}
