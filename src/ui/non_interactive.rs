//! Non-interactive UI for CI/headless environments.
//!
//! No spinner is drawn. Status lines are printed plainly so they read well
//! in build logs; in verbose mode each attempt gets its own line.

use super::theme::WaitupTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            show_status: self.mode.shows_status(),
        })
    }
}

/// Spinner stand-in that only prints the final line.
struct LineSpinner {
    show_status: bool,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.show_status {
            println!("{}", WaitupTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", WaitupTheme::plain().format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn line_spinner_methods() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let mut spinner = ui.start_spinner("waiting");
        spinner.set_message("attempt 2");
        spinner.finish_success("done");
    }

    #[test]
    fn line_spinner_error() {
        let mut spinner = LineSpinner { show_status: true };
        spinner.finish_error("failed");
    }
}
