//! Shared wait logic for checker commands.
//!
//! Runs the poll loop against a checker while keeping the user informed:
//! a spinner whose message tracks the latest attempt, one line per attempt
//! in verbose mode, and a final ready / timed-out line.

use crate::checker::{AttemptOutcome, Checker};
use crate::config::PollSettings;
use crate::error::{Result, WaitupError, EXIT_TIMED_OUT};
use crate::runner::{PollLoop, PollProgress};
use crate::ui::theme::WaitupTheme;
use crate::ui::{format_duration, UserInterface};

use super::dispatcher::CommandResult;

/// Poll `checker` until it is ready or `settings.timeout` elapses.
///
/// A timeout is reported to the user and turned into a failing
/// [`CommandResult`]; it is not returned as an error.
pub fn wait_for<C: Checker + ?Sized>(
    checker: &C,
    settings: PollSettings,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let target = checker.target();
    let show_attempts = ui.output_mode().shows_attempts();
    let theme = WaitupTheme::plain();

    let mut spinner = ui.start_spinner(&format!("Waiting for {}", target));

    let result = PollLoop::new(settings).run_with_progress(checker, |event| {
        if let PollProgress::AttemptFinished {
            number, outcome, ..
        } = event
        {
            let line = theme.format_attempt(number, &outcome.to_string());
            if !matches!(outcome, AttemptOutcome::Ready) {
                spinner.set_message(&format!("Waiting for {} {}", target, line));
            }
            if show_attempts {
                ui.message(&line);
            }
        }
    });

    match result {
        Ok(report) => {
            spinner.finish_success(&format!(
                "{} is ready ({} {}, {})",
                target,
                report.attempts,
                plural(report.attempts, "attempt", "attempts"),
                format_duration(report.elapsed)
            ));
            Ok(CommandResult::success())
        }
        Err(WaitupError::TimedOut { elapsed, attempts }) => {
            spinner.finish_error(&format!(
                "Timed out waiting for {} after {} ({} {})",
                target,
                format_duration(elapsed),
                attempts,
                plural(attempts, "attempt", "attempts")
            ));
            Ok(CommandResult::failure(EXIT_TIMED_OUT))
        }
        Err(e) => Err(e),
    }
}

fn plural<'a>(n: u32, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
