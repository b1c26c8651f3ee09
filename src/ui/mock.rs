//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion, including what happened to any
//! spinner it handed out.
//!
//! # Example
//!
//! ```
//! use waitup::ui::{MockUI, SpinnerStatus, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut spinner = ui.start_spinner("Waiting for http://localhost:8080");
//! spinner.set_message("attempt 2: unreachable");
//! spinner.finish_success("ready");
//!
//! assert_eq!(ui.spinners(), ["Waiting for http://localhost:8080"]);
//! assert_eq!(ui.spinner_status(), Some(SpinnerStatus::Success));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

#[derive(Debug, Default)]
struct SpinnerLog {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    spinner_log: Rc<RefCell<SpinnerLog>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Messages set on spinners after they started.
    pub fn spinner_updates(&self) -> Vec<String> {
        self.spinner_log.borrow().messages.clone()
    }

    /// The message the last spinner finished with.
    pub fn spinner_finish_message(&self) -> Option<String> {
        self.spinner_log.borrow().finish_message.clone()
    }

    /// How the last spinner finished.
    pub fn spinner_status(&self) -> Option<SpinnerStatus> {
        self.spinner_log.borrow().status
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            log: Rc::clone(&self.spinner_log),
        })
    }
}

/// Mock spinner that records into its parent `MockUI`.
struct MockSpinner {
    log: Rc<RefCell<SpinnerLog>>,
}

impl MockSpinner {
    fn finish(&mut self, msg: &str, status: SpinnerStatus) {
        let mut log = self.log.borrow_mut();
        log.finish_message = Some(msg.to_string());
        log.status = Some(status);
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.log.borrow_mut().messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Error);
    }
}
