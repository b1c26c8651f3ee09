//! HTTP command implementation.
//!
//! The `waitup http ADDRESS` command waits until an HTTP endpoint answers,
//! optionally with a given status code and a body matching a pattern.

use crate::checker::HttpChecker;
use crate::cli::args::HttpArgs;
use crate::config::{PollSettings, ProbeConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::wait::wait_for;

/// The http command implementation.
pub struct HttpCommand {
    args: HttpArgs,
    settings: PollSettings,
}

impl HttpCommand {
    /// Create a new http command.
    pub fn new(args: HttpArgs, settings: PollSettings) -> Self {
        Self { args, settings }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &HttpArgs {
        &self.args
    }

    /// Build the probe configuration, rejecting invalid input.
    pub fn probe_config(&self) -> Result<ProbeConfig> {
        ProbeConfig::new(
            &self.args.address,
            self.args.connection_timeout,
            self.args.expect_status_code,
            self.args.expect_body.as_deref(),
        )
    }
}

impl Command for HttpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.probe_config()?;

        tracing::debug!(
            address = %config.address,
            expect_status_code = ?config.expectations.status_code,
            expect_body = ?config.expectations.body.as_ref().map(|re| re.as_str()),
            connection_timeout = ?config.connection_timeout,
            "Configured http checker"
        );
        if config.expectations.is_empty() {
            tracing::debug!("No expectations set, any response counts as ready");
        }

        let checker = HttpChecker::new(config)?;
        wait_for(&checker, self.settings, ui)
    }
}
