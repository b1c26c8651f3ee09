//! Version command implementation.
//!
//! The `waitup version` command prints version and build information.

use std::io::Write;

use crate::build_info::BuildInfo;
use crate::cli::args::VersionArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand {
    args: VersionArgs,
}

impl VersionCommand {
    /// Create a new version command.
    pub fn new(args: VersionArgs) -> Self {
        Self { args }
    }

    /// Render the build information as the command would print it.
    pub fn render(&self, info: &BuildInfo) -> Result<String> {
        if self.args.json {
            serde_json::to_string_pretty(info).map_err(|e| anyhow::Error::new(e).into())
        } else {
            Ok(info.render())
        }
    }
}

impl Command for VersionCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let output = self.render(&BuildInfo::current())?;
        writeln!(std::io::stdout(), "{}", output)?;
        Ok(CommandResult::success())
    }
}
