//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Checker commands (`waitup http`)
//! build their checker and hand it to [`wait::wait_for`], which owns the
//! poll loop and the progress display.

pub mod completions;
pub mod dispatcher;
pub mod http;
pub mod version;
pub mod wait;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
