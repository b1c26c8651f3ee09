//! waitup - wait for a service to become ready.
//!
//! waitup blocks until a target (currently an HTTP endpoint) is available and
//! meets the caller's expectations, or until a deadline passes. The exit code
//! tells shell scripts and orchestration tooling which of the two happened.
//!
//! # Modules
//!
//! - [`build_info`] - Build-time metadata
//! - [`checker`] - The [`Checker`](checker::Checker) trait and the HTTP checker
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Validated probe and poll configuration
//! - [`error`] - Error types and result aliases
//! - [`runner`] - The deadline-bounded poll loop
//! - [`ui`] - Spinner, status lines and formatting
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use waitup::checker::HttpChecker;
//! use waitup::config::{PollSettings, ProbeConfig};
//! use waitup::runner::PollLoop;
//!
//! let config = ProbeConfig::new(
//!     "http://localhost:8080/health",
//!     Duration::from_secs(5),
//!     Some(200),
//!     None,
//! )?;
//! let checker = HttpChecker::new(config)?;
//! let settings = PollSettings::new(Duration::from_secs(30), Duration::from_secs(1))?;
//!
//! let report = PollLoop::new(settings).run(&checker)?;
//! println!("ready after {} attempts", report.attempts);
//! # Ok::<(), waitup::WaitupError>(())
//! ```

pub mod build_info;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

pub use error::{Result, WaitupError};
