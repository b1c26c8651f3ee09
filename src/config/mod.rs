//! Configuration for a single waitup invocation.
//!
//! Values arrive already parsed from the command line and are validated
//! eagerly here, before any probe is sent:
//! - Target and per-attempt settings in [`probe`]
//! - Deadline and pacing in [`poll`]
//! - Human-readable duration parsing in [`duration`]
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use waitup::config::{PollSettings, ProbeConfig};
//!
//! let probe = ProbeConfig::new(
//!     "http://localhost:8080/health",
//!     Duration::from_secs(5),
//!     Some(200),
//!     Some("ready"),
//! )
//! .unwrap();
//! assert_eq!(probe.address.host_str(), Some("localhost"));
//!
//! let poll = PollSettings::new(Duration::from_secs(30), Duration::from_secs(1)).unwrap();
//! assert_eq!(poll.interval, Duration::from_secs(1));
//! ```

pub mod duration;
pub mod poll;
pub mod probe;

pub use duration::parse_duration;
pub use poll::{PollSettings, DEFAULT_INTERVAL, DEFAULT_TIMEOUT};
pub use probe::{ProbeConfig, DEFAULT_CONNECTION_TIMEOUT};
