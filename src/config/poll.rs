//! Deadline and pacing settings for the poll loop.

use std::time::Duration;

use crate::error::{Result, WaitupError};

/// Default overall deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default pause between attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// How long to keep trying and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Overall deadline, measured from the start of the loop.
    pub timeout: Duration,
    /// Fixed pause between consecutive attempts.
    pub interval: Duration,
}

impl PollSettings {
    /// Validate and build poll settings.
    ///
    /// A zero timeout is accepted and means a single attempt. A zero interval
    /// is rejected because the loop would spin without pausing.
    pub fn new(timeout: Duration, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(WaitupError::ConfigValidationError {
                message: "interval must be greater than zero".to_string(),
            });
        }

        Ok(Self { timeout, interval })
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = PollSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.interval, Duration::from_secs(1));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = PollSettings::new(Duration::from_secs(1), Duration::ZERO).unwrap_err();
        assert!(matches!(err, WaitupError::ConfigValidationError { .. }));
    }

    #[test]
    fn zero_timeout_is_accepted() {
        let settings = PollSettings::new(Duration::ZERO, Duration::from_millis(100)).unwrap();
        assert!(settings.timeout.is_zero());
    }
}
