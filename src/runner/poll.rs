//! Deadline-bounded polling of a [`Checker`].
//!
//! The loop issues one attempt at a time. After a failed attempt it pauses
//! for the configured interval, or until the deadline, whichever comes first.
//! The deadline is wall-clock time since the loop started; the number of
//! attempts is never limited.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::checker::{AttemptOutcome, Checker};
use crate::config::PollSettings;
use crate::error::{Result, WaitupError};

/// Smallest time an attempt is given, even when the deadline is closer.
///
/// Without a floor, the first attempt under a zero timeout could never
/// complete.
pub const MIN_ATTEMPT_BUDGET: Duration = Duration::from_millis(100);

/// Where the poll loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Still attempting.
    Running,
    /// An attempt met every expectation.
    Succeeded,
    /// The deadline passed first.
    TimedOut,
}

impl PollState {
    /// Whether the loop has stopped.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Running)
    }
}

/// Progress events emitted while polling.
#[derive(Debug)]
pub enum PollProgress<'a> {
    /// An attempt is about to be made.
    AttemptStarted { number: u32, budget: Duration },
    /// An attempt finished.
    AttemptFinished {
        number: u32,
        outcome: &'a AttemptOutcome,
        elapsed: Duration,
    },
    /// The loop is pausing before the next attempt.
    Waiting { pause: Duration },
    /// The loop reached a terminal state.
    Finished { state: PollState },
}

/// Summary of a finished poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    /// Terminal state.
    pub state: PollState,
    /// Attempts made, including the last one.
    pub attempts: u32,
    /// Wall-clock time from start to finish.
    pub elapsed: Duration,
}

/// Repeatedly checks a target until it is ready or the deadline passes.
#[derive(Debug, Clone)]
pub struct PollLoop {
    settings: PollSettings,
}

impl PollLoop {
    /// Create a poll loop.
    pub fn new(settings: PollSettings) -> Self {
        Self { settings }
    }

    /// Poll until ready.
    ///
    /// Returns [`WaitupError::TimedOut`] if the deadline passes first.
    pub fn run<C: Checker + ?Sized>(&self, checker: &C) -> Result<PollReport> {
        self.run_with_progress(checker, |_| {})
    }

    /// Poll until ready, reporting each step to `on_progress`.
    pub fn run_with_progress<C: Checker + ?Sized>(
        &self,
        checker: &C,
        mut on_progress: impl FnMut(PollProgress<'_>),
    ) -> Result<PollReport> {
        let report = self.drive(checker, &mut on_progress);
        on_progress(PollProgress::Finished {
            state: report.state,
        });

        match report.state {
            PollState::Succeeded => {
                info!(
                    attempts = report.attempts,
                    elapsed = ?report.elapsed,
                    "{} target is ready",
                    checker.name()
                );
                Ok(report)
            }
            _ => {
                warn!(
                    attempts = report.attempts,
                    elapsed = ?report.elapsed,
                    "Timed out waiting for {}",
                    checker.target()
                );
                Err(WaitupError::TimedOut {
                    elapsed: report.elapsed,
                    attempts: report.attempts,
                })
            }
        }
    }

    fn drive<C: Checker + ?Sized>(
        &self,
        checker: &C,
        on_progress: &mut impl FnMut(PollProgress<'_>),
    ) -> PollReport {
        let start = Instant::now();
        // None only for timeouts too large to represent, i.e. no deadline.
        let deadline = start.checked_add(self.settings.timeout);
        let mut attempts = 0u32;
        let mut state = PollState::Running;

        debug!(
            checker = checker.name(),
            target = %checker.target(),
            timeout = ?self.settings.timeout,
            interval = ?self.settings.interval,
            "Starting poll loop"
        );

        while !state.is_terminal() {
            attempts = next_attempt(attempts);

            let budget = attempt_budget(checker.attempt_timeout(), remaining(deadline));
            on_progress(PollProgress::AttemptStarted {
                number: attempts,
                budget,
            });

            let outcome = checker.check(budget);
            on_progress(PollProgress::AttemptFinished {
                number: attempts,
                outcome: &outcome,
                elapsed: start.elapsed(),
            });

            state = match outcome {
                AttemptOutcome::Ready => PollState::Succeeded,
                AttemptOutcome::TransportFailure { ref cause } => {
                    debug!(attempt = attempts, %cause, "Target unreachable");
                    self.pause(deadline, on_progress)
                }
                AttemptOutcome::ExpectationMismatch { ref detail } => {
                    debug!(attempt = attempts, %detail, "Expectation not met");
                    self.pause(deadline, on_progress)
                }
            };
        }

        PollReport {
            state,
            attempts,
            elapsed: start.elapsed(),
        }
    }

    /// Sleep until the next attempt is due or the deadline passes.
    fn pause(
        &self,
        deadline: Option<Instant>,
        on_progress: &mut impl FnMut(PollProgress<'_>),
    ) -> PollState {
        let pause = match remaining(deadline) {
            Some(left) if left.is_zero() => return PollState::TimedOut,
            Some(left) => self.settings.interval.min(left),
            None => self.settings.interval,
        };

        on_progress(PollProgress::Waiting { pause });
        thread::sleep(pause);

        match remaining(deadline) {
            Some(left) if left.is_zero() => PollState::TimedOut,
            _ => PollState::Running,
        }
    }
}

/// Attempt counter step; sticks at `u32::MAX` instead of overflowing.
fn next_attempt(attempts: u32) -> u32 {
    attempts.saturating_add(1)
}

fn remaining(deadline: Option<Instant>) -> Option<Duration> {
    deadline.map(|d| d.saturating_duration_since(Instant::now()))
}

fn attempt_budget(attempt_timeout: Duration, remaining: Option<Duration>) -> Duration {
    match remaining {
        Some(left) => attempt_timeout.min(left.max(MIN_ATTEMPT_BUDGET)),
        None => attempt_timeout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays a fixed list of outcomes, then reports `fallback` forever.
    struct ScriptedChecker {
        script: RefCell<VecDeque<AttemptOutcome>>,
        fallback: AttemptOutcome,
        attempt_timeout: Duration,
        delay: Duration,
        calls: RefCell<Vec<(Instant, Duration)>>,
    }

    impl ScriptedChecker {
        fn new(script: Vec<AttemptOutcome>, fallback: AttemptOutcome) -> Self {
            Self {
                script: RefCell::new(script.into()),
                fallback,
                attempt_timeout: Duration::from_secs(5),
                delay: Duration::ZERO,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn always(outcome: AttemptOutcome) -> Self {
            Self::new(Vec::new(), outcome)
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Checker for ScriptedChecker {
        fn name(&self) -> &str {
            "scripted"
        }

        fn target(&self) -> String {
            "scripted://target".to_string()
        }

        fn attempt_timeout(&self) -> Duration {
            self.attempt_timeout
        }

        fn check(&self, budget: Duration) -> AttemptOutcome {
            self.calls.borrow_mut().push((Instant::now(), budget));
            if !self.delay.is_zero() {
                thread::sleep(self.delay.min(budget));
            }
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone())
        }
    }

    fn refused() -> AttemptOutcome {
        AttemptOutcome::TransportFailure {
            cause: "connect: connection refused".to_string(),
        }
    }

    fn mismatch() -> AttemptOutcome {
        AttemptOutcome::ExpectationMismatch {
            detail: "status 503 (expected 200)".to_string(),
        }
    }

    fn settings(timeout_ms: u64, interval_ms: u64) -> PollSettings {
        PollSettings::new(
            Duration::from_millis(timeout_ms),
            Duration::from_millis(interval_ms),
        )
        .unwrap()
    }

    #[test]
    fn first_ready_attempt_ends_polling() {
        let checker = ScriptedChecker::always(AttemptOutcome::Ready);
        let report = PollLoop::new(settings(1_000, 50)).run(&checker).unwrap();

        assert_eq!(report.state, PollState::Succeeded);
        assert_eq!(report.attempts, 1);
        assert_eq!(checker.call_count(), 1);
        assert!(report.elapsed < Duration::from_millis(50));
    }

    #[test]
    fn retries_transport_failures_until_ready() {
        let checker = ScriptedChecker::new(
            vec![refused(), refused(), refused()],
            AttemptOutcome::Ready,
        );
        let report = PollLoop::new(settings(2_000, 40)).run(&checker).unwrap();

        assert_eq!(report.attempts, 4);
        assert_eq!(checker.call_count(), 4);

        let calls = checker.calls.borrow();
        for pair in calls.windows(2) {
            let gap = pair[1].0.duration_since(pair[0].0);
            assert!(gap >= Duration::from_millis(40), "gap was {:?}", gap);
            assert!(gap < Duration::from_millis(400), "gap was {:?}", gap);
        }
    }

    #[test]
    fn expectation_mismatch_is_retried_like_transport_failure() {
        let checker = ScriptedChecker::new(vec![mismatch(), refused()], AttemptOutcome::Ready);
        let report = PollLoop::new(settings(2_000, 20)).run(&checker).unwrap();
        assert_eq!(report.attempts, 3);
    }

    #[test]
    fn deadline_shorter_than_interval_allows_one_attempt() {
        let checker = ScriptedChecker::always(refused());
        let start = Instant::now();
        let err = PollLoop::new(settings(150, 5_000))
            .run(&checker)
            .unwrap_err();
        let elapsed = start.elapsed();

        assert!(matches!(err, WaitupError::TimedOut { attempts: 1, .. }));
        assert_eq!(checker.call_count(), 1);
        assert!(elapsed >= Duration::from_millis(150));
        assert!(elapsed < Duration::from_millis(1_000), "took {:?}", elapsed);
    }

    #[test]
    fn times_out_when_never_ready() {
        let checker = ScriptedChecker::always(mismatch());
        let err = PollLoop::new(settings(200, 30)).run(&checker).unwrap_err();

        match err {
            WaitupError::TimedOut { elapsed, attempts } => {
                assert!(elapsed >= Duration::from_millis(200));
                assert!(attempts >= 2);
                assert_eq!(attempts as usize, checker.call_count());
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn attempt_budget_is_clamped_to_deadline() {
        let checker = ScriptedChecker::always(refused()).with_delay(Duration::from_secs(5));
        let start = Instant::now();
        let err = PollLoop::new(settings(300, 1_000)).run(&checker).unwrap_err();

        assert!(err.is_timeout());
        assert!(start.elapsed() < Duration::from_secs(2));
        let (_, budget) = checker.calls.borrow()[0];
        assert!(budget <= Duration::from_millis(300));
    }

    #[test]
    fn zero_timeout_still_makes_one_attempt() {
        let checker = ScriptedChecker::always(AttemptOutcome::Ready);
        let settings = PollSettings::new(Duration::ZERO, Duration::from_millis(10)).unwrap();
        let report = PollLoop::new(settings).run(&checker).unwrap();

        assert_eq!(report.attempts, 1);
        let (_, budget) = checker.calls.borrow()[0];
        assert_eq!(budget, MIN_ATTEMPT_BUDGET);
    }

    #[test]
    fn zero_timeout_gives_up_after_one_failure() {
        let checker = ScriptedChecker::always(refused());
        let settings = PollSettings::new(Duration::ZERO, Duration::from_millis(10)).unwrap();
        let err = PollLoop::new(settings).run(&checker).unwrap_err();

        assert!(matches!(err, WaitupError::TimedOut { attempts: 1, .. }));
    }

    #[test]
    fn ready_after_deadline_still_succeeds() {
        // The attempt started in time; its result is honoured.
        let checker =
            ScriptedChecker::always(AttemptOutcome::Ready).with_delay(Duration::from_millis(150));
        let settings = PollSettings::new(Duration::ZERO, Duration::from_millis(10)).unwrap();
        assert!(PollLoop::new(settings).run(&checker).is_ok());
    }

    #[test]
    fn reports_progress_in_order() {
        let checker = ScriptedChecker::new(vec![refused()], AttemptOutcome::Ready);
        let mut events = Vec::new();

        PollLoop::new(settings(1_000, 10))
            .run_with_progress(&checker, |event| {
                events.push(match event {
                    PollProgress::AttemptStarted { number, .. } => format!("start {}", number),
                    PollProgress::AttemptFinished {
                        number, outcome, ..
                    } => format!("finish {} {}", number, outcome.is_ready()),
                    PollProgress::Waiting { .. } => "wait".to_string(),
                    PollProgress::Finished { state } => format!("done {:?}", state),
                });
            })
            .unwrap();

        assert_eq!(
            events,
            vec![
                "start 1",
                "finish 1 false",
                "wait",
                "start 2",
                "finish 2 true",
                "done Succeeded",
            ]
        );
    }

    #[test]
    fn works_through_trait_object() {
        let checker = ScriptedChecker::always(AttemptOutcome::Ready);
        let dynamic: &dyn Checker = &checker;
        assert!(PollLoop::new(PollSettings::default()).run(dynamic).is_ok());
    }

    #[test]
    fn terminal_states() {
        assert!(!PollState::Running.is_terminal());
        assert!(PollState::Succeeded.is_terminal());
        assert!(PollState::TimedOut.is_terminal());
    }

    #[test]
    fn attempt_counter_saturates() {
        assert_eq!(next_attempt(0), 1);
        assert_eq!(next_attempt(41), 42);
        assert_eq!(next_attempt(u32::MAX), u32::MAX);
    }

    #[test]
    fn budget_prefers_smaller_of_timeout_and_remaining() {
        let five = Duration::from_secs(5);
        assert_eq!(attempt_budget(five, None), five);
        assert_eq!(
            attempt_budget(five, Some(Duration::from_secs(1))),
            Duration::from_secs(1)
        );
        assert_eq!(attempt_budget(five, Some(Duration::ZERO)), MIN_ATTEMPT_BUDGET);
        assert_eq!(
            attempt_budget(Duration::from_millis(20), Some(Duration::ZERO)),
            Duration::from_millis(20)
        );
    }
}
