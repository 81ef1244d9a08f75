//! Test runner - iterate, execute, time and report
//!
//! A run walks the registry once, in registration order, on the calling
//! thread. Tests that never return hang the run; there is no timeout.

use crate::error::{HarnessError, HarnessResult, EXIT_FAILURE, EXIT_SUCCESS};
use crate::filter::NameFilter;
use crate::policy::{FailurePolicy, Flow};
use crate::record::{Failure, TestCase, TestResult};
use crate::registry::Registry;
use crate::reporter::Reporter;
use std::io::Write;
use std::panic;
use std::time::{Duration, Instant};

/// Everything one run reads: tests, selection, failure handling
#[derive(Debug, Default)]
pub struct RunContext {
    pub registry: Registry,
    pub filter: NameFilter,
    pub policy: FailurePolicy,
    failure_count: usize,
}

impl RunContext {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: NameFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Failures counted so far under the accumulate policy
    pub fn failure_count(&self) -> usize {
        self.failure_count
    }
}

/// Runner lifecycle; phases only move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Idle,
    Announcing,
    Iterating,
    Reporting,
    Done,
    /// Stopped at the first failure under `StopImmediately`
    Halted,
    /// Empty registry, or nothing accepted by the filter
    NoTests,
}

/// Aggregate result of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Tests accepted by the filter and executed
    pub run: usize,
    /// Failed checks counted by the policy
    pub failed: usize,
    pub elapsed: Duration,
    pub policy: FailurePolicy,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Every accepted test ran and the summary was reported
    Completed(RunSummary),
    /// The named test failed under `StopImmediately`
    Halted { test: &'static str },
    NoTests,
}

impl RunOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Completed(summary) if summary.failed == 0 => EXIT_SUCCESS,
            RunOutcome::Completed(_) | RunOutcome::Halted { .. } | RunOutcome::NoTests => {
                EXIT_FAILURE
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == EXIT_SUCCESS
    }
}

pub struct Runner<W: Write, E: Write> {
    ctx: RunContext,
    reporter: Reporter<W, E>,
    phase: Phase,
}

impl<W: Write, E: Write> Runner<W, E> {
    pub fn new(ctx: RunContext, reporter: Reporter<W, E>) -> Self {
        Self {
            ctx,
            reporter,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Run every accepted test and report the outcome
    ///
    /// A runner runs once; calling `run` again is an error.
    pub fn run(&mut self) -> HarnessResult<RunOutcome> {
        if self.phase != Phase::Idle {
            return Err(HarnessError::RunnerReused(format!("{:?}", self.phase)));
        }
        let started = Instant::now();

        if self.ctx.registry.is_empty() {
            advance(&mut self.phase, Phase::NoTests);
            self.reporter.no_tests(None)?;
            return Ok(RunOutcome::NoTests);
        }

        advance(&mut self.phase, Phase::Announcing);
        self.reporter.started(self.ctx.registry.len())?;

        advance(&mut self.phase, Phase::Iterating);
        let RunContext {
            registry,
            filter,
            policy,
            failure_count,
        } = &mut self.ctx;

        let mut accepted = 0;
        for test in registry.iter() {
            if !filter.matches(test) {
                tracing::trace!(name = test.name, "skipped by filter");
                continue;
            }
            accepted += 1;

            let (result, elapsed) = execute(test);
            match result {
                Ok(()) => self.reporter.test_passed(test, elapsed)?,
                Err(failure) => {
                    self.reporter.failure(test, &failure)?;
                    match policy.on_failure(failure_count) {
                        Flow::Halt => {
                            advance(&mut self.phase, Phase::Halted);
                            return Ok(RunOutcome::Halted { test: test.name });
                        }
                        Flow::Continue => self.reporter.test_failed(test, elapsed)?,
                    }
                }
            }
        }

        if accepted == 0 {
            advance(&mut self.phase, Phase::NoTests);
            self.reporter.no_tests(filter.pattern())?;
            return Ok(RunOutcome::NoTests);
        }

        advance(&mut self.phase, Phase::Reporting);
        let summary = RunSummary {
            run: accepted,
            failed: *failure_count,
            elapsed: started.elapsed(),
            policy: *policy,
        };
        self.reporter.summary(&summary)?;

        advance(&mut self.phase, Phase::Done);
        Ok(RunOutcome::Completed(summary))
    }

    /// Report the accepted tests without running them
    pub fn list(&mut self) -> HarnessResult<usize> {
        let mut count = 0;
        for test in self.ctx.registry.iter() {
            if self.ctx.filter.matches(test) {
                self.reporter.listed(test)?;
                count += 1;
            }
        }
        self.reporter.listed_total(count)?;
        Ok(count)
    }
}

fn advance(phase: &mut Phase, next: Phase) {
    tracing::debug!(from = ?*phase, to = ?next, "runner phase");
    *phase = next;
}

/// Invoke a test body, turning a panic into a failure
fn execute(test: &'static TestCase) -> (TestResult, Duration) {
    tracing::debug!(name = test.name, "running test");
    let start = Instant::now();
    let result = panic::catch_unwind(|| test.invoke())
        .unwrap_or_else(|payload| Err(Failure::from_panic(test, payload.as_ref())));
    let elapsed = start.elapsed();
    tracing::debug!(name = test.name, passed = result.is_ok(), ?elapsed, "test finished");
    (result, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check;
    use std::io;

    fn pass() -> TestResult {
        Ok(())
    }

    fn fail() -> TestResult {
        check!(1 + 1 == 3);
        Ok(())
    }

    fn explode() -> TestResult {
        panic!("kaboom");
    }

    static PASS: TestCase = TestCase::new("pass", "runner.rs", 1, pass);
    static FAIL: TestCase = TestCase::new("fail", "runner.rs", 2, fail);
    static EXPLODE: TestCase = TestCase::new("explode", "runner.rs", 3, explode);

    fn quiet_runner(ctx: RunContext) -> Runner<io::Sink, io::Sink> {
        Runner::new(ctx, Reporter::new(io::sink(), io::sink()))
    }

    #[test]
    fn test_phases_of_a_clean_run() {
        let ctx = RunContext::new([&PASS].into_iter().collect());
        let mut runner = quiet_runner(ctx);
        assert_eq!(runner.phase(), Phase::Idle);

        let outcome = runner.run().unwrap();
        assert_eq!(runner.phase(), Phase::Done);
        assert!(outcome.is_success());
    }

    #[test]
    fn test_second_run_is_rejected() {
        let ctx = RunContext::new([&FAIL, &PASS].into_iter().collect())
            .with_policy(FailurePolicy::AccumulateAndContinue);
        let mut runner = quiet_runner(ctx);

        assert!(matches!(runner.run().unwrap(), RunOutcome::Completed(_)));
        let err = runner.run().unwrap_err();
        assert!(matches!(err, HarnessError::RunnerReused(_)));
        assert_eq!(runner.phase(), Phase::Done);
        assert_eq!(runner.context().failure_count(), 1);
    }

    #[test]
    fn test_second_run_after_halt_is_rejected() {
        let mut runner = quiet_runner(RunContext::new([&FAIL].into_iter().collect()));

        assert_eq!(runner.run().unwrap(), RunOutcome::Halted { test: "fail" });
        assert!(matches!(runner.run(), Err(HarnessError::RunnerReused(_))));
    }

    #[test]
    fn test_empty_registry_is_no_tests() {
        let mut runner = quiet_runner(RunContext::default());
        let outcome = runner.run().unwrap();

        assert_eq!(outcome, RunOutcome::NoTests);
        assert_eq!(runner.phase(), Phase::NoTests);
        assert_eq!(outcome.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_stop_immediately_halts_on_failure() {
        let ctx = RunContext::new([&FAIL, &PASS].into_iter().collect());
        let mut runner = quiet_runner(ctx);

        let outcome = runner.run().unwrap();
        assert_eq!(outcome, RunOutcome::Halted { test: "fail" });
        assert_eq!(runner.phase(), Phase::Halted);
        assert_eq!(runner.context().failure_count(), 0);
        assert_eq!(outcome.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_panic_counts_as_failure() {
        let ctx = RunContext::new([&EXPLODE, &PASS].into_iter().collect())
            .with_policy(FailurePolicy::AccumulateAndContinue);
        let mut runner = quiet_runner(ctx);

        match runner.run().unwrap() {
            RunOutcome::Completed(summary) => {
                assert_eq!(summary.run, 2);
                assert_eq!(summary.failed, 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_execute_reports_failure_location() {
        let (result, _) = execute(&FAIL);
        let failure = result.unwrap_err();
        assert_eq!(failure.message, "`1 + 1 == 3`");
        assert!(failure.file.ends_with("runner.rs"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let summary = |failed| RunSummary {
            run: 2,
            failed,
            elapsed: Duration::ZERO,
            policy: FailurePolicy::AccumulateAndContinue,
        };
        assert_eq!(RunOutcome::Completed(summary(0)).exit_code(), EXIT_SUCCESS);
        assert_eq!(RunOutcome::Completed(summary(1)).exit_code(), EXIT_FAILURE);
        assert_eq!(RunOutcome::NoTests.exit_code(), EXIT_FAILURE);
    }
}
