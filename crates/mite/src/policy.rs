//! Failure policy - what a failed check does to the rest of the run

use std::fmt;

/// Process-wide reaction to a failed check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Halt the run at the first failure
    #[default]
    StopImmediately,
    /// Count the failure and continue with the next test
    AccumulateAndContinue,
}

/// What the runner does after a failure has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Halt,
    Continue,
}

impl FailurePolicy {
    pub fn from_accumulate_flag(all: bool) -> Self {
        if all {
            Self::AccumulateAndContinue
        } else {
            Self::StopImmediately
        }
    }

    /// Handle one failed check
    ///
    /// `failure_count` is only bumped under `AccumulateAndContinue`; a
    /// halted run never reaches the summary.
    pub fn on_failure(self, failure_count: &mut usize) -> Flow {
        match self {
            Self::StopImmediately => Flow::Halt,
            Self::AccumulateAndContinue => {
                *failure_count += 1;
                Flow::Continue
            }
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopImmediately => write!(f, "stop-immediately"),
            Self::AccumulateAndContinue => write!(f, "accumulate-and-continue"),
        }
    }
}
