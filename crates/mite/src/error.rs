//! Harness error types
//!
//! Every error here is a configuration or reporting problem and ends the
//! process with [`EXIT_USAGE`]; test failures are not errors.

use std::io;
use thiserror::Error;

/// All accepted tests passed
pub const EXIT_SUCCESS: u8 = 0;
/// A test failed, or there was nothing to run
pub const EXIT_FAILURE: u8 = 1;
/// Bad flag, bad pattern, duplicate filter or broken output stream
pub const EXIT_USAGE: u8 = 2;

pub type HarnessResult<T> = Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Filter already set to '{first}', refusing second filter '{second}'")]
    DuplicateFilter { first: String, second: String },

    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Error writing test report: {0}")]
    ReportingIo(#[from] io::Error),

    #[error("Runner already left the idle phase ({0}); a runner runs once")]
    RunnerReused(String),

    #[error("Error encoding test report: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl HarnessError {
    /// Create a duplicate filter error
    pub fn duplicate_filter(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::DuplicateFilter {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        EXIT_USAGE
    }
}
