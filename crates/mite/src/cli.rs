//! Command-line interface of harness binaries

use crate::config::EnvConfig;
use crate::error::HarnessResult;
use crate::policy::FailurePolicy;
use crate::reporter::ReportFormat;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Run the unit tests compiled into this binary.
///
/// With no arguments every registered test runs and the first failed
/// check stops the run.
///
/// EXIT STATUS:
///     0    All selected tests passed
///     1    A test failed, or there was no test to run
///     2    Usage or configuration error
///
/// ENVIRONMENT VARIABLES:
///     MITE_FORMAT     Default report format (human or json)
///     MITE_LOG        Log filter, e.g. 'debug' (default: warn)
///     NO_COLOR        Set to disable colored output
#[derive(Parser, Debug)]
#[command(name = "mite")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Run all tests even after failures, then report the failure count
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Only run tests whose name matches PATTERN (regular expression)
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "PATTERN",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub filter: Vec<String>,

    /// List the selected tests without running them
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Resolved settings for one harness invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub policy: FailurePolicy,
    /// Every `--filter` occurrence, in command-line order
    pub filters: Vec<String>,
    pub list: bool,
    pub format: ReportFormat,
    pub color: bool,
}

impl Cli {
    /// Parse arguments; `--help` surfaces as a usage error
    pub fn parse_args<I, T>(args: I) -> HarnessResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    /// Merge flags over the environment defaults
    pub fn settings(self, env: &EnvConfig) -> Settings {
        Settings {
            policy: FailurePolicy::from_accumulate_flag(self.all),
            filters: self.filter,
            list: self.list,
            format: self.format.unwrap_or(env.format),
            color: !(self.no_color || env.no_color),
        }
    }
}
