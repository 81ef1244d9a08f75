//! Test reporter - line-oriented run output
//!
//! The report goes to one writer, diagnostics to another. Every line is
//! flushed as soon as it is written; a failed write or flush aborts the
//! run with [`HarnessError::ReportingIo`], since a half-written report
//! can't be trusted.

use crate::error::HarnessResult;
use crate::record::{Failure, TestCase};
use crate::runner::RunSummary;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Output format of the report stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines
    #[default]
    Human,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Started {
        total: usize,
    },
    Test {
        name: &'a str,
        file: &'a str,
        line: u32,
        passed: bool,
        duration_secs: f64,
    },
    Summary {
        run: usize,
        failed: usize,
        policy: String,
        duration_secs: f64,
    },
    Listed {
        name: &'a str,
        file: &'a str,
        line: u32,
    },
}

/// Writes the run report and failure diagnostics
pub struct Reporter<W: Write, E: Write> {
    out: W,
    err: E,
    format: ReportFormat,
    color: bool,
}

impl<W: Write, E: Write> Reporter<W, E> {
    /// Create a reporter with human output and no color
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            format: ReportFormat::Human,
            color: false,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Announce the number of registered (unfiltered) tests
    pub fn started(&mut self, total: usize) -> HarnessResult<()> {
        match self.format {
            ReportFormat::Human => {
                let line = format!("Running {} test case{}:", total, plural(total));
                self.line(&line)
            }
            ReportFormat::Json => self.event(&Event::Started { total }),
        }
    }

    /// Report a test that ran to completion
    pub fn test_passed(&mut self, test: &TestCase, elapsed: Duration) -> HarnessResult<()> {
        self.test_line(test, true, elapsed)
    }

    /// Report a failed test the run continues past
    pub fn test_failed(&mut self, test: &TestCase, elapsed: Duration) -> HarnessResult<()> {
        self.test_line(test, false, elapsed)
    }

    /// Explain a failed check on the diagnostic stream
    pub fn failure(&mut self, test: &TestCase, failure: &Failure) -> HarnessResult<()> {
        let label = self.paint("FAILED", false);
        writeln!(
            self.err,
            "{}: {} [{}:{}]: {}",
            label, test.name, failure.file, failure.line, failure.message
        )?;
        self.err.flush()?;
        Ok(())
    }

    /// Report that there was nothing to run
    pub fn no_tests(&mut self, filter: Option<&str>) -> HarnessResult<()> {
        match filter {
            Some(pattern) => writeln!(self.err, "No test matches filter '{}'.", pattern)?,
            None => writeln!(self.err, "No test to run.")?,
        }
        self.err.flush()?;
        Ok(())
    }

    pub fn summary(&mut self, summary: &RunSummary) -> HarnessResult<()> {
        match self.format {
            ReportFormat::Human => {
                let status = self.paint(
                    if summary.failed == 0 { "ok" } else { "FAILED" },
                    summary.failed == 0,
                );
                let line = format!(
                    "test result: {}. {} run; {} failed; finished in {:.6}s",
                    status,
                    summary.run,
                    summary.failed,
                    summary.elapsed.as_secs_f64()
                );
                self.line(&line)
            }
            ReportFormat::Json => self.event(&Event::Summary {
                run: summary.run,
                failed: summary.failed,
                policy: summary.policy.to_string(),
                duration_secs: summary.elapsed.as_secs_f64(),
            }),
        }
    }

    /// List a selected test without running it
    pub fn listed(&mut self, test: &TestCase) -> HarnessResult<()> {
        match self.format {
            ReportFormat::Human => {
                let line = format!("{}: {}", test.name, test.location());
                self.line(&line)
            }
            ReportFormat::Json => self.event(&Event::Listed {
                name: test.name,
                file: test.file,
                line: test.line,
            }),
        }
    }

    pub fn listed_total(&mut self, count: usize) -> HarnessResult<()> {
        match self.format {
            ReportFormat::Human => {
                let line = format!("{} test{}", count, plural(count));
                self.line(&line)
            }
            ReportFormat::Json => Ok(()),
        }
    }

    fn test_line(&mut self, test: &TestCase, passed: bool, elapsed: Duration) -> HarnessResult<()> {
        match self.format {
            ReportFormat::Human => {
                let label = self.paint(if passed { "passed" } else { "FAILED" }, passed);
                let line = format!(
                    "{}: {} [{}] in {:.6}s",
                    label,
                    test.name,
                    test.location(),
                    elapsed.as_secs_f64()
                );
                self.line(&line)
            }
            ReportFormat::Json => self.event(&Event::Test {
                name: test.name,
                file: test.file,
                line: test.line,
                passed,
                duration_secs: elapsed.as_secs_f64(),
            }),
        }
    }

    fn event(&mut self, event: &Event<'_>) -> HarnessResult<()> {
        let line = serde_json::to_string(event)?;
        self.line(&line)
    }

    fn line(&mut self, line: &str) -> HarnessResult<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    fn paint(&self, text: &str, good: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        if good {
            text.green().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
