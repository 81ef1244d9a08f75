//! Test case records and assertion outcomes

use std::any::Any;
use std::fmt;

/// Outcome of a test body: `Err` carries the first failed check.
pub type TestResult = Result<(), Failure>;

/// Static descriptor of one declared test
///
/// Records live in `static` items for the whole life of the process and
/// are never mutated; the [`Registry`](crate::Registry) only keeps
/// references to them.
#[derive(Clone, Copy)]
pub struct TestCase {
    /// Bare test name, unique by convention only
    pub name: &'static str,
    /// Source file the test was declared in
    pub file: &'static str,
    /// Line of the declaration
    pub line: u32,
    /// Test body
    pub entry: fn() -> TestResult,
}

impl TestCase {
    pub const fn new(
        name: &'static str,
        file: &'static str,
        line: u32,
        entry: fn() -> TestResult,
    ) -> Self {
        Self {
            name,
            file,
            line,
            entry,
        }
    }

    /// `file:line` of the declaration
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }

    /// Invoke the test body
    pub fn invoke(&self) -> TestResult {
        (self.entry)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("file", &self.file)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

/// A failed check inside a test body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// File of the failing check
    pub file: &'static str,
    /// Line of the failing check
    pub line: u32,
    /// Human-readable reason
    pub message: String,
}

impl Failure {
    pub fn new(file: &'static str, line: u32, message: impl Into<String>) -> Self {
        Self {
            file,
            line,
            message: message.into(),
        }
    }

    /// Build a failure from a caught panic, located at the test declaration
    pub fn from_panic(test: &TestCase, payload: &(dyn Any + Send)) -> Self {
        let detail = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };

        Self::new(test.file, test.line, format!("panicked: {}", detail))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}
