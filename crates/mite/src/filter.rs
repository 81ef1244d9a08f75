//! Name filter - selects which registered tests the runner executes

use crate::error::{HarnessError, HarnessResult};
use crate::record::TestCase;
use regex::Regex;

/// Accepts every test until a pattern is installed
///
/// At most one pattern may be installed per run. The pattern is compiled
/// eagerly and matched unanchored and case-sensitively against the bare
/// test name.
#[derive(Debug, Default)]
pub struct NameFilter {
    /// Text of the first `install` attempt, valid or not
    source: Option<String>,
    pattern: Option<Regex>,
}

impl NameFilter {
    /// Filter accepting every test
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Compile and install `pattern`
    pub fn install(&mut self, pattern: &str) -> HarnessResult<()> {
        if let Some(first) = &self.source {
            return Err(HarnessError::duplicate_filter(first, pattern));
        }
        self.source = Some(pattern.to_string());

        let compiled =
            Regex::new(pattern).map_err(|e| HarnessError::invalid_pattern(pattern, e))?;
        tracing::debug!(pattern, "installed name filter");
        self.pattern = Some(compiled);
        Ok(())
    }

    /// Installed pattern text, if any
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    pub fn matches(&self, test: &TestCase) -> bool {
        self.matches_name(test.name)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        match &self.pattern {
            Some(re) => re.is_match(name),
            None => true,
        }
    }
}
