//! Registry - append-ordered list of declared test cases
//!
//! The registry never owns the records: they are `static` items, and it
//! only keeps references to them in registration order.
//!
//! Registration happens single-threaded before the runner starts; the
//! registry is not meant to be mutated while a run iterates over it.

use crate::record::TestCase;

#[derive(Debug, Default)]
pub struct Registry {
    tests: Vec<&'static TestCase>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every test declared with `test_case!` in this binary
    pub fn declared() -> Self {
        let mut registry = Self::new();
        for test in crate::__private::DECLARED_TESTS.iter() {
            registry.register(test);
        }
        tracing::debug!(count = registry.len(), "collected declared tests");
        registry
    }

    /// Append a test case; never reorders or deduplicates
    pub fn register(&mut self, test: &'static TestCase) {
        tracing::trace!(name = test.name, file = test.file, "registered test");
        self.tests.push(test);
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &'static TestCase> + '_ {
        self.tests.iter().copied()
    }
}

impl FromIterator<&'static TestCase> for Registry {
    fn from_iter<I: IntoIterator<Item = &'static TestCase>>(iter: I) -> Self {
        let mut registry = Self::new();
        for test in iter {
            registry.register(test);
        }
        registry
    }
}
