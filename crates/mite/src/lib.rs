//! Mite - a minimal native unit-test harness
//!
//! Test cases are declared anywhere in a binary with [`test_case!`] and
//! land in a link-time table before `main` runs. The harness entry point
//! generated by [`test_main!`] builds a [`Registry`] from that table,
//! applies the command-line [`NameFilter`] and [`FailurePolicy`], and
//! drives the [`Runner`].
//!
//! ```ignore
//! use mite::{check, check_eq, test_case};
//!
//! test_case! {
//!     fn addition() {
//!         check_eq!(1 + 1, 2);
//!         check!(2 > 1, "ordering is broken");
//!     }
//! }
//!
//! mite::test_main!();
//! ```

pub mod assert;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod harness;
pub mod policy;
pub mod record;
pub mod registry;
pub mod reporter;
pub mod runner;

pub use error::{HarnessError, HarnessResult, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
pub use filter::NameFilter;
pub use policy::{FailurePolicy, Flow};
pub use record::{Failure, TestCase, TestResult};
pub use registry::Registry;
pub use reporter::{ReportFormat, Reporter};
pub use runner::{Phase, RunContext, RunOutcome, RunSummary, Runner};

#[doc(hidden)]
pub mod __private {
    pub use linkme;

    use crate::record::TestCase;
    use linkme::distributed_slice;

    /// Every test case declared with `test_case!` in the final binary.
    #[distributed_slice]
    pub static DECLARED_TESTS: [TestCase] = [..];
}

/// Declare a test case and register it before `main` runs.
///
/// The body may use [`check!`], [`check_eq!`] and [`check_ne!`]; a failed
/// check returns early from the body with a [`Failure`].
#[macro_export]
macro_rules! test_case {
    ($(#[$meta:meta])* fn $name:ident() $body:block) => {
        $(#[$meta])*
        fn $name() -> $crate::TestResult {
            #[allow(clippy::let_unit_value)]
            let () = $body;
            ::core::result::Result::Ok(())
        }

        const _: () = {
            #[$crate::__private::linkme::distributed_slice($crate::__private::DECLARED_TESTS)]
            #[linkme(crate = $crate::__private::linkme)]
            static DECLARED: $crate::TestCase = $crate::TestCase::new(
                ::core::stringify!($name),
                ::core::file!(),
                ::core::line!(),
                $name,
            );
        };
    };
}

/// Generate the `main` function of a test harness binary.
#[macro_export]
macro_rules! test_main {
    () => {
        fn main() -> ::std::process::ExitCode {
            $crate::harness::main()
        }
    };
}
