//! Sample harness binary
//!
//! Declares a handful of unit tests across modules and hands control to
//! the mite runner. The `broken_*` tests fail on purpose; select around
//! them with `--filter`, or use `--all` to see the failure count.

mod arith;
mod broken;
mod text;

mite::test_main!();
