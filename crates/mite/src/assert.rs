//! Assertion macros for test bodies
//!
//! A failed check returns early from the enclosing test body with
//! `Err(Failure)`; the rest of the body is abandoned.

/// Check a condition, failing the test when it does not hold.
///
/// `check!(cond)` reports the condition text; `check!(cond, "fmt", args..)`
/// reports a formatted message instead.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err($crate::Failure::new(
                ::core::file!(),
                ::core::line!(),
                ::std::format!("`{}`", ::core::stringify!($cond)),
            ));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return ::core::result::Result::Err($crate::Failure::new(
                ::core::file!(),
                ::core::line!(),
                ::std::format!($($arg)+),
            ));
        }
    };
}

/// Check that two values are equal.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return ::core::result::Result::Err($crate::Failure::new(
                        ::core::file!(),
                        ::core::line!(),
                        ::std::format!("`{:?}` == `{:?}`", left, right),
                    ));
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return ::core::result::Result::Err($crate::Failure::new(
                        ::core::file!(),
                        ::core::line!(),
                        ::std::format!(
                            "`{:?}` == `{:?}`: {}",
                            left,
                            right,
                            ::std::format!($($arg)+)
                        ),
                    ));
                }
            }
        }
    };
}

/// Check that two values differ.
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left == *right {
                    return ::core::result::Result::Err($crate::Failure::new(
                        ::core::file!(),
                        ::core::line!(),
                        ::std::format!("`{:?}` != `{:?}`", left, right),
                    ));
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left == *right {
                    return ::core::result::Result::Err($crate::Failure::new(
                        ::core::file!(),
                        ::core::line!(),
                        ::std::format!(
                            "`{:?}` != `{:?}`: {}",
                            left,
                            right,
                            ::std::format!($($arg)+)
                        ),
                    ));
                }
            }
        }
    };
}
