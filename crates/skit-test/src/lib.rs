//! Assertion helpers for error expectations in tests.
//!
//! Each macro accepts any `Result` whose error converts into
//! [`anyhow::Error`], panics with a descriptive message on mismatch and
//! reports the caller's location. Like [`assert_eq!`], each takes optional
//! trailing format arguments that are prepended to the failure message.
//!
//! ```
//! use skit_test::{assert_error, assert_no_error};
//!
//! assert_no_error!(Ok::<_, std::fmt::Error>(1));
//! assert_error!(Err::<(), _>(std::fmt::Error), "parsing {}", "header");
//! ```

use std::error::Error as StdError;
use std::fmt::{self, Debug};

use skit_core::error::chain_contains;

/// ## Summary
/// Asserts that a result matches the expected error.
///
/// `assert_matches_error!(expected, actual)` with `expected` set to `None`
/// requires `actual` to be `Ok`. Otherwise `actual` must be `Err` and
/// `expected` must appear in its source chain.
///
/// ## Panics
/// Panics if the assertion does not hold.
#[macro_export]
macro_rules! assert_matches_error {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::check_matches_error($expected, $actual, ::core::option::Option::None)
    };
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::check_matches_error(
            $expected,
            $actual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// ## Summary
/// Asserts that a result is `Ok`.
///
/// ## Panics
/// Panics with the error chain if the result is `Err`.
#[macro_export]
macro_rules! assert_no_error {
    ($actual:expr $(,)?) => {
        $crate::check_no_error($actual, ::core::option::Option::None)
    };
    ($actual:expr, $($arg:tt)+) => {
        $crate::check_no_error(
            $actual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// ## Summary
/// Asserts that a result is `Err`.
///
/// ## Panics
/// Panics if the result is `Ok`.
#[macro_export]
macro_rules! assert_error {
    ($actual:expr $(,)?) => {
        $crate::check_error($actual, ::core::option::Option::None)
    };
    ($actual:expr, $($arg:tt)+) => {
        $crate::check_error(
            $actual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[doc(hidden)]
#[track_caller]
pub fn check_matches_error<T, E, X>(
    expected: Option<&X>,
    actual: Result<T, E>,
    msg: Option<fmt::Arguments<'_>>,
) where
    T: Debug,
    E: Into<anyhow::Error>,
    X: StdError + PartialEq + 'static,
{
    let Some(expected) = expected else {
        check_no_error(actual, msg);
        return;
    };

    match actual.map_err(Into::<anyhow::Error>::into) {
        Ok(value) => fail(msg, format_args!("expected error {expected:?}, got Ok({value:?})")),
        Err(err) => {
            if !chain_contains(&err, expected) {
                fail(msg, format_args!("expected {expected:?} in the error chain of {err}"));
            }
        }
    }
}

#[doc(hidden)]
#[track_caller]
pub fn check_no_error<T, E>(actual: Result<T, E>, msg: Option<fmt::Arguments<'_>>)
where
    E: Into<anyhow::Error>,
{
    if let Err(err) = actual {
        let err: anyhow::Error = err.into();
        fail(msg, format_args!("expected no error, got {err}"));
    }
}

#[doc(hidden)]
#[track_caller]
pub fn check_error<T, E>(actual: Result<T, E>, msg: Option<fmt::Arguments<'_>>)
where
    T: Debug,
{
    if let Ok(value) = actual {
        fail(msg, format_args!("expected an error, got Ok({value:?})"));
    }
}

#[track_caller]
fn fail(msg: Option<fmt::Arguments<'_>>, detail: fmt::Arguments<'_>) -> ! {
    match msg {
        Some(msg) => panic!("{msg}: {detail}"),
        None => panic!("{detail}"),
    }
}

#[cfg(test)]
mod tests {
    use skit_core::error::wrap;

    #[derive(thiserror::Error, Debug, PartialEq, Eq)]
    #[error("base error")]
    struct BaseError;

    #[derive(thiserror::Error, Debug, PartialEq, Eq)]
    #[error("other error")]
    struct OtherError;

    #[test]
    fn test_matches_none_with_ok() {
        assert_matches_error!(None::<&BaseError>, Ok::<_, BaseError>(()));
    }

    #[test]
    #[should_panic(expected = "expected no error")]
    fn test_matches_none_with_err() {
        assert_matches_error!(None::<&BaseError>, Err::<(), _>(BaseError));
    }

    #[test]
    fn test_matches_same_error() {
        assert_matches_error!(Some(&BaseError), Err::<(), _>(BaseError));
    }

    #[test]
    fn test_matches_wrapped_error() {
        assert_matches_error!(Some(&BaseError), Err::<(), _>(wrap(BaseError, "context")));
    }

    #[test]
    #[should_panic(expected = "in the error chain")]
    fn test_matches_different_error() {
        assert_matches_error!(Some(&OtherError), Err::<(), _>(BaseError));
    }

    #[test]
    #[should_panic(expected = "got Ok(5)")]
    fn test_matches_expected_but_ok() {
        assert_matches_error!(Some(&BaseError), Ok::<_, BaseError>(5));
    }

    #[test]
    #[should_panic(expected = "loading user 7: expected OtherError in the error chain of base error")]
    fn test_matches_with_message() {
        let id = 7;
        assert_matches_error!(Some(&OtherError), Err::<(), _>(BaseError), "loading user {id}");
    }

    #[test]
    fn test_no_error() {
        assert_no_error!(Ok::<_, BaseError>("value"));
    }

    #[test]
    #[should_panic(expected = "context: base error")]
    fn test_no_error_reports_chain() {
        assert_no_error!(Err::<(), _>(wrap(BaseError, "context")));
    }

    #[test]
    #[should_panic(expected = "saving draft: expected no error, got base error")]
    fn test_no_error_with_message() {
        assert_no_error!(Err::<(), _>(BaseError), "saving {}", "draft");
    }

    #[test]
    fn test_error() {
        assert_error!(Err::<(), _>(BaseError));
    }

    #[test]
    #[should_panic(expected = "expected an error")]
    fn test_error_with_ok() {
        assert_error!(Ok::<_, BaseError>(1));
    }

    #[test]
    #[should_panic(expected = "step 2: expected an error, got Ok(1)")]
    fn test_error_with_message() {
        assert_error!(Ok::<_, BaseError>(1), "step {}", 2);
    }
}
