//! Error construction and wrapping helpers.
//!
//! ## Summary
//! Wrapped errors render as `"<context>: <cause>"` and keep the cause reachable
//! through [`std::error::Error::source`], so callers can still test whether a
//! given error is somewhere in the chain with [`chain_contains`].

use std::error::Error as StdError;

use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Logging setup error: {0}")]
    LoggingError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// An error annotated with leading context text.
///
/// Displays as `"<context>: <source>"` and exposes the wrapped error as its
/// source.
#[derive(Error, Debug)]
#[error("{context}: {source}")]
pub struct Wrapped {
    context: String,
    #[source]
    source: anyhow::Error,
}

impl Wrapped {
    /// The trimmed context text this error was wrapped with.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The wrapped cause.
    #[must_use]
    pub fn inner(&self) -> &anyhow::Error {
        &self.source
    }

    #[must_use]
    pub fn into_inner(self) -> anyhow::Error {
        self.source
    }
}

/// ## Summary
/// Creates a plain error carrying the given text.
#[must_use]
pub fn new_error(text: impl Into<String>) -> anyhow::Error {
    anyhow::Error::msg(text.into())
}

/// Creates an error from a format string and arguments, following the rules
/// of [`std::format!`].
///
/// ```
/// let err = skit_core::format_err!("{} failed with code {}", "operation", 500);
/// assert_eq!(err.to_string(), "operation failed with code 500");
/// ```
#[macro_export]
macro_rules! format_err {
    ($($arg:tt)*) => {
        $crate::error::new_error(::std::format!($($arg)*))
    };
}

/// ## Summary
/// Wraps `err` with leading context text.
///
/// The context is trimmed first. A blank context returns `err` unchanged;
/// otherwise the result displays as `"<context>: <err>"` and `err` stays
/// reachable as its source. The context is used verbatim, never as a format
/// string, so `%` and `{}` are kept literally.
#[must_use]
pub fn wrap<E>(err: E, context: &str) -> anyhow::Error
where
    E: Into<anyhow::Error>,
{
    let err = err.into();
    let context = context.trim();
    if context.is_empty() {
        return err;
    }

    Wrapped {
        context: context.to_owned(),
        source: err,
    }
    .into()
}

/// ## Summary
/// Wraps an optional error. An absent error stays absent.
#[must_use]
pub fn wrap_optional<E>(err: Option<E>, context: &str) -> Option<anyhow::Error>
where
    E: Into<anyhow::Error>,
{
    err.map(|err| wrap(err, context))
}

/// Extension for wrapping the error side of a [`Result`].
pub trait WrapErr<T> {
    /// ## Summary
    /// Wraps the error with `context` as in [`wrap`]; `Ok` values pass through.
    ///
    /// ## Errors
    /// Returns the wrapped error when `self` is `Err`.
    fn wrap_err(self, context: &str) -> anyhow::Result<T>;
}

impl<T, E> WrapErr<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn wrap_err(self, context: &str) -> anyhow::Result<T> {
        self.map_err(|err| wrap(err, context))
    }
}

/// ## Summary
/// Returns `true` if `target` appears anywhere in the source chain of `err`,
/// `err` itself included.
#[must_use]
pub fn chain_contains<E>(err: &anyhow::Error, target: &E) -> bool
where
    E: StdError + PartialEq + 'static,
{
    err.chain()
        .any(|cause| cause.downcast_ref::<E>().is_some_and(|cause| cause == target))
}
