//! Result type and its combinators for Railway-Oriented Programming.
//!
//! A [`Result`] is exactly one of a success value or an [`Error`] identity.
//! Callers branch with `match`, thread work through the Ok track with
//! [`Result::map`] / [`Result::chain`], or eliminate with [`Result::fold`],
//! [`Result::get_or`] and friends. [`Result::unwrap`] and [`Result::expect`]
//! are the deliberate escape hatch: on an Error they terminate the process,
//! naming the caller's file and line.

use std::fmt;
use std::panic::Location;

use crate::error::{self, Error};
use crate::panic;
use crate::view::ResultView;

/// An owned success value or an error identity.
///
/// The Result carries the value, it does not decide how it is released;
/// whatever owns the Result owns the value.
///
/// # Examples
///
/// ```
/// use railcall_core::{Error, Result};
///
/// const NEGATIVE: Error = Error::new("Negative", "Value is negative");
///
/// fn checked(n: i64) -> Result<i64> {
///     if n < 0 { Result::error(NEGATIVE) } else { Result::ok(n) }
/// }
///
/// let doubled = checked(21).map(|n| Result::ok(n * 2));
/// assert_eq!(doubled.get_or(0), 42);
///
/// let failed = checked(-1).chain(|n| Result::ok(n * 2));
/// assert_eq!(failed.inspect(), NEGATIVE);
/// assert_eq!(failed.explain(), "Value is negative");
/// ```
#[must_use = "this `Result` may be an error, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T> {
    Ok(T),
    Error(Error),
}

impl<T> Result<T> {
    /// Wrap a success value.
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Wrap a failure.
    ///
    /// Passing [`error::OK`] is a programming error and trips a debug
    /// assertion.
    pub fn error(error: Error) -> Self {
        debug_assert!(
            !error.is_ok(),
            "Result::error called with the Ok identity"
        );
        Self::Error(error)
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Apply `f` to the Ok value. `f` returns a Result itself, so it may
    /// switch the pipeline onto the Error track. An Error passes through and
    /// `f` is never called.
    pub fn map<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Same as [`Result::map`]; reads better in multi-step pipelines.
    pub fn chain<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        self.map(f)
    }

    /// `self` if Ok, otherwise `other`. `other` is already evaluated.
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Ok(_) => self,
            Self::Error(_) => other,
        }
    }

    /// Eliminate the Result; exactly one of the two functions runs.
    pub fn fold<R, E, F>(self, when_error: E, when_ok: F) -> R
    where
        E: FnOnce(Error) -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Ok(value) => when_ok(value),
            Self::Error(error) => when_error(error),
        }
    }

    /// The Ok value, or `default`.
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => default,
        }
    }

    /// The Ok value, or whatever `supplier` produces. `supplier` only runs
    /// on the Error track.
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => supplier(),
        }
    }

    /// The error identity, [`error::OK`] on success.
    pub const fn inspect(&self) -> Error {
        match self {
            Self::Ok(_) => error::OK,
            Self::Error(error) => *error,
        }
    }

    /// The message of [`Result::inspect`].
    #[must_use]
    pub const fn explain(&self) -> &'static str {
        self.inspect().message()
    }

    /// The Ok value.
    ///
    /// On an Error this aborts the process with `Error: <message>.`, tagged
    /// with the caller's source location. Prefer `match` or a combinator.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => panic::terminate_at(
                Location::caller(),
                format_args!("Error: {}.", error.message()),
            ),
        }
    }

    /// Like [`Result::unwrap`], but aborts with `message` instead of the
    /// error's own explanation. Use `format_args!` for formatted text.
    #[track_caller]
    pub fn expect<M>(self, message: M) -> T
    where
        M: fmt::Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => panic::terminate_at(Location::caller(), format_args!("{message}")),
        }
    }

    /// Borrow as a read-only [`ResultView`]. Nothing is copied.
    pub const fn as_view(&self) -> ResultView<'_, T> {
        match self {
            Self::Ok(value) => ResultView::Ok(value),
            Self::Error(error) => ResultView::Error(*error),
        }
    }

    /// Convert to the standard library Result so `?` can be used.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error identity if this is an Error.
    pub fn into_std(self) -> std::result::Result<T, Error> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }

    /// Drop the error, keeping only the value.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Convert to an Option, logging the error if present.
    pub fn into_option_logged(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(error) => {
                tracing::error!(error = error.name(), "Operation failed: {}", error);
                None
            }
        }
    }

    /// Get the value or a default, logging the error if present.
    pub fn get_or_logged(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => {
                tracing::error!(
                    error = error.name(),
                    "Operation failed, using default: {}",
                    error
                );
                default
            }
        }
    }
}

impl<T> From<std::result::Result<T, Error>> for Result<T> {
    fn from(result: std::result::Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::error(error),
        }
    }
}

impl<T> From<Result<T>> for std::result::Result<T, Error> {
    fn from(result: Result<T>) -> Self {
        result.into_std()
    }
}
