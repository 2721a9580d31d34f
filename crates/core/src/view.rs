//! Read-only counterpart of [`Result`].

use std::fmt;
use std::panic::Location;

use crate::error::{self, Error};
use crate::panic;
use crate::result::Result;

/// A borrowed success value or an error identity.
///
/// Useful for functions that hand out references into data they do not
/// own. A [`Result`] degrades into a view through [`Result::as_view`] or
/// `From<&Result<T>>`; there is no way back short of [`ResultView::cloned`].
///
/// ```
/// use railcall_core::{Error, ResultView};
///
/// const MISSING: Error = Error::new("Missing", "No such key");
///
/// fn lookup<'a>(pairs: &'a [(&str, String)], key: &str) -> ResultView<'a, str> {
///     pairs
///         .iter()
///         .find(|(k, _)| *k == key)
///         .map_or(ResultView::error(MISSING), |(_, v)| ResultView::ok(v.as_str()))
/// }
///
/// let pairs = [("name", String::from("railcall"))];
/// assert_eq!(lookup(&pairs, "name").get_or("?"), "railcall");
/// assert_eq!(lookup(&pairs, "age").explain(), "No such key");
/// ```
#[must_use = "this `ResultView` may be an error, which should be handled"]
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum ResultView<'a, T: ?Sized> {
    Ok(&'a T),
    Error(Error),
}

impl<T: ?Sized> Clone for ResultView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ResultView<'_, T> {}

impl<'a, T: ?Sized> ResultView<'a, T> {
    pub const fn ok(value: &'a T) -> Self {
        Self::Ok(value)
    }

    /// Passing [`error::OK`] trips a debug assertion.
    pub fn error(error: Error) -> Self {
        debug_assert!(
            !error.is_ok(),
            "ResultView::error called with the Ok identity"
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

    /// See [`Result::map`].
    pub fn map<U, F>(self, f: F) -> ResultView<'a, U>
    where
        U: ?Sized,
        F: FnOnce(&'a T) -> ResultView<'a, U>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(error) => ResultView::Error(error),
        }
    }

    /// Alias of [`ResultView::map`].
    pub fn chain<U, F>(self, f: F) -> ResultView<'a, U>
    where
        U: ?Sized,
        F: FnOnce(&'a T) -> ResultView<'a, U>,
    {
        self.map(f)
    }

    pub const fn alt(self, other: Self) -> Self {
        match self {
            Self::Ok(_) => self,
            Self::Error(_) => other,
        }
    }

    pub fn fold<R, E, F>(self, when_error: E, when_ok: F) -> R
    where
        E: FnOnce(Error) -> R,
        F: FnOnce(&'a T) -> R,
    {
        match self {
            Self::Ok(value) => when_ok(value),
            Self::Error(error) => when_error(error),
        }
    }

    pub const fn get_or(self, default: &'a T) -> &'a T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => default,
        }
    }

    pub fn get_or_else<F>(self, supplier: F) -> &'a T
    where
        F: FnOnce() -> &'a T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => supplier(),
        }
    }

    pub const fn inspect(&self) -> Error {
        match self {
            Self::Ok(_) => error::OK,
            Self::Error(error) => *error,
        }
    }

    #[must_use]
    pub const fn explain(&self) -> &'static str {
        self.inspect().message()
    }

    /// See [`Result::unwrap`]; aborts on an Error.
    #[track_caller]
    pub fn unwrap(self) -> &'a T {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => panic::terminate_at(
                Location::caller(),
                format_args!("Error: {}.", error.message()),
            ),
        }
    }

    /// See [`Result::expect`]; aborts on an Error.
    #[track_caller]
    pub fn expect<M>(self, message: M) -> &'a T
    where
        M: fmt::Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => panic::terminate_at(Location::caller(), format_args!("{message}")),
        }
    }

    /// Copy the referent into an owning [`Result`].
    pub fn cloned(self) -> Result<T>
    where
        T: Clone,
    {
        match self {
            Self::Ok(value) => Result::ok(value.clone()),
            Self::Error(error) => Result::Error(error),
        }
    }
}

impl<'a, T> From<&'a Result<T>> for ResultView<'a, T> {
    fn from(result: &'a Result<T>) -> Self {
        result.as_view()
    }
}
