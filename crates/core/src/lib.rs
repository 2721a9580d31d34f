//! # railcall core
//!
//! Exception-free error handling for low-level code, plus closures that
//! return it.
//!
//! ## Laws
//!
//! - Fallible operations return [`Result`]; callers branch before they see
//!   a value.
//! - Combinators ([`Result::map`], [`Result::chain`], [`Result::alt`],
//!   [`Result::fold`], [`Result::get_or`], [`Result::get_or_else`]) carry
//!   errors along without manual branching.
//! - [`Result::unwrap`] / [`Result::expect`] are the only way to skip the
//!   branch, and they abort loudly through [`panic`] with the caller's
//!   file and line.
//! - A [`Closure`] owns its environment from construction until teardown,
//!   and teardown runs exactly once.
//! - No `unsafe`.

pub mod closure;
pub mod error;
pub mod panic;
mod result;
pub mod version;
mod view;

pub use closure::{Closure, Invoke};
pub use error::Error;
pub use result::Result;
pub use version::{CLOSURE_VERSION, PANIC_VERSION, RESULT_VERSION};
pub use view::ResultView;
