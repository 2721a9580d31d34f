//! Computations with private state.
//!
//! A [`Closure`] bundles a captured environment, a call operation and a
//! teardown operation behind one handle. Consumers can only reach the
//! environment through the call contract.
//!
//! ```
//! use railcall_core::{Closure, Result};
//!
//! struct Offset(i64);
//!
//! let mut add5: Closure<i64, i64> = Closure::new(
//!     Some(Offset(5)),
//!     |env: Option<&mut Offset>, y: Option<&i64>| match (env, y) {
//!         (Some(env), Some(y)) => Result::ok(env.0 + y),
//!         _ => Result::ok(0),
//!     },
//!     drop,
//! );
//!
//! assert_eq!(add5.call_with(Some(&8)).get_or(0), 13);
//! assert_eq!(add5.call_with(Some(&6)).get_or(0), 11);
//! add5.delete();
//! ```
//!
//! # Concurrency
//!
//! Calls take `&mut self`, so a single Closure is never invoked
//! concurrently through safe code. Anything shared between closures (an
//! `Arc` in the environment, say) is synchronized by the call function, not
//! here.

use std::fmt;

use crate::result::Result;

/// The two operations a Closure dispatches to.
///
/// Implement this directly when the environment is better expressed as a
/// struct than as a `(environment, call, teardown)` triple.
pub trait Invoke<A: ?Sized, T> {
    /// Run the computation. Whatever is returned is handed to the caller
    /// unchanged.
    fn invoke(&mut self, arguments: Option<&A>) -> Result<T>;

    /// Tear down captured state. Called exactly once, when the owning
    /// [`Closure`] is deleted or dropped.
    fn release(&mut self);
}

struct Captured<E, C, D> {
    environment: Option<E>,
    call: C,
    teardown: Option<D>,
}

impl<A, T, E, C, D> Invoke<A, T> for Captured<E, C, D>
where
    A: ?Sized,
    C: FnMut(Option<&mut E>, Option<&A>) -> Result<T>,
    D: FnOnce(Option<E>),
{
    fn invoke(&mut self, arguments: Option<&A>) -> Result<T> {
        (self.call)(self.environment.as_mut(), arguments)
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown(self.environment.take());
        }
    }
}

/// A captured environment plus call and teardown operations.
///
/// `A` is the type of the call-time arguments, `T` the success value of
/// each call. Teardown runs exactly once: on [`Closure::delete`], or when
/// the Closure is dropped on any other exit path.
pub struct Closure<A: ?Sized, T> {
    inner: Box<dyn Invoke<A, T>>,
}

impl<A: ?Sized, T> Closure<A, T> {
    /// Capture `environment` (possibly nothing) with its call and teardown
    /// operations.
    pub fn new<E, C, D>(environment: Option<E>, call: C, teardown: D) -> Self
    where
        E: 'static,
        C: FnMut(Option<&mut E>, Option<&A>) -> Result<T> + 'static,
        D: FnOnce(Option<E>) + 'static,
    {
        tracing::trace!(captured = environment.is_some(), "closure created");
        Self::from_invoke(Captured {
            environment,
            call,
            teardown: Some(teardown),
        })
    }

    /// Wrap a hand-written [`Invoke`] implementation.
    pub fn from_invoke<I>(invoke: I) -> Self
    where
        I: Invoke<A, T> + 'static,
    {
        Self {
            inner: Box::new(invoke),
        }
    }

    /// Invoke without call-time arguments.
    pub fn call(&mut self) -> Result<T> {
        self.call_with(None)
    }

    /// Invoke with `arguments`, returning the call operation's Result
    /// verbatim.
    pub fn call_with(&mut self, arguments: Option<&A>) -> Result<T> {
        self.inner.invoke(arguments)
    }

    /// Run teardown and release the Closure.
    pub fn delete(self) {
        drop(self);
    }
}

impl<A: ?Sized, T> Drop for Closure<A, T> {
    fn drop(&mut self) {
        self.inner.release();
        tracing::trace!("closure released");
    }
}

impl<A: ?Sized, T> fmt::Debug for Closure<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure").finish_non_exhaustive()
    }
}

/// Delete a Closure that may not exist. `None` is a no-op.
pub fn delete<A: ?Sized, T>(closure: Option<Closure<A, T>>) {
    if let Some(closure) = closure {
        closure.delete();
    }
}
