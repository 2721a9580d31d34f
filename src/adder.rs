//! Adder: a closure that captures a fixed addend.
//!
//! ```
//! use railcall::adder::AdderClosure;
//!
//! let mut add5 = AdderClosure::new(5);
//! assert_eq!(add5.call(8).map(|sum| railcall_core::Result::ok(sum.get())).get_or(0), 13);
//! assert_eq!(add5.call(6).unwrap().get(), 11);
//! add5.delete();
//! ```

use std::fmt;

use railcall_core::{Closure, Error, Result};

/// The sum does not fit in an `i64`.
pub const OVERFLOW: Error = Error::new("Overflow", "Integer overflow");

/// The closure was called without an argument to add.
pub const MISSING_ARGUMENTS: Error =
    Error::new("MissingArguments", "Adder called without arguments");

struct AdderEnvironment {
    x: i64,
}

struct AdderArguments {
    y: i64,
}

/// Value produced by one adder call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdderSum {
    value: i64,
}

impl AdderSum {
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for AdderSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// `y -> x + y` for a captured `x`.
#[derive(Debug)]
pub struct AdderClosure {
    closure: Closure<AdderArguments, AdderSum>,
}

impl AdderClosure {
    #[must_use]
    pub fn new(x: i64) -> Self {
        tracing::debug!(x, "adder created");
        Self {
            closure: Closure::new(Some(AdderEnvironment { x }), add, release),
        }
    }

    /// Add `y` to the captured addend.
    pub fn call(&mut self, y: i64) -> Result<AdderSum> {
        self.closure.call_with(Some(&AdderArguments { y }))
    }

    /// Call once per value, stopping at the first failure.
    pub fn call_each(&mut self, values: &[i64]) -> Result<Vec<AdderSum>> {
        values
            .iter()
            .fold(Result::ok(Vec::with_capacity(values.len())), |sums, &y| {
                sums.chain(|mut sums| {
                    self.call(y).map(|sum| {
                        sums.push(sum);
                        Result::ok(sums)
                    })
                })
            })
    }

    pub fn delete(self) {
        self.closure.delete();
    }
}

fn add(
    environment: Option<&mut AdderEnvironment>,
    arguments: Option<&AdderArguments>,
) -> Result<AdderSum> {
    match (environment, arguments) {
        (Some(environment), Some(arguments)) => environment
            .x
            .checked_add(arguments.y)
            .map_or(Result::error(OVERFLOW), |value| Result::ok(AdderSum { value })),
        _ => Result::error(MISSING_ARGUMENTS),
    }
}

fn release(environment: Option<AdderEnvironment>) {
    if let Some(environment) = environment {
        tracing::debug!(x = environment.x, "adder released");
    }
}
