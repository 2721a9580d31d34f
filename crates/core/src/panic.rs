//! Last-resort process termination.
//!
//! This is the only place in railcall that stops the process. It is reached
//! through [`Result::unwrap`](crate::Result::unwrap),
//! [`Result::expect`](crate::Result::expect) and the [`terminate!`](crate::terminate)
//! macro, so every forced exit shows up as a searchable call site.
//!
//! Termination aborts; it does not unwind and cannot be caught.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::process;

/// Report `message` with its source location and abort the process.
#[cold]
#[inline(never)]
pub fn terminate(file: &str, line: u32, message: fmt::Arguments<'_>) -> ! {
    tracing::debug!(file, line, "terminating");

    let mut stderr = io::stderr().lock();
    // Nothing useful can be done if stderr itself is gone.
    let _ = writeln!(stderr, "\nAt {file}:{line}\n{message}");
    let _ = stderr.flush();
    drop(stderr);

    process::abort()
}

/// [`terminate`] with a location captured by `#[track_caller]`.
#[cold]
#[inline(never)]
pub fn terminate_at(location: &Location<'_>, message: fmt::Arguments<'_>) -> ! {
    terminate(location.file(), location.line(), message)
}

/// Abort the process with a formatted message tagged with the current file
/// and line.
///
/// ```no_run
/// railcall_core::terminate!("unrecoverable state: {}", 42);
/// ```
#[macro_export]
macro_rules! terminate {
    ($($arg:tt)+) => {
        $crate::panic::terminate(::core::file!(), ::core::line!(), ::core::format_args!($($arg)+))
    };
}
