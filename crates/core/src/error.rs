//! Error identities for railcall operations.
//!
//! An [`Error`] is a small `Copy` token naming one failure kind together with
//! a fixed, human-readable message. Identities are usually declared once as
//! `const` items and compared by value:
//!
//! ```
//! use railcall_core::Error;
//!
//! pub const NOT_FOUND: Error = Error::new("NotFound", "Not found");
//!
//! assert_eq!(NOT_FOUND, Error::new("NotFound", "Not found"));
//! assert!(!NOT_FOUND.is_ok());
//! ```

/// Reserved identity meaning "no error".
pub const OK: Error = Error::new("Ok", "Ok");

/// Resource exhaustion.
pub const OUT_OF_MEMORY: Error = Error::new("OutOfMemory", "Out of memory");

/// A distinguishable failure kind with a fixed message.
///
/// Two identities are equal only when both name and message match, so a
/// kind declared elsewhere under a reused name stays distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    name: &'static str,
    message: &'static str,
}

impl Error {
    /// Declare an error identity.
    #[must_use]
    pub const fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }

    /// The identity name, e.g. `"OutOfMemory"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The human-readable explanation bound to this identity.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// True only for the reserved [`OK`] identity.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        *self == OK
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const TIMEOUT: Error = Error::new("Timeout", "Operation timed out");

    #[test]
    fn test_ok_is_ok() {
        assert!(OK.is_ok());
        assert!(!OUT_OF_MEMORY.is_ok());
    }

    #[test]
    fn test_identity_compares_name_and_message() {
        assert_eq!(TIMEOUT, Error::new("Timeout", "Operation timed out"));
        assert_ne!(TIMEOUT, Error::new("Timeout", "reworded"));
        assert_ne!(TIMEOUT, OUT_OF_MEMORY);
    }

    #[test]
    fn test_ok_name_with_other_message_is_not_ok() {
        let disguised = Error::new("Ok", "Disk on fire");
        assert_ne!(disguised, OK);
        assert!(!disguised.is_ok());
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(TIMEOUT.to_string(), "Operation timed out");
        assert_eq!(OUT_OF_MEMORY.message(), "Out of memory");
        assert_eq!(OUT_OF_MEMORY.name(), "OutOfMemory");
    }

    #[test]
    fn test_hash_follows_identity() {
        let set: HashSet<Error> = [
            TIMEOUT,
            Error::new("Timeout", "Operation timed out"),
            Error::new("Timeout", "dup"),
            OK,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_usable_as_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(TIMEOUT);
        assert_eq!(boxed.to_string(), "Operation timed out");
    }
}
