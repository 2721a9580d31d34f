//! Semantic version strings of the individual facilities.
//!
//! Purely informational; nothing in the core branches on them.

/// Version of the Result / `ResultView` facility.
pub const RESULT_VERSION: &str = "0.1.1";

/// Version of the Closure facility.
pub const CLOSURE_VERSION: &str = "0.1.0";

/// Version of the termination facility.
pub const PANIC_VERSION: &str = "0.1.0";

/// A parsed `major.minor.patch[suffix]` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version<'a> {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Anything after the patch digits, e.g. `"-rc.1"` or `"+build5"`.
    pub suffix: &'a str,
}

impl<'a> Version<'a> {
    /// Parse a version string, returning `None` if it is not
    /// `major.minor.patch` optionally followed by a suffix.
    #[must_use]
    pub fn parse(text: &'a str) -> Option<Self> {
        let mut parts = text.splitn(3, '.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let rest = parts.next()?;

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (patch, suffix) = rest.split_at(digits_end);

        Some(Self {
            major,
            minor,
            patch: patch.parse().ok()?,
            suffix,
        })
    }
}
