//! Utility functions and types.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

/// Redact wraps a secret so it can be put into `Debug`/`Display` output.
///
/// - Empty values are shown as `EMPTY`.
/// - Values shorter than 12 characters are fully hidden as `***`.
/// - Longer values keep their first and last three characters, so that
///   different keys can still be told apart in logs.
///
/// Use [`Redact::full`] for secrets: no character of the value is shown.
#[derive(Clone, Copy)]
pub struct Redact<'a> {
    value: &'a str,
    full: bool,
}

impl<'a> Redact<'a> {
    /// Hide the whole value, showing only `***` or `EMPTY`.
    pub fn full(value: &'a str) -> Self {
        Redact { value, full: true }
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact { value, full: false }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact::from(value.as_deref().unwrap_or_default())
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self.value;
        match s.chars().count() {
            0 => f.write_str("EMPTY"),
            _ if self.full => f.write_str("***"),
            n if n < 12 => f.write_str("***"),
            n => {
                let head: String = s.chars().take(3).collect();
                let tail: String = s.chars().skip(n - 3).collect();
                write!(f, "{head}***{tail}")
            }
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
