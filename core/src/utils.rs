//! Utility functions and types.

use std::fmt::{Debug, Formatter};

/// Redact hides secrets in `Debug` output.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 chars prints `***`.
/// - Longer input keeps its first and last three chars: `AKI***PLE`.
///
/// Keeping both ends lets users tell two redacted keys apart without
/// leaking them.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        match length {
            0 => f.write_str("EMPTY"),
            1..=11 => f.write_str("***"),
            _ => match (self.0.get(..3), self.0.get(length - 3..)) {
                (Some(head), Some(tail)) => write!(f, "{head}***{tail}"),
                // Not on a char boundary, hide everything.
                _ => f.write_str("***"),
            },
        }
    }
}
