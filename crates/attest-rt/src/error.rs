//! The runtime verification failure.

use std::fmt;

/// Raised by the strict check when a mandatory write-once field was never
/// assigned.
///
/// This is always a programmer error at the construction site, never a
/// transient condition; callers are not expected to recover from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotInitialized {
    /// The first unset field, in declaration order, innermost declaring
    /// type first.
    pub field: String,
}

impl NotInitialized {
    pub fn new(field: impl Into<String>) -> Self {
        NotInitialized {
            field: field.into(),
        }
    }
}

impl fmt::Display for NotInitialized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property '{}' is not initialized.", self.field)
    }
}

impl std::error::Error for NotInitialized {}
