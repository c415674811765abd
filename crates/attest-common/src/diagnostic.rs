//! The diagnostic record produced during generation.
//!
//! Diagnostics are accumulated, never thrown: a warning on one field never
//! aborts generation for its type, let alone the whole run. The runtime
//! verification failure raised by generated code is a separate channel
//! entirely (see `attest-rt`).

use std::fmt;

use crate::span::Span;

/// Stable diagnostic codes, one per condition.
pub mod codes {
    /// A mandatory field whose value domain has no unset representation.
    pub const UNVERIFIABLE_FIELD: &str = "W0001";
}

/// Severity of a generation-time diagnostic.
///
/// Everything the generator currently reports is recoverable per-field, so
/// `Warning` is the only severity produced today; `Error` exists for
/// collaborators that surface hard input problems through the same channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single generation-time diagnostic.
///
/// Carries the offending type and (when applicable) field by name, a stable
/// code, and an optional span into the parsing collaborator's source text
/// for labeled rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    /// Qualified name of the type the diagnostic is about.
    pub type_name: String,
    /// The offending field, when the diagnostic concerns one.
    pub field_name: Option<String>,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create a warning diagnostic for the given type.
    pub fn warning(
        code: &'static str,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            code,
            type_name: type_name.into(),
            field_name: None,
            message: message.into(),
            span: None,
        }
    }

    /// Attach the offending field's name.
    pub fn with_field(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    /// Attach a source span for labeled rendering.
    pub fn with_span(mut self, span: Option<Span>) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}
