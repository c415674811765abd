//! Shared types for the attest generator.
//!
//! Provides the building blocks every other attest crate uses:
//!
//! - [`span`]: byte-offset spans into the collaborator's source text
//! - [`diagnostic`]: the [`Diagnostic`] record, severities, and stable codes
//! - [`render`]: human-readable, labeled (ariadne), and JSON rendering of
//!   diagnostics

pub mod diagnostic;
pub mod render;
pub mod span;

pub use diagnostic::{codes, Diagnostic, Severity};
pub use span::Span;
