//! Field classification.
//!
//! A mandatory field is checkable only if its value domain can represent
//! "never assigned". Fields without an unset sentinel are excluded from
//! verification and reported as warnings -- never upgraded to hard errors,
//! and never silently accepted.

use attest_common::{codes, Diagnostic};
use attest_descriptor::{FieldDescriptor, TypeDescriptor};

/// The classifier's verdict on one type's declared fields.
#[derive(Debug)]
pub struct Classified<'a> {
    /// Fields that will be verified, in declaration order.
    pub checkable: Vec<&'a FieldDescriptor>,
    /// One warning per unverifiable field.
    pub diagnostics: Vec<Diagnostic>,
}

/// Classify a type's locally declared mandatory fields.
///
/// Pure function of the descriptor: declaration order is preserved in the
/// result so that missing fields are always reported in a reproducible
/// order.
pub fn classify(ty: &TypeDescriptor) -> Classified<'_> {
    let mut checkable = Vec::new();
    let mut diagnostics = Vec::new();

    for field in &ty.fields {
        if field.domain.has_unset_sentinel() {
            checkable.push(field);
        } else {
            diagnostics.push(
                Diagnostic::warning(
                    codes::UNVERIFIABLE_FIELD,
                    ty.qualified_name(),
                    format!(
                        "field '{}' has a value type but no unset representation; \
                         it will not be verified",
                        field.name
                    ),
                )
                .with_field(field.name.as_str())
                .with_span(field.span),
            );
        }
    }

    Classified {
        checkable,
        diagnostics,
    }
}
