//! The attest input contract: type descriptors.
//!
//! The parsing collaborator scans program text and hands the generator a
//! list of [`TypeDescriptor`]s: one per candidate type, each carrying its
//! locally declared mandatory write-once fields and a plain boolean for the
//! opt-in marker. The generator never re-derives marker presence and never
//! sees inherited fields on a descriptor; ancestor fields are covered
//! through chain delegation only.
//!
//! - [`set`]: the name-indexed [`DescriptorSet`] graph with ancestor walks
//! - [`load`]: serde-based JSON loading and multi-file merging

pub mod load;
pub mod set;

use std::fmt;

use serde::{Deserialize, Serialize};

use attest_common::Span;

pub use load::{load_file, load_set, parse_descriptors};
pub use set::{DescriptorError, DescriptorSet, TypeId};

/// The kind of a candidate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    /// Supports inheritance and shared mutable state.
    Class,
    /// No inheritance, no shared identity; each copy is independent.
    Value,
    /// Immutable record; class-like for inheritance purposes.
    Record,
}

impl TypeKind {
    /// Whether the kind participates in inheritance and instance identity.
    ///
    /// Records behave exactly as classes everywhere in the generator.
    pub fn is_class_like(&self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Record)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Class => write!(f, "class"),
            TypeKind::Value => write!(f, "value"),
            TypeKind::Record => write!(f, "record"),
        }
    }
}

/// The value domain of a mandatory write-once field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueDomain {
    /// A reference whose unset state is null.
    NullableReference,
    /// A value wrapped in a nullable container; unset state is null.
    NullableValue,
    /// A bare value with no representable unset state.
    NonNullableValue,
}

impl ValueDomain {
    /// Whether the domain can represent "never assigned".
    ///
    /// Fields without an unset sentinel cannot be verified and are reported
    /// as warnings by the classifier.
    pub fn has_unset_sentinel(&self) -> bool {
        !matches!(self, ValueDomain::NonNullableValue)
    }
}

/// One mandatory write-once field, declared directly on its type.
///
/// Fields not carrying the mandatory marker never reach the generator;
/// that filtering is the parsing collaborator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier, unique within its declaring type.
    pub name: String,
    pub domain: ValueDomain,
    /// Span of the field declaration in the collaborator's source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, domain: ValueDomain) -> Self {
        FieldDescriptor {
            name: name.into(),
            domain,
            span: None,
        }
    }

    /// Attach the declaration span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// One candidate type, as discovered by the parsing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    pub kind: TypeKind,
    /// Qualified name of the declared base type, if any. Always absent for
    /// value kinds and for types with no base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Locally declared mandatory fields, in declaration order. Never
    /// includes inherited fields.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Whether the type itself carries the verification marker. Markers are
    /// not inherited; an ancestor's opt-in takes effect through chain
    /// resolution instead.
    #[serde(default)]
    pub opts_in: bool,
    /// Span of the type declaration in the collaborator's source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl TypeDescriptor {
    /// Create a descriptor with no base, no fields, and the marker unset.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDescriptor {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            base: None,
            fields: Vec::new(),
            opts_in: false,
            span: None,
        }
    }

    /// The namespace-qualified name, used as the type's identity everywhere.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn opted_in(mut self) -> Self {
        self.opts_in = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_class_likeness() {
        assert!(TypeKind::Class.is_class_like());
        assert!(TypeKind::Record.is_class_like());
        assert!(!TypeKind::Value.is_class_like());
    }

    #[test]
    fn domain_sentinels() {
        assert!(ValueDomain::NullableReference.has_unset_sentinel());
        assert!(ValueDomain::NullableValue.has_unset_sentinel());
        assert!(!ValueDomain::NonNullableValue.has_unset_sentinel());
    }

    #[test]
    fn qualified_name_with_and_without_namespace() {
        let ty = TypeDescriptor::new("Example", "Order", TypeKind::Class);
        assert_eq!(ty.qualified_name(), "Example.Order");

        let global = TypeDescriptor::new("", "Order", TypeKind::Class);
        assert_eq!(global.qualified_name(), "Order");
    }

    #[test]
    fn descriptor_deserializes_from_collaborator_json() {
        let json = r#"{
            "name": "Order",
            "namespace": "Shop",
            "kind": "class",
            "base": "Shop.Entity",
            "opts_in": true,
            "fields": [
                { "name": "customer", "domain": "nullable-reference", "span": { "start": 10, "end": 18 } },
                { "name": "total", "domain": "non-nullable-value" }
            ]
        }"#;
        let ty: TypeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(ty.qualified_name(), "Shop.Order");
        assert_eq!(ty.kind, TypeKind::Class);
        assert_eq!(ty.base.as_deref(), Some("Shop.Entity"));
        assert!(ty.opts_in);
        assert_eq!(ty.fields.len(), 2);
        assert_eq!(ty.fields[0].domain, ValueDomain::NullableReference);
        assert!(ty.fields[0].span.is_some());
        assert_eq!(ty.fields[1].domain, ValueDomain::NonNullableValue);
    }

    #[test]
    fn optional_inputs_default() {
        let json = r#"{ "name": "Point", "kind": "value" }"#;
        let ty: TypeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(ty.namespace, "");
        assert!(ty.base.is_none());
        assert!(ty.fields.is_empty());
        assert!(!ty.opts_in);
    }
}
