//! The generated verification unit, as structured IR.
//!
//! A unit is the complete description of the members to be merged into one
//! type: an optional cache flag plus up to three methods. Bodies are a
//! small abstract syntax capturing exactly the shapes the synthesizer can
//! produce, so emitters for any target language and the reference
//! evaluator can both consume them without parsing text.

use serde::Serialize;

use attest_analysis::ChainRole;
use attest_descriptor::TypeKind;

/// Name of the cache-flag member on root class-like types.
pub const FLAG_NAME: &str = "is_verified";
/// Name of the cached, at-most-effectively-once check entry point.
pub const IDEMPOTENT_CHECK: &str = "idempotent_check";
/// Name of the unconditional check entry point.
pub const STRICT_CHECK: &str = "strict_check";
/// Name of the first-unset-field lookup.
pub const FIRST_UNSET_FIELD: &str = "first_unset_field_name";

/// Member visibility in the generated unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// How a generated method binds into the inheritance chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// Declared overridable by descendants (chain base case).
    Virtual,
    /// Overrides and extends the ancestor's version.
    Override,
    /// Plain non-virtual member (value kinds).
    Direct,
}

/// The cache flag: initialized false, externally read-only, flipped once
/// by the generated idempotent check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagMember {
    pub name: String,
    pub read: Visibility,
    pub write: Visibility,
}

/// One generated method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodMember {
    pub name: String,
    pub visibility: Visibility,
    pub dispatch: Dispatch,
    pub body: MethodBody,
}

/// The body of a generated method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MethodBody {
    /// If the flag is unset: run the strict check, then set the flag.
    /// Subsequent calls are no-ops. The flag is read and written without
    /// synchronization; concurrent first calls at worst repeat the
    /// read-only strict check (documented benign race).
    IdempotentCheck { flag: String, strict: String },
    /// Run the lookup; fail with `NotInitialized` carrying the returned
    /// field name, or return normally when the lookup finds nothing.
    StrictCheck { lookup: String },
    /// Test each local checkable field for the unset sentinel, in
    /// declaration order, returning the first match; then the tail.
    Lookup {
        checks: Vec<String>,
        tail: LookupTail,
    },
}

/// What a lookup does after exhausting its local checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LookupTail {
    /// Chain root: report that no field is unset.
    None,
    /// Continuation: delegate to the named ancestor's lookup and return
    /// its result unchanged.
    Delegate { ancestor: String },
}

/// One member of a generated unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Member {
    Flag(FlagMember),
    Method(MethodMember),
}

/// The complete generated verification unit for one type.
///
/// Produced once per opted-in descriptor, immutable once emitted, keyed by
/// the type's qualified name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedUnit {
    pub qualified_name: String,
    pub type_name: String,
    pub namespace: String,
    pub kind: TypeKind,
    pub role: ChainRole,
    pub members: Vec<Member>,
}

impl GeneratedUnit {
    /// Find a method member by name.
    pub fn method(&self, name: &str) -> Option<&MethodMember> {
        self.members.iter().find_map(|m| match m {
            Member::Method(method) if method.name == name => Some(method),
            _ => None,
        })
    }

    /// The flag member, present only on root class-like units.
    pub fn flag(&self) -> Option<&FlagMember> {
        self.members.iter().find_map(|m| match m {
            Member::Flag(flag) => Some(flag),
            _ => None,
        })
    }

    /// The field names the lookup tests locally, in declaration order.
    pub fn checked_fields(&self) -> &[String] {
        match self.method(FIRST_UNSET_FIELD).map(|m| &m.body) {
            Some(MethodBody::Lookup { checks, .. }) => checks.as_slice(),
            _ => &[],
        }
    }
}
