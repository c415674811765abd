//! Inheritance-chain resolution.
//!
//! Each generated lookup either terminates the chain (a root) or delegates
//! to an ancestor (a continuation). The participating ancestor may sit
//! several levels up: a type can extend a non-opted-in intermediate that
//! itself extends an opted-in type, and verification must still chain
//! through the gap. The role is therefore decided by walking the whole
//! ancestor chain, not just the immediate base.

use serde::Serialize;

use attest_descriptor::{DescriptorSet, TypeDescriptor};

/// A type's role in its verification chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChainRole {
    /// Owns the cache flag; its lookup terminates the chain.
    Root,
    /// Delegates to the nearest opted-in ancestor after checking its own
    /// fields. Carries that ancestor's qualified name so the delegation
    /// target is explicit rather than left to host dispatch.
    Continuation { ancestor: String },
}

impl ChainRole {
    pub fn is_root(&self) -> bool {
        matches!(self, ChainRole::Root)
    }
}

/// Resolve a type's chain role.
///
/// Value kinds are always roots and their ancestors are never consulted.
/// For class-like kinds the ancestor chain is walked nearest-first; the
/// first opted-in ancestor at any depth makes the type a continuation
/// delegating to that ancestor. A type whose chain contains no opted-in
/// ancestor (including a type with no base at all) is a root.
///
/// Precondition: the chain is acyclic. The host type system forbids
/// inheritance cycles, and the walk does not defend against them.
pub fn resolve(ty: &TypeDescriptor, set: &DescriptorSet) -> ChainRole {
    if !ty.kind.is_class_like() {
        return ChainRole::Root;
    }
    for ancestor in set.ancestors(ty) {
        if ancestor.opts_in {
            return ChainRole::Continuation {
                ancestor: ancestor.qualified_name(),
            };
        }
    }
    ChainRole::Root
}
