//! Synthesis of one verification unit.
//!
//! The member set is driven by two axes: the type's kind and its chain
//! role. Class-like kinds get the cached entry point and chain into their
//! ancestors; value kinds have no persistent identity to cache against and
//! no inheritance, so they get self-contained non-virtual members only.

use attest_analysis::ChainRole;
use attest_descriptor::{FieldDescriptor, TypeDescriptor};

use crate::unit::{
    Dispatch, FlagMember, GeneratedUnit, LookupTail, Member, MethodBody, MethodMember, Visibility,
    FIRST_UNSET_FIELD, FLAG_NAME, IDEMPOTENT_CHECK, STRICT_CHECK,
};

/// Synthesize the verification unit for one type.
///
/// `checkable` is the classifier's output for the same descriptor: the
/// locally declared fields that will be tested, in declaration order.
/// Local checks always precede delegation, so in a multi-level hierarchy
/// each level reports its own unset fields before its ancestors'.
pub fn synthesize(
    ty: &TypeDescriptor,
    role: ChainRole,
    checkable: &[&FieldDescriptor],
) -> GeneratedUnit {
    let class_like = ty.kind.is_class_like();

    let dispatch = if !class_like {
        Dispatch::Direct
    } else if role.is_root() {
        Dispatch::Virtual
    } else {
        Dispatch::Override
    };
    let visibility = if class_like {
        Visibility::Protected
    } else {
        Visibility::Private
    };

    let mut members = Vec::new();

    // The cache flag lives on the chain root only; continuations inherit
    // it. Value kinds never get one: independent copies could not safely
    // share cached state.
    if class_like && role.is_root() {
        members.push(Member::Flag(FlagMember {
            name: FLAG_NAME.to_string(),
            read: Visibility::Public,
            write: Visibility::Protected,
        }));
    }

    if class_like {
        members.push(Member::Method(MethodMember {
            name: IDEMPOTENT_CHECK.to_string(),
            visibility,
            dispatch,
            body: MethodBody::IdempotentCheck {
                flag: FLAG_NAME.to_string(),
                strict: STRICT_CHECK.to_string(),
            },
        }));
    }

    members.push(Member::Method(MethodMember {
        name: STRICT_CHECK.to_string(),
        visibility,
        dispatch,
        body: MethodBody::StrictCheck {
            lookup: FIRST_UNSET_FIELD.to_string(),
        },
    }));

    let tail = match &role {
        ChainRole::Root => LookupTail::None,
        ChainRole::Continuation { ancestor } => LookupTail::Delegate {
            ancestor: ancestor.clone(),
        },
    };
    members.push(Member::Method(MethodMember {
        name: FIRST_UNSET_FIELD.to_string(),
        visibility,
        dispatch,
        body: MethodBody::Lookup {
            checks: checkable.iter().map(|f| f.name.clone()).collect(),
            tail,
        },
    }));

    GeneratedUnit {
        qualified_name: ty.qualified_name(),
        type_name: ty.name.clone(),
        namespace: ty.namespace.clone(),
        kind: ty.kind,
        role,
        members,
    }
}
