//! Integration tests for the generation driver over whole descriptor sets.

use attest_codegen::unit::{LookupTail, MethodBody, FIRST_UNSET_FIELD};
use attest_codegen::{generate, GeneratedUnit};
use attest_descriptor::{
    parse_descriptors, DescriptorSet, FieldDescriptor, TypeDescriptor, TypeKind, ValueDomain,
};

fn lookup_tail(unit: &GeneratedUnit) -> &LookupTail {
    match &unit.method(FIRST_UNSET_FIELD).unwrap().body {
        MethodBody::Lookup { tail, .. } => tail,
        body => panic!("unexpected lookup body: {:?}", body),
    }
}

/// A three-level hierarchy with a non-opted-in gap in the middle: the leaf
/// delegates straight to the root, and the gap type gets no unit.
#[test]
fn hierarchy_with_gap_chains_through() {
    let set = DescriptorSet::from_descriptors([
        TypeDescriptor::new("Ex", "Base", TypeKind::Class)
            .with_field(FieldDescriptor::new("x", ValueDomain::NullableValue))
            .opted_in(),
        TypeDescriptor::new("Ex", "Mid", TypeKind::Class).with_base("Ex.Base"),
        TypeDescriptor::new("Ex", "Leaf", TypeKind::Class)
            .with_base("Ex.Mid")
            .with_field(FieldDescriptor::new("y", ValueDomain::NullableReference))
            .opted_in(),
    ])
    .unwrap();

    let generation = generate(&set);
    assert_eq!(generation.units.len(), 2);
    assert!(generation.unit("Ex.Mid").is_none());

    let base = generation.unit("Ex.Base").unwrap();
    assert_eq!(*lookup_tail(base), LookupTail::None);
    assert!(base.flag().is_some());

    let leaf = generation.unit("Ex.Leaf").unwrap();
    assert_eq!(
        *lookup_tail(leaf),
        LookupTail::Delegate {
            ancestor: "Ex.Base".into()
        }
    );
    assert!(leaf.flag().is_none());
}

/// Descriptor order does not change any unit: a derived type listed before
/// its base resolves identically.
#[test]
fn generation_is_order_independent() {
    let base = TypeDescriptor::new("Ex", "Base", TypeKind::Class)
        .with_field(FieldDescriptor::new("x", ValueDomain::NullableValue))
        .opted_in();
    let derived = TypeDescriptor::new("Ex", "Derived", TypeKind::Class)
        .with_base("Ex.Base")
        .with_field(FieldDescriptor::new("y", ValueDomain::NullableValue))
        .opted_in();

    let forward =
        generate(&DescriptorSet::from_descriptors([base.clone(), derived.clone()]).unwrap());
    let reversed = generate(&DescriptorSet::from_descriptors([derived, base]).unwrap());

    assert_eq!(
        forward.unit("Ex.Derived").unwrap(),
        reversed.unit("Ex.Derived").unwrap()
    );
    assert_eq!(
        forward.unit("Ex.Base").unwrap(),
        reversed.unit("Ex.Base").unwrap()
    );
}

/// End to end from collaborator JSON: one warning for the non-nullable
/// field, one unit per opted-in type, warned field absent from all checks.
#[test]
fn generate_from_descriptor_json() {
    let json = r#"[
        {
            "name": "Struct1",
            "namespace": "Example",
            "kind": "value",
            "opts_in": true,
            "fields": [
                { "name": "my_property", "domain": "nullable-value" },
                { "name": "raw_count", "domain": "non-nullable-value" }
            ]
        }
    ]"#;
    let set = DescriptorSet::from_descriptors(parse_descriptors(json).unwrap()).unwrap();
    let generation = generate(&set);

    assert_eq!(generation.diagnostics.len(), 1);
    assert_eq!(
        generation.diagnostics[0].field_name.as_deref(),
        Some("raw_count")
    );

    let unit = generation.unit("Example.Struct1").unwrap();
    assert_eq!(unit.checked_fields(), ["my_property"]);
    assert!(unit.method("idempotent_check").is_none());
}

/// Units serialize to JSON for tooling (the CLI's `explain` surface).
#[test]
fn unit_serializes_to_json() {
    let set = DescriptorSet::from_descriptors([TypeDescriptor::new(
        "Ex",
        "Base",
        TypeKind::Class,
    )
    .with_field(FieldDescriptor::new("x", ValueDomain::NullableReference))
    .opted_in()])
    .unwrap();
    let generation = generate(&set);
    let unit = generation.unit("Ex.Base").unwrap();

    let value = serde_json::to_value(unit).unwrap();
    assert_eq!(value["qualified_name"], "Ex.Base");
    assert_eq!(value["role"], "Root");
    assert!(value["members"].is_array());
}
