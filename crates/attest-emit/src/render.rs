//! Lowering a generated unit to a document.
//!
//! The output is a C#-flavored partial-type fragment: the members of the
//! unit wrapped in the type's (and namespace's) declaration so the emission
//! collaborator can merge it next to the hand-written part of the type.
//! Only the behavioral shape of the members is contractual; the layout
//! here is one concrete choice.

use attest_codegen::unit::{
    Dispatch, FlagMember, GeneratedUnit, LookupTail, Member, MethodBody, MethodMember, Visibility,
};
use attest_descriptor::TypeKind;

use crate::doc::{concat, group, hardline, indent, join, softline, space, text, Doc};
use crate::printer::{print, PrintConfig};

/// Render a unit to source text with the default configuration.
pub fn render_unit(unit: &GeneratedUnit) -> String {
    print(&unit_doc(unit), &PrintConfig::default())
}

/// Conventional file name for a unit's rendered fragment.
pub fn unit_file_name(unit: &GeneratedUnit) -> String {
    format!("{}_verification.cs", unit.type_name)
}

/// Lower a unit to its document.
pub fn unit_doc(unit: &GeneratedUnit) -> Doc {
    let members: Vec<Doc> = unit.members.iter().map(|m| member_doc(unit, m)).collect();
    let type_block = braced(
        text(format!(
            "partial {} {}",
            kind_keyword(unit.kind),
            unit.type_name
        )),
        join(concat(vec![hardline(), hardline()]), members),
    );

    let mut parts = vec![
        text("using System;"),
        hardline(),
        text("using System.Diagnostics.CodeAnalysis;"),
        hardline(),
        hardline(),
    ];
    if unit.namespace.is_empty() {
        parts.push(type_block);
    } else {
        parts.push(braced(
            text(format!("namespace {}", unit.namespace)),
            type_block,
        ));
    }
    concat(parts)
}

/// An Allman-style braced block: header, `{`, indented body, `}`.
fn braced(header: Doc, body: Doc) -> Doc {
    concat(vec![
        header,
        hardline(),
        text("{"),
        indent(concat(vec![hardline(), body])),
        hardline(),
        text("}"),
    ])
}

fn member_doc(unit: &GeneratedUnit, member: &Member) -> Doc {
    match member {
        Member::Flag(flag) => flag_doc(flag),
        Member::Method(method) => method_doc(unit, method),
    }
}

fn flag_doc(flag: &FlagMember) -> Doc {
    text(format!(
        "{} bool {} {{ get; {} set; }}",
        keyword(flag.read),
        flag.name,
        keyword(flag.write)
    ))
}

fn method_doc(unit: &GeneratedUnit, method: &MethodMember) -> Doc {
    let return_type = match method.body {
        MethodBody::Lookup { .. } => "string?",
        _ => "void",
    };
    let signature = text(format!(
        "{} {}{} {}()",
        keyword(method.visibility),
        modifier(method.dispatch),
        return_type,
        method.name
    ));

    let mut parts = Vec::new();
    // The caller-facing checks promise the locally checked fields are
    // non-null on return, in the manner of nullable flow analysis.
    if !matches!(method.body, MethodBody::Lookup { .. }) && !unit.checked_fields().is_empty() {
        parts.push(member_not_null(unit.checked_fields()));
        parts.push(hardline());
    }
    parts.push(braced(signature, body_doc(method)));
    concat(parts)
}

fn body_doc(method: &MethodMember) -> Doc {
    match &method.body {
        MethodBody::IdempotentCheck { flag, strict } => braced(
            text(format!("if (!{})", flag)),
            concat(vec![
                text(format!("{}();", strict)),
                hardline(),
                text(format!("{} = true;", flag)),
            ]),
        ),

        MethodBody::StrictCheck { lookup } => concat(vec![
            text(format!("var field = {}();", lookup)),
            hardline(),
            braced(
                text("if (field is not null)"),
                text(
                    "throw new InvalidOperationException($\"Property '{field}' is not initialized.\");",
                ),
            ),
        ]),

        MethodBody::Lookup { checks, tail } => {
            let mut statements: Vec<Doc> = checks
                .iter()
                .map(|field| {
                    braced(
                        text(format!("if ({} is null)", field)),
                        text(format!("return nameof({});", field)),
                    )
                })
                .collect();
            statements.push(match tail {
                LookupTail::None => text("return null;"),
                LookupTail::Delegate { .. } => text(format!("return base.{}();", method.name)),
            });
            join(hardline(), statements)
        }
    }
}

fn member_not_null(fields: &[String]) -> Doc {
    group(concat(vec![
        text("[MemberNotNull("),
        indent(concat(vec![
            softline(),
            join(
                concat(vec![text(","), space()]),
                fields
                    .iter()
                    .map(|f| text(format!("nameof({})", f)))
                    .collect(),
            ),
        ])),
        text(")]"),
    ]))
}

fn kind_keyword(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Class => "class",
        TypeKind::Value => "struct",
        TypeKind::Record => "record",
    }
}

fn keyword(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Protected => "protected",
        Visibility::Private => "private",
    }
}

fn modifier(dispatch: Dispatch) -> &'static str {
    match dispatch {
        Dispatch::Virtual => "virtual ",
        Dispatch::Override => "override ",
        Dispatch::Direct => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_codegen::synthesize;
    use attest_descriptor::{FieldDescriptor, TypeDescriptor, ValueDomain};

    use attest_analysis::ChainRole;

    fn unit_for(kind: TypeKind, role: ChainRole, fields: &[&str]) -> GeneratedUnit {
        let mut ty = TypeDescriptor::new("Example", "Thing", kind).opted_in();
        for f in fields {
            ty.fields
                .push(FieldDescriptor::new(*f, ValueDomain::NullableReference));
        }
        let checkable: Vec<&FieldDescriptor> = ty.fields.iter().collect();
        synthesize(&ty, role, &checkable)
    }

    #[test]
    fn file_name_follows_type_name() {
        let unit = unit_for(TypeKind::Class, ChainRole::Root, &[]);
        assert_eq!(unit_file_name(&unit), "Thing_verification.cs");
    }

    #[test]
    fn root_class_renders_virtual_members_and_flag() {
        let unit = unit_for(TypeKind::Class, ChainRole::Root, &["name"]);
        let out = render_unit(&unit);
        assert!(out.contains("namespace Example"));
        assert!(out.contains("partial class Thing"));
        assert!(out.contains("public bool is_verified { get; protected set; }"));
        assert!(out.contains("protected virtual void idempotent_check()"));
        assert!(out.contains("protected virtual string? first_unset_field_name()"));
        assert!(out.contains("return null;"));
        assert!(!out.contains("base."));
    }

    #[test]
    fn continuation_renders_override_and_base_call() {
        let unit = unit_for(
            TypeKind::Class,
            ChainRole::Continuation {
                ancestor: "Example.Base".into(),
            },
            &["name"],
        );
        let out = render_unit(&unit);
        assert!(out.contains("protected override void strict_check()"));
        assert!(out.contains("return base.first_unset_field_name();"));
        assert!(!out.contains("is_verified { get;"));
    }

    #[test]
    fn value_kind_renders_plain_private_members() {
        let unit = unit_for(TypeKind::Value, ChainRole::Root, &["name"]);
        let out = render_unit(&unit);
        assert!(out.contains("partial struct Thing"));
        assert!(out.contains("private void strict_check()"));
        assert!(!out.contains("virtual"));
        assert!(!out.contains("idempotent_check"));
    }

    #[test]
    fn member_not_null_lists_checked_fields_in_order() {
        let unit = unit_for(TypeKind::Class, ChainRole::Root, &["first", "second"]);
        let out = render_unit(&unit);
        assert!(out.contains("[MemberNotNull(nameof(first), nameof(second))]"));
    }

    #[test]
    fn no_attribute_without_checkable_fields() {
        let unit = unit_for(TypeKind::Class, ChainRole::Root, &[]);
        let out = render_unit(&unit);
        assert!(!out.contains("MemberNotNull"));
    }
}
