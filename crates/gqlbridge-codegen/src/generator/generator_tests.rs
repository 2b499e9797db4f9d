#![allow(non_snake_case)]

use super::*;
use gqlbridge_core::{
    Directive, EnumValueDefinition, ErrorCode, FieldDefinition, TypeReference,
};

fn mixed_schema() -> Schema {
    Schema::from_types(vec![
        TypeDefinition::new("DateTime", TypeKind::Scalar),
        TypeDefinition::new("Node", TypeKind::Interface)
            .with_field(FieldDefinition::new("id", TypeReference::named("ID").non_null())),
        TypeDefinition::new("User", TypeKind::Object)
            .with_interface("Node")
            .with_field(FieldDefinition::new("id", TypeReference::named("ID").non_null())),
        TypeDefinition::new("UserInput", TypeKind::InputObject)
            .with_field(FieldDefinition::new("name", TypeReference::named("String"))),
        TypeDefinition::new("Role", TypeKind::Enum)
            .with_enum_value(EnumValueDefinition::new("ADMIN")),
        TypeDefinition::new("SearchResult", TypeKind::Union),
        TypeDefinition::new("Internal", TypeKind::Object).with_directive(Directive::new("skip")),
    ])
    .unwrap()
}

#[test]
fn Generator___generate___dispatches_by_kind_in_declaration_order() {
    let result = Generator::new(Config::default()).generate(&mixed_schema());

    let files: Vec<&str> = result.units.iter().map(|u| u.file_name.as_str()).collect();
    assert_eq!(
        files,
        vec![
            "Node.java",
            "User.java",
            "UserInput.java",
            "Role.java",
            "SearchResult.java"
        ]
    );
    assert!(result.units[0].content.contains("public interface Node"));
    assert!(result.units[1].content.contains("public class User implements Node"));
    assert!(result.units[3].content.contains("public enum Role"));
}

#[test]
fn Generator___generate___counts_by_category() {
    let result = Generator::new(Config::default()).generate(&mixed_schema());

    assert_eq!(
        result.stats(),
        GenerationStats {
            total: 5,
            classes: 2,
            interfaces: 2,
            enums: 1,
            skipped: 1,
            errors: 0,
            warnings: 0,
        }
    );
    assert_eq!(result.skipped, vec!["Internal".to_string()]);
    assert_eq!(result.stats().to_string(), "2 classes, 2 interfaces, 1 enums");
}

#[test]
fn Generator___failing_type___does_not_block_others() {
    let schema = Schema::from_types(vec![
        TypeDefinition::new("Good", TypeKind::Object),
        TypeDefinition::new("Bad", TypeKind::Object)
            .with_field(FieldDefinition::new("broken", TypeReference::default())),
        TypeDefinition::new("AlsoGood", TypeKind::Enum),
    ])
    .unwrap();

    let result = Generator::new(Config::default()).generate(&schema);

    assert_eq!(result.units.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert!(result.has_errors());
    assert_eq!(result.errors[0].code(), ErrorCode::Generate);
    assert_eq!(result.errors[0].type_name(), Some("Bad"));
}

#[test]
fn Generator___unknown_field_type___warns_once_per_type() {
    let schema = Schema::from_types(vec![
        TypeDefinition::new("Order", TypeKind::Object)
            .with_field(FieldDefinition::new("total", TypeReference::named("Money")))
            .with_field(FieldDefinition::new(
                "refunds",
                TypeReference::list_of(TypeReference::named("Money")),
            ))
            .with_field(
                FieldDefinition::new("fee", TypeReference::named("Cents")).with_directive(
                    Directive::new("javaType").with_arg("type", "long"),
                ),
            ),
    ])
    .unwrap();

    let result = Generator::new(Config::default()).generate(&schema);

    assert_eq!(
        result.warnings,
        vec![GenerationWarning::UnresolvedType {
            owner: "Order".to_string(),
            warning: TypeMappingWarning::new("Money"),
        }]
    );
    assert!(result.units[0].content.contains("private Money total;"));
    assert_eq!(
        result.warnings[0].to_string(),
        "Order: unknown type 'Money', will use as-is"
    );
}

#[test]
fn Generator___rename_collision___warns_and_keeps_both_units() {
    let schema = Schema::from_types(vec![
        TypeDefinition::new("Account", TypeKind::Object),
        TypeDefinition::new("LegacyAccount", TypeKind::Object)
            .with_directive(Directive::new("javaName").with_arg("name", "Account")),
    ])
    .unwrap();

    let result = Generator::new(Config::default()).generate(&schema);

    assert_eq!(result.units.len(), 2);
    assert_eq!(
        result.warnings,
        vec![GenerationWarning::DuplicateFileName {
            file_name: "Account.java".to_string(),
            first: "Account".to_string(),
            second: "LegacyAccount".to_string(),
        }]
    );
}

#[test]
fn Generator___class_suffix___applies_to_file_name() {
    let mut config = Config::default();
    config.java.naming.class_suffix = "Dto".to_string();

    let result = Generator::new(config).generate(&mixed_schema());

    assert_eq!(result.units[1].file_name, "UserDto.java");
    assert_eq!(result.units[1].type_name, "User");
}

#[test]
fn Generator___generate_type___finds_single_type() {
    let generator = Generator::new(Config::default());

    let unit = generator
        .generate_type(&mixed_schema(), "Role")
        .unwrap()
        .unwrap();

    assert_eq!(unit.file_name, "Role.java");
    assert_eq!(unit.kind, TypeKind::Enum);
}

#[test]
fn Generator___generate_type_scalar_or_skipped___returns_none() {
    let generator = Generator::new(Config::default());
    let schema = mixed_schema();

    assert!(generator.generate_type(&schema, "DateTime").unwrap().is_none());
    assert!(generator.generate_type(&schema, "Internal").unwrap().is_none());
}

#[test]
fn Generator___generate_type_missing___type_not_found() {
    let generator = Generator::new(Config::default());

    let err = generator
        .generate_type(&mixed_schema(), "Nope")
        .unwrap_err();

    assert!(matches!(err, GenError::TypeNotFound(ref name) if name == "Nope"));
}
