//! Property-based tests for type mapping and naming
//!
//! Checks boxing, nullability, and identifier conversions over generated
//! inputs rather than hand-picked cases.

use gqlbridge_codegen::TypeMapper;
use gqlbridge_codegen::naming::{escape_java_keyword, is_java_keyword, to_camel_case};
use gqlbridge_codegen::typemap::scalars::{box_type, is_primitive};
use gqlbridge_core::{Config, NullableHandling, Schema, TypeReference};
use proptest::prelude::*;

const SCALARS: &[&str] = &[
    "String", "Int", "Float", "Boolean", "ID", "Long", "Short", "Byte", "Char", "DateTime",
    "Date", "UUID", "BigDecimal", "JSON",
];

const JAVA_TYPES: &[&str] = &[
    "int", "long", "short", "byte", "float", "double", "boolean", "char", "Integer", "String",
    "LocalDate", "Money",
];

const KEYWORDS: &[&str] = &[
    "class", "int", "default", "package", "record", "var", "yield", "true", "null", "_",
];

fn arb_scalar() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SCALARS)
}

fn arb_policy() -> impl Strategy<Value = NullableHandling> {
    prop_oneof![
        Just(NullableHandling::Wrapper),
        Just(NullableHandling::Optional),
        Just(NullableHandling::Annotation),
    ]
}

// snake_case identifier: lowercase words joined by underscores
fn arb_snake_identifier() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..5).prop_map(|parts| parts.join("_"))
}

fn config_with(policy: NullableHandling) -> Config {
    let mut config = Config::default();
    config.java.nullable_handling = policy;
    config
}

proptest! {
    /// Property: boxing is idempotent for every Java type name
    #[test]
    fn proptest_box_type_idempotent(java_type in prop::sample::select(JAVA_TYPES)) {
        let once = box_type(java_type);
        prop_assert_eq!(box_type(once), once);
        prop_assert!(!is_primitive(once));
    }

    /// Property: boxing leaves arbitrary non-primitive names untouched
    #[test]
    fn proptest_box_type_passes_through_unknown(name in "[A-Z][A-Za-z0-9]{0,12}") {
        prop_assert_eq!(box_type(&name), name.as_str());
    }

    /// Property: a nullable top-level scalar never maps to a primitive
    #[test]
    fn proptest_nullable_never_primitive(scalar in arb_scalar(), policy in arb_policy()) {
        let config = config_with(policy);
        let schema = Schema::default();
        let mapper = TypeMapper::new(&config, &schema);

        let result = mapper.map(Some(&TypeReference::named(scalar)), true).unwrap();

        prop_assert!(!result.is_primitive);
        prop_assert!(!is_primitive(&result.java_type), "{} -> {}", scalar, result.java_type);
        prop_assert_eq!(result.is_optional, policy == NullableHandling::Optional);
    }

    /// Property: list elements are always boxed, whatever the nullability
    #[test]
    fn proptest_list_elements_boxed(
        scalar in arb_scalar(),
        policy in arb_policy(),
        element_non_null in any::<bool>(),
        list_non_null in any::<bool>(),
    ) {
        let config = config_with(policy);
        let schema = Schema::default();
        let mapper = TypeMapper::new(&config, &schema);
        let mut element = TypeReference::named(scalar);
        element.non_null = element_non_null;
        let mut list = TypeReference::list_of(element);
        list.non_null = list_non_null;

        let result = mapper.map(Some(&list), true).unwrap();
        let element_type = result.element_type.clone().unwrap_or_default();

        prop_assert!(result.is_collection);
        prop_assert!(!result.is_optional);
        prop_assert!(!is_primitive(&element_type));
        prop_assert_eq!(result.java_type, format!("List<{element_type}>"));
    }

    /// Property: camelCase conversion of a snake_case name is a fixed point
    #[test]
    fn proptest_camel_case_fixed_point(name in arb_snake_identifier()) {
        let camel = to_camel_case(&name);

        prop_assert_eq!(to_camel_case(&camel), camel.clone());
        prop_assert!(!camel.contains('_'));
        prop_assert!(camel.chars().next().is_some_and(|c| c.is_ascii_lowercase()));
    }

    /// Property: keyword escaping is idempotent and never yields a keyword
    #[test]
    fn proptest_escape_idempotent(name in "[a-z_][a-z0-9_]{0,10}") {
        let escaped = escape_java_keyword(&name);

        prop_assert_eq!(escape_java_keyword(&escaped), escaped.clone());
        prop_assert!(!is_java_keyword(&escaped));
    }

    /// Property: escaped reserved words are no longer reserved
    #[test]
    fn proptest_escape_keywords(keyword in prop::sample::select(KEYWORDS)) {
        let escaped = escape_java_keyword(keyword);

        prop_assert!(is_java_keyword(keyword));
        prop_assert_eq!(escaped.clone(), format!("_{keyword}"));
        prop_assert_eq!(escape_java_keyword(&escaped), escaped);
    }
}
