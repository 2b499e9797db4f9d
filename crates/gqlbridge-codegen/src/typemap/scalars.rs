//! Java scalar tables.
//!
//! # Built-in scalars
//!
//! | GraphQL | Boxed | Primitive |
//! |---------|-------|-----------|
//! | `String` | `String` | - |
//! | `Int` | `Integer` | `int` |
//! | `Float` | `Double` | `double` |
//! | `Boolean` | `Boolean` | `boolean` |
//! | `ID` | `String` | - |
//!
//! Common scalars (`DateTime`, `UUID`, `BigDecimal`, `JSON`, ...) map to a
//! library type plus its import. `Long`, `Short`, `Byte` and `Char` also carry
//! a primitive form.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A Java type with an optional primitive form.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaScalar {
    /// The reference type name (e.g., "Integer", "LocalDate").
    pub boxed: &'static str,
    /// The primitive type name (e.g., "int"), if one exists.
    pub primitive: Option<&'static str>,
    /// Imports required by the reference type.
    pub imports: &'static [&'static str],
}

impl JavaScalar {
    const fn reference(boxed: &'static str, imports: &'static [&'static str]) -> Self {
        Self {
            boxed,
            primitive: None,
            imports,
        }
    }

    const fn primitive(primitive: &'static str, boxed: &'static str) -> Self {
        Self {
            boxed,
            primitive: Some(primitive),
            imports: &[],
        }
    }

    /// Get the appropriate Java type string.
    ///
    /// Non-null references use the primitive form when one exists.
    pub fn java_type(&self, non_null: bool) -> &'static str {
        match self.primitive {
            Some(primitive) if non_null => primitive,
            _ => self.boxed,
        }
    }
}

static BUILTIN_SCALARS: Lazy<HashMap<&'static str, JavaScalar>> = Lazy::new(|| {
    HashMap::from([
        ("String", JavaScalar::reference("String", &[])),
        ("Int", JavaScalar::primitive("int", "Integer")),
        ("Float", JavaScalar::primitive("double", "Double")),
        ("Boolean", JavaScalar::primitive("boolean", "Boolean")),
        ("ID", JavaScalar::reference("String", &[])),
    ])
});

static COMMON_SCALARS: Lazy<HashMap<&'static str, JavaScalar>> = Lazy::new(|| {
    HashMap::from([
        (
            "DateTime",
            JavaScalar::reference("LocalDateTime", &["java.time.LocalDateTime"]),
        ),
        ("Date", JavaScalar::reference("LocalDate", &["java.time.LocalDate"])),
        ("Time", JavaScalar::reference("LocalTime", &["java.time.LocalTime"])),
        ("Instant", JavaScalar::reference("Instant", &["java.time.Instant"])),
        ("UUID", JavaScalar::reference("UUID", &["java.util.UUID"])),
        (
            "BigDecimal",
            JavaScalar::reference("BigDecimal", &["java.math.BigDecimal"]),
        ),
        (
            "BigInteger",
            JavaScalar::reference("BigInteger", &["java.math.BigInteger"]),
        ),
        ("Long", JavaScalar::primitive("long", "Long")),
        ("Short", JavaScalar::primitive("short", "Short")),
        ("Byte", JavaScalar::primitive("byte", "Byte")),
        ("Char", JavaScalar::primitive("char", "Character")),
        (
            "JSON",
            JavaScalar::reference("JsonNode", &["com.fasterxml.jackson.databind.JsonNode"]),
        ),
        (
            "JSONObject",
            JavaScalar::reference(
                "ObjectNode",
                &["com.fasterxml.jackson.databind.node.ObjectNode"],
            ),
        ),
        (
            "JSONArray",
            JavaScalar::reference(
                "ArrayNode",
                &["com.fasterxml.jackson.databind.node.ArrayNode"],
            ),
        ),
        ("URL", JavaScalar::reference("URL", &["java.net.URL"])),
        ("URI", JavaScalar::reference("URI", &["java.net.URI"])),
    ])
});

const PRIMITIVE_PAIRS: [(&str, &str); 8] = [
    ("int", "Integer"),
    ("long", "Long"),
    ("short", "Short"),
    ("byte", "Byte"),
    ("float", "Float"),
    ("double", "Double"),
    ("boolean", "Boolean"),
    ("char", "Character"),
];

/// Look up a GraphQL built-in scalar
pub fn builtin_scalar(name: &str) -> Option<&'static JavaScalar> {
    BUILTIN_SCALARS.get(name)
}

/// Look up a commonly used custom scalar
pub fn common_scalar(name: &str) -> Option<&'static JavaScalar> {
    COMMON_SCALARS.get(name)
}

pub fn is_primitive(java_type: &str) -> bool {
    PRIMITIVE_PAIRS.iter().any(|(p, _)| *p == java_type)
}

pub fn is_boxed(java_type: &str) -> bool {
    PRIMITIVE_PAIRS.iter().any(|(_, b)| *b == java_type)
}

/// Box a primitive type for use in generics; any other type is returned unchanged.
pub fn box_type(java_type: &str) -> &str {
    PRIMITIVE_PAIRS
        .iter()
        .find(|(p, _)| *p == java_type)
        .map_or(java_type, |&(_, b)| b)
}

/// Unbox a wrapper type; any other type is returned unchanged.
pub fn unbox_type(java_type: &str) -> &str {
    PRIMITIVE_PAIRS
        .iter()
        .find(|(_, b)| *b == java_type)
        .map_or(java_type, |&(p, _)| p)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test]
    fn java_scalar___java_type___non_null_uses_primitive() {
        let int = builtin_scalar("Int").unwrap();

        assert_eq!(int.java_type(true), "int");
        assert_eq!(int.java_type(false), "Integer");
    }

    #[test]
    fn java_scalar___java_type___reference_same_for_both() {
        let id = builtin_scalar("ID").unwrap();

        assert_eq!(id.java_type(true), "String");
        assert_eq!(id.java_type(false), "String");
    }

    #[test]
    fn common_scalar___date_time___carries_import() {
        let scalar = common_scalar("DateTime").unwrap();

        assert_eq!(scalar.boxed, "LocalDateTime");
        assert_eq!(scalar.imports, &["java.time.LocalDateTime"]);
    }

    #[test]
    fn builtin_scalar___unknown___returns_none() {
        assert!(builtin_scalar("DateTime").is_none());
        assert!(common_scalar("Money").is_none());
    }

    #[test_case("int", "Integer")]
    #[test_case("long", "Long")]
    #[test_case("boolean", "Boolean")]
    #[test_case("char", "Character")]
    #[test_case("Integer", "Integer" ; "already boxed")]
    #[test_case("String", "String" ; "reference type")]
    fn box_type___maps_primitive_to_wrapper(input: &str, expected: &str) {
        assert_eq!(box_type(input), expected);
    }

    #[test]
    fn unbox_type___maps_wrapper_to_primitive() {
        assert_eq!(unbox_type("Double"), "double");
        assert_eq!(unbox_type("String"), "String");
    }

    #[test]
    fn is_primitive___distinguishes_forms() {
        assert!(is_primitive("short"));
        assert!(!is_primitive("Short"));
        assert!(is_boxed("Short"));
        assert!(!is_boxed("short"));
    }
}
