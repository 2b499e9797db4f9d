//! Naming convention utilities for Java generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `display_name` | [`to_camel_case`] | `displayName` |
//! | `DisplayName` | [`to_camel_case`] | `displayName` |
//! | `displayName` | [`to_snake_case`] | `display_name` |
//! | `word` | [`capitalize`] | `Word` |
//! | `class` | [`escape_java_keyword`] | `_class` |
//!
//! [`NamingHelper`] applies the configured conventions to schema elements.
//! A `@javaName` directive always wins over the convention.

use gqlbridge_core::directives::extract_java_name;
use gqlbridge_core::{
    EnumValueDefinition, FieldCase, FieldDefinition, NamingConfig, TypeDefinition, TypeKind,
};

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "var", "yield", "record", "sealed",
    "permits", "non-sealed", "_",
];

/// Applies naming conventions and `@javaName` overrides.
#[derive(Debug, Clone, Copy)]
pub struct NamingHelper<'a> {
    config: &'a NamingConfig,
}

impl<'a> NamingHelper<'a> {
    pub fn new(config: &'a NamingConfig) -> Self {
        Self { config }
    }

    /// Java name for a declared type.
    ///
    /// Interfaces get the configured prefix, objects and inputs the configured
    /// suffix. A `@javaName` directive replaces the whole name.
    pub fn type_name(&self, type_def: &TypeDefinition) -> String {
        if let Some(rename) = extract_java_name(&type_def.directives) {
            return rename.name;
        }
        self.decorate(&type_def.name, type_def.kind)
    }

    /// Apply the kind-specific prefix or suffix
    pub fn decorate(&self, name: &str, kind: TypeKind) -> String {
        match kind {
            TypeKind::Interface => format!("{}{}", self.config.interface_prefix, name),
            TypeKind::Object | TypeKind::InputObject => {
                format!("{}{}", name, self.config.class_suffix)
            }
            TypeKind::Enum | TypeKind::Union | TypeKind::Scalar => name.to_string(),
        }
    }

    /// Java identifier for a field, keyword-escaped
    pub fn field_name(&self, field: &FieldDefinition) -> String {
        let name = match extract_java_name(&field.directives) {
            Some(rename) => rename.name,
            None => match self.config.field_case {
                FieldCase::CamelCase => to_camel_case(&field.name),
                FieldCase::SnakeCase => to_snake_case(&field.name),
            },
        };
        escape_java_keyword(&name)
    }

    /// Enum constants keep their schema spelling unless renamed.
    pub fn enum_value_name(&self, value: &EnumValueDefinition) -> String {
        match extract_java_name(&value.directives) {
            Some(rename) => rename.name,
            None => value.name.clone(),
        }
    }

    /// `isX` for booleans not already starting with "is", `getX` otherwise
    pub fn getter_name(&self, field_name: &str, is_boolean: bool) -> String {
        let prefix = if is_boolean && !field_name.to_lowercase().starts_with("is") {
            "is"
        } else {
            "get"
        };
        format!("{prefix}{}", capitalize(field_name))
    }

    pub fn setter_name(&self, field_name: &str) -> String {
        format!("set{}", capitalize(field_name))
    }
}

/// Convert snake_case, kebab-case or PascalCase to camelCase.
///
/// # Examples
///
/// ```
/// use gqlbridge_codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(to_camel_case("DisplayName"), "displayName");
/// assert_eq!(to_camel_case("URLValue"), "urlValue");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    if s.contains(['_', '-']) {
        let mut parts = s.split(['_', '-']).filter(|part| !part.is_empty());
        let mut result = parts.next().map(str::to_lowercase).unwrap_or_default();
        for part in parts {
            result.push_str(&capitalize(&part.to_lowercase()));
        }
        return result;
    }

    // Lowercase the leading uppercase run. When a lowercase letter follows an
    // acronym, its last capital starts the next word ("URLValue" -> "urlValue").
    let chars: Vec<char> = s.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lower_until = match run {
        0 => 0,
        n if n == chars.len() => n,
        1 => 1,
        n if chars[n].is_lowercase() => n - 1,
        n => n,
    };

    chars
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            if i < lower_until {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec![*c]
            }
        })
        .collect()
}

/// Convert camelCase or PascalCase to snake_case.
///
/// Word boundaries are a lowercase letter or digit followed by a capital, and
/// the last capital of an acronym followed by a lowercase letter.
///
/// # Examples
///
/// ```
/// use gqlbridge_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("displayName"), "display_name");
/// assert_eq!(to_snake_case("userID"), "user_id");
/// assert_eq!(to_snake_case("URLValue"), "url_value");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let boundary = i > 0 && chars[i - 1] != '_' && {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            };
            if boundary {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else if c == '-' {
            result.push('_');
        } else {
            result.push(c);
        }
    }

    result
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use gqlbridge_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

pub fn is_java_keyword(word: &str) -> bool {
    JAVA_KEYWORDS.contains(&word)
}

/// Prefix reserved words with an underscore. Idempotent.
pub fn escape_java_keyword(name: &str) -> String {
    if is_java_keyword(name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}
