//! Schema directives and typed argument extraction.
//!
//! Directive arguments arrive as a [`DirectiveValue`] map. Each recognized
//! directive has an extractor returning a typed info record, or `None` when the
//! directive is absent. Extractors never fail: a missing or mistyped argument
//! degrades to its zero value.
//!
//! # Recognized directives
//!
//! | Directive | Applies to | Arguments |
//! |-----------|------------|-----------|
//! | `@skip` | type, field, enum value | none |
//! | `@javaName` | type, field, enum value | `name: String` |
//! | `@javaType` | field | `type: String`, `imports: [String]` |
//! | `@deprecated` | type, field, enum value | `reason: String` |
//! | `@annotation` | type, field, enum value | `value: String`, `imports: [String]` (repeatable) |
//! | `@constraint` | field | `minLength`, `maxLength`, `min`, `max`, `pattern`, `notNull`, `notBlank`, `email` |
//! | `@lombok` | type | `exclude: [String]`, `include: [String]` |
//! | `@collection` | field | `type: String` |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DIRECTIVE_SKIP: &str = "skip";
pub const DIRECTIVE_JAVA_NAME: &str = "javaName";
pub const DIRECTIVE_JAVA_TYPE: &str = "javaType";
pub const DIRECTIVE_DEPRECATED: &str = "deprecated";
pub const DIRECTIVE_ANNOTATION: &str = "annotation";
pub const DIRECTIVE_CONSTRAINT: &str = "constraint";
pub const DIRECTIVE_LOMBOK: &str = "lombok";
pub const DIRECTIVE_COLLECTION: &str = "collection";

/// A literal value as it appears in a directive argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<DirectiveValue>),
    Object(BTreeMap<String, DirectiveValue>),
}

impl DirectiveValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DirectiveValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view; floats are truncated toward zero.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DirectiveValue::Int(n) => Some(*n),
            DirectiveValue::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DirectiveValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DirectiveValue]> {
        match self {
            DirectiveValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        DirectiveValue::String(value.to_string())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        DirectiveValue::String(value)
    }
}

impl From<i64> for DirectiveValue {
    fn from(value: i64) -> Self {
        DirectiveValue::Int(value)
    }
}

impl From<i32> for DirectiveValue {
    fn from(value: i32) -> Self {
        DirectiveValue::Int(i64::from(value))
    }
}

impl From<f64> for DirectiveValue {
    fn from(value: f64) -> Self {
        DirectiveValue::Float(value)
    }
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        DirectiveValue::Bool(value)
    }
}

impl<T: Into<DirectiveValue>> From<Vec<T>> for DirectiveValue {
    fn from(values: Vec<T>) -> Self {
        DirectiveValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A directive applied to a type, field, or enum value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,

    #[serde(default)]
    pub arguments: BTreeMap<String, DirectiveValue>,
}

impl Directive {
    /// Create a directive with no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// Add an argument
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<DirectiveValue>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn argument(&self, name: &str) -> Option<&DirectiveValue> {
        self.arguments.get(name)
    }

    /// String argument, empty when absent or not a string
    pub fn get_str(&self, name: &str) -> &str {
        self.argument(name)
            .and_then(DirectiveValue::as_str)
            .unwrap_or("")
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.argument(name).and_then(DirectiveValue::as_int)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.argument(name).and_then(DirectiveValue::as_bool)
    }

    /// String items of a list argument; non-string items are dropped
    pub fn get_str_list(&self, name: &str) -> Vec<String> {
        self.argument(name)
            .and_then(DirectiveValue::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(DirectiveValue::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// First directive with the given name
pub fn find_directive<'a>(directives: &'a [Directive], name: &str) -> Option<&'a Directive> {
    directives.iter().find(|d| d.name == name)
}

/// `@skip` is present
pub fn is_skipped(directives: &[Directive]) -> bool {
    find_directive(directives, DIRECTIVE_SKIP).is_some()
}

/// `@javaName(name:)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaNameInfo {
    pub name: String,
}

/// Extract `@javaName`. A missing or empty `name` leaves the directive without effect.
pub fn extract_java_name(directives: &[Directive]) -> Option<JavaNameInfo> {
    let name = find_directive(directives, DIRECTIVE_JAVA_NAME)?.get_str("name");
    if name.is_empty() {
        return None;
    }
    Some(JavaNameInfo {
        name: name.to_string(),
    })
}

/// `@javaType(type:, imports:)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaTypeInfo {
    pub java_type: String,
    pub imports: Vec<String>,
}

pub fn extract_java_type(directives: &[Directive]) -> Option<JavaTypeInfo> {
    let directive = find_directive(directives, DIRECTIVE_JAVA_TYPE)?;
    let java_type = directive.get_str("type");
    if java_type.is_empty() {
        return None;
    }
    Some(JavaTypeInfo {
        java_type: java_type.to_string(),
        imports: directive.get_str_list("imports"),
    })
}

/// `@deprecated(reason:)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedInfo {
    pub reason: String,
}

pub fn extract_deprecated(directives: &[Directive]) -> Option<DeprecatedInfo> {
    find_directive(directives, DIRECTIVE_DEPRECATED).map(|d| DeprecatedInfo {
        reason: d.get_str("reason").to_string(),
    })
}

/// `@annotation(value:, imports:)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationInfo {
    pub value: String,
    pub imports: Vec<String>,
}

/// Extract every `@annotation` occurrence with a non-empty `value`, in declaration order.
pub fn extract_annotations(directives: &[Directive]) -> Vec<AnnotationInfo> {
    directives
        .iter()
        .filter(|d| d.name == DIRECTIVE_ANNOTATION)
        .filter_map(|d| {
            let value = d.get_str("value");
            (!value.is_empty()).then(|| AnnotationInfo {
                value: value.to_string(),
                imports: d.get_str_list("imports"),
            })
        })
        .collect()
}

/// `@constraint(...)` facets. Every populated facet applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintInfo {
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub pattern: String,
    pub not_null: bool,
    pub not_blank: bool,
    pub email: bool,
}

pub fn extract_constraint(directives: &[Directive]) -> Option<ConstraintInfo> {
    let d = find_directive(directives, DIRECTIVE_CONSTRAINT)?;
    Some(ConstraintInfo {
        min_length: d.get_int("minLength"),
        max_length: d.get_int("maxLength"),
        min: d.get_int("min"),
        max: d.get_int("max"),
        pattern: d.get_str("pattern").to_string(),
        not_null: d.get_bool("notNull").unwrap_or(false),
        not_blank: d.get_bool("notBlank").unwrap_or(false),
        email: d.get_bool("email").unwrap_or(false),
    })
}

/// `@lombok(exclude:, include:)` patch over configured facet defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LombokInfo {
    pub exclude: Vec<String>,
    pub include: Vec<String>,
}

pub fn extract_lombok(directives: &[Directive]) -> Option<LombokInfo> {
    find_directive(directives, DIRECTIVE_LOMBOK).map(|d| LombokInfo {
        exclude: d.get_str_list("exclude"),
        include: d.get_str_list("include"),
    })
}

/// `@collection(type:)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub shape: String,
}

pub fn extract_collection(directives: &[Directive]) -> Option<CollectionInfo> {
    let shape = find_directive(directives, DIRECTIVE_COLLECTION)?.get_str("type");
    if shape.is_empty() {
        return None;
    }
    Some(CollectionInfo {
        shape: shape.to_string(),
    })
}
