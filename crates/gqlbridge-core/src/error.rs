//! Error types for gqlbridge

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Category of a [`GenError`], stable across releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Config,
    Parse,
    Typemap,
    Generate,
    Output,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::Parse => "PARSE",
            ErrorCode::Typemap => "TYPEMAP",
            ErrorCode::Generate => "GENERATE",
            ErrorCode::Output => "OUTPUT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// Invalid configuration setting
    #[error("configuration error in '{field}': {message}")]
    Config { field: String, message: String },

    /// Schema document could not be read into the schema model
    #[error("schema error: {0}")]
    Schema(String),

    /// Structurally invalid type reference
    #[error("type mapping error for '{source_type}': {message}")]
    TypeMapping {
        source_type: String,
        message: String,
    },

    /// Failure while synthesizing one type's source
    #[error("failed to generate {type_name}{}: {cause}", field_suffix(.field_name))]
    Generation {
        type_name: String,
        field_name: Option<String>,
        #[source]
        cause: Box<GenError>,
    },

    /// Single-type generation requested for a name absent from the schema
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// Writing a generated unit failed
    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn field_suffix(field_name: &Option<String>) -> String {
    match field_name {
        Some(name) => format!(".{name}"),
        None => String::new(),
    }
}

impl GenError {
    /// Create a configuration error for the given setting
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a type mapping error for the given source type
    pub fn type_mapping(source_type: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::TypeMapping {
            source_type: source_type.into(),
            message: message.into(),
        }
    }

    /// Wrap an error with the type (and optionally field) it was raised for
    pub fn in_type(self, type_name: impl Into<String>, field_name: Option<&str>) -> Self {
        GenError::Generation {
            type_name: type_name.into(),
            field_name: field_name.map(str::to_string),
            cause: Box::new(self),
        }
    }

    /// Returns the error category
    pub fn code(&self) -> ErrorCode {
        match self {
            GenError::Config { .. } => ErrorCode::Config,
            GenError::Schema(_) => ErrorCode::Parse,
            GenError::TypeMapping { .. } => ErrorCode::Typemap,
            GenError::Generation { .. } | GenError::TypeNotFound(_) => ErrorCode::Generate,
            GenError::Output { .. } => ErrorCode::Output,
        }
    }

    /// Schema type the error is attributed to, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            GenError::Generation { type_name, .. } => Some(type_name),
            GenError::TypeNotFound(name) => Some(name),
            _ => None,
        }
    }

    /// Schema field the error is attributed to, if any
    pub fn field_name(&self) -> Option<&str> {
        match self {
            GenError::Generation { field_name, .. } => field_name.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Schema(err.to_string())
    }
}

/// Non-fatal notice that a named type could not be resolved.
///
/// Generation proceeds and emits the name verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeMappingWarning {
    /// The unresolved schema type name
    pub type_name: String,
}

impl TypeMappingWarning {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl fmt::Display for TypeMappingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type '{}', will use as-is", self.type_name)
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
