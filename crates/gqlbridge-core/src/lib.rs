//! gqlbridge-core - Schema model, directives, configuration, and errors
//!
//! This crate provides the foundational types shared by the gqlbridge code generator:
//! - [`Schema`], [`TypeDefinition`], [`FieldDefinition`] and [`TypeReference`] for the
//!   normalized schema model
//! - [`Directive`] and [`DirectiveValue`] for directive arguments, plus the typed
//!   extractors in [`directives`]
//! - [`Config`] for generation settings
//! - [`GenError`] for error handling

mod config;
pub mod directives;
mod error;
mod schema;

pub use config::{
    CollectionKind, Config, DEFAULT_CONFIG_FILES, FeaturesConfig, FieldCase, FieldVisibility,
    JavaConfig, LombokConfig, NamingConfig, NullableHandling, OutputConfig,
    SUPPORTED_JAVA_VERSIONS, ScalarMapping, SchemaConfig, TypeMappingsConfig, ValidationConfig,
    ValidationPackage, VersionOverride,
};
pub use directives::{Directive, DirectiveValue};
pub use error::{ErrorCode, GenError, GenResult, TypeMappingWarning};
pub use schema::{
    EnumValueDefinition, FieldDefinition, Schema, TypeDefinition, TypeKind, TypeReference,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Config, Directive, DirectiveValue, EnumValueDefinition, FieldDefinition, GenError,
        GenResult, Schema, TypeDefinition, TypeKind, TypeReference,
    };
}
