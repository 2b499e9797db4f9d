//! Annotation generators.
//!
//! Three independent generators contribute annotations to a type, field, or
//! enum value:
//!
//! - [`LombokGenerator`]: structural boilerplate (`@Data`, `@Builder`, ...)
//! - [`ValidationGenerator`]: Bean Validation constraints
//! - [`CustomGenerator`]: `@annotation` pass-through and `@Deprecated`
//!
//! Their outputs are concatenated as deprecation, Lombok, validation, custom.

pub mod custom;
pub mod lombok;
pub mod validation;

pub use custom::CustomGenerator;
pub use lombok::{LombokFacet, LombokGenerator};
pub use validation::ValidationGenerator;

/// Annotation lines with the imports they require
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    pub annotations: Vec<String>,
    pub imports: Vec<String>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an annotation and, when given, its import
    pub fn push(&mut self, annotation: impl Into<String>, import: Option<&str>) {
        self.annotations.push(annotation.into());
        if let Some(import) = import {
            self.imports.push(import.to_string());
        }
    }

    pub fn contains(&self, annotation: &str) -> bool {
        self.annotations.iter().any(|a| a == annotation)
    }

    /// Append another set, keeping order
    pub fn extend(&mut self, other: AnnotationSet) {
        self.annotations.extend(other.annotations);
        self.imports.extend(other.imports);
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }
}
