//! Generation orchestrator and per-type generators.
//!
//! [`Generator::generate`] walks the schema in declaration order and
//! dispatches each type to the [`TypeGenerator`] for its kind. A type that
//! fails is recorded in [`GenerationResult::errors`]; the others still
//! generate.

mod class;
mod context;
mod enums;
mod field;
mod imports;
mod interface;
mod union;

pub use class::ClassGenerator;
pub use context::{GenerationContext, TypeScope};
pub use enums::EnumGenerator;
pub use field::{FieldContext, is_field_skipped};
pub use imports::ImportSet;
pub use interface::InterfaceGenerator;
pub use union::UnionGenerator;

use gqlbridge_core::directives::DIRECTIVE_JAVA_TYPE;
use gqlbridge_core::{
    Config, GenError, GenResult, Schema, TypeDefinition, TypeKind, TypeMappingWarning,
};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

const FILE_EXTENSION: &str = "java";

/// Source generation for one kind of type.
///
/// An empty string means the type was skipped and produces no file.
pub trait TypeGenerator {
    fn generate(&self, ctx: &GenerationContext<'_>, type_def: &TypeDefinition) -> GenResult<String>;
}

/// Generator for a kind, `None` for kinds that produce no file
fn generator_for(kind: TypeKind) -> Option<&'static dyn TypeGenerator> {
    match kind {
        TypeKind::Object | TypeKind::InputObject => Some(&ClassGenerator),
        TypeKind::Interface => Some(&InterfaceGenerator),
        TypeKind::Enum => Some(&EnumGenerator),
        TypeKind::Union => Some(&UnionGenerator),
        TypeKind::Scalar => None,
    }
}

/// One generated Java source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Schema name of the type
    pub type_name: String,
    pub kind: TypeKind,
    /// `<JavaName>.java`
    pub file_name: String,
    pub content: String,
}

/// Non-fatal findings of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// A field of `owner` references a type that is not known
    UnresolvedType {
        owner: String,
        warning: TypeMappingWarning,
    },

    /// Two types produce the same file; the later one overwrites the earlier
    DuplicateFileName {
        file_name: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::UnresolvedType { owner, warning } => {
                write!(f, "{owner}: {warning}")
            }
            GenerationWarning::DuplicateFileName {
                file_name,
                first,
                second,
            } => write!(
                f,
                "{file_name} is produced by both '{first}' and '{second}', keeping '{second}'"
            ),
        }
    }
}

/// Aggregate counts of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub total: usize,
    /// Object and input object types
    pub classes: usize,
    /// Interface and union types
    pub interfaces: usize,
    pub enums: usize,
    pub skipped: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classes, {} interfaces, {} enums",
            self.classes, self.interfaces, self.enums
        )
    }
}

/// Everything a run produced
#[derive(Debug, Default)]
pub struct GenerationResult {
    pub units: Vec<GeneratedUnit>,
    /// Schema names of types skipped by directive
    pub skipped: Vec<String>,
    pub errors: Vec<GenError>,
    pub warnings: Vec<GenerationWarning>,
}

impl GenerationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn stats(&self) -> GenerationStats {
        let mut stats = GenerationStats {
            total: self.units.len(),
            skipped: self.skipped.len(),
            errors: self.errors.len(),
            warnings: self.warnings.len(),
            ..GenerationStats::default()
        };

        for unit in &self.units {
            match unit.kind {
                TypeKind::Object | TypeKind::InputObject => stats.classes += 1,
                TypeKind::Interface | TypeKind::Union => stats.interfaces += 1,
                TypeKind::Enum => stats.enums += 1,
                TypeKind::Scalar => {}
            }
        }

        stats
    }
}

/// Generates Java sources from a schema.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate every type in the schema
    pub fn generate(&self, schema: &Schema) -> GenerationResult {
        let ctx = GenerationContext::new(&self.config, schema);
        let mut result = GenerationResult::default();
        let mut files: HashMap<String, String> = HashMap::new();

        for type_def in schema.types() {
            match self.generate_one(&ctx, type_def) {
                Ok(Some(unit)) => {
                    result.warnings.extend(unresolved_types(&ctx, type_def));

                    if let Some(first) = files.insert(unit.file_name.clone(), type_def.name.clone())
                    {
                        tracing::warn!(
                            file_name = %unit.file_name,
                            first = %first,
                            second = %type_def.name,
                            "duplicate file name"
                        );
                        result.warnings.push(GenerationWarning::DuplicateFileName {
                            file_name: unit.file_name.clone(),
                            first,
                            second: type_def.name.clone(),
                        });
                    }

                    result.units.push(unit);
                }
                Ok(None) if type_def.kind != TypeKind::Scalar => {
                    tracing::debug!(type_name = %type_def.name, "skipped type");
                    result.skipped.push(type_def.name.clone());
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(type_name = %type_def.name, error = %err, "type failed");
                    result.errors.push(err);
                }
            }
        }

        let stats = result.stats();
        tracing::debug!(
            total = stats.total,
            skipped = stats.skipped,
            errors = stats.errors,
            warnings = stats.warnings,
            "generation finished"
        );

        result
    }

    /// Generate a single named type. `Ok(None)` when the type is skipped or
    /// is a scalar.
    pub fn generate_type(&self, schema: &Schema, name: &str) -> GenResult<Option<GeneratedUnit>> {
        let type_def = schema
            .get_type(name)
            .ok_or_else(|| GenError::TypeNotFound(name.to_string()))?;
        let ctx = GenerationContext::new(&self.config, schema);
        self.generate_one(&ctx, type_def)
    }

    fn generate_one(
        &self,
        ctx: &GenerationContext<'_>,
        type_def: &TypeDefinition,
    ) -> GenResult<Option<GeneratedUnit>> {
        let Some(generator) = generator_for(type_def.kind) else {
            return Ok(None);
        };

        let content = generator.generate(ctx, type_def)?;
        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(GeneratedUnit {
            type_name: type_def.name.clone(),
            kind: type_def.kind,
            file_name: format!("{}.{FILE_EXTENSION}", ctx.naming().type_name(type_def)),
            content,
        }))
    }
}

/// Unknown type names referenced by the retained fields of `type_def`, once each
fn unresolved_types(ctx: &GenerationContext<'_>, type_def: &TypeDefinition) -> Vec<GenerationWarning> {
    let mut seen = BTreeSet::new();

    type_def
        .fields
        .iter()
        .filter(|field| !is_field_skipped(field) && !field.has_directive(DIRECTIVE_JAVA_TYPE))
        .filter_map(|field| ctx.mapper().validate(&field.type_ref).err())
        .filter(|warning| seen.insert(warning.type_name.clone()))
        .map(|warning| {
            tracing::warn!(type_name = %type_def.name, unresolved = %warning.type_name, "{warning}");
            GenerationWarning::UnresolvedType {
                owner: type_def.name.clone(),
                warning,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;
