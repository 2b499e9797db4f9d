//! Resolution of schema type references to Java types.

use super::collections::{CollectionShape, OPTIONAL_IMPORT, format_optional};
use super::scalars::{self, JavaScalar};
use crate::naming::NamingHelper;
use gqlbridge_core::directives::{extract_collection, extract_java_type};
use gqlbridge_core::{
    Config, FieldDefinition, GenError, GenResult, NullableHandling, Schema, TypeMappingWarning,
    TypeReference,
};

/// Java type chosen for one type reference
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingResult {
    pub java_type: String,
    pub imports: Vec<String>,
    pub is_primitive: bool,
    pub is_collection: bool,
    pub is_optional: bool,
    /// Boxed element type, set for collections only
    pub element_type: Option<String>,
    /// Imports contributed by the element, kept so a collection override can
    /// replace only the collection's own imports
    element_imports: Vec<String>,
}

impl MappingResult {
    fn reference(java_type: impl Into<String>, imports: Vec<String>) -> Self {
        Self {
            java_type: java_type.into(),
            imports,
            ..Self::default()
        }
    }

    /// `boolean` or `Boolean`
    pub fn is_boolean(&self) -> bool {
        self.java_type == "boolean" || self.java_type == "Boolean"
    }
}

/// Where a named type was resolved
enum Resolved {
    Custom(MappingResult),
    Scalar(MappingResult, &'static JavaScalar),
    Declared(MappingResult),
    Unknown(MappingResult),
}

/// Maps schema type references to Java types.
///
/// Named types resolve in order through the configured scalar overrides, the
/// built-in scalars, the common scalars, the schema's declared types, and
/// finally pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    config: &'a Config,
    schema: &'a Schema,
    naming: NamingHelper<'a>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(config: &'a Config, schema: &'a Schema) -> Self {
        Self {
            config,
            schema,
            naming: NamingHelper::new(&config.java.naming),
        }
    }

    /// Map a type reference. `None` maps to `Object`.
    ///
    /// Nullability policy and primitive selection apply only when `top_level`
    /// is set; list elements are always boxed.
    pub fn map(
        &self,
        type_ref: Option<&TypeReference>,
        top_level: bool,
    ) -> GenResult<MappingResult> {
        match type_ref {
            None => Ok(MappingResult::reference("Object", Vec::new())),
            Some(type_ref) => self.map_ref(type_ref, top_level),
        }
    }

    fn map_ref(&self, type_ref: &TypeReference, top_level: bool) -> GenResult<MappingResult> {
        check_well_formed(type_ref)?;

        if let Some(elem) = &type_ref.elem {
            let element = self.map_ref(elem, false)?;
            let element_type = scalars::box_type(&element.java_type).to_string();
            let shape = CollectionShape::for_kind(self.config.java.collection_type);

            let mut imports: Vec<String> = shape.imports.iter().map(|s| s.to_string()).collect();
            imports.extend(element.imports.iter().cloned());

            return Ok(MappingResult {
                java_type: shape.format(&element_type),
                imports,
                is_collection: true,
                element_type: Some(element_type),
                element_imports: element.imports,
                ..MappingResult::default()
            });
        }

        let resolved = self.resolve_named(&type_ref.name);

        if top_level && !type_ref.non_null {
            return Ok(self.apply_nullability(resolved.into_result()));
        }

        if top_level && let Resolved::Scalar(mut result, scalar) = resolved {
            result.java_type = scalar.java_type(type_ref.non_null).to_string();
            result.is_primitive = scalar.primitive.is_some();
            return Ok(result);
        }

        Ok(resolved.into_result())
    }

    fn resolve_named(&self, name: &str) -> Resolved {
        if let Some(mapping) = self.config.type_mappings.scalars.get(name) {
            let mut result =
                MappingResult::reference(mapping.java_type.clone(), mapping.imports.clone());
            result.is_primitive = scalars::is_primitive(&mapping.java_type);
            return Resolved::Custom(result);
        }

        if let Some(scalar) = scalars::builtin_scalar(name).or_else(|| scalars::common_scalar(name))
        {
            let imports = scalar.imports.iter().map(|s| s.to_string()).collect();
            return Resolved::Scalar(MappingResult::reference(scalar.boxed, imports), scalar);
        }

        if let Some(type_def) = self.schema.get_type(name) {
            return Resolved::Declared(MappingResult::reference(
                self.naming.type_name(type_def),
                Vec::new(),
            ));
        }

        Resolved::Unknown(MappingResult::reference(name, Vec::new()))
    }

    fn apply_nullability(&self, mut result: MappingResult) -> MappingResult {
        match self.config.java.nullable_handling {
            NullableHandling::Optional => {
                result.java_type = format_optional(&result.java_type);
                result.imports.push(OPTIONAL_IMPORT.to_string());
                result.is_optional = true;
            }
            NullableHandling::Wrapper | NullableHandling::Annotation => {
                result.java_type = scalars::box_type(&result.java_type).to_string();
            }
        }
        result.is_primitive = false;
        result
    }

    /// Map a field, honoring `@javaType` and `@collection`.
    pub fn map_field(&self, field: &FieldDefinition) -> GenResult<MappingResult> {
        if let Some(custom) = extract_java_type(&field.directives) {
            tracing::trace!(field = %field.name, java_type = %custom.java_type, "javaType override");
            let is_primitive = scalars::is_primitive(&custom.java_type);
            let mut result = MappingResult::reference(custom.java_type, custom.imports);
            result.is_primitive = is_primitive;
            return Ok(result);
        }

        let mut result = self.map(Some(&field.type_ref), true)?;

        if let Some(collection) = extract_collection(&field.directives)
            && result.is_collection
            && let Some(element_type) = &result.element_type
        {
            let shape = CollectionShape::by_name(&collection.shape);
            tracing::trace!(field = %field.name, shape = shape.name, "collection override");
            result.java_type = shape.format(element_type);
            result.imports = shape.imports.iter().map(|s| s.to_string()).collect();
            result.imports.extend(result.element_imports.iter().cloned());
        }

        Ok(result)
    }

    /// Check that every named leaf resolves to a known type
    pub fn validate(&self, type_ref: &TypeReference) -> Result<(), TypeMappingWarning> {
        if let Some(elem) = &type_ref.elem {
            return self.validate(elem);
        }
        if type_ref.name.is_empty() || self.is_known(&type_ref.name) {
            return Ok(());
        }
        Err(TypeMappingWarning::new(&type_ref.name))
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.config.type_mappings.scalars.contains_key(name)
            || scalars::builtin_scalar(name).is_some()
            || scalars::common_scalar(name).is_some()
            || self.schema.contains(name)
    }
}

impl Resolved {
    fn into_result(self) -> MappingResult {
        match self {
            Resolved::Custom(r)
            | Resolved::Scalar(r, _)
            | Resolved::Declared(r)
            | Resolved::Unknown(r) => r,
        }
    }
}

fn check_well_formed(type_ref: &TypeReference) -> GenResult<()> {
    match (type_ref.name.is_empty(), type_ref.elem.is_some()) {
        (true, false) => Err(GenError::type_mapping(
            "",
            "type reference has neither a name nor an element",
        )),
        (false, true) => Err(GenError::type_mapping(
            &type_ref.name,
            "type reference has both a name and an element",
        )),
        _ => Ok(()),
    }
}
