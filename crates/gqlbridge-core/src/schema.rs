//! Normalized schema model consumed by the generator.
//!
//! The model is produced outside this crate (from SDL or introspection) and
//! read here as a JSON document:
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "User",
//!       "kind": "OBJECT",
//!       "fields": [
//!         { "name": "id", "type": { "name": "ID", "nonNull": true } },
//!         { "name": "posts", "type": { "elem": { "name": "Post" } } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::directives::{Directive, find_directive};
use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of a declared schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Object,
    Interface,
    InputObject,
    Enum,
    Union,
    Scalar,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::Enum => "ENUM",
            TypeKind::Union => "UNION",
            TypeKind::Scalar => "SCALAR",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a named type, a list, or a non-null qualified form of either.
///
/// Exactly one of `name` (leaf) or `elem` (list) is set at each level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<Box<TypeReference>>,

    #[serde(default)]
    pub non_null: bool,
}

impl TypeReference {
    /// Nullable named type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elem: None,
            non_null: false,
        }
    }

    /// Nullable list of `elem`
    pub fn list_of(elem: TypeReference) -> Self {
        Self {
            name: String::new(),
            elem: Some(Box::new(elem)),
            non_null: false,
        }
    }

    /// Same reference marked non-null at this level
    pub fn non_null(mut self) -> Self {
        self.non_null = true;
        self
    }

    pub fn is_list(&self) -> bool {
        self.elem.is_some()
    }

    pub fn is_named(&self) -> bool {
        self.elem.is_none()
    }

    /// Name at the leaf, recursing through list levels
    pub fn innermost_named_type(&self) -> &str {
        match &self.elem {
            Some(elem) => elem.innermost_named_type(),
            None => &self.name,
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.elem {
            Some(elem) => write!(f, "[{elem}]")?,
            None => f.write_str(&self.name)?,
        }
        if self.non_null {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// A field of an object, input object, or interface type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub type_ref: TypeReference,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<crate::DirectiveValue>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_ref,
            directives: Vec::new(),
            default_value: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn has_directive(&self, name: &str) -> bool {
        find_directive(&self.directives, name).is_some()
    }
}

/// A constant of an enum type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDefinition {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl EnumValueDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

/// One declared schema type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    pub name: String,

    pub kind: TypeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumValueDefinition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: Vec::new(),
            enum_values: Vec::new(),
            interfaces: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_enum_value(mut self, value: EnumValueDefinition) -> Self {
        self.enum_values.push(value);
        self
    }

    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn has_directive(&self, name: &str) -> bool {
        find_directive(&self.directives, name).is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    types: Vec<TypeDefinition>,
}

/// The complete set of declared types, in declaration order, indexed by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SchemaDocument", into = "SchemaDocument")]
pub struct Schema {
    types: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
}

impl TryFrom<SchemaDocument> for Schema {
    type Error = GenError;

    fn try_from(doc: SchemaDocument) -> GenResult<Self> {
        Schema::from_types(doc.types)
    }
}

impl From<Schema> for SchemaDocument {
    fn from(schema: Schema) -> Self {
        SchemaDocument {
            types: schema.types,
        }
    }
}

impl Schema {
    /// Build a schema from type definitions, rejecting duplicate names
    pub fn from_types(types: Vec<TypeDefinition>) -> GenResult<Self> {
        let mut index = HashMap::with_capacity(types.len());
        for (position, type_def) in types.iter().enumerate() {
            if type_def.name.is_empty() {
                return Err(GenError::Schema(format!(
                    "type at position {position} has an empty name"
                )));
            }
            if index.insert(type_def.name.clone(), position).is_some() {
                return Err(GenError::Schema(format!(
                    "duplicate type definition '{}'",
                    type_def.name
                )));
            }
        }
        Ok(Self { types, index })
    }

    /// Parse a normalized schema document
    pub fn from_json_str(json: &str) -> GenResult<Self> {
        let schema: Schema = serde_json::from_str(json)?;
        tracing::debug!(types = schema.len(), "loaded schema");
        Ok(schema)
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).and_then(|&i| self.types.get(i))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All types in declaration order
    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    pub fn types_by_kind(&self, kind: TypeKind) -> impl Iterator<Item = &TypeDefinition> {
        self.types.iter().filter(move |t| t.kind == kind)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
