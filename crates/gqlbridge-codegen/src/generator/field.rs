//! Field declarations, accessors, and interface methods.

use super::context::{GenerationContext, TypeScope, write_description};
use crate::typemap::MappingResult;
use gqlbridge_core::directives::is_skipped;
use gqlbridge_core::{FieldDefinition, GenResult, TypeDefinition};

/// Prefix reserved for introspection types
const INTROSPECTION_PREFIX: &str = "__";

const MEMBER_INDENT: &str = "    ";

/// Whether a field is left out of the generated type.
///
/// `@skip` fields and fields typed with an introspection type are dropped
/// before their type is mapped.
pub fn is_field_skipped(field: &FieldDefinition) -> bool {
    is_skipped(&field.directives)
        || field
            .type_ref
            .innermost_named_type()
            .starts_with(INTROSPECTION_PREFIX)
}

/// A field resolved to its Java name and type
#[derive(Debug, Clone)]
pub struct FieldContext<'f> {
    pub field: &'f FieldDefinition,
    pub name: String,
    pub mapping: MappingResult,
}

impl<'f> FieldContext<'f> {
    /// Resolve `field` of `owner`. Mapping failures are attributed to the
    /// owner and the field.
    pub fn new(
        ctx: &GenerationContext<'_>,
        owner: &TypeDefinition,
        field: &'f FieldDefinition,
    ) -> GenResult<Self> {
        let mapping = ctx
            .mapper()
            .map_field(field)
            .map_err(|err| err.in_type(&owner.name, Some(&field.name)))?;

        Ok(Self {
            field,
            name: ctx.naming().field_name(field),
            mapping,
        })
    }

    /// Resolve every retained field of `owner`, in declaration order
    pub fn collect(
        ctx: &GenerationContext<'_>,
        owner: &'f TypeDefinition,
    ) -> GenResult<Vec<FieldContext<'f>>> {
        owner
            .fields
            .iter()
            .filter(|field| {
                let skipped = is_field_skipped(field);
                if skipped {
                    tracing::trace!(type_name = %owner.name, field = %field.name, "skipping field");
                }
                !skipped
            })
            .map(|field| FieldContext::new(ctx, owner, field))
            .collect()
    }

    pub fn java_type(&self) -> &str {
        &self.mapping.java_type
    }

    pub fn getter_name(&self, ctx: &GenerationContext<'_>) -> String {
        ctx.naming()
            .getter_name(&self.name, self.mapping.is_boolean())
    }

    pub fn setter_name(&self, ctx: &GenerationContext<'_>) -> String {
        ctx.naming().setter_name(&self.name)
    }
}

/// Field declaration with Javadoc and deprecation, validation, and custom
/// annotations
pub fn write_field(
    ctx: &GenerationContext<'_>,
    scope: &mut TypeScope,
    fc: &FieldContext<'_>,
    out: &mut String,
) {
    scope.require(&fc.mapping.imports);
    write_description(out, fc.field.description.as_deref(), MEMBER_INDENT);

    let mut annotations = ctx.custom().deprecated(&fc.field.directives);
    annotations.extend(ctx.validation().field_annotations(fc.field));
    annotations.extend(ctx.custom().annotations(&fc.field.directives));
    scope.write_annotations(out, annotations, MEMBER_INDENT);

    out.push_str(MEMBER_INDENT);
    if let Some(visibility) = ctx.visibility() {
        out.push_str(visibility);
        out.push(' ');
    }
    out.push_str(&format!("{} {};\n", fc.java_type(), fc.name));
}

pub fn write_getter(ctx: &GenerationContext<'_>, fc: &FieldContext<'_>, out: &mut String) {
    out.push_str(&format!(
        "    public {} {}() {{\n        return this.{};\n    }}\n",
        fc.java_type(),
        fc.getter_name(ctx),
        fc.name
    ));
}

pub fn write_setter(ctx: &GenerationContext<'_>, fc: &FieldContext<'_>, out: &mut String) {
    out.push_str(&format!(
        "    public void {}({} {}) {{\n        this.{} = {};\n    }}\n",
        fc.setter_name(ctx),
        fc.java_type(),
        fc.name,
        fc.name,
        fc.name
    ));
}

/// Abstract getter signature for an interface member
pub fn write_interface_method(
    ctx: &GenerationContext<'_>,
    scope: &mut TypeScope,
    fc: &FieldContext<'_>,
    out: &mut String,
) {
    scope.require(&fc.mapping.imports);
    write_description(out, fc.field.description.as_deref(), MEMBER_INDENT);

    let mut annotations = ctx.custom().deprecated(&fc.field.directives);
    annotations.extend(ctx.custom().annotations(&fc.field.directives));
    scope.write_annotations(out, annotations, MEMBER_INDENT);

    out.push_str(&format!(
        "{MEMBER_INDENT}{} {}();\n",
        fc.java_type(),
        fc.getter_name(ctx)
    ));
}
