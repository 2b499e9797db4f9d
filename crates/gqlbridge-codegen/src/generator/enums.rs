//! Java enums for enum types.

use super::TypeGenerator;
use super::context::{GenerationContext, write_description};
use gqlbridge_core::directives::is_skipped;
use gqlbridge_core::{EnumValueDefinition, GenResult, TypeDefinition};

#[derive(Debug, Clone, Copy, Default)]
pub struct EnumGenerator;

impl TypeGenerator for EnumGenerator {
    fn generate(&self, ctx: &GenerationContext<'_>, type_def: &TypeDefinition) -> GenResult<String> {
        if is_skipped(&type_def.directives) {
            return Ok(String::new());
        }

        let mut scope = ctx.scope(type_def);
        let mut body = String::new();

        write_description(&mut body, type_def.description.as_deref(), "");

        let mut annotations = ctx.custom().deprecated(&type_def.directives);
        annotations.extend(ctx.custom().annotations(&type_def.directives));
        scope.write_annotations(&mut body, annotations, "");

        body.push_str(&format!("public enum {} {{\n", scope.type_name));

        // Terminator goes on the last retained value, not the last declared one
        let values: Vec<&EnumValueDefinition> = type_def
            .enum_values
            .iter()
            .filter(|value| !is_skipped(&value.directives))
            .collect();

        for (position, value) in values.iter().enumerate() {
            write_description(&mut body, value.description.as_deref(), "    ");

            let mut annotations = ctx.custom().deprecated(&value.directives);
            annotations.extend(ctx.custom().annotations(&value.directives));
            scope.write_annotations(&mut body, annotations, "    ");

            let terminator = if position + 1 == values.len() { ';' } else { ',' };
            body.push_str(&format!(
                "    {}{terminator}\n",
                ctx.naming().enum_value_name(value)
            ));
        }

        body.push_str("}\n");

        tracing::debug!(
            type_name = %type_def.name,
            values = values.len(),
            skipped = type_def.enum_values.len() - values.len(),
            "generated enum"
        );

        Ok(scope.finish(&body))
    }
}
