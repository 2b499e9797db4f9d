//! Java interfaces for interface types.

use super::TypeGenerator;
use super::context::{GenerationContext, write_description};
use super::field::{FieldContext, write_interface_method};
use gqlbridge_core::directives::is_skipped;
use gqlbridge_core::{GenResult, TypeDefinition};

/// Generates an interface with one abstract getter per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceGenerator;

impl TypeGenerator for InterfaceGenerator {
    fn generate(&self, ctx: &GenerationContext<'_>, type_def: &TypeDefinition) -> GenResult<String> {
        if is_skipped(&type_def.directives) {
            return Ok(String::new());
        }

        let mut scope = ctx.scope(type_def);
        let fields = FieldContext::collect(ctx, type_def)?;
        let mut body = String::new();

        write_description(&mut body, type_def.description.as_deref(), "");

        // Lombok does not apply to interfaces
        let mut annotations = ctx.custom().deprecated(&type_def.directives);
        annotations.extend(ctx.custom().annotations(&type_def.directives));
        scope.write_annotations(&mut body, annotations, "");

        body.push_str(&format!("public interface {}", scope.type_name));
        if !type_def.interfaces.is_empty() {
            let parents: Vec<String> = type_def
                .interfaces
                .iter()
                .map(|name| ctx.interface_name(name))
                .collect();
            body.push_str(&format!(" extends {}", parents.join(", ")));
        }
        body.push_str(" {\n");

        for fc in &fields {
            body.push('\n');
            write_interface_method(ctx, &mut scope, fc, &mut body);
        }

        body.push_str("}\n");

        tracing::debug!(
            type_name = %type_def.name,
            java_name = %scope.type_name,
            methods = fields.len(),
            "generated interface"
        );

        Ok(scope.finish(&body))
    }
}
