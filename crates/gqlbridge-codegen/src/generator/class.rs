//! Java classes for object and input object types.

use super::TypeGenerator;
use super::context::{GenerationContext, write_description};
use super::field::{FieldContext, write_field, write_getter, write_setter};
use gqlbridge_core::directives::is_skipped;
use gqlbridge_core::{GenResult, TypeDefinition};

/// Generates a class with fields and, unless Lombok covers them,
/// constructors and accessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassGenerator;

impl TypeGenerator for ClassGenerator {
    fn generate(&self, ctx: &GenerationContext<'_>, type_def: &TypeDefinition) -> GenResult<String> {
        if is_skipped(&type_def.directives) {
            return Ok(String::new());
        }

        let mut scope = ctx.scope(type_def);
        let fields = FieldContext::collect(ctx, type_def)?;
        let mut body = String::new();

        write_description(&mut body, type_def.description.as_deref(), "");

        let mut annotations = ctx.custom().deprecated(&type_def.directives);
        annotations.extend(ctx.lombok().type_annotations(type_def));
        annotations.extend(ctx.custom().annotations(&type_def.directives));
        scope.write_annotations(&mut body, annotations, "");

        body.push_str(&format!("public class {}", scope.type_name));
        if !type_def.interfaces.is_empty() {
            let interfaces: Vec<String> = type_def
                .interfaces
                .iter()
                .map(|name| ctx.interface_name(name))
                .collect();
            body.push_str(&format!(" implements {}", interfaces.join(", ")));
        }
        body.push_str(" {\n");

        for fc in &fields {
            body.push('\n');
            write_field(ctx, &mut scope, fc, &mut body);
        }

        if ctx.lombok().needs_constructors_for(type_def) {
            write_constructors(&scope.type_name, &fields, &mut body);
        }

        if ctx.lombok().needs_accessors_for(type_def) {
            for fc in &fields {
                body.push('\n');
                write_getter(ctx, fc, &mut body);
                body.push('\n');
                write_setter(ctx, fc, &mut body);
            }
        }

        body.push_str("}\n");

        tracing::debug!(
            type_name = %type_def.name,
            java_name = %scope.type_name,
            fields = fields.len(),
            "generated class"
        );

        Ok(scope.finish(&body))
    }
}

/// No-argument constructor, plus an all-arguments constructor in field order
/// when the class has fields
fn write_constructors(class_name: &str, fields: &[FieldContext<'_>], out: &mut String) {
    out.push_str(&format!("\n    public {class_name}() {{}}\n"));

    if fields.is_empty() {
        return;
    }

    let params: Vec<String> = fields
        .iter()
        .map(|fc| format!("{} {}", fc.java_type(), fc.name))
        .collect();
    out.push_str(&format!(
        "\n    public {class_name}({}) {{\n",
        params.join(", ")
    ));
    for fc in fields {
        out.push_str(&format!("        this.{} = {};\n", fc.name, fc.name));
    }
    out.push_str("    }\n");
}
