//! Marker interfaces for union types.
//!
//! The schema model does not carry union members, so the interface is empty.
//! Member types opt in by listing the union in their `interfaces`.

use super::TypeGenerator;
use super::context::{GenerationContext, write_description};
use gqlbridge_core::directives::is_skipped;
use gqlbridge_core::{GenResult, TypeDefinition};

const DEFAULT_DESCRIPTION: &str = "Union type marker interface.";

#[derive(Debug, Clone, Copy, Default)]
pub struct UnionGenerator;

impl TypeGenerator for UnionGenerator {
    fn generate(&self, ctx: &GenerationContext<'_>, type_def: &TypeDefinition) -> GenResult<String> {
        if is_skipped(&type_def.directives) {
            return Ok(String::new());
        }

        let scope = ctx.scope(type_def);
        let mut body = String::new();

        let description = type_def
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);
        write_description(&mut body, Some(description), "");

        body.push_str(&format!(
            "public interface {} {{\n    // Marker interface for GraphQL union type\n}}\n",
            scope.type_name
        ));

        tracing::debug!(type_name = %type_def.name, "generated union marker");

        Ok(scope.finish(&body))
    }
}
