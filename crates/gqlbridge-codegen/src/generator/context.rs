//! Shared and per-type generation state.

use super::imports::ImportSet;
use crate::annotations::{AnnotationSet, CustomGenerator, LombokGenerator, ValidationGenerator};
use crate::naming::NamingHelper;
use crate::typemap::TypeMapper;
use gqlbridge_core::{Config, Schema, TypeDefinition, TypeKind};

/// Read-only collaborators shared by every per-type generator in one run.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    config: &'a Config,
    schema: &'a Schema,
    mapper: TypeMapper<'a>,
    naming: NamingHelper<'a>,
    lombok: LombokGenerator<'a>,
    validation: ValidationGenerator<'a>,
    custom: CustomGenerator,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a Config, schema: &'a Schema) -> Self {
        Self {
            config,
            schema,
            mapper: TypeMapper::new(config, schema),
            naming: NamingHelper::new(&config.java.naming),
            lombok: LombokGenerator::new(&config.features.lombok),
            validation: ValidationGenerator::new(
                &config.features.validation,
                config.java.nullable_handling,
            ),
            custom: CustomGenerator::new(),
        }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn mapper(&self) -> &TypeMapper<'a> {
        &self.mapper
    }

    pub fn naming(&self) -> &NamingHelper<'a> {
        &self.naming
    }

    pub fn lombok(&self) -> &LombokGenerator<'a> {
        &self.lombok
    }

    pub fn validation(&self) -> &ValidationGenerator<'a> {
        &self.validation
    }

    pub fn custom(&self) -> &CustomGenerator {
        &self.custom
    }

    pub fn package(&self) -> &'a str {
        &self.config.output.package
    }

    /// Field modifier keyword, `None` for package-private
    pub fn visibility(&self) -> Option<&'static str> {
        self.config.java.field_visibility.keyword()
    }

    /// Java name of an implemented or extended interface.
    ///
    /// Declared types go through the regular type naming, so a `@javaName`
    /// on the interface is honored. Unknown names only get the interface
    /// prefix.
    pub fn interface_name(&self, name: &str) -> String {
        match self.schema.get_type(name) {
            Some(type_def) => self.naming.type_name(type_def),
            None => self.naming.decorate(name, TypeKind::Interface),
        }
    }

    /// Start generating one type
    pub fn scope(&self, type_def: &TypeDefinition) -> TypeScope {
        TypeScope {
            type_name: self.naming.type_name(type_def),
            package: self.package().to_string(),
            imports: ImportSet::new(self.package()),
        }
    }
}

/// State private to one type's generation: its Java name and the imports its
/// body has required so far.
#[derive(Debug, Clone)]
pub struct TypeScope {
    pub type_name: String,
    package: String,
    imports: ImportSet,
}

impl TypeScope {
    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn require<I, S>(&mut self, imports: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.imports.extend(imports);
    }

    /// Write annotation lines at `indent` and record their imports
    pub fn write_annotations(&mut self, out: &mut String, set: AnnotationSet, indent: &str) {
        for annotation in &set.annotations {
            out.push_str(indent);
            out.push_str(annotation);
            out.push('\n');
        }
        self.imports.extend(set.imports);
    }

    /// Assemble the compilation unit: package, imports, then `body`.
    ///
    /// Imports are only known once the body is complete, so this consumes
    /// the scope.
    pub fn finish(self, body: &str) -> String {
        let imports = self.imports.render();
        let mut out = String::with_capacity(body.len() + imports.len() + 64);

        if !self.package.is_empty() {
            out.push_str(&format!("package {};\n\n", self.package));
        }
        if !imports.is_empty() {
            out.push_str(&imports);
            out.push('\n');
        }
        out.push_str(body);
        out
    }
}

/// `/** ... */` block with each description line trimmed
pub(crate) fn write_javadoc(out: &mut String, description: &str, indent: &str) {
    out.push_str(indent);
    out.push_str("/**\n");
    for line in description.lines() {
        let line = line.trim();
        out.push_str(indent);
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(indent);
    out.push_str(" */\n");
}

/// Javadoc for an optional, possibly blank description
pub(crate) fn write_description(out: &mut String, description: Option<&str>, indent: &str) {
    if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
        write_javadoc(out, description, indent);
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use gqlbridge_core::Directive;

    #[test]
    fn write_javadoc___multiline___trims_and_indents() {
        let mut out = String::new();
        write_javadoc(&mut out, "  First line\n\n  second  ", "    ");

        assert_eq!(
            out,
            "    /**\n     * First line\n     *\n     * second\n     */\n"
        );
    }

    #[test]
    fn write_description___blank___writes_nothing() {
        let mut out = String::new();
        write_description(&mut out, Some("   "), "");
        write_description(&mut out, None, "");

        assert!(out.is_empty());
    }

    #[test]
    fn TypeScope___finish___imports_between_package_and_body() {
        let config = Config::default();
        let schema = Schema::default();
        let ctx = GenerationContext::new(&config, &schema);
        let mut scope = ctx.scope(&TypeDefinition::new("User", TypeKind::Object));
        scope.require(["java.util.List"]);

        let unit = scope.finish("public class User {\n}\n");

        assert_eq!(
            unit,
            "package com.example.model;\n\nimport java.util.List;\n\npublic class User {\n}\n"
        );
    }

    #[test]
    fn TypeScope___no_package_or_imports___body_only() {
        let mut config = Config::default();
        config.output.package = String::new();
        let schema = Schema::default();
        let ctx = GenerationContext::new(&config, &schema);

        let unit = ctx
            .scope(&TypeDefinition::new("User", TypeKind::Object))
            .finish("body\n");

        assert_eq!(unit, "body\n");
    }

    #[test]
    fn GenerationContext___interface_name___honors_rename_and_prefix() {
        let mut config = Config::default();
        config.java.naming.interface_prefix = "I".to_string();
        let schema = Schema::from_types(vec![
            TypeDefinition::new("Node", TypeKind::Interface),
            TypeDefinition::new("Entity", TypeKind::Interface)
                .with_directive(Directive::new("javaName").with_arg("name", "BaseEntity")),
        ])
        .unwrap();
        let ctx = GenerationContext::new(&config, &schema);

        assert_eq!(ctx.interface_name("Node"), "INode");
        assert_eq!(ctx.interface_name("Entity"), "BaseEntity");
        assert_eq!(ctx.interface_name("Missing"), "IMissing");
    }
}
