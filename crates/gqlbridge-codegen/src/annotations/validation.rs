//! Bean Validation annotations.
//!
//! Constraint imports come from `jakarta.validation.constraints` or
//! `javax.validation.constraints` depending on the configured package. Under
//! the annotation nullability policy, nullable fields also get `@Nullable`
//! from the matching `*.annotation` package, whether or not validation is
//! enabled.

use super::AnnotationSet;
use gqlbridge_core::directives::{ConstraintInfo, extract_constraint};
use gqlbridge_core::{FieldDefinition, NullableHandling, ValidationConfig};

#[derive(Debug, Clone, Copy)]
pub struct ValidationGenerator<'a> {
    config: &'a ValidationConfig,
    nullable_handling: NullableHandling,
}

impl<'a> ValidationGenerator<'a> {
    pub fn new(config: &'a ValidationConfig, nullable_handling: NullableHandling) -> Self {
        Self {
            config,
            nullable_handling,
        }
    }

    /// Fully qualified name of a constraint annotation
    fn constraint_import(&self, name: &str) -> String {
        format!("{}.{}", self.config.package.constraints_package(), name)
    }

    fn push_constraint(&self, set: &mut AnnotationSet, annotation: String, name: &str) {
        set.push(annotation, Some(&self.constraint_import(name)));
    }

    /// Annotations for one field
    pub fn field_annotations(&self, field: &FieldDefinition) -> AnnotationSet {
        let mut set = AnnotationSet::new();
        let non_null = field.type_ref.non_null;

        if !non_null && self.nullable_handling == NullableHandling::Annotation {
            set.push("@Nullable", Some(self.config.package.nullable_import()));
        }

        if !self.config.enabled {
            return set;
        }

        if non_null && self.config.not_null_on_non_null {
            self.push_constraint(&mut set, "@NotNull".to_string(), "NotNull");
        }

        if let Some(constraint) = extract_constraint(&field.directives) {
            self.constraint_annotations(&mut set, &constraint);
        }

        set
    }

    fn constraint_annotations(&self, set: &mut AnnotationSet, c: &ConstraintInfo) {
        if c.min_length.is_some() || c.max_length.is_some() {
            let params: Vec<String> = [("min", c.min_length), ("max", c.max_length)]
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| format!("{key} = {v}")))
                .collect();
            self.push_constraint(set, format!("@Size({})", params.join(", ")), "Size");
        }

        if let Some(min) = c.min {
            self.push_constraint(set, format!("@Min({min})"), "Min");
        }
        if let Some(max) = c.max {
            self.push_constraint(set, format!("@Max({max})"), "Max");
        }

        if !c.pattern.is_empty() {
            let escaped = c.pattern.replace('\\', "\\\\").replace('"', "\\\"");
            self.push_constraint(set, format!("@Pattern(regexp = \"{escaped}\")"), "Pattern");
        }

        // already present when notNullOnNonNull fired
        if c.not_null && !set.contains("@NotNull") {
            self.push_constraint(set, "@NotNull".to_string(), "NotNull");
        }
        if c.not_blank {
            self.push_constraint(set, "@NotBlank".to_string(), "NotBlank");
        }
        if c.email {
            self.push_constraint(set, "@Email".to_string(), "Email");
        }
    }
}
