//! `@annotation` pass-through and `@Deprecated`.

use super::AnnotationSet;
use gqlbridge_core::Directive;
use gqlbridge_core::directives::{extract_annotations, extract_deprecated};

/// Copies `@annotation(value:, imports:)` directives verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomGenerator;

impl CustomGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Every `@annotation` directive, in declaration order
    pub fn annotations(&self, directives: &[Directive]) -> AnnotationSet {
        let mut set = AnnotationSet::new();
        for info in extract_annotations(directives) {
            set.annotations.push(info.value);
            set.imports.extend(info.imports);
        }
        set
    }

    /// `@Deprecated` when a `@deprecated` directive is present. The reason is
    /// not carried over.
    pub fn deprecated(&self, directives: &[Directive]) -> AnnotationSet {
        let mut set = AnnotationSet::new();
        if extract_deprecated(directives).is_some() {
            set.push("@Deprecated", None);
        }
        set
    }
}
