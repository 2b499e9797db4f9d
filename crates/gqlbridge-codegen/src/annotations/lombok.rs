//! Lombok structural annotations.
//!
//! The configured facets apply to every class. A `@lombok(exclude:, include:)`
//! directive on a type patches them for that type only: excludes first, then
//! includes. Facet names in the directive use the configuration spelling
//! (`data`, `noArgsConstructor`, `superBuilder`, ...).

use super::AnnotationSet;
use gqlbridge_core::directives::extract_lombok;
use gqlbridge_core::{LombokConfig, TypeDefinition};

/// One Lombok annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LombokFacet {
    Data,
    Builder,
    SuperBuilder,
    NoArgsConstructor,
    AllArgsConstructor,
    Getter,
    Setter,
    ToString,
    EqualsAndHashCode,
    Value,
}

impl LombokFacet {
    /// Emission order
    pub const ALL: [LombokFacet; 10] = [
        LombokFacet::Data,
        LombokFacet::Builder,
        LombokFacet::SuperBuilder,
        LombokFacet::NoArgsConstructor,
        LombokFacet::AllArgsConstructor,
        LombokFacet::Getter,
        LombokFacet::Setter,
        LombokFacet::ToString,
        LombokFacet::EqualsAndHashCode,
        LombokFacet::Value,
    ];

    /// Name accepted in `@lombok` include/exclude lists
    pub fn key(&self) -> &'static str {
        match self {
            LombokFacet::Data => "data",
            LombokFacet::Builder => "builder",
            LombokFacet::SuperBuilder => "superBuilder",
            LombokFacet::NoArgsConstructor => "noArgsConstructor",
            LombokFacet::AllArgsConstructor => "allArgsConstructor",
            LombokFacet::Getter => "getter",
            LombokFacet::Setter => "setter",
            LombokFacet::ToString => "toString",
            LombokFacet::EqualsAndHashCode => "equalsAndHashCode",
            LombokFacet::Value => "value",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|facet| facet.key() == key)
    }

    pub fn annotation(&self) -> &'static str {
        match self {
            LombokFacet::Data => "@Data",
            LombokFacet::Builder => "@Builder",
            LombokFacet::SuperBuilder => "@SuperBuilder",
            LombokFacet::NoArgsConstructor => "@NoArgsConstructor",
            LombokFacet::AllArgsConstructor => "@AllArgsConstructor",
            LombokFacet::Getter => "@Getter",
            LombokFacet::Setter => "@Setter",
            LombokFacet::ToString => "@ToString",
            LombokFacet::EqualsAndHashCode => "@EqualsAndHashCode",
            LombokFacet::Value => "@Value",
        }
    }

    pub fn import(&self) -> &'static str {
        match self {
            LombokFacet::Data => "lombok.Data",
            LombokFacet::Builder => "lombok.Builder",
            LombokFacet::SuperBuilder => "lombok.experimental.SuperBuilder",
            LombokFacet::NoArgsConstructor => "lombok.NoArgsConstructor",
            LombokFacet::AllArgsConstructor => "lombok.AllArgsConstructor",
            LombokFacet::Getter => "lombok.Getter",
            LombokFacet::Setter => "lombok.Setter",
            LombokFacet::ToString => "lombok.ToString",
            LombokFacet::EqualsAndHashCode => "lombok.EqualsAndHashCode",
            LombokFacet::Value => "lombok.Value",
        }
    }
}

/// Enabled/disabled state of every facet, indexed by declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacetSet([bool; LombokFacet::ALL.len()]);

impl FacetSet {
    pub fn is_enabled(&self, facet: LombokFacet) -> bool {
        self.0[facet as usize]
    }

    pub fn set(&mut self, facet: LombokFacet, enabled: bool) {
        self.0[facet as usize] = enabled;
    }

    /// Enabled facets in emission order
    pub fn enabled(&self) -> impl Iterator<Item = LombokFacet> + '_ {
        LombokFacet::ALL
            .into_iter()
            .filter(|facet| self.is_enabled(*facet))
    }
}

impl From<&LombokConfig> for FacetSet {
    fn from(config: &LombokConfig) -> Self {
        let mut facets = FacetSet::default();
        facets.set(LombokFacet::Data, config.data);
        facets.set(LombokFacet::Builder, config.builder);
        facets.set(LombokFacet::NoArgsConstructor, config.no_args_constructor);
        facets.set(LombokFacet::AllArgsConstructor, config.all_args_constructor);
        facets.set(LombokFacet::Getter, config.getter);
        facets.set(LombokFacet::Setter, config.setter);
        facets
    }
}

/// Generates Lombok annotations for classes.
#[derive(Debug, Clone, Copy)]
pub struct LombokGenerator<'a> {
    config: &'a LombokConfig,
}

impl<'a> LombokGenerator<'a> {
    pub fn new(config: &'a LombokConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Facets from configuration, patched by the type's `@lombok` directive
    pub fn facets_for(&self, type_def: &TypeDefinition) -> FacetSet {
        let mut facets = FacetSet::from(self.config);

        if let Some(patch) = extract_lombok(&type_def.directives) {
            for (names, enabled) in [(&patch.exclude, false), (&patch.include, true)] {
                for name in names {
                    match LombokFacet::from_key(name) {
                        Some(facet) => facets.set(facet, enabled),
                        None => tracing::warn!(
                            type_name = %type_def.name,
                            facet = %name,
                            "ignoring unknown lombok facet"
                        ),
                    }
                }
            }
        }

        facets
    }

    /// Type-level annotations, empty when Lombok is disabled
    pub fn type_annotations(&self, type_def: &TypeDefinition) -> AnnotationSet {
        let mut set = AnnotationSet::new();
        if !self.config.enabled {
            return set;
        }
        for facet in self.facets_for(type_def).enabled() {
            set.push(facet.annotation(), Some(facet.import()));
        }
        set
    }

    /// Whether getters and setters must be written by hand
    pub fn needs_accessors(&self) -> bool {
        self.accessors_required(FacetSet::from(self.config))
    }

    /// Whether constructors must be written by hand
    pub fn needs_constructors(&self) -> bool {
        self.constructors_required(FacetSet::from(self.config))
    }

    /// [`needs_accessors`](Self::needs_accessors) for one type's patched facets
    pub fn needs_accessors_for(&self, type_def: &TypeDefinition) -> bool {
        self.accessors_required(self.facets_for(type_def))
    }

    /// [`needs_constructors`](Self::needs_constructors) for one type's patched facets
    pub fn needs_constructors_for(&self, type_def: &TypeDefinition) -> bool {
        self.constructors_required(self.facets_for(type_def))
    }

    fn accessors_required(&self, facets: FacetSet) -> bool {
        if !self.config.enabled {
            return true;
        }
        let covered = facets.is_enabled(LombokFacet::Data)
            || facets.is_enabled(LombokFacet::Value)
            || (facets.is_enabled(LombokFacet::Getter) && facets.is_enabled(LombokFacet::Setter));
        !covered
    }

    fn constructors_required(&self, facets: FacetSet) -> bool {
        if !self.config.enabled {
            return true;
        }
        !facets.is_enabled(LombokFacet::NoArgsConstructor)
            && !facets.is_enabled(LombokFacet::AllArgsConstructor)
    }
}
