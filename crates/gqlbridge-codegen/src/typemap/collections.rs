//! Collection shapes and the `Optional` wrapper.

use gqlbridge_core::CollectionKind;

/// A Java collection interface with its default implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionShape {
    pub name: &'static str,
    pub interface: &'static str,
    pub implementation: &'static str,
    pub imports: &'static [&'static str],
}

static SHAPES: [CollectionShape; 5] = [
    CollectionShape {
        name: "List",
        interface: "List",
        implementation: "ArrayList",
        imports: &["java.util.List", "java.util.ArrayList"],
    },
    CollectionShape {
        name: "Set",
        interface: "Set",
        implementation: "HashSet",
        imports: &["java.util.Set", "java.util.HashSet"],
    },
    CollectionShape {
        name: "Collection",
        interface: "Collection",
        implementation: "ArrayList",
        imports: &["java.util.Collection", "java.util.ArrayList"],
    },
    CollectionShape {
        name: "SortedSet",
        interface: "SortedSet",
        implementation: "TreeSet",
        imports: &["java.util.SortedSet", "java.util.TreeSet"],
    },
    CollectionShape {
        name: "LinkedList",
        interface: "List",
        implementation: "LinkedList",
        imports: &["java.util.List", "java.util.LinkedList"],
    },
];

pub const OPTIONAL_TYPE: &str = "Optional";
pub const OPTIONAL_IMPORT: &str = "java.util.Optional";

impl CollectionShape {
    /// Shape by name; unknown names fall back to `List`.
    pub fn by_name(name: &str) -> &'static CollectionShape {
        SHAPES
            .iter()
            .find(|shape| shape.name == name)
            .unwrap_or(&SHAPES[0])
    }

    pub fn for_kind(kind: CollectionKind) -> &'static CollectionShape {
        Self::by_name(kind.as_str())
    }

    /// `Interface<element>`
    pub fn format(&self, element_type: &str) -> String {
        format!("{}<{}>", self.interface, element_type)
    }
}

/// `Optional<T>`, boxing a primitive `T` first
pub fn format_optional(java_type: &str) -> String {
    format!("{OPTIONAL_TYPE}<{}>", super::scalars::box_type(java_type))
}
