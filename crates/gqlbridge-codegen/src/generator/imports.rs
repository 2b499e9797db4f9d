//! Per-type import accumulation.

use std::collections::BTreeSet;

const JAVA_LANG: &str = "java.lang.";

/// Sorted, de-duplicated imports for one compilation unit.
///
/// Imports of `java.lang` types and of types in the unit's own package are
/// dropped on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    package: String,
    imports: BTreeSet<String>,
}

impl ImportSet {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: BTreeSet::new(),
        }
    }

    pub fn add(&mut self, import: &str) {
        if import.is_empty() || self.is_implicit(import) {
            return;
        }
        self.imports.insert(import.to_string());
    }

    pub fn extend<I, S>(&mut self, imports: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for import in imports {
            self.add(import.as_ref());
        }
    }

    fn is_implicit(&self, import: &str) -> bool {
        if let Some(rest) = import.strip_prefix(JAVA_LANG)
            && !rest.contains('.')
        {
            return true;
        }
        !self.package.is_empty()
            && import
                .rsplit_once('.')
                .is_some_and(|(package, _)| package == self.package)
    }

    pub fn contains(&self, import: &str) -> bool {
        self.imports.contains(import)
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Imports grouped by the first two segments of their package, in sorted order
    pub fn groups(&self) -> Vec<Vec<&str>> {
        let mut groups: Vec<Vec<&str>> = Vec::new();
        let mut current_prefix = "";

        for import in self.iter() {
            let prefix = group_prefix(import);
            match groups.last_mut() {
                Some(group) if prefix == current_prefix => group.push(import),
                _ => groups.push(vec![import]),
            }
            current_prefix = prefix;
        }

        groups
    }

    /// `import` statements, groups separated by a blank line. Empty when
    /// there is nothing to import.
    pub fn render(&self) -> String {
        self.groups()
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|import| format!("import {import};\n"))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// First two segments of the import's package (`java.util` for
/// `java.util.List`, `lombok` for `lombok.Data`)
fn group_prefix(import: &str) -> &str {
    let package = import.rsplit_once('.').map_or(import, |(package, _)| package);
    match package.match_indices('.').nth(1) {
        Some((end, _)) => &package[..end],
        None => package,
    }
}
