use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

use super::error::Result;
use super::name::QualifiedName;
use super::targets::TargetSet;
use super::tree::{ModuleEntry, ModuleTree};
use crate::parsers::{ImportExtractor, ImportedName, RawImport};

/// Resolved dependencies of a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDependencies {
    pub module: QualifiedName,
    pub targets: BTreeSet<QualifiedName>,
}

/// Turns raw import declarations into target-filtered, fully-qualified names.
pub struct DependencyReader<'a, E> {
    tree: &'a ModuleTree,
    targets: &'a TargetSet,
    extractor: &'a E,
}

impl<'a, E> DependencyReader<'a, E>
where
    E: ImportExtractor + Sync,
{
    pub fn new(tree: &'a ModuleTree, targets: &'a TargetSet, extractor: &'a E) -> Self {
        Self {
            tree,
            targets,
            extractor,
        }
    }

    /// Resolve every module of the tree. The first read or parse failure aborts
    /// the whole pass.
    pub fn read(&self) -> Result<Vec<ModuleDependencies>> {
        let entries: Vec<ModuleEntry<'_>> = self.tree.modules().collect();

        entries
            .par_iter()
            .map(|entry| self.read_module(entry))
            .collect()
    }

    fn read_module(&self, entry: &ModuleEntry<'_>) -> Result<ModuleDependencies> {
        let imports = self.extractor.extract_file(entry.path)?;
        let targets = self.resolve_imports(&imports);
        debug!(
            module = %entry.name,
            imports = imports.len(),
            dependencies = targets.len(),
            "resolved module"
        );
        Ok(ModuleDependencies {
            module: entry.name.clone(),
            targets,
        })
    }

    pub fn resolve_imports(&self, imports: &[RawImport]) -> BTreeSet<QualifiedName> {
        imports
            .iter()
            .flat_map(|import| self.candidates(import))
            .filter(|candidate| self.targets.is_target(candidate))
            .collect()
    }

    fn candidates(&self, import: &RawImport) -> Vec<QualifiedName> {
        match import {
            RawImport::Plain(name) => vec![name.clone()],
            RawImport::From { base, names } => self.expand_from(base, names),
            // Relative imports are not resolved to any module.
            RawImport::Relative { .. } => Vec::new(),
        }
    }

    fn expand_from(&self, base: &QualifiedName, names: &[ImportedName]) -> Vec<QualifiedName> {
        if !self.targets.is_target(base) {
            return Vec::new();
        }

        let Some(package) = self.tree.lookup_package(base) else {
            // Not a known package, so the imported names are symbols, not modules.
            return vec![base.clone()];
        };

        if let [ImportedName::Wildcard] = names {
            return package.members().map(|member| base.child(member)).collect();
        }

        names
            .iter()
            .filter_map(|name| match name {
                ImportedName::Name(name) => Some(base.child(name)),
                ImportedName::Wildcard => None,
            })
            .collect()
    }
}
