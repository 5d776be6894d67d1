use std::collections::BTreeSet;

use super::name::QualifiedName;
use super::tree::ModuleTree;

/// Prefix filter deciding which imported names count as dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    roots: BTreeSet<QualifiedName>,
}

impl TargetSet {
    pub fn new<I>(roots: I) -> Self
    where
        I: IntoIterator<Item = QualifiedName>,
    {
        Self {
            roots: roots.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }

    /// Top-level members of the tree plus the caller's extra roots.
    pub fn resolve<I>(tree: &ModuleTree, extra: I) -> Self
    where
        I: IntoIterator<Item = QualifiedName>,
    {
        let scanned = tree
            .root()
            .members()
            .map(|member| QualifiedName::new([member]));
        Self::new(scanned.chain(extra))
    }

    pub fn is_target(&self, name: &QualifiedName) -> bool {
        self.roots.iter().any(|root| root.is_prefix_of(name))
    }

    pub fn roots(&self) -> impl Iterator<Item = &QualifiedName> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
