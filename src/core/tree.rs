use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::name::QualifiedName;

/// A source file. Leaf of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub path: PathBuf,
}

/// A directory carrying the package marker, keyed children by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageNode {
    pub path: PathBuf,
    children: BTreeMap<String, TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Package(PackageNode),
    Module(ModuleNode),
}

/// A module found while enumerating the tree, with its fully-qualified name.
#[derive(Debug, Clone, Copy)]
pub struct ModuleEntry<'a> {
    pub name: &'a QualifiedName,
    pub path: &'a Path,
}

impl PackageNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            children: BTreeMap::new(),
        }
    }

    /// Insert a child. A later insert under the same key replaces the earlier one.
    pub fn insert(&mut self, name: impl Into<String>, node: TreeNode) {
        self.children.insert(name.into(), node);
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Walk from this package one component at a time.
    pub fn lookup(&self, name: &QualifiedName) -> Option<&TreeNode> {
        let (first, rest) = name.parts().split_first()?;
        let mut node = self.children.get(first)?;
        for part in rest {
            match node {
                TreeNode::Package(pkg) => node = pkg.children.get(part)?,
                TreeNode::Module(_) => return None,
            }
        }
        Some(node)
    }

    pub fn lookup_package(&self, name: &QualifiedName) -> Option<&PackageNode> {
        match self.lookup(name)? {
            TreeNode::Package(pkg) => Some(pkg),
            TreeNode::Module(_) => None,
        }
    }
}

/// Root of a scanned source directory. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTree {
    root: PackageNode,
    modules: Vec<(QualifiedName, PathBuf)>,
}

impl ModuleTree {
    pub fn new(root: PackageNode) -> Self {
        let mut modules = Vec::new();
        collect_modules(&root, &QualifiedName::new(Vec::<String>::new()), &mut modules);
        Self { root, modules }
    }

    pub fn root(&self) -> &PackageNode {
        &self.root
    }

    /// Every module in the tree, each exactly once, in name order.
    pub fn modules(&self) -> impl ExactSizeIterator<Item = ModuleEntry<'_>> {
        self.modules.iter().map(|(name, path)| ModuleEntry {
            name,
            path: path.as_path(),
        })
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn lookup_package(&self, name: &QualifiedName) -> Option<&PackageNode> {
        self.root.lookup_package(name)
    }
}

fn collect_modules(
    pkg: &PackageNode,
    prefix: &QualifiedName,
    out: &mut Vec<(QualifiedName, PathBuf)>,
) {
    for (name, node) in pkg.children() {
        let qualified = prefix.child(name);
        match node {
            TreeNode::Module(module) => out.push((qualified, module.path.clone())),
            TreeNode::Package(sub) => collect_modules(sub, &qualified, out),
        }
    }
}
