use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::{AnalysisError, Result};
use super::name::SEPARATOR;
use super::tree::{ModuleNode, ModuleTree, PackageNode, TreeNode};

/// What makes a directory a package and a file a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub package_marker: String,
    pub source_extension: String,
}

impl ScanConfig {
    pub fn python() -> Self {
        Self {
            package_marker: "__init__.py".to_string(),
            source_extension: "py".to_string(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::python()
    }
}

/// Builds a [`ModuleTree`] from a directory, one level per package.
pub struct TreeScanner {
    config: ScanConfig,
}

impl TreeScanner {
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The root itself needs no marker; it plays the role of a search path entry.
    pub fn scan(&self, root_path: &Path) -> Result<ModuleTree> {
        let root = self.scan_package(root_path)?;
        let tree = ModuleTree::new(root);
        debug!(
            root = %root_path.display(),
            modules = tree.module_count(),
            "scanned source tree"
        );
        Ok(tree)
    }

    fn scan_package(&self, dir: &Path) -> Result<PackageNode> {
        let mut package = PackageNode::new(dir);
        let mut sub_packages: Vec<(String, PathBuf)> = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry.map_err(|source| AnalysisError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if entry.file_type().is_dir() {
                let Some(name) = self.identifier(path.file_name()) else {
                    continue;
                };
                if path.join(&self.config.package_marker).is_file() {
                    sub_packages.push((name, path.to_path_buf()));
                } else {
                    debug!(dir = %path.display(), "skipping directory without package marker");
                }
            } else if path.is_file() && self.is_module_file(path) {
                if let Some(name) = self.identifier(path.file_stem()) {
                    package.insert(
                        name,
                        TreeNode::Module(ModuleNode {
                            path: path.to_path_buf(),
                        }),
                    );
                }
            }
        }

        // Sibling packages share nothing, so each subtree is built independently.
        let built: Vec<(String, PackageNode)> = sub_packages
            .into_par_iter()
            .map(|(name, path)| self.scan_package(&path).map(|pkg| (name, pkg)))
            .collect::<Result<_>>()?;

        for (name, pkg) in built {
            if let Some(TreeNode::Module(module)) = package.get(&name) {
                warn!(
                    module = %module.path.display(),
                    package = %pkg.path.display(),
                    "package shadows module of the same name; module not scanned"
                );
            }
            package.insert(name, TreeNode::Package(pkg));
        }

        Ok(package)
    }

    fn is_module_file(&self, path: &Path) -> bool {
        let is_marker = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n == self.config.package_marker);
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.config.source_extension);
        has_extension && !is_marker
    }

    fn identifier(&self, raw: Option<&std::ffi::OsStr>) -> Option<String> {
        let name = raw?.to_str()?;
        if name.is_empty() || name.contains(SEPARATOR) {
            debug!(name, "not an importable name");
            return None;
        }
        Some(name.to_string())
    }
}

impl Default for TreeScanner {
    fn default() -> Self {
        Self::new()
    }
}
