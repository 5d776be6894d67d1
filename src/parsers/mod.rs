pub mod common;
pub mod python;

use std::path::Path;

use crate::core::{QualifiedName, Result};

/// One name listed after `import` in a from-import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedName {
    Name(String),
    Wildcard,
}

/// An import declaration as written, before any resolution against the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawImport {
    /// `import a.b.c` (aliases dropped)
    Plain(QualifiedName),
    /// `from a.b import x, y` or `from a.b import *`
    From {
        base: QualifiedName,
        names: Vec<ImportedName>,
    },
    /// `from ..a import x`; level counts the leading dots
    Relative {
        level: usize,
        base: Option<QualifiedName>,
        names: Vec<ImportedName>,
    },
}

impl RawImport {
    pub fn is_relative(&self) -> bool {
        matches!(self, RawImport::Relative { .. })
    }
}

pub trait ImportExtractor {
    /// `path` is used for diagnostics only.
    fn extract_imports(&self, source: &str, path: &Path) -> Result<Vec<RawImport>>;

    fn extract_file(&self, path: &Path) -> Result<Vec<RawImport>> {
        let source = common::read_source(path)?;
        self.extract_imports(&source, path)
    }

    fn language_name(&self) -> &str;
}
