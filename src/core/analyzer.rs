use std::path::Path;
use std::time::Instant;
use tracing::info;

use super::error::Result;
use super::graph::{DependencyGraph, GraphBuilder};
use super::name::QualifiedName;
use super::resolver::DependencyReader;
use super::scanner::{ScanConfig, TreeScanner};
use super::targets::TargetSet;
use crate::parsers::python::PythonImportExtractor;
use crate::parsers::ImportExtractor;

#[derive(Debug, Clone, Default)]
pub struct AnalyzerOptions {
    /// Roots reported as dependencies in addition to the scanned top level.
    pub extra_targets: Vec<QualifiedName>,
    pub scan: ScanConfig,
}

impl AnalyzerOptions {
    pub fn with_extra_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = QualifiedName>,
    {
        self.extra_targets.extend(targets);
        self
    }
}

/// Runs the single scan-then-resolve pass over a source directory.
pub struct DependencyAnalyzer {
    scanner: TreeScanner,
    extractor: PythonImportExtractor,
    extra_targets: Vec<QualifiedName>,
}

impl DependencyAnalyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self {
            scanner: TreeScanner::with_config(options.scan),
            extractor: PythonImportExtractor::new(),
            extra_targets: options.extra_targets,
        }
    }

    pub fn analyze(&self, root_path: &Path) -> Result<DependencyGraph> {
        let start = Instant::now();

        let tree = self.scanner.scan(root_path)?;
        info!(modules = tree.module_count(), "scanned {}", root_path.display());

        let targets = TargetSet::resolve(&tree, self.extra_targets.iter().cloned());
        info!(
            targets = %targets.roots().map(|t| t.render()).collect::<Vec<_>>().join(","),
            "resolved target roots"
        );

        let reader = DependencyReader::new(&tree, &targets, &self.extractor);
        let dependencies = reader.read()?;

        let mut builder = GraphBuilder::new();
        for deps in dependencies {
            builder.add_module(deps);
        }
        let graph = builder.build();

        info!(
            language = self.extractor.language_name(),
            edges = graph.edge_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "analysis complete"
        );
        Ok(graph)
    }
}

impl Default for DependencyAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default())
    }
}
