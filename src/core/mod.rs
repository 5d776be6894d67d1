pub mod analyzer;
pub mod error;
pub mod graph;
pub mod name;
pub mod resolver;
pub mod scanner;
pub mod targets;
pub mod tree;

pub use analyzer::{AnalyzerOptions, DependencyAnalyzer};
pub use error::{AnalysisError, Result};
pub use graph::{DependencyGraph, Edge, GraphBuilder, Node, NodeKind};
pub use name::QualifiedName;
pub use resolver::{DependencyReader, ModuleDependencies};
pub use scanner::{ScanConfig, TreeScanner};
pub use targets::TargetSet;
pub use tree::{ModuleNode, ModuleTree, PackageNode, TreeNode};
