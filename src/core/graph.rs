use petgraph::visit::EdgeRef;
use petgraph::{graph::NodeIndex, Directed, Graph};
use std::collections::HashMap;

use super::name::QualifiedName;
use super::resolver::ModuleDependencies;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A module scanned from the source tree
    Module,
    /// Anything reached only through an import
    Imported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: QualifiedName,
    pub kind: NodeKind,
}

/// `source` imports something reachable at `target`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: QualifiedName,
    pub target: QualifiedName,
}

pub type ImportGraph = Graph<Node, (), Directed>;

/// Module import graph produced by one analysis pass.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: ImportGraph,
    module_count: usize,
}

impl DependencyGraph {
    pub fn graph(&self) -> &ImportGraph {
        &self.graph
    }

    pub fn module_count(&self) -> usize {
        self.module_count
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges ordered by (source, target).
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .graph
            .edge_references()
            .map(|edge| Edge {
                source: self.graph[edge.source()].name.clone(),
                target: self.graph[edge.target()].name.clone(),
            })
            .collect();
        edges.sort();
        edges
    }
}

pub struct GraphBuilder {
    graph: ImportGraph,
    node_map: HashMap<QualifiedName, NodeIndex>,
    module_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
            module_count: 0,
        }
    }

    /// Adds the module and one edge per target. Isolated modules stay out of
    /// the graph but are still counted.
    pub fn add_module(&mut self, deps: ModuleDependencies) {
        self.module_count += 1;
        if deps.targets.is_empty() {
            return;
        }

        let source = self.add_node(deps.module, NodeKind::Module);
        for target in deps.targets {
            let target = self.add_node(target, NodeKind::Imported);
            self.graph.update_edge(source, target, ());
        }
    }

    pub fn add_node(&mut self, name: QualifiedName, kind: NodeKind) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&name) {
            // a scanned module wins over a bare import reference
            if kind == NodeKind::Module {
                self.graph[index].kind = NodeKind::Module;
            }
            return index;
        }
        let index = self.graph.add_node(Node {
            name: name.clone(),
            kind,
        });
        self.node_map.insert(name, index);
        index
    }

    pub fn get_node_index(&self, name: &QualifiedName) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph {
            graph: self.graph,
            module_count: self.module_count,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
