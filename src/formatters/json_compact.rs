use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::GraphFormatter;
use crate::core::{DependencyGraph, QualifiedName};

#[derive(Serialize)]
struct Meta {
    modules: usize,
    edges: usize,
}

#[derive(Serialize)]
struct Document<'a> {
    meta: Meta,
    edges: Vec<(&'a QualifiedName, &'a QualifiedName)>,
}

/// JSON form of the edge list: `{"meta": {...}, "edges": [[src, dst], ...]}`
pub struct JsonCompactFormatter;

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let edges = graph.edges();
        let document = Document {
            meta: Meta {
                modules: graph.module_count(),
                edges: edges.len(),
            },
            edges: edges.iter().map(|e| (&e.source, &e.target)).collect(),
        };

        Ok(serde_json::to_string(&document)?)
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonCompactFormatter {
    fn write_graph(&self, graph: &DependencyGraph, out: &mut dyn Write) -> Result<()> {
        let rendered = self.format_graph(graph)?;
        writeln!(out, "{}", rendered)?;
        out.flush()?;
        Ok(())
    }
}
