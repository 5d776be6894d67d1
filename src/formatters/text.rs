use anyhow::Result;
use std::io::Write;

use super::GraphFormatter;
use crate::core::DependencyGraph;

/// One `source target` line per edge, sorted.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn write_graph(&self, graph: &DependencyGraph, out: &mut dyn Write) -> Result<()> {
        for edge in graph.edges() {
            writeln!(out, "{} {}", edge.source, edge.target)?;
        }
        out.flush()?;
        Ok(())
    }
}
