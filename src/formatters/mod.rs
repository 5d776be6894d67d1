pub mod json_compact;
pub mod text;

use anyhow::Result;
use std::io::Write;

use crate::core::DependencyGraph;

pub use json_compact::JsonCompactFormatter;
pub use text::TextFormatter;

pub trait GraphFormatter {
    fn write_graph(&self, graph: &DependencyGraph, out: &mut dyn Write) -> Result<()>;

    fn format_to_string(&self, graph: &DependencyGraph) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_graph(graph, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
