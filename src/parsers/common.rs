use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use crate::core::{AnalysisError, Result};

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    /// Parse `source`, failing on the first syntax error instead of keeping a
    /// partially recovered tree.
    pub fn parse_strict(&mut self, source: &str, path: &Path) -> Result<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::Parse {
                path: path.to_path_buf(),
                line: 1,
                column: 1,
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(&root).unwrap_or(root);
            let point = at.start_position();
            return Err(AnalysisError::Parse {
                path: path.to_path_buf(),
                line: point.row + 1,
                column: point.column + 1,
            });
        }

        Ok(tree)
    }
}

/// Buffered read of a whole source file
pub fn read_source(file_path: &Path) -> Result<String> {
    let read = || -> std::io::Result<String> {
        let file = File::open(file_path)?;
        let file_size = file.metadata()?.len() as usize;

        let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
        let mut content = String::with_capacity(file_size);
        reader.read_to_string(&mut content)?;
        Ok(content)
    };
    read().map_err(|err| AnalysisError::io(file_path, err))
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

/// Depth-first search for the earliest error or missing node.
pub fn first_error<'a>(node: &TSNode<'a>) -> Option<TSNode<'a>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            if let Some(found) = first_error(&child) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_child_by_kind<'a>(node: &TSNode<'a>, kind: &str) -> Option<TSNode<'a>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}
