use std::path::Path;
use tree_sitter::Node as TSNode;

use super::common::{extract_text, find_child_by_kind, TreeSitterParser};
use super::{ImportExtractor, ImportedName, RawImport};
use crate::core::{AnalysisError, QualifiedName, Result};

const FUTURE_MODULE: &str = "__future__";

/// Collects every import statement of a Python module, nested ones included.
pub struct PythonImportExtractor;

impl PythonImportExtractor {
    pub fn new() -> Self {
        Self
    }

    fn collect(
        &self,
        node: &TSNode,
        source: &[u8],
        path: &Path,
        imports: &mut Vec<RawImport>,
    ) -> Result<()> {
        match node.kind() {
            "import_statement" => self.process_import(node, source, imports),
            "import_from_statement" => self.process_import_from(node, source, path, imports)?,
            "future_import_statement" => self.process_future_import(node, source, path, imports)?,
            _ => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    self.collect(&child, source, path, imports)?;
                }
            }
        }
        Ok(())
    }

    fn process_import(&self, node: &TSNode, source: &[u8], imports: &mut Vec<RawImport>) {
        let mut cursor = node.walk();
        for name_node in node.children_by_field_name("name", &mut cursor) {
            if let Some(name) = imported_target(&name_node).and_then(|t| dotted_name(&t, source)) {
                imports.push(RawImport::Plain(name));
            }
        }
    }

    fn process_import_from(
        &self,
        node: &TSNode,
        source: &[u8],
        path: &Path,
        imports: &mut Vec<RawImport>,
    ) -> Result<()> {
        let Some(module_node) = node.child_by_field_name("module_name") else {
            return Ok(());
        };
        let names = self.imported_names(node, source, path)?;

        match module_node.kind() {
            "relative_import" => {
                let level = find_child_by_kind(&module_node, "import_prefix")
                    .map(|prefix| extract_text(&prefix, source).matches('.').count())
                    .unwrap_or(0);
                let base = find_child_by_kind(&module_node, "dotted_name")
                    .and_then(|dotted| dotted_name(&dotted, source));
                imports.push(RawImport::Relative { level, base, names });
            }
            _ => {
                if let Some(base) = dotted_name(&module_node, source) {
                    imports.push(RawImport::From { base, names });
                }
            }
        }
        Ok(())
    }

    fn process_future_import(
        &self,
        node: &TSNode,
        source: &[u8],
        path: &Path,
        imports: &mut Vec<RawImport>,
    ) -> Result<()> {
        imports.push(RawImport::From {
            base: QualifiedName::new([FUTURE_MODULE]),
            names: self.imported_names(node, source, path)?,
        });
        Ok(())
    }

    /// Names after `import` in a from-import must be single identifiers;
    /// `from a import b.c` is rejected like any other syntax error.
    fn imported_names(
        &self,
        node: &TSNode,
        source: &[u8],
        path: &Path,
    ) -> Result<Vec<ImportedName>> {
        if find_child_by_kind(node, "wildcard_import").is_some() {
            return Ok(vec![ImportedName::Wildcard]);
        }

        let mut cursor = node.walk();
        let name_nodes: Vec<TSNode> = node.children_by_field_name("name", &mut cursor).collect();

        let mut names = Vec::with_capacity(name_nodes.len());
        for name_node in name_nodes {
            let Some(target) = imported_target(&name_node) else {
                continue;
            };
            let Some(name) = dotted_name(&target, source) else {
                continue;
            };
            match name.parts() {
                [single] => names.push(ImportedName::Name(single.clone())),
                _ => {
                    let point = target.start_position();
                    return Err(AnalysisError::Parse {
                        path: path.to_path_buf(),
                        line: point.row + 1,
                        column: point.column + 1,
                    });
                }
            }
        }
        Ok(names)
    }
}

/// `a.b` or `a.b as c`; the alias is irrelevant to dependencies.
fn imported_target<'a>(node: &TSNode<'a>) -> Option<TSNode<'a>> {
    match node.kind() {
        "aliased_import" => node.child_by_field_name("name"),
        _ => Some(*node),
    }
}

fn dotted_name(node: &TSNode, source: &[u8]) -> Option<QualifiedName> {
    let parts: Vec<&str> = match node.kind() {
        "dotted_name" => {
            let mut cursor = node.walk();
            let parts = node
                .named_children(&mut cursor)
                .filter(|part| part.kind() == "identifier")
                .map(|part| extract_text(&part, source))
                .collect();
            parts
        }
        "identifier" => vec![extract_text(node, source)],
        _ => return None,
    };

    if parts.is_empty() || parts.iter().any(|p| p.is_empty()) {
        None
    } else {
        Some(QualifiedName::new(parts))
    }
}

impl Default for PythonImportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for PythonImportExtractor {
    fn extract_imports(&self, source: &str, path: &Path) -> Result<Vec<RawImport>> {
        let mut parser = TreeSitterParser::new(tree_sitter_python::language())?;
        let tree = parser.parse_strict(source, path)?;

        let mut imports = Vec::new();
        self.collect(&tree.root_node(), source.as_bytes(), path, &mut imports)?;
        Ok(imports)
    }

    fn language_name(&self) -> &str {
        "python"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(code: &str) -> Vec<RawImport> {
        PythonImportExtractor::new()
            .extract_imports(code, Path::new("test.py"))
            .unwrap()
    }

    fn qn(dotted: &str) -> QualifiedName {
        QualifiedName::parse(dotted).unwrap()
    }

    #[test]
    fn plain_imports_drop_aliases() {
        let imports = extract("import os, app.util as u\n");
        assert_eq!(
            imports,
            vec![RawImport::Plain(qn("os")), RawImport::Plain(qn("app.util"))]
        );
    }

    #[test]
    fn from_import_with_parenthesized_list() {
        let imports = extract("from app.sub import (\n    x,\n    y as z\n)\n");
        assert_eq!(
            imports,
            vec![RawImport::From {
                base: qn("app.sub"),
                names: vec![
                    ImportedName::Name("x".to_string()),
                    ImportedName::Name("y".to_string()),
                ],
            }]
        );
    }

    #[test]
    fn wildcard_import() {
        let imports = extract("from app.sub import *\n");
        assert_eq!(
            imports,
            vec![RawImport::From {
                base: qn("app.sub"),
                names: vec![ImportedName::Wildcard],
            }]
        );
    }

    #[test]
    fn relative_levels_are_counted() {
        let imports = extract("from . import a\nfrom ..pkg.mod import b\n");
        assert_eq!(
            imports,
            vec![
                RawImport::Relative {
                    level: 1,
                    base: None,
                    names: vec![ImportedName::Name("a".to_string())],
                },
                RawImport::Relative {
                    level: 2,
                    base: Some(qn("pkg.mod")),
                    names: vec![ImportedName::Name("b".to_string())],
                },
            ]
        );
    }

    #[test]
    fn nested_imports_are_found() {
        let code = "def f():\n    import app.lazy\n\ntry:\n    import fast\nexcept ImportError:\n    import slow\n";
        let imports = extract(code);
        assert_eq!(
            imports,
            vec![
                RawImport::Plain(qn("app.lazy")),
                RawImport::Plain(qn("fast")),
                RawImport::Plain(qn("slow")),
            ]
        );
    }

    #[test]
    fn future_import_is_absolute() {
        let imports = extract("from __future__ import annotations\n");
        assert!(matches!(
            &imports[..],
            [RawImport::From { base, .. }] if base == &qn("__future__")
        ));
    }

    #[test]
    fn malformed_source_is_an_error() {
        let result = PythonImportExtractor::new()
            .extract_imports("def broken(:\n    pass\n", Path::new("bad.py"));
        assert!(result.is_err());
    }

    #[test]
    fn dotted_name_after_from_import_is_rejected() {
        for code in ["from a import b.c\n", "from a import (x, b.c as d)\n"] {
            let err = PythonImportExtractor::new()
                .extract_imports(code, Path::new("bad.py"))
                .unwrap_err();
            assert!(
                matches!(err, AnalysisError::Parse { line: 1, .. }),
                "{code:?} gave {err:?}"
            );
        }
    }
}
