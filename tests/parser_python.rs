use pymoddeps::core::{AnalysisError, QualifiedName};
use pymoddeps::parsers::python::PythonImportExtractor;
use pymoddeps::parsers::{ImportExtractor, ImportedName, RawImport};
use std::fs;

#[test]
fn python_extractor_reads_imports_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("sample.py");
    let code = r#"
"""Module doc."""
import os
import app.util as u
from app.sub import *
from . import sibling

class A:
    def m(self):
        from vendor.lib import helper
        return helper()
"#;
    fs::write(&file, code).unwrap();

    let imports = PythonImportExtractor::new().extract_file(&file).unwrap();

    assert_eq!(imports.len(), 5);
    assert_eq!(imports[0], RawImport::Plain(QualifiedName::new(["os"])));
    assert_eq!(
        imports[1],
        RawImport::Plain(QualifiedName::new(["app", "util"]))
    );
    assert_eq!(
        imports[2],
        RawImport::From {
            base: QualifiedName::new(["app", "sub"]),
            names: vec![ImportedName::Wildcard],
        }
    );
    assert!(imports[3].is_relative());
    assert_eq!(
        imports[4],
        RawImport::From {
            base: QualifiedName::new(["vendor", "lib"]),
            names: vec![ImportedName::Name("helper".to_string())],
        }
    );
}

#[test]
fn syntax_error_reports_location() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("broken.py");
    fs::write(&file, "import os\nimport\n").unwrap();

    let err = PythonImportExtractor::new().extract_file(&file).unwrap_err();
    assert!(matches!(err, AnalysisError::Parse { .. }));
}

#[test]
fn unreadable_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = PythonImportExtractor::new()
        .extract_file(&dir.path().join("missing.py"))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Io { .. }));
}
