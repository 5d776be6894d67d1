use pymoddeps::core::{GraphBuilder, ModuleDependencies, QualifiedName};
use pymoddeps::formatters::{GraphFormatter, JsonCompactFormatter, TextFormatter};
use serde_json::Value;

fn sample_graph() -> pymoddeps::core::DependencyGraph {
    let mut gb = GraphBuilder::new();
    for (module, targets) in [
        ("b", vec!["a.x"]),
        ("a.main", vec!["b", "a.util"]),
        ("a.util", vec![]),
    ] {
        gb.add_module(ModuleDependencies {
            module: QualifiedName::parse(module).unwrap(),
            targets: targets
                .into_iter()
                .map(|t| QualifiedName::parse(t).unwrap())
                .collect(),
        });
    }
    gb.build()
}

#[test]
fn text_formatter_writes_sorted_edge_lines() {
    let out = TextFormatter::new().format_to_string(&sample_graph()).unwrap();
    assert_eq!(out, "a.main a.util\na.main b\nb a.x\n");
}

#[test]
fn json_compact_formatter_outputs_valid_json() {
    let out = JsonCompactFormatter::new()
        .format_to_string(&sample_graph())
        .unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["meta"]["modules"].as_u64().unwrap(), 3);
    assert_eq!(v["meta"]["edges"].as_u64().unwrap(), 3);
    assert_eq!(v["edges"][0][0], "a.main");
    assert_eq!(v["edges"][0][1], "a.util");
    assert_eq!(v["edges"][2][0], "b");
}

#[test]
fn empty_graph_writes_nothing() {
    let graph = GraphBuilder::new().build();
    assert_eq!(TextFormatter::new().format_to_string(&graph).unwrap(), "");
}
