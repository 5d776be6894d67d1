use pymoddeps::core::{GraphBuilder, ModuleDependencies, NodeKind, QualifiedName};

fn qn(dotted: &str) -> QualifiedName {
    QualifiedName::parse(dotted).unwrap()
}

fn deps(module: &str, targets: &[&str]) -> ModuleDependencies {
    ModuleDependencies {
        module: qn(module),
        targets: targets.iter().map(|t| qn(t)).collect(),
    }
}

#[test]
fn graph_builder_adds_modules_and_edges() {
    let mut gb = GraphBuilder::new();
    gb.add_module(deps("app.main", &["app.util", "app.sub.x"]));
    gb.add_module(deps("app.util", &["vendor"]));
    gb.add_module(deps("solo", &[]));

    let graph = gb.build();
    assert_eq!(graph.module_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    // isolated modules never become nodes
    assert_eq!(graph.graph().node_count(), 4);

    let rendered: Vec<(String, String)> = graph
        .edges()
        .into_iter()
        .map(|e| (e.source.render(), e.target.render()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("app.main".to_string(), "app.sub.x".to_string()),
            ("app.main".to_string(), "app.util".to_string()),
            ("app.util".to_string(), "vendor".to_string()),
        ]
    );
}

#[test]
fn imported_node_upgrades_to_module() {
    let mut gb = GraphBuilder::new();
    gb.add_module(deps("app.main", &["app.util"]));
    gb.add_module(deps("app.util", &["app.main"]));

    let util = gb.get_node_index(&qn("app.util")).unwrap();
    let graph = gb.build();
    assert_eq!(graph.graph()[util].kind, NodeKind::Module);
    assert_eq!(graph.graph().node_count(), 2);
}
