//! Common test utilities for building boxes, pipelines and catalogs.
use boxflow::prelude::*;
use std::collections::HashSet;

/// Minimal catalog for serialization tests: a data source and a compiler.
#[allow(dead_code)]
pub fn create_test_catalog() -> BoxTypeCatalog {
    BoxTypeCatalog::from_json(
        r#"[
            {
                "type": "data-in",
                "name": "Input data",
                "portsOut": { "in-data": { "type": "file[]" } }
            },
            {
                "type": "gcc",
                "name": "GCC compilation",
                "portsIn": { "source-files": { "type": "file[]" } },
                "portsOut": { "binary-file": { "type": "file" } }
            }
        ]"#,
    )
    .expect("Failed to parse test catalog")
}

/// Builds a box from `(port, variable, type tag)` triples.
#[allow(dead_code)]
pub fn create_box(
    name: &str,
    box_type: &str,
    ins: &[(&str, &str, &str)],
    outs: &[(&str, &str, &str)],
) -> PipelineBox {
    let mut bx = PipelineBox::new(name, box_type);
    for (port, variable, tag) in ins {
        bx = bx.with_input(*port, *variable, DataType::from(*tag));
    }
    for (port, variable, tag) in outs {
        bx = bx.with_output(*port, *variable, DataType::from(*tag));
    }
    bx
}

/// A three-box compile chain: data source -> compiler -> file sink, linked
/// through the variables `src` and `bin`.
#[allow(dead_code)]
pub fn create_compile_boxes() -> Vec<PipelineBox> {
    vec![
        create_box("sources", "data-in", &[], &[("in-data", "src", "file[]")]),
        create_box(
            "compile",
            "gcc",
            &[("source-files", "src", "file[]")],
            &[("binary-file", "bin", "file")],
        ),
        create_box("output", "file-out", &[("output", "bin", "file")], &[]),
    ]
}

/// The dependency list as an order-independent set of triples.
#[allow(dead_code)]
pub fn edge_set(graph: &PipelineGraph) -> HashSet<(String, String, String)> {
    graph
        .dependencies
        .iter()
        .map(|dep| (dep.from.clone(), dep.to.clone(), dep.name.clone()))
        .collect()
}
