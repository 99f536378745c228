//! Tests for the dependency graph builder and the mutation engine.
mod common;
use boxflow::prelude::*;
use common::*;
use std::collections::HashSet;

#[test]
fn test_add_box_matches_in_both_directions() {
    // The consumer is added first; the edge must still point producer -> consumer.
    let consumer = create_box("compile", "gcc", &[("source-files", "src", "file[]")], &[]);
    let producer = create_box("sources", "data-in", &[], &[("in-data", "src", "file[]")]);

    let graph = PipelineGraph::new().add_box(consumer).add_box(producer);

    assert_eq!(graph.dependencies.len(), 1);
    let dep = &graph.dependencies[0];
    assert_eq!(dep.from, "sources");
    assert_eq!(dep.to, "compile");
    assert_eq!(dep.name, "src");
}

#[test]
fn test_compile_chain_builds_two_edges() {
    let graph = PipelineGraph::from_boxes(create_compile_boxes());

    let expected: HashSet<_> = [
        (
            "sources".to_string(),
            "compile".to_string(),
            "src".to_string(),
        ),
        (
            "compile".to_string(),
            "output".to_string(),
            "bin".to_string(),
        ),
    ]
    .into_iter()
    .collect();
    assert_eq!(edge_set(&graph), expected);
}

#[test]
fn test_edge_dedup_with_repeated_bindings() {
    // Two input ports of the same box bound to the same variable must not
    // produce two identical (from, to, name) triples.
    let producer = create_box("a", "data-in", &[], &[("in-data", "x", "file[]")]);
    let consumer = create_box(
        "b",
        "merge",
        &[("left", "x", "file[]"), ("right", "x", "file[]")],
        &[],
    );

    let graph = PipelineGraph::new().add_box(producer).add_box(consumer);
    assert_eq!(graph.dependencies.len(), 1);
}

#[test]
fn test_merge_does_not_duplicate_existing_edges() {
    let producer = create_box("p", "data-in", &[], &[("in-data", "x", "file[]")]);
    let consumer = create_box("c", "gcc", &[("source-files", "x", "file[]")], &[]);
    // Same name and bindings as `producer`; the engine accepts the collision
    // (caller contract) but must not duplicate the (p, c, x) edge.
    let shadow = create_box("p", "data-in", &[], &[("in-data", "x", "file[]")]);

    let graph = PipelineGraph::new()
        .add_box(producer)
        .add_box(consumer)
        .add_box(shadow);

    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.dependencies.len(), 1);
}

#[test]
fn test_rebuild_equals_incremental() {
    let boxes = create_compile_boxes();

    let rebuilt = PipelineGraph::from_boxes(boxes.clone());
    let mut incremental = PipelineGraph::new();
    for bx in boxes {
        incremental = incremental.add_box(bx);
    }

    assert_eq!(rebuilt.nodes.len(), incremental.nodes.len());
    assert_eq!(edge_set(&rebuilt), edge_set(&incremental));
}

#[test]
fn test_rebuild_edge_set_is_order_independent() {
    let mut boxes = create_compile_boxes();
    let forward = PipelineGraph::from_boxes(boxes.clone());
    boxes.reverse();
    let backward = PipelineGraph::from_boxes(boxes);

    assert_eq!(edge_set(&forward), edge_set(&backward));
}

#[test]
fn test_remove_box_drops_its_edges() {
    let graph = PipelineGraph::from_boxes(create_compile_boxes());
    assert_eq!(graph.dependencies.len(), 2);

    let removed = graph.remove_box("compile");

    assert_eq!(removed.nodes.len(), 2);
    assert!(removed.find_box("compile").is_none());
    assert!(
        removed
            .dependencies
            .iter()
            .all(|dep| dep.from != "compile" && dep.to != "compile")
    );
    // Both edges of the chain touched the removed box.
    assert!(removed.dependencies.is_empty());
    // The previous revision stays intact.
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.dependencies.len(), 2);
}

#[test]
fn test_remove_box_keeps_unrelated_edges() {
    let mut boxes = create_compile_boxes();
    boxes.push(create_box(
        "extra-sources",
        "files-in",
        &[],
        &[("input", "y", "file[]")],
    ));
    boxes.push(create_box(
        "extra-compile",
        "gcc",
        &[("source-files", "y", "file[]")],
        &[],
    ));

    let graph = PipelineGraph::from_boxes(boxes);
    assert_eq!(graph.dependencies.len(), 3);

    let removed = graph.remove_box("compile");
    let expected: HashSet<_> = [(
        "extra-sources".to_string(),
        "extra-compile".to_string(),
        "y".to_string(),
    )]
    .into_iter()
    .collect();
    assert_eq!(edge_set(&removed), expected);
}

#[test]
fn test_remove_missing_box_is_a_no_op() {
    let graph = PipelineGraph::from_boxes(create_compile_boxes());
    let removed = graph.remove_box("no-such-box");
    assert_eq!(removed, graph);
}

#[test]
fn test_replace_box_rebinds_edges() {
    let graph = PipelineGraph::from_boxes(create_compile_boxes());
    // Rebind the compiler's input to a variable nothing produces.
    let rebound = create_box(
        "compile",
        "gcc",
        &[("source-files", "other", "file[]")],
        &[("binary-file", "bin", "file")],
    );

    let replaced = graph.replace_box("compile", rebound);

    let expected: HashSet<_> = [(
        "compile".to_string(),
        "output".to_string(),
        "bin".to_string(),
    )]
    .into_iter()
    .collect();
    assert_eq!(edge_set(&replaced), expected);
}

#[test]
fn test_replace_box_rename_regenerates_edges_under_new_name() {
    let graph = PipelineGraph::from_boxes(create_compile_boxes());
    let renamed = create_box(
        "build",
        "gcc",
        &[("source-files", "src", "file[]")],
        &[("binary-file", "bin", "file")],
    );

    let replaced = graph.replace_box("compile", renamed);

    assert!(replaced.find_box("compile").is_none());
    assert!(
        replaced
            .dependencies
            .iter()
            .all(|dep| dep.from != "compile" && dep.to != "compile")
    );
    let expected: HashSet<_> = [
        (
            "sources".to_string(),
            "build".to_string(),
            "src".to_string(),
        ),
        ("build".to_string(), "output".to_string(), "bin".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(edge_set(&replaced), expected);
}

#[test]
fn test_no_self_loop_on_construction() {
    // A box consuming its own output variable forms no edge with itself.
    let selfy = create_box(
        "loop",
        "gcc",
        &[("source-files", "v", "file[]")],
        &[("binary-file", "v", "file")],
    );

    let graph = PipelineGraph::new().add_box(selfy.clone());
    assert!(graph.dependencies.is_empty());

    assert!(edges_for_new_box(&[], &selfy).is_empty());
}

#[test]
fn test_empty_ports_are_tolerated() {
    let empty = PipelineBox::new("empty", "noop");

    let graph = PipelineGraph::new().add_box(empty.clone());
    assert!(graph.dependencies.is_empty());

    let more = graph.add_box(create_box(
        "sources",
        "data-in",
        &[],
        &[("in-data", "src", "file[]")],
    ));
    assert_eq!(more.nodes.len(), 2);
    assert!(more.dependencies.is_empty());
    assert!(edges_for_new_box(&more.nodes, &empty).is_empty());
}

#[test]
fn test_empty_to_populated_and_back() {
    let graph = PipelineGraph::new();
    assert!(graph.is_empty());

    let populated = graph.add_box(PipelineBox::new("only", "file-in"));
    assert!(!populated.is_empty());

    let drained = populated.remove_box("only");
    assert!(drained.is_empty());
    assert!(drained.dependencies.is_empty());
}

#[test]
fn test_to_dot_is_deterministic_and_complete() {
    let graph = PipelineGraph::from_boxes(create_compile_boxes());
    let dot = graph.to_dot();

    assert!(dot.starts_with("digraph pipeline {"));
    assert!(dot.contains("\"sources\" -> \"compile\" [label=\"src\"];"));
    assert!(dot.contains("\"compile\" -> \"output\" [label=\"bin\"];"));
    assert_eq!(dot, graph.to_dot());
}
