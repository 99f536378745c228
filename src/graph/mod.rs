//! The live graph model behind the visual pipeline editor.
//!
//! A [`PipelineGraph`] holds the current boxes plus the dependency edges
//! derived from their variable bindings. Edges are derived data: they are
//! recomputed incrementally on every mutation and rebuilt from scratch on
//! load, and they are never persisted.

pub mod builder;
pub mod diagnostics;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pipeline::definition::{PipelineBox, PipelineDefinition};

/// A directed edge stating that box `from` produces the variable `name`
/// consumed by box `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub from: String,
    pub to: String,
    pub name: String,
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.name, self.to)
    }
}

/// The pipeline's box list plus its derived dependency edges.
///
/// Mutation operations return a fresh graph value, so a caller's previous
/// revision stays valid (undo stacks, optimistic editor updates). The edge
/// list never contains two entries with the same `(from, to, name)` triple.
///
/// Box-name uniqueness is a caller contract: `add_box` will not reject a
/// colliding name. Every load path goes through
/// [`PipelineDefinition::new`], which enforces uniqueness once at the
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineGraph {
    pub nodes: Vec<PipelineBox>,
    pub dependencies: Vec<Dependency>,
}

impl PipelineGraph {
    /// An empty graph; reaches the populated state only via [`Self::add_box`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the whole graph from an ordered box list (the load path).
    ///
    /// Folding [`Self::add_box`] over the list yields the same deduplicated
    /// edge set the incremental editing path produces.
    pub fn from_boxes<I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = PipelineBox>,
    {
        boxes
            .into_iter()
            .fold(Self::new(), |graph, bx| graph.add_box(bx))
    }

    pub fn from_definition(definition: &PipelineDefinition) -> Self {
        Self::from_boxes(definition.boxes.iter().cloned())
    }

    /// Appends a box, merging the edges it forms with the existing boxes.
    ///
    /// Edges are computed against the pre-append node list, so bindings the
    /// box has with itself never produce a self-loop.
    pub fn add_box(&self, bx: PipelineBox) -> Self {
        let candidates = builder::edges_for_new_box(&self.nodes, &bx);
        let mut dependencies = self.dependencies.clone();
        for edge in candidates {
            if !dependencies.contains(&edge) {
                dependencies.push(edge);
            }
        }
        debug!(
            box_name = %bx.name,
            new_edges = dependencies.len() - self.dependencies.len(),
            "added box to pipeline graph"
        );
        let mut nodes = self.nodes.clone();
        nodes.push(bx);
        Self {
            nodes,
            dependencies,
        }
    }

    /// Removes the named box and every edge that references it. The result
    /// never mentions the removed name.
    pub fn remove_box(&self, name: &str) -> Self {
        let nodes = self
            .nodes
            .iter()
            .filter(|bx| bx.name != name)
            .cloned()
            .collect();
        let dependencies = self
            .dependencies
            .iter()
            .filter(|dep| dep.from != name && dep.to != name)
            .cloned()
            .collect();
        debug!(box_name = %name, "removed box from pipeline graph");
        Self {
            nodes,
            dependencies,
        }
    }

    /// Replaces a box: drops the old one with its edges, then reinserts the
    /// new one and recomputes its edges against the remaining boxes. A rename
    /// therefore never leaves edges keyed by the old name behind.
    pub fn replace_box(&self, old_name: &str, bx: PipelineBox) -> Self {
        self.remove_box(old_name).add_box(bx)
    }

    pub fn find_box(&self, name: &str) -> Option<&PipelineBox> {
        self.nodes.iter().find(|bx| bx.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Renders the graph in Graphviz dot format, sorted for stable output.
    pub fn to_dot(&self) -> String {
        use itertools::Itertools;

        let mut out = String::from("digraph pipeline {\n");
        for bx in self.nodes.iter().sorted_by(|a, b| a.name.cmp(&b.name)) {
            out.push_str(&format!("    \"{}\";\n", bx.name));
        }
        for dep in self.dependencies.iter().sorted_by(|a, b| {
            (&a.from, &a.to, &a.name).cmp(&(&b.from, &b.to, &b.name))
        }) {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                dep.from, dep.to, dep.name
            ));
        }
        out.push_str("}\n");
        out
    }
}
