use itertools::Itertools;

use crate::graph::Dependency;
use crate::pipeline::definition::PipelineBox;

/// Computes the dependency edges a newly introduced box forms with the boxes
/// already present in the graph.
///
/// Ports match purely by equal bound variable name; port types never
/// influence edge construction (type conflicts are a diagnostics concern).
/// The new box is matched only against `existing`, so a box whose own output
/// feeds its own input yields no self-loop. Boxes with empty port maps simply
/// contribute no matches.
///
/// The returned candidate list carries no duplicate `(from, to, name)`
/// triples; merging against the edges already in the graph is the caller's
/// job.
pub fn edges_for_new_box(existing: &[PipelineBox], new_box: &PipelineBox) -> Vec<Dependency> {
    let mut edges = Vec::new();
    for old in existing {
        // new box output -> old box input
        for (out, inp) in new_box
            .ports_out
            .values()
            .cartesian_product(old.ports_in.values())
        {
            if out.value == inp.value {
                edges.push(Dependency {
                    from: new_box.name.clone(),
                    to: old.name.clone(),
                    name: out.value.clone(),
                });
            }
        }
        // old box output -> new box input
        for (out, inp) in old
            .ports_out
            .values()
            .cartesian_product(new_box.ports_in.values())
        {
            if out.value == inp.value {
                edges.push(Dependency {
                    from: old.name.clone(),
                    to: new_box.name.clone(),
                    name: out.value.clone(),
                });
            }
        }
    }
    edges.into_iter().unique().collect()
}
