//! Non-fatal checks of a box list against a type catalog.
//!
//! None of these conditions block editing or graph construction; the editor
//! renders them as warning badges next to the offending box or variable.

use std::fmt;

use crate::catalog::BoxTypeCatalog;
use crate::pipeline::definition::PipelineBox;
use crate::pipeline::variables::{DataType, infer_variable_types};

/// A problem found when checking boxes against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineIssue {
    /// The box references a type the catalog does not know.
    UnknownBoxType { box_name: String, box_type: String },
    /// The box type declares a port the box instance does not bind.
    MissingPort {
        box_name: String,
        port: String,
        expected: DataType,
    },
    /// The box binds a port its type does not declare.
    UnknownPort { box_name: String, port: String },
    /// A port's declared type disagrees with the type inferred for the
    /// variable bound to it.
    TypeMismatch {
        box_name: String,
        port: String,
        variable: String,
        declared: DataType,
        inferred: DataType,
    },
}

impl fmt::Display for PipelineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineIssue::UnknownBoxType { box_name, box_type } => {
                write!(f, "box '{}' has unknown type '{}'", box_name, box_type)
            }
            PipelineIssue::MissingPort {
                box_name,
                port,
                expected,
            } => write!(
                f,
                "box '{}' is missing port '{}' of type {}",
                box_name, port, expected
            ),
            PipelineIssue::UnknownPort { box_name, port } => {
                write!(f, "box '{}' binds undeclared port '{}'", box_name, port)
            }
            PipelineIssue::TypeMismatch {
                box_name,
                port,
                variable,
                declared,
                inferred,
            } => write!(
                f,
                "variable '{}' on port '{}' of box '{}' is {} but was inferred as {}",
                variable, port, box_name, declared, inferred
            ),
        }
    }
}

/// Checks every box against the catalog and the inferred variable types.
///
/// Boxes with an unknown type yield a single issue and are not inspected
/// further (their ports carry no declared types to compare against). Ports
/// bound to the empty string are unassigned and are skipped for mismatch
/// reporting.
pub fn check_boxes(catalog: &BoxTypeCatalog, boxes: &[PipelineBox]) -> Vec<PipelineIssue> {
    let mut issues = Vec::new();
    let variables = infer_variable_types(catalog, boxes);

    for bx in boxes {
        let Some(box_type) = catalog.get(&bx.box_type) else {
            issues.push(PipelineIssue::UnknownBoxType {
                box_name: bx.name.clone(),
                box_type: bx.box_type.clone(),
            });
            continue;
        };

        let directions = [
            (&bx.ports_in, &box_type.ports_in),
            (&bx.ports_out, &box_type.ports_out),
        ];
        for (ports, declared) in directions {
            for (port_name, spec) in declared.iter() {
                if !ports.contains_key(port_name) {
                    issues.push(PipelineIssue::MissingPort {
                        box_name: bx.name.clone(),
                        port: port_name.clone(),
                        expected: spec.data_type,
                    });
                }
            }
            for (port_name, binding) in ports.iter() {
                let Some(spec) = declared.get(port_name) else {
                    issues.push(PipelineIssue::UnknownPort {
                        box_name: bx.name.clone(),
                        port: port_name.clone(),
                    });
                    continue;
                };
                if binding.value.is_empty() {
                    continue;
                }
                if let Some(inferred) = variables.get(&binding.value) {
                    if inferred.data_type != spec.data_type {
                        issues.push(PipelineIssue::TypeMismatch {
                            box_name: bx.name.clone(),
                            port: port_name.clone(),
                            variable: binding.value.clone(),
                            declared: spec.data_type,
                            inferred: inferred.data_type,
                        });
                    }
                }
            }
        }
    }
    issues
}
