use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::PipelineConversionError;
use crate::pipeline::variables::DataType;

/// Binds one port of a concrete box to a named variable.
///
/// `value` is the variable name; an empty string marks a port the user has
/// not assigned yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortBinding {
    pub value: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

/// A single processing step of a pipeline: an instance of a catalog box type
/// with its ports bound to variables.
///
/// The `box_type` may reference a type absent from the current catalog, and
/// the port maps may disagree with what that type declares. Neither is an
/// error here; both surface as diagnostics so the editor can render warning
/// badges instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineBox {
    pub name: String,
    #[serde(rename = "type")]
    pub box_type: String,
    #[serde(rename = "portsIn", default)]
    pub ports_in: AHashMap<String, PortBinding>,
    #[serde(rename = "portsOut", default)]
    pub ports_out: AHashMap<String, PortBinding>,
}

impl PipelineBox {
    /// A box with the given name and type and no port bindings yet.
    pub fn new(name: impl Into<String>, box_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            box_type: box_type.into(),
            ports_in: AHashMap::new(),
            ports_out: AHashMap::new(),
        }
    }

    /// Builder-style helper binding one input port.
    pub fn with_input(mut self, port: impl Into<String>, variable: impl Into<String>, data_type: DataType) -> Self {
        self.ports_in.insert(
            port.into(),
            PortBinding {
                value: variable.into(),
                data_type,
            },
        );
        self
    }

    /// Builder-style helper binding one output port.
    pub fn with_output(mut self, port: impl Into<String>, variable: impl Into<String>, data_type: DataType) -> Self {
        self.ports_out.insert(
            port.into(),
            PortBinding {
                value: variable.into(),
                data_type,
            },
        );
        self
    }
}

/// The canonical, validated list of boxes making up a pipeline.
///
/// This is the target of every external-format conversion and the input of
/// the graph rebuild on load. Box names are unique here: the graph engine
/// itself stays permissive about collisions (caller contract), so this
/// boundary is where duplicates are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    pub boxes: Vec<PipelineBox>,
}

impl PipelineDefinition {
    pub fn new(boxes: Vec<PipelineBox>) -> Result<Self, PipelineConversionError> {
        let mut seen = AHashSet::new();
        for bx in &boxes {
            if !seen.insert(bx.name.clone()) {
                return Err(PipelineConversionError::DuplicateBoxName {
                    name: bx.name.clone(),
                });
            }
        }
        Ok(Self { boxes })
    }
}
