use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use tracing::trace;

use crate::catalog::BoxTypeCatalog;
use crate::error::ArtifactError;
use crate::pipeline::definition::{PipelineBox, PipelineDefinition, PortBinding};
use crate::pipeline::variables::{
    DataType, VariableValue, decode_variable_name, encode_variable_name, infer_variable_types,
};
use crate::ui::EditorPipeline;

/// A variable entry as persisted through the platform API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    pub value: VariableValue,
}

/// A box as persisted through the platform API. Identical to
/// [`PipelineBox`] except that empty port maps are dropped from the
/// serialized document (key absent, not an empty object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBox {
    pub name: String,
    #[serde(rename = "type")]
    pub box_type: String,
    #[serde(rename = "portsIn", default, skip_serializing_if = "Option::is_none")]
    pub ports_in: Option<AHashMap<String, PortBinding>>,
    #[serde(rename = "portsOut", default, skip_serializing_if = "Option::is_none")]
    pub ports_out: Option<AHashMap<String, PortBinding>>,
}

/// The pipeline shape stored and loaded through the platform API: the box
/// list plus the variable values that survived type inference. Dependency
/// edges are never part of this document; they are derived from the boxes on
/// every load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPipeline {
    pub boxes: Vec<StoredBox>,
    #[serde(default)]
    pub variables: Vec<PipelineVariable>,
}

impl StoredPipeline {
    /// Prepares editor data for persistence.
    ///
    /// Strips empty port maps from each box, decodes the editor's encoded
    /// variable keys back to plain names, attaches the type inferred from the
    /// catalog to each variable, and drops variables no known box type gives
    /// a type to. Variables are written in name order so the output document
    /// is stable.
    pub fn from_editor(catalog: &BoxTypeCatalog, editor: &EditorPipeline) -> Self {
        let inferred = infer_variable_types(catalog, &editor.boxes);

        let boxes = editor
            .boxes
            .iter()
            .map(|bx| StoredBox {
                name: bx.name.clone(),
                box_type: bx.box_type.clone(),
                ports_in: (!bx.ports_in.is_empty()).then(|| bx.ports_in.clone()),
                ports_out: (!bx.ports_out.is_empty()).then(|| bx.ports_out.clone()),
            })
            .collect();

        let mut variables = Vec::new();
        for (key, value) in editor.variables.iter() {
            let name = decode_variable_name(key);
            match inferred.get(&name) {
                Some(info) => variables.push(PipelineVariable {
                    name,
                    data_type: info.data_type,
                    value: value.clone(),
                }),
                None => trace!(variable = %name, "dropping variable with no inferred type"),
            }
        }
        variables.sort_by(|a, b| a.name.cmp(&b.name));

        Self { boxes, variables }
    }

    /// Reconstructs editor data from the persisted form (the load boundary).
    /// Absent port maps become empty maps; variable keys are re-encoded.
    pub fn into_editor(self) -> EditorPipeline {
        let boxes = self
            .boxes
            .into_iter()
            .map(|stored| PipelineBox {
                name: stored.name,
                box_type: stored.box_type,
                ports_in: stored.ports_in.unwrap_or_default(),
                ports_out: stored.ports_out.unwrap_or_default(),
            })
            .collect();
        let variables = self
            .variables
            .into_iter()
            .map(|variable| (encode_variable_name(&variable.name), variable.value))
            .collect();
        EditorPipeline { boxes, variables }
    }

    /// Renders the pipeline as the pretty-printed JSON document the API
    /// exchanges.
    pub fn to_json(&self) -> Result<String, ArtifactError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Parses a pipeline from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        serde_json::from_str(json).map_err(|e| ArtifactError::JsonParseError(e.to_string()))
    }

    /// Writes the JSON document to a file.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })
    }

    /// Loads a pipeline JSON document from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        Self::from_json(&json)
    }
}

// Binary autosave of the validated box list. Only the boxes are written;
// variable values live in the form state and dependency edges are always
// regenerated from the boxes on load.
impl PipelineDefinition {
    /// Serializes the box list to the binary snapshot format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Saves a binary snapshot of the box list.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a binary snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a binary snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(definition, _)| definition)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }
}
