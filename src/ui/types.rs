use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::PipelineConversionError;
use crate::pipeline::conversion::IntoPipeline;
use crate::pipeline::definition::{PipelineBox, PipelineDefinition};
use crate::pipeline::variables::{VariableValue, decode_variable_name, encode_variable_name};

/// Pipeline state as exchanged with the visual editor: the box list plus the
/// current variable values.
///
/// The `variables` map is keyed by *encoded* variable names (see
/// [`encode_variable_name`]) because the editor stores them as form keys;
/// use [`EditorPipeline::variable`] / [`EditorPipeline::set_variable`] to
/// work with plain names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorPipeline {
    #[serde(default)]
    pub boxes: Vec<PipelineBox>,
    #[serde(default)]
    pub variables: AHashMap<String, VariableValue>,
}

impl EditorPipeline {
    pub fn new(boxes: Vec<PipelineBox>) -> Self {
        Self {
            boxes,
            variables: AHashMap::new(),
        }
    }

    /// Looks up a variable value by its plain (decoded) name.
    pub fn variable(&self, name: &str) -> Option<&VariableValue> {
        self.variables.get(&encode_variable_name(name))
    }

    /// Assigns a variable value under its plain name, encoding the key.
    pub fn set_variable(&mut self, name: &str, value: VariableValue) {
        self.variables.insert(encode_variable_name(name), value);
    }

    /// The plain names of all variables carrying a value.
    pub fn variable_names(&self) -> Vec<String> {
        self.variables
            .keys()
            .map(|key| decode_variable_name(key))
            .collect()
    }
}

impl IntoPipeline for EditorPipeline {
    fn into_pipeline(self) -> Result<PipelineDefinition, PipelineConversionError> {
        PipelineDefinition::new(self.boxes)
    }
}
