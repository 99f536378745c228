use std::fmt;

use ahash::AHashMap;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::catalog::BoxTypeCatalog;
use crate::pipeline::definition::PipelineBox;

/// Prefix marking a variable name encoded as an editor form key.
const VARIABLE_KEY_PREFIX: &str = "var_";

/// The closed set of value types that can flow through pipeline ports.
///
/// External data carries these as string tags (`"file"`, `"file[]"`, ...);
/// any tag outside the platform's set maps to the [`DataType::Unknown`]
/// sentinel, rendered as `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    File,
    FileArray,
    String,
    StringArray,
    RemoteFile,
    RemoteFileArray,
    Unknown,
}

impl DataType {
    /// True for the list-valued `[]` variants.
    pub fn is_array(self) -> bool {
        matches!(
            self,
            DataType::FileArray | DataType::StringArray | DataType::RemoteFileArray
        )
    }

    /// True for the `?` sentinel.
    pub fn is_unknown(self) -> bool {
        self == DataType::Unknown
    }

    /// The wire tag this type serializes to.
    pub fn as_tag(self) -> &'static str {
        match self {
            DataType::File => "file",
            DataType::FileArray => "file[]",
            DataType::String => "string",
            DataType::StringArray => "string[]",
            DataType::RemoteFile => "remote-file",
            DataType::RemoteFileArray => "remote-file[]",
            DataType::Unknown => "?",
        }
    }
}

impl From<&str> for DataType {
    fn from(tag: &str) -> Self {
        match tag {
            "file" => DataType::File,
            "file[]" => DataType::FileArray,
            "string" => DataType::String,
            "string[]" => DataType::StringArray,
            "remote-file" => DataType::RemoteFile,
            "remote-file[]" => DataType::RemoteFileArray,
            _ => DataType::Unknown,
        }
    }
}

impl From<String> for DataType {
    fn from(tag: String) -> Self {
        tag.as_str().into()
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        data_type.as_tag().to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A concrete value assigned to a pipeline variable: a single string or a
/// list of strings, matching the persisted `value` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Single(String),
    List(Vec<String>),
}

/// Encodes a variable name so it is safe to use as a form/object key.
pub fn encode_variable_name(name: &str) -> String {
    format!("{}{}", VARIABLE_KEY_PREFIX, URL_SAFE_NO_PAD.encode(name))
}

/// Decodes a key produced by [`encode_variable_name`] back to the plain
/// variable name. Keys that do not carry the encoding pass through unchanged.
pub fn decode_variable_name(key: &str) -> String {
    let Some(encoded) = key.strip_prefix(VARIABLE_KEY_PREFIX) else {
        return key.to_string();
    };
    match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| key.to_string()),
        Err(_) => key.to_string(),
    }
}

/// The type inferred for a variable, plus one port it was inferred from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredVariable {
    pub data_type: DataType,
    /// Name of a box whose port references the variable.
    pub example_box: String,
    /// The referencing port on `example_box`.
    pub example_port: String,
}

/// Derives the type of every variable referenced by the given boxes.
///
/// A port contributes only when its box's type exists in the catalog and the
/// port itself is declared by that type. When several ports disagree about a
/// variable, the last one visited wins; conflicts are reported separately by
/// the diagnostics pass, never here.
pub fn infer_variable_types(
    catalog: &BoxTypeCatalog,
    boxes: &[PipelineBox],
) -> AHashMap<String, InferredVariable> {
    let mut variables = AHashMap::new();
    for bx in boxes {
        let Some(box_type) = catalog.get(&bx.box_type) else {
            continue;
        };
        let directions = [
            (&bx.ports_in, &box_type.ports_in),
            (&bx.ports_out, &box_type.ports_out),
        ];
        for (ports, declared) in directions {
            for (port_name, binding) in ports.iter() {
                let Some(spec) = declared.get(port_name) else {
                    continue;
                };
                variables.insert(
                    binding.value.clone(),
                    InferredVariable {
                        data_type: spec.data_type,
                        example_box: bx.name.clone(),
                        example_port: port_name.clone(),
                    },
                );
            }
        }
    }
    variables
}
