//! The box-type catalog: the read-only lookup of processing-box kinds a
//! pipeline editor session has available.
//!
//! Catalogs normally arrive from the platform as JSON ([`BoxTypeCatalog::from_json`]),
//! but the platform's builtin box kinds are also compiled in
//! ([`BoxTypeCatalog::with_defaults`]) so tools and tests can run standalone.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::pipeline::variables::DataType;

/// Declares the data type of a single port on a box type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSpec {
    #[serde(rename = "type")]
    pub data_type: DataType,
}

/// A catalog entry describing one kind of processing box: its identifier, a
/// human-readable label, and the ports instances of it are expected to bind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxType {
    #[serde(rename = "type")]
    pub type_id: String,
    pub name: String,
    #[serde(rename = "portsIn", default)]
    pub ports_in: AHashMap<String, PortSpec>,
    #[serde(rename = "portsOut", default)]
    pub ports_out: AHashMap<String, PortSpec>,
}

/// Master macro defining the builtin box types and their registration.
macro_rules! define_box_types {
    ( $( ($type_id:expr, $label:expr,
          in: [ $( $in_name:expr => $in_tag:expr ),* ],
          out: [ $( $out_name:expr => $out_tag:expr ),* ]) ),* $(,)? ) => {
        fn register_default_box_types(registry: &mut AHashMap<String, BoxType>) {
            $(
                let ins: &[(&str, &str)] = &[ $( ($in_name, $in_tag) ),* ];
                let outs: &[(&str, &str)] = &[ $( ($out_name, $out_tag) ),* ];
                let ports_in: AHashMap<String, PortSpec> = ins
                    .iter()
                    .map(|(name, tag)| ((*name).to_string(), PortSpec { data_type: DataType::from(*tag) }))
                    .collect();
                let ports_out: AHashMap<String, PortSpec> = outs
                    .iter()
                    .map(|(name, tag)| ((*name).to_string(), PortSpec { data_type: DataType::from(*tag) }))
                    .collect();
                registry.insert($type_id.to_string(), BoxType {
                    type_id: $type_id.to_string(),
                    name: $label.to_string(),
                    ports_in,
                    ports_out,
                });
            )*
        }
    };
}

// The builtin box kinds of the evaluation platform.
define_box_types! {
    ("data-in", "Input data", in: [], out: [ "in-data" => "file[]" ]),
    ("file-in", "Input file", in: [], out: [ "input" => "file" ]),
    ("files-in", "Input files", in: [], out: [ "input" => "file[]" ]),
    ("file-out", "Output file", in: [ "output" => "file" ], out: []),
    ("fetch-file", "Fetch remote file", in: [ "remote" => "remote-file" ], out: [ "input" => "file" ]),
    ("fetch-files", "Fetch remote files", in: [ "remote" => "remote-file[]" ], out: [ "input" => "file[]" ]),
    ("gcc", "GCC compilation", in: [ "source-files" => "file[]" ], out: [ "binary-file" => "file" ]),
    ("elf-exec", "ELF executable run",
        in: [ "binary-file" => "file", "stdin" => "file", "args" => "string[]" ],
        out: [ "stdout" => "file", "output-file" => "file" ]),
    ("judge", "Judge results",
        in: [ "actual-output" => "file", "expected-output" => "file", "judge-args" => "string[]" ],
        out: []),
}

/// Lookup table of the box types available to an editor session.
#[derive(Debug, Clone, Default)]
pub struct BoxTypeCatalog {
    registry: AHashMap<String, BoxType>,
}

impl BoxTypeCatalog {
    /// A catalog with no registered types.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog holding the platform's builtin box kinds.
    pub fn with_defaults() -> Self {
        let mut registry = AHashMap::new();
        register_default_box_types(&mut registry);
        Self { registry }
    }

    /// Builds a catalog from an explicit list, rejecting duplicate type ids.
    pub fn from_box_types(box_types: Vec<BoxType>) -> Result<Self, CatalogError> {
        let mut registry = AHashMap::new();
        for box_type in box_types {
            if registry.contains_key(&box_type.type_id) {
                return Err(CatalogError::DuplicateBoxType(box_type.type_id));
            }
            registry.insert(box_type.type_id.clone(), box_type);
        }
        Ok(Self { registry })
    }

    /// Parses a catalog from its JSON form (an array of box types).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let box_types: Vec<BoxType> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::from_box_types(box_types)
    }

    /// Registers one more box type, replacing any previous entry with the
    /// same id. Builder-style so catalogs can be extended inline.
    pub fn with_box_type(mut self, box_type: BoxType) -> Self {
        self.registry.insert(box_type.type_id.clone(), box_type);
        self
    }

    pub fn get(&self, type_id: &str) -> Option<&BoxType> {
        self.registry.get(type_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxType> {
        self.registry.values()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
