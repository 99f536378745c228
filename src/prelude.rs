//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the boxflow
//! crate so a single import covers the typical editor-session flow.
//!
//! # Example
//!
//! ```rust,no_run
//! use boxflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = BoxTypeCatalog::with_defaults();
//! let stored = StoredPipeline::from_file("path/to/pipeline.json")?;
//! let definition = stored.into_editor().into_pipeline()?;
//! let graph = PipelineGraph::from_definition(&definition);
//! println!("{} boxes, {} edges", graph.nodes.len(), graph.dependencies.len());
//! # Ok(())
//! # }
//! ```

// Catalog
pub use crate::catalog::{BoxType, BoxTypeCatalog, PortSpec};

// Graph model and mutation engine
pub use crate::graph::builder::edges_for_new_box;
pub use crate::graph::diagnostics::{PipelineIssue, check_boxes};
pub use crate::graph::{Dependency, PipelineGraph};

// Pipeline data model and persistence boundary
pub use crate::pipeline::{
    DataType, InferredVariable, IntoPipeline, PipelineBox, PipelineDefinition, PipelineVariable,
    PortBinding, StoredBox, StoredPipeline, VariableValue, decode_variable_name,
    encode_variable_name, infer_variable_types,
};

// Editor-facing types
pub use crate::ui::EditorPipeline;

// Error types
pub use crate::error::{ArtifactError, CatalogError, PipelineConversionError};

// Result type alias for convenience; the error parameter stays overridable
// so boundary signatures can still name their concrete error.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
