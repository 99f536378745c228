//! # Boxflow - Pipeline Dependency Graph Engine
//!
//! **Boxflow** is the graph engine behind a visual pipeline editor for an
//! exercise-evaluation platform. A pipeline is a set of processing *boxes*
//! instantiated from a catalog of box types; each box binds its named, typed
//! ports to *variables*, and directed dependency edges between boxes are
//! derived from shared variable bindings. The engine keeps that edge set
//! consistent across interactive add/replace/remove operations without
//! rebuilding the whole graph.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical model of a
//! pipeline definition. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your pipeline format (JSON from the platform
//!     API, an editor snapshot, etc.) into your own Rust structs, or use the
//!     provided [`pipeline::StoredPipeline`] / [`ui::EditorPipeline`] shapes.
//! 2.  **Convert**: Implement [`pipeline::IntoPipeline`] to translate your
//!     structs into a validated [`pipeline::PipelineDefinition`].
//! 3.  **Build the graph**: [`graph::PipelineGraph::from_definition`] derives
//!     the dependency edges; the editor then mutates the graph incrementally
//!     through `add_box` / `replace_box` / `remove_box`.
//! 4.  **Check and persist**: run [`graph::diagnostics::check_boxes`] for the
//!     warnings the editor renders, and produce the API document with
//!     [`pipeline::StoredPipeline::from_editor`] on save.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxflow::prelude::*;
//!
//! // Catalog of available box kinds (builtin here; normally loaded from JSON).
//! let catalog = BoxTypeCatalog::with_defaults();
//!
//! // A data source feeding a compiler through the shared variable "src".
//! let source = PipelineBox::new("sources", "files-in")
//!     .with_output("input", "src", DataType::FileArray);
//! let compile = PipelineBox::new("compile", "gcc")
//!     .with_input("source-files", "src", DataType::FileArray)
//!     .with_output("binary-file", "bin", DataType::File);
//!
//! let graph = PipelineGraph::new().add_box(source).add_box(compile);
//! assert_eq!(graph.dependencies.len(), 1);
//! assert_eq!(graph.dependencies[0].from, "sources");
//! assert_eq!(graph.dependencies[0].to, "compile");
//!
//! // Editing: replacing a box recomputes its edges against the rest.
//! let rebound = PipelineBox::new("compile", "gcc")
//!     .with_input("source-files", "other", DataType::FileArray);
//! let edited = graph.replace_box("compile", rebound);
//! assert!(edited.dependencies.is_empty());
//! // The previous revision stays valid for undo.
//! assert_eq!(graph.dependencies.len(), 1);
//!
//! // Diagnostics and the persistence boundary.
//! assert!(check_boxes(&catalog, &graph.nodes).is_empty());
//! let mut editor = EditorPipeline::new(graph.nodes.clone());
//! editor.set_variable("src", VariableValue::List(vec!["main.c".to_string()]));
//! let stored = StoredPipeline::from_editor(&catalog, &editor);
//! assert_eq!(stored.variables.len(), 1);
//! assert_eq!(stored.variables[0].data_type, DataType::FileArray);
//! ```

pub mod catalog;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod prelude;
pub mod ui;
