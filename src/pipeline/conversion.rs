use super::definition::PipelineDefinition;
use crate::error::PipelineConversionError;

/// A trait for custom editor or storage formats that can be converted into a
/// canonical [`PipelineDefinition`].
///
/// This is the extension point that keeps the engine format-agnostic: parse
/// your own pipeline representation into your own structs, then implement
/// `IntoPipeline` to hand the box list over for graph construction.
///
/// # Example
///
/// ```rust
/// use boxflow::prelude::*;
///
/// struct MyStep { id: String, kind: String }
/// struct MyPipeline { steps: Vec<MyStep> }
///
/// impl IntoPipeline for MyPipeline {
///     fn into_pipeline(self) -> Result<PipelineDefinition, PipelineConversionError> {
///         let boxes = self
///             .steps
///             .into_iter()
///             .map(|step| PipelineBox::new(step.id, step.kind))
///             .collect();
///         PipelineDefinition::new(boxes)
///     }
/// }
/// ```
pub trait IntoPipeline {
    /// Consumes the object and converts it into a canonical pipeline
    /// definition, validating box-name uniqueness along the way.
    fn into_pipeline(self) -> Result<PipelineDefinition, PipelineConversionError>;
}
