use thiserror::Error;

/// Errors that can occur while loading or assembling a box-type catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse box type catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Box type '{0}' is registered more than once in the catalog")]
    DuplicateBoxType(String),
}

/// Errors that can occur when converting an external editor or storage format
/// into a canonical `PipelineDefinition`.
#[derive(Error, Debug, Clone)]
pub enum PipelineConversionError {
    #[error("Invalid pipeline data: {0}")]
    ValidationError(String),

    #[error("Pipeline contains two boxes named '{name}'")]
    DuplicateBoxName { name: String },
}

/// Errors raised at the pipeline persistence boundary (JSON documents and
/// binary session snapshots).
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to parse pipeline JSON: {0}")]
    JsonParseError(String),

    #[error("{0}")]
    Generic(String),
}
