//! Error types for wrapper generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while wrapping markup.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Template not found.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// A wrapper profile value cannot be used in generated source.
    #[error("Invalid wrapper profile value for '{field}': {value:?}")]
    InvalidProfile { field: String, value: String },

    /// Unknown target framework name.
    #[error("Unknown framework: {0}")]
    UnknownFramework(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
