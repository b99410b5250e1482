// src/error.rs
use plotbox_layout::LayoutError;
use plotbox_style::{ConfigError, StyleParseError};
use thiserror::Error;

/// Errors raised while loading a document and laying it out.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Document parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid shorthand: {0}")]
    Style(#[from] StyleParseError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline is missing required parts: {0}")]
    Config(String),
}

impl From<ConfigError> for PipelineError {
    fn from(e: ConfigError) -> Self {
        PipelineError::Layout(LayoutError::Config(e))
    }
}
