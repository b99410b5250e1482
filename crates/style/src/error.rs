use crate::align::Axis;
use thiserror::Error;

/// Invalid layout configuration. Raised while the tree is being built, never
/// deferred to the arrange pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("A fixed {0} policy requires an explicit size.")]
    MissingFixedSize(Axis),

    #[error("Fixed {axis} track {index} has no size.")]
    MissingTrackSize { axis: Axis, index: usize },

    #[error("Spacing must be non-negative, got {0}.")]
    NegativeSpacing(f32),

    #[error("Track overrides cannot reference negative index {0}.")]
    NegativeTrackIndex(i64),

    #[error("'{name}' must be non-negative, got {value}.")]
    NegativeBound { name: &'static str, value: f32 },

    #[error("Minimum {axis} {min} exceeds maximum {max}.")]
    InvertedBounds { axis: Axis, min: f32, max: f32 },

    #[error("Grid cell ({row}, {col}) is populated more than once.")]
    DuplicateCell { row: usize, col: usize },

    #[error("Node {0} already has a parent.")]
    AlreadyAttached(usize),

    #[error("Node {0} does not exist in this tree.")]
    UnknownNode(usize),
}
