use plotbox_style::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatchError),
    #[error("Outer size {width:.2} x {height:.2} has a negative dimension.")]
    NegativeOuterSize { width: f32, height: f32 },
}

pub(crate) mod engine;
pub use self::engine::LayoutEngine;
pub use self::interface::{AxisMeasure, LayoutContext, LayoutEnvironment, LayoutNode, Measured};

pub mod config;
pub mod content;
pub mod distribute;
pub mod interface;
pub mod matrix;
pub mod node_kind;
pub mod nodes;
pub mod output;
pub mod policy;
pub mod ranges;
pub mod style;
pub mod tree;
pub mod util;
pub mod zoom;

pub use self::config::LayoutConfig;
pub use self::content::{LeafContent, Measurable, PlotContent, ToolbarContent};
pub use self::matrix::{Matrix, ShapeMismatchError};
pub use self::node_kind::BoxKind;
pub use self::nodes::grid::{GridBox, GridCell};
pub use self::nodes::stack::StackBox;
pub use self::output::{LayoutResult, ResolvedBox};
pub use self::policy::{AxisSizing, ResolvedExtent, Stretch};
pub use self::ranges::{FrameRanges, Range1d};
pub use self::style::BoxStyle;
pub use self::tree::{LayoutTree, Node, NodeData, NodeId};
pub use self::zoom::{BoxZoom, Dimensions};

// Re-export the shared vocabulary so callers need a single import
pub use plotbox_style::{Align, Axis, Borders, Location, SizingPolicy, Spacing};
pub use plotbox_types::{Color, Rect, Size};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod zoom_test;
