pub mod document;
pub mod error;
pub mod pipeline;
pub mod report;

pub use document::{DocNode, Document};
pub use error::PipelineError;
pub use pipeline::{LayoutPipeline, PipelineBuilder};
pub use report::{BoxReport, LayoutReport};

pub use plotbox_layout as layout;
pub use plotbox_style as style;
pub use plotbox_types as types;
