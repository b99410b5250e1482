// src/pipeline.rs
use crate::document::Document;
use crate::error::PipelineError;
use crate::report::LayoutReport;
use log::{debug, info};
use plotbox_layout::{LayoutConfig, LayoutEngine, LayoutTree, NodeId};
use plotbox_style::parsers::{parse_spacing, run_parser};
use plotbox_types::Size;
use std::fs;
use std::io;
use std::path::Path;

/// A builder for creating a [`LayoutPipeline`].
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    document: Option<Document>,
    viewport: Option<Size>,
    config: Option<LayoutConfig>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Configures the pipeline with a document from a JSON string.
    pub fn with_document_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.document = Some(Document::from_json(json)?);
        Ok(self)
    }

    /// Configures the pipeline by loading a document from a file.
    pub fn with_document_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read document from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.document = Some(Document::from_json(&source)?);
        Ok(self)
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    /// Overrides the viewport declared by the document.
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Sets the viewport from shorthand such as `"800 600"` or `"800px"`.
    pub fn with_viewport_str(self, viewport: &str) -> Result<Self, PipelineError> {
        let (width, height) = run_parser(parse_spacing, viewport)?;
        Ok(self.with_viewport(Size::new(width, height)))
    }

    /// Overrides the engine settings declared by the document.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Consumes the builder, building the layout tree of the document.
    pub fn build(self) -> Result<LayoutPipeline, PipelineError> {
        let document = self.document.ok_or_else(|| {
            PipelineError::Config(
                "No document has been configured. Use `with_document_json` or `with_document_file`."
                    .to_string(),
            )
        })?;
        let (tree, root) = document.build_tree()?;
        let config = self.config.unwrap_or(document.config);
        let viewport = self.viewport.or_else(|| document.viewport());
        debug!(
            "Built pipeline: {} boxes, viewport {:?}",
            tree.len(),
            viewport
        );
        Ok(LayoutPipeline {
            engine: LayoutEngine::new(config),
            tree,
            root,
            viewport,
        })
    }
}

/// A document turned into a layout tree, ready to be laid out.
#[derive(Debug)]
pub struct LayoutPipeline {
    engine: LayoutEngine,
    tree: LayoutTree,
    root: NodeId,
    viewport: Option<Size>,
}

impl LayoutPipeline {
    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The viewport the root is laid out in. Without one the root gets its
    /// natural size.
    pub fn viewport(&self) -> Result<Size, PipelineError> {
        match self.viewport {
            Some(viewport) => Ok(viewport),
            None => Ok(self.engine.measure(&self.tree, self.root)?),
        }
    }

    pub fn run(&self) -> Result<LayoutReport, PipelineError> {
        let viewport = self.viewport()?;
        let result = self.engine.layout(&self.tree, self.root, viewport)?;
        info!("Pipeline placed {} boxes", result.len());
        LayoutReport::new(&self.tree, viewport, self.root.index(), &result)
    }

    /// Runs the pipeline and writes the report as JSON to `path`.
    pub fn run_to_file<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<LayoutReport, PipelineError> {
        let report = self.run()?;
        fs::write(path, report.to_json(pretty)?)?;
        Ok(report)
    }
}
