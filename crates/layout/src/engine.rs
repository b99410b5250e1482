use crate::config::LayoutConfig;
use crate::interface::{LayoutContext, LayoutEnvironment};
use crate::output::LayoutResult;
use crate::tree::{LayoutTree, NodeId};
use crate::LayoutError;
use log::{debug, info};
use plotbox_style::Axis;
use plotbox_types::{Rect, Size};

/// Runs layout passes over a [`LayoutTree`].
///
/// A pass borrows the tree immutably: the measure pass walks the subtree of
/// the root bottom-up, then the root is given the viewport and the arrange
/// pass places every box top-down.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out the subtree rooted at `root` inside `viewport`.
    ///
    /// The root sits at the origin. On each axis it takes the viewport extent
    /// when it can stretch and its natural extent otherwise.
    pub fn layout(
        &self,
        tree: &LayoutTree,
        root: NodeId,
        viewport: Size,
    ) -> Result<LayoutResult, LayoutError> {
        if viewport.has_negative_dimension() || viewport.width.is_nan() || viewport.height.is_nan()
        {
            return Err(LayoutError::NegativeOuterSize {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let kind = tree.kind(root)?;
        debug!(
            "Starting layout of {} {} in {:.2} x {:.2}",
            kind.as_str(),
            root,
            viewport.width,
            viewport.height
        );

        let env = LayoutEnvironment { engine: self, tree };
        let mut ctx = LayoutContext::new(env);
        let measured = ctx.measure(root)?;

        let width = measured.width.sizing.resolve(
            Axis::Horizontal,
            measured.width.content,
            viewport.width,
        )?;
        let height = measured.height.sizing.resolve(
            Axis::Vertical,
            measured.height.content,
            viewport.height,
        )?;
        ctx.arrange(root, Rect::new(0.0, 0.0, width.size, height.size))?;

        let result = ctx.finish();
        info!(
            "Laid out {} boxes; root is {:.2} x {:.2}",
            result.len(),
            width.size,
            height.size
        );
        Ok(result)
    }

    /// Natural size of the subtree rooted at `root`, without arranging it.
    pub fn measure(&self, tree: &LayoutTree, root: NodeId) -> Result<Size, LayoutError> {
        let env = LayoutEnvironment { engine: self, tree };
        let mut ctx = LayoutContext::new(env);
        Ok(ctx.measure(root)?.natural_size())
    }
}
