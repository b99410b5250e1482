//! Wrapping a content box together with its toolbar.
use crate::content::ToolbarContent;
use crate::policy::AxisSizing;
use crate::style::BoxStyle;
use crate::tree::{LayoutTree, NodeId};
use crate::LayoutError;
use log::debug;
use plotbox_style::{Align, Axis, ConfigError, Location};

/// Style of a toolbar leaf: one button thick, one button long per tool,
/// pushed to the far end when it runs horizontally.
pub fn toolbar_style(location: Location) -> BoxStyle {
    let align = match location.packing_axis() {
        Axis::Vertical => Align::End,
        Axis::Horizontal => Align::Start,
    };
    BoxStyle::new(AxisSizing::fit(), AxisSizing::fit())
        .with_align(align)
        .with_name("toolbar")
}

impl LayoutTree {
    /// Packs `content` and a toolbar holding `tools` into a row (toolbar
    /// left or right) or a column (toolbar above or below). The toolbar comes
    /// first for `Above` and `Left`. The content keeps its own sizing.
    ///
    /// With no location the content is returned unchanged and no toolbar is
    /// created.
    pub fn place_toolbar(
        &mut self,
        content: NodeId,
        tools: Vec<String>,
        location: Option<Location>,
    ) -> Result<NodeId, LayoutError> {
        let attached = self.get(content)?.parent().is_some();
        let Some(location) = location else {
            return Ok(content);
        };
        if attached {
            return Err(ConfigError::AlreadyAttached(content.index()).into());
        }

        let toolbar = self.toolbar(
            toolbar_style(location),
            ToolbarContent::new(tools, location),
        )?;
        let children = if location.is_leading() {
            vec![toolbar, content]
        } else {
            vec![content, toolbar]
        };
        debug!("Placing toolbar {} {:?} content {}", toolbar, location, content);

        let style = BoxStyle::default().with_name("toolbar-box");
        match location.packing_axis() {
            Axis::Horizontal => self.row(style, children, 0.0),
            Axis::Vertical => self.column(style, children, 0.0),
        }
    }
}
