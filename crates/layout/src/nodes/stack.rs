//! Rows and columns: children packed along one axis.
use super::{rect_from_spans, size_from_extents, span};
use crate::distribute::{distribute, natural_extent, offsets, Item};
use crate::interface::{LayoutContext, LayoutNode, Measured};
use crate::policy::Stretch;
use crate::style::BoxStyle;
use crate::tree::NodeId;
use crate::LayoutError;
use log::debug;
use plotbox_style::{Axis, ConfigError};
use plotbox_types::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct StackBox {
    /// The packing axis: horizontal for a row, vertical for a column.
    pub axis: Axis,
    pub children: Vec<NodeId>,
    pub spacing: f32,
}

impl StackBox {
    pub fn new(axis: Axis, children: Vec<NodeId>, spacing: f32) -> Result<Self, ConfigError> {
        if spacing < 0.0 || spacing.is_nan() {
            return Err(ConfigError::NegativeSpacing(spacing));
        }
        Ok(Self {
            axis,
            children,
            spacing,
        })
    }

    fn child_measures(&self, ctx: &LayoutContext) -> Result<Vec<Measured>, LayoutError> {
        self.children.iter().map(|&id| ctx.measured(id)).collect()
    }
}

impl LayoutNode for StackBox {
    fn measure(&self, ctx: &mut LayoutContext, style: &BoxStyle) -> Result<Measured, LayoutError> {
        let cross_axis = self.axis.cross();
        let mut main_items = Vec::with_capacity(self.children.len());
        let mut cross_content: f32 = 0.0;
        let mut main_stretch = Stretch::None;
        let mut cross_stretch = Stretch::None;

        for &child in &self.children {
            let measured = ctx.measure(child)?;
            let main = measured.along(self.axis);
            let cross = measured.along(cross_axis);
            main_items.push(main.item());
            cross_content = cross_content.max(cross.natural);
            main_stretch = main_stretch.merge(main.stretch);
            cross_stretch = cross_stretch.merge(cross.stretch);
        }

        let main_content = natural_extent(&main_items, self.spacing);
        let content = size_from_extents(self.axis, main_content, cross_content);
        let derived = match self.axis {
            Axis::Horizontal => (main_stretch, cross_stretch),
            Axis::Vertical => (cross_stretch, main_stretch),
        };
        Ok(Measured::composite(style, content, derived))
    }

    fn arrange(&self, ctx: &mut LayoutContext, rect: Rect) -> Result<(), LayoutError> {
        let cross_axis = self.axis.cross();
        let measures = self.child_measures(ctx)?;
        let items: Vec<Item> = measures.iter().map(|m| m.along(self.axis).item()).collect();

        let (main_origin, main_extent) = span(&rect, self.axis);
        let (cross_origin, thickness) = span(&rect, cross_axis);
        let sizes = distribute(&items, main_extent, self.spacing);
        let starts = offsets(&sizes, main_origin, self.spacing);
        debug!(
            "Arranging {} children along the {} axis in {:.2}: {:?}",
            self.children.len(),
            self.axis,
            main_extent,
            sizes
        );

        for (i, &child) in self.children.iter().enumerate() {
            let align = ctx.env.tree.style(child)?.align;
            let cross_size = measures[i].along(cross_axis).extent_in(thickness);
            let cross_start = cross_origin + align.offset(thickness, cross_size);
            let child_rect =
                rect_from_spans(self.axis, (starts[i], sizes[i]), (cross_start, cross_size));
            ctx.arrange(child, child_rect)?;
        }
        Ok(())
    }
}
