use crate::config::LayoutConfig;
use crate::content::LeafContent;
use crate::distribute::Item;
use crate::engine::LayoutEngine;
use crate::output::{LayoutResult, ResolvedBox};
use crate::policy::{AxisSizing, Stretch};
use crate::style::BoxStyle;
use crate::tree::{LayoutTree, Node, NodeId};
use crate::LayoutError;
use log::trace;
use plotbox_style::{Axis, ConfigError, SizingPolicy};
use plotbox_types::{Rect, Size};
use std::fmt::Debug;

/// Measure-pass result for one axis of one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMeasure {
    /// Natural size of the content before the box's own policy applies.
    pub content: f32,
    pub natural: f32,
    pub stretch: Stretch,
    /// The declared sizing, with an `auto` policy replaced by `max` when the
    /// box's content can stretch.
    pub sizing: AxisSizing,
}

impl AxisMeasure {
    pub fn new(declared: &AxisSizing, content: f32, derived: Stretch) -> Self {
        let mut sizing = *declared;
        if sizing.policy == SizingPolicy::Auto && derived.is_stretchable() {
            sizing.policy = SizingPolicy::Max;
        }
        Self {
            content,
            natural: sizing.natural(content),
            stretch: sizing.stretch(),
            sizing,
        }
    }

    /// Extent taken inside `available` space when not competing with siblings.
    pub fn extent_in(&self, available: f32) -> f32 {
        if available <= 0.0 {
            0.0
        } else if self.stretch.is_stretchable() {
            self.sizing.clamp(available)
        } else {
            self.natural
        }
    }

    pub fn item(&self) -> Item {
        Item {
            natural: self.natural,
            stretch: self.stretch,
            min: self.sizing.min.unwrap_or(0.0),
            max: self.sizing.max,
        }
    }
}

/// Measure-pass result for one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub width: AxisMeasure,
    pub height: AxisMeasure,
}

impl Measured {
    /// A leaf's stretch comes from its own policies only.
    pub fn leaf(style: &BoxStyle, content: Size) -> Self {
        Self {
            width: AxisMeasure::new(&style.width, content.width, Stretch::None),
            height: AxisMeasure::new(&style.height, content.height, Stretch::None),
        }
    }

    /// A composite with `auto` sizing stretches on an axis when any of its
    /// children or tracks does.
    pub fn composite(style: &BoxStyle, content: Size, derived: (Stretch, Stretch)) -> Self {
        Self {
            width: AxisMeasure::new(&style.width, content.width, derived.0),
            height: AxisMeasure::new(&style.height, content.height, derived.1),
        }
    }

    pub fn along(&self, axis: Axis) -> &AxisMeasure {
        match axis {
            Axis::Horizontal => &self.width,
            Axis::Vertical => &self.height,
        }
    }

    pub fn natural_size(&self) -> Size {
        Size::new(self.width.natural, self.height.natural)
    }
}

/// Read-only environment data shared across a layout pass.
#[derive(Clone, Copy)]
pub struct LayoutEnvironment<'a> {
    pub engine: &'a LayoutEngine,
    pub tree: &'a LayoutTree,
}

impl<'a> LayoutEnvironment<'a> {
    pub fn config(&self) -> &'a LayoutConfig {
        self.engine.config()
    }
}

/// Mutable state of one pass: the measurements taken bottom-up and the
/// boxes placed top-down.
pub struct LayoutContext<'a> {
    pub env: LayoutEnvironment<'a>,
    measures: Vec<Option<Measured>>,
    output: LayoutResult,
}

impl<'a> LayoutContext<'a> {
    pub fn new(env: LayoutEnvironment<'a>) -> Self {
        let len = env.tree.len();
        Self {
            env,
            measures: vec![None; len],
            output: LayoutResult::with_capacity(len),
        }
    }

    /// Measures `id` and its subtree, recording every result.
    pub fn measure(&mut self, id: NodeId) -> Result<Measured, LayoutError> {
        let tree = self.env.tree;
        let data = tree.get(id)?;
        let measured = match &data.node {
            Node::Leaf(content) => {
                Measured::leaf(&data.style, content.natural_size(self.env.config()))
            }
            Node::Stack(stack) => stack.measure(self, &data.style)?,
            Node::Grid(grid) => grid.measure(self, &data.style)?,
        };
        trace!(
            "Measured {} {}: natural {:.2} x {:.2}",
            data.kind().as_str(),
            id,
            measured.width.natural,
            measured.height.natural
        );
        self.measures[id.index()] = Some(measured);
        Ok(measured)
    }

    pub fn measured(&self, id: NodeId) -> Result<Measured, LayoutError> {
        self.measures
            .get(id.index())
            .copied()
            .flatten()
            .ok_or_else(|| ConfigError::UnknownNode(id.index()).into())
    }

    /// Places `id` at `rect` and arranges its subtree inside it.
    pub fn arrange(&mut self, id: NodeId, rect: Rect) -> Result<(), LayoutError> {
        let tree = self.env.tree;
        let data = tree.get(id)?;
        let measured = self.measured(id)?;
        let frame = match &data.node {
            Node::Leaf(LeafContent::Plot(plot)) => Some(plot.frame(&rect, self.env.config())),
            _ => None,
        };
        self.output.insert(
            id,
            ResolvedBox {
                rect,
                stretch_width: measured.width.stretch.is_stretchable(),
                stretch_height: measured.height.stretch.is_stretchable(),
                frame,
            },
        );
        match &data.node {
            Node::Leaf(_) => Ok(()),
            Node::Stack(stack) => stack.arrange(self, rect),
            Node::Grid(grid) => grid.arrange(self, rect),
        }
    }

    pub fn finish(self) -> LayoutResult {
        self.output
    }
}

/// A composite box that measures its children and arranges them inside the
/// rectangle it was given.
pub trait LayoutNode: Debug {
    fn measure(&self, ctx: &mut LayoutContext, style: &BoxStyle) -> Result<Measured, LayoutError>;

    fn arrange(&self, ctx: &mut LayoutContext, rect: Rect) -> Result<(), LayoutError>;
}
