//! Arena owning every box of a layout.
use crate::content::{LeafContent, PlotContent, ToolbarContent};
use crate::node_kind::BoxKind;
use crate::nodes::grid::GridBox;
use crate::nodes::stack::StackBox;
use crate::style::BoxStyle;
use crate::LayoutError;
use itertools::Itertools;
use plotbox_style::{Axis, ConfigError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Leaf(LeafContent),
    Stack(StackBox),
    Grid(GridBox),
}

impl Node {
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::Leaf(_) => Vec::new(),
            Node::Stack(stack) => stack.children.clone(),
            Node::Grid(grid) => grid.cells().iter().map(|cell| cell.node).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeData {
    pub style: BoxStyle,
    pub node: Node,
    parent: Option<NodeId>,
}

impl NodeData {
    pub fn kind(&self) -> BoxKind {
        BoxKind::from_node(&self.node)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Owns all nodes. Children are created before their parent and a node can
/// be attached to at most one parent, so the arena always holds a forest.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<NodeData>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Result<&NodeData, LayoutError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| ConfigError::UnknownNode(id.0).into())
    }

    pub fn kind(&self, id: NodeId) -> Result<BoxKind, LayoutError> {
        self.get(id).map(NodeData::kind)
    }

    pub fn style(&self, id: NodeId) -> Result<&BoxStyle, LayoutError> {
        self.get(id).map(|data| &data.style)
    }

    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>, LayoutError> {
        self.get(id).map(|data| data.node.children())
    }

    /// Nodes without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(i, _)| NodeId(i))
    }

    pub fn leaf(&mut self, style: BoxStyle, content: LeafContent) -> Result<NodeId, LayoutError> {
        self.insert(style, Node::Leaf(content))
    }

    pub fn spacer(&mut self, style: BoxStyle) -> Result<NodeId, LayoutError> {
        self.leaf(style, LeafContent::Spacer)
    }

    pub fn plot(&mut self, style: BoxStyle, plot: PlotContent) -> Result<NodeId, LayoutError> {
        self.leaf(style, LeafContent::Plot(plot))
    }

    pub fn toolbar(
        &mut self,
        style: BoxStyle,
        toolbar: ToolbarContent,
    ) -> Result<NodeId, LayoutError> {
        self.leaf(style, LeafContent::Toolbar(toolbar))
    }

    /// Packs `children` left to right.
    pub fn row(
        &mut self,
        style: BoxStyle,
        children: Vec<NodeId>,
        spacing: f32,
    ) -> Result<NodeId, LayoutError> {
        let stack = StackBox::new(Axis::Horizontal, children, spacing)?;
        self.insert(style, Node::Stack(stack))
    }

    /// Packs `children` top to bottom.
    pub fn column(
        &mut self,
        style: BoxStyle,
        children: Vec<NodeId>,
        spacing: f32,
    ) -> Result<NodeId, LayoutError> {
        let stack = StackBox::new(Axis::Vertical, children, spacing)?;
        self.insert(style, Node::Stack(stack))
    }

    pub fn grid(&mut self, style: BoxStyle, grid: GridBox) -> Result<NodeId, LayoutError> {
        grid.validate()?;
        self.insert(style, Node::Grid(grid))
    }

    fn insert(&mut self, style: BoxStyle, node: Node) -> Result<NodeId, LayoutError> {
        style.validate()?;
        let children = node.children();
        for &child in &children {
            let data = self.get(child)?;
            if data.parent.is_some() {
                return Err(ConfigError::AlreadyAttached(child.0).into());
            }
        }
        if let Some(dup) = children.iter().duplicates().next() {
            return Err(ConfigError::AlreadyAttached(dup.0).into());
        }

        let id = NodeId(self.nodes.len());
        for child in children {
            self.nodes[child.0].parent = Some(id);
        }
        self.nodes.push(NodeData {
            style,
            node,
            parent: None,
        });
        Ok(id)
    }
}
