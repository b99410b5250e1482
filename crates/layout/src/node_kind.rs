use crate::content::LeafContent;
use crate::tree::Node;
use plotbox_style::Axis;

/// Represents the specific type of a layout node.
///
/// Used for logging, error messages and reports so that callers never have
/// to match on the node payload just to name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxKind {
    Spacer,
    Plot,
    Toolbar,
    Custom,
    Row,
    Column,
    Grid,
}

impl BoxKind {
    /// Determines the `BoxKind` of a node in the tree.
    pub fn from_node(node: &Node) -> Self {
        match node {
            Node::Leaf(LeafContent::Spacer) => BoxKind::Spacer,
            Node::Leaf(LeafContent::Plot(_)) => BoxKind::Plot,
            Node::Leaf(LeafContent::Toolbar(_)) => BoxKind::Toolbar,
            Node::Leaf(LeafContent::Custom(_)) => BoxKind::Custom,
            Node::Stack(stack) => match stack.axis {
                Axis::Horizontal => BoxKind::Row,
                Axis::Vertical => BoxKind::Column,
            },
            Node::Grid(_) => BoxKind::Grid,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, BoxKind::Row | BoxKind::Column | BoxKind::Grid)
    }

    /// Returns a string representation, primarily for debugging or reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxKind::Spacer => "Spacer",
            BoxKind::Plot => "Plot",
            BoxKind::Toolbar => "Toolbar",
            BoxKind::Custom => "Custom",
            BoxKind::Row => "Row",
            BoxKind::Column => "Column",
            BoxKind::Grid => "Grid",
        }
    }
}
