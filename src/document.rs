// src/document.rs
//! The JSON document format: a viewport, optional engine settings and a tree
//! of boxes tagged by `"type"`.
//!
//! ```json
//! {
//!   "viewport": [800, 600],
//!   "root": {
//!     "type": "Column",
//!     "spacing": 5,
//!     "children": [
//!       { "type": "Plot", "frameWidth": 300, "frameHeight": 200, "toolbarLocation": "above" },
//!       { "type": "Spacer", "widthPolicy": "max", "height": 20 }
//!     ]
//!   }
//! }
//! ```
use crate::error::PipelineError;
use log::debug;
use plotbox_layout::nodes::toolbar::toolbar_style;
use plotbox_layout::{
    AxisSizing, BoxStyle, GridBox, LayoutConfig, LayoutTree, Matrix, NodeId, PlotContent,
    ToolbarContent,
};
use plotbox_style::{Align, Borders, Location, SizingPolicy, Spacing, TrackOverrides};
use plotbox_types::{Color, Size};
use serde::Deserialize;

pub const DEFAULT_TOOLS: &str = "pan,box_zoom,reset,help";

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub viewport: Option<(f32, f32)>,
    #[serde(default)]
    pub config: LayoutConfig,
    pub root: DocNode,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn viewport(&self) -> Option<Size> {
        self.viewport.map(Size::from)
    }

    /// Builds the layout tree and returns it with its root.
    pub fn build_tree(&self) -> Result<(LayoutTree, NodeId), PipelineError> {
        let mut tree = LayoutTree::new();
        let root = self.root.build(&mut tree)?;
        debug!("Built layout tree of {} boxes", tree.len());
        Ok((tree, root))
    }
}

/// Sizing and presentation shared by every node type.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub width_policy: Option<SizingPolicy>,
    pub height_policy: Option<SizingPolicy>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
    pub align: Option<Align>,
    pub name: Option<String>,
    pub background: Option<Color>,
}

impl DocStyle {
    /// A box with an explicit size and no policy is fixed on that axis.
    fn axis(
        size: Option<f32>,
        policy: Option<SizingPolicy>,
        min: Option<f32>,
        max: Option<f32>,
    ) -> AxisSizing {
        let policy = match (policy, size) {
            (Some(policy), _) => policy,
            (None, Some(_)) => SizingPolicy::Fixed,
            (None, None) => SizingPolicy::Auto,
        };
        AxisSizing {
            policy,
            size,
            min,
            max,
        }
    }

    pub fn to_box_style(&self) -> BoxStyle {
        let mut style = BoxStyle::new(
            Self::axis(self.width, self.width_policy, self.min_width, self.max_width),
            Self::axis(self.height, self.height_policy, self.min_height, self.max_height),
        );
        if let Some(align) = self.align {
            style = style.with_align(align);
        }
        if let Some(name) = &self.name {
            style = style.with_name(name.clone());
        }
        if let Some(color) = &self.background {
            style = style.with_background(color.clone());
        }
        style
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "PascalCase")]
pub enum DocNode {
    Spacer(DocSpacer),
    Plot(DocPlot),
    Toolbar(DocToolbar),
    Row(DocStack),
    Column(DocStack),
    Grid(DocGrid),
    GridPlot(DocGridPlot),
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DocSpacer {
    #[serde(flatten)]
    pub style: DocStyle,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocPlot {
    #[serde(flatten)]
    pub style: DocStyle,
    pub frame_width: Option<f32>,
    pub frame_height: Option<f32>,
    pub borders: Option<Borders>,
    pub tools: Option<String>,
    pub toolbar_location: Option<Location>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DocToolbar {
    #[serde(default = "default_tools")]
    pub tools: String,
    pub location: Location,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DocStack {
    #[serde(flatten)]
    pub style: DocStyle,
    #[serde(default)]
    pub spacing: f32,
    #[serde(default)]
    pub children: Vec<DocNode>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DocCell {
    pub row: usize,
    pub col: usize,
    pub item: DocNode,
}

/// Grid children: dense nested rows with `null` holes, or sparse cells.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum GridChildren {
    Dense(Vec<Vec<Option<DocNode>>>),
    Sparse(Vec<DocCell>),
}

impl Default for GridChildren {
    fn default() -> Self {
        GridChildren::Sparse(Vec::new())
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DocGrid {
    #[serde(flatten)]
    pub style: DocStyle,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub rows: TrackOverrides,
    #[serde(default)]
    pub cols: TrackOverrides,
    #[serde(default)]
    pub children: GridChildren,
}

/// A grid of plots sharing a single toolbar.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocGridPlot {
    #[serde(flatten)]
    pub style: DocStyle,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub children: Vec<Vec<Option<DocPlot>>>,
    pub tools: Option<String>,
    pub toolbar_location: Option<Location>,
}

fn default_tools() -> String {
    DEFAULT_TOOLS.to_string()
}

fn tool_list(tools: Option<&str>) -> Vec<String> {
    ToolbarContent::from_tools_str(tools.unwrap_or(DEFAULT_TOOLS), Location::Above).tools
}

impl DocNode {
    pub fn build(&self, tree: &mut LayoutTree) -> Result<NodeId, PipelineError> {
        let id = match self {
            DocNode::Spacer(spacer) => tree.spacer(spacer.style.to_box_style())?,
            DocNode::Plot(plot) => plot.build(tree)?,
            DocNode::Toolbar(toolbar) => tree.toolbar(
                toolbar_style(toolbar.location),
                ToolbarContent::from_tools_str(&toolbar.tools, toolbar.location),
            )?,
            DocNode::Row(stack) => {
                let children = build_all(&stack.children, tree)?;
                tree.row(stack.style.to_box_style(), children, stack.spacing)?
            }
            DocNode::Column(stack) => {
                let children = build_all(&stack.children, tree)?;
                tree.column(stack.style.to_box_style(), children, stack.spacing)?
            }
            DocNode::Grid(grid) => grid.build(tree)?,
            DocNode::GridPlot(grid) => grid.build(tree)?,
        };
        Ok(id)
    }
}

fn build_all(nodes: &[DocNode], tree: &mut LayoutTree) -> Result<Vec<NodeId>, PipelineError> {
    nodes.iter().map(|node| node.build(tree)).collect()
}

/// Builds every present cell of dense rows into a node matrix.
fn build_dense<T>(
    rows: &[Vec<Option<T>>],
    tree: &mut LayoutTree,
    mut build: impl FnMut(&T, &mut LayoutTree) -> Result<NodeId, PipelineError>,
) -> Result<Matrix<NodeId>, PipelineError> {
    let nrows = rows.len();
    let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut cells = Vec::new();
    for (row, items) in rows.iter().enumerate() {
        for (col, item) in items.iter().enumerate() {
            if let Some(item) = item {
                cells.push((row, col, build(item, tree)?));
            }
        }
    }
    Ok(Matrix::from_sparse(nrows, ncols, cells))
}

impl DocPlot {
    fn content(&self) -> PlotContent {
        let mut plot = PlotContent::new();
        plot.frame_width = self.frame_width;
        plot.frame_height = self.frame_height;
        plot.borders = self.borders;
        plot.tools = tool_list(self.tools.as_deref());
        plot
    }

    /// A plot leaf, wrapped together with its toolbar when it has a
    /// location.
    fn build(&self, tree: &mut LayoutTree) -> Result<NodeId, PipelineError> {
        let content = self.content();
        let tools = content.tools.clone();
        let plot = tree.plot(self.style.to_box_style(), content)?;
        Ok(tree.place_toolbar(plot, tools, self.toolbar_location)?)
    }

    /// The bare plot leaf, for grids that carry one shared toolbar.
    fn build_leaf(&self, tree: &mut LayoutTree) -> Result<NodeId, PipelineError> {
        Ok(tree.plot(self.style.to_box_style(), self.content())?)
    }
}

impl DocGrid {
    fn build(&self, tree: &mut LayoutTree) -> Result<NodeId, PipelineError> {
        let cells = match &self.children {
            GridChildren::Dense(rows) => build_dense(rows, tree, |node, tree| node.build(tree))?
                .to_sparse(),
            GridChildren::Sparse(cells) => cells
                .iter()
                .map(|cell| -> Result<_, PipelineError> {
                    Ok((cell.row, cell.col, cell.item.build(tree)?))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };
        let grid = GridBox::new(cells)?
            .with_spacing(self.spacing)
            .with_rows(self.rows.clone())
            .with_cols(self.cols.clone());
        Ok(tree.grid(self.style.to_box_style(), grid)?)
    }
}

impl DocGridPlot {
    fn build(&self, tree: &mut LayoutTree) -> Result<NodeId, PipelineError> {
        let plots = build_dense(&self.children, tree, DocPlot::build_leaf)?;
        let grid = GridBox::from_matrix(&plots)?.with_spacing(self.spacing);
        let grid = tree.grid(self.style.to_box_style(), grid)?;
        let tools = tool_list(self.tools.as_deref());
        Ok(tree.place_toolbar(grid, tools, self.toolbar_location)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotbox_layout::BoxKind;

    #[test]
    fn test_style_defaults_to_fixed_when_sized() {
        let style: DocStyle = serde_json::from_str(r#"{ "width": 50, "heightPolicy": "max" }"#).unwrap();
        let style = style.to_box_style();
        assert_eq!(style.width.policy, SizingPolicy::Fixed);
        assert_eq!(style.width.size, Some(50.0));
        assert_eq!(style.height.policy, SizingPolicy::Max);
    }

    #[test]
    fn test_dense_and_sparse_grid_children() {
        let dense: DocNode = serde_json::from_str(
            r#"{ "type": "Grid", "children": [[{ "type": "Spacer", "width": 10, "height": 10 }, null]] }"#,
        )
        .unwrap();
        assert!(matches!(
            dense,
            DocNode::Grid(DocGrid { children: GridChildren::Dense(_), .. })
        ));

        let sparse: DocNode = serde_json::from_str(
            r#"{ "type": "Grid", "children": [{ "row": 1, "col": 2, "item": { "type": "Spacer" } }] }"#,
        )
        .unwrap();
        let mut tree = LayoutTree::new();
        let root = sparse.build(&mut tree).unwrap();
        assert_eq!(tree.kind(root).unwrap(), BoxKind::Grid);
    }

    #[test]
    fn test_plot_with_toolbar_builds_wrapper() {
        let node: DocNode = serde_json::from_str(
            r#"{ "type": "Plot", "width": 200, "height": 200, "tools": "pan,reset", "toolbarLocation": "right" }"#,
        )
        .unwrap();
        let mut tree = LayoutTree::new();
        let root = node.build(&mut tree).unwrap();
        assert_eq!(tree.kind(root).unwrap(), BoxKind::Row);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(Document::from_json(r#"{ "root": { "type": "Canvas" } }"#).is_err());
    }
}
