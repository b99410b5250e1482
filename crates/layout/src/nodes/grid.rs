//! Grids: sparse cells placed on shared row and column tracks.
//!
//! Every row and every column resolves one [`TrackPolicy`] from its override
//! table before arranging, so all cells of a track share the same sizing and
//! alignment. A track's natural size is the largest natural size among its
//! cells; indices with no cells measure as zero.
use super::span;
use crate::distribute::{distribute, natural_extent, offsets, Item};
use crate::interface::{LayoutContext, LayoutNode, Measured};
use crate::matrix::Matrix;
use crate::policy::Stretch;
use crate::style::BoxStyle;
use crate::tree::NodeId;
use crate::LayoutError;
use itertools::Itertools;
use log::{debug, trace};
use plotbox_style::{Align, Axis, ConfigError, SizingPolicy, Spacing, TrackOverrides, TrackPolicy};
use plotbox_types::{Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub node: NodeId,
}

/// One resolved row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub natural: f32,
    pub stretch: Stretch,
    pub align: Align,
}

impl Track {
    fn item(&self) -> Item {
        Item::stretchy(self.natural, self.stretch)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridBox {
    cells: Vec<GridCell>,
    nrows: usize,
    ncols: usize,
    pub spacing: Spacing,
    pub rows: TrackOverrides,
    pub cols: TrackOverrides,
}

impl GridBox {
    /// Builds a grid from sparse `(row, col, node)` triples. A position may
    /// hold at most one node.
    pub fn new<I>(cells: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (usize, usize, NodeId)>,
    {
        let cells: Vec<GridCell> = cells
            .into_iter()
            .map(|(row, col, node)| GridCell { row, col, node })
            .collect();
        if let Some(dup) = cells.iter().map(|c| (c.row, c.col)).duplicates().next() {
            return Err(ConfigError::DuplicateCell {
                row: dup.0,
                col: dup.1,
            });
        }
        let nrows = cells.iter().map(|c| c.row + 1).max().unwrap_or(0);
        let ncols = cells.iter().map(|c| c.col + 1).max().unwrap_or(0);
        Ok(Self {
            cells,
            nrows,
            ncols,
            ..Default::default()
        })
    }

    /// Builds a grid from a dense matrix; empty cells become holes.
    pub fn from_matrix(matrix: &Matrix<NodeId>) -> Result<Self, ConfigError> {
        Self::new(matrix.to_sparse())
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_rows(mut self, rows: TrackOverrides) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_cols(mut self, cols: TrackOverrides) -> Self {
        self.cols = cols;
        self
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Track record for a row (`Axis::Vertical`) or a column
    /// (`Axis::Horizontal`): exact index > wildcard > default.
    pub fn resolve_track(&self, index: usize, axis: Axis) -> TrackPolicy {
        match axis {
            Axis::Horizontal => self.cols.resolve(index),
            Axis::Vertical => self.rows.resolve(index),
        }
    }

    fn track_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.ncols,
            Axis::Vertical => self.nrows,
        }
    }

    fn track_index(cell: &GridCell, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => cell.col,
            Axis::Vertical => cell.row,
        }
    }

    fn gap(&self, axis: Axis) -> f32 {
        self.spacing.along(axis)
    }

    /// Spacing and override values must be non-negative, and fixed tracks
    /// must carry a size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spacing.validate()?;
        self.rows.validate()?;
        self.cols.validate()?;
        for axis in [Axis::Horizontal, Axis::Vertical] {
            for index in 0..self.track_count(axis) {
                let track = self.resolve_track(index, axis);
                if track.policy == SizingPolicy::Fixed && track.size.is_none() {
                    return Err(ConfigError::MissingTrackSize { axis, index });
                }
            }
        }
        Ok(())
    }

    /// Resolves every track along `axis` from the already measured cells.
    fn tracks(&self, ctx: &LayoutContext, axis: Axis) -> Result<Vec<Track>, LayoutError> {
        let count = self.track_count(axis);
        let mut content = vec![0.0f32; count];
        let mut derived = vec![Stretch::None; count];
        for cell in &self.cells {
            let index = Self::track_index(cell, axis);
            let measured = ctx.measured(cell.node)?;
            let extent = measured.along(axis);
            content[index] = content[index].max(extent.natural);
            derived[index] = derived[index].merge(extent.stretch);
        }

        (0..count)
            .map(|index| -> Result<Track, LayoutError> {
                let policy = self.resolve_track(index, axis);
                let natural = match policy.policy {
                    SizingPolicy::Fixed => policy
                        .size
                        .ok_or(ConfigError::MissingTrackSize { axis, index })?,
                    _ => content[index],
                };
                let stretch = match policy.policy {
                    SizingPolicy::Auto => derived[index],
                    other => Stretch::from(other),
                };
                trace!(
                    "{} track {}: {:?} natural {:.2} stretch {:?}",
                    axis, index, policy.policy, natural, stretch
                );
                Ok(Track {
                    natural,
                    stretch,
                    align: policy.align,
                })
            })
            .collect()
    }
}

fn any_stretch(tracks: &[Track]) -> Stretch {
    if tracks.iter().any(|t| t.stretch.is_stretchable()) {
        Stretch::Max
    } else {
        Stretch::None
    }
}

impl LayoutNode for GridBox {
    fn measure(&self, ctx: &mut LayoutContext, style: &BoxStyle) -> Result<Measured, LayoutError> {
        for cell in &self.cells {
            ctx.measure(cell.node)?;
        }
        let cols = self.tracks(ctx, Axis::Horizontal)?;
        let rows = self.tracks(ctx, Axis::Vertical)?;

        let col_items: Vec<Item> = cols.iter().map(Track::item).collect();
        let row_items: Vec<Item> = rows.iter().map(Track::item).collect();
        let content = Size::new(
            natural_extent(&col_items, self.gap(Axis::Horizontal)),
            natural_extent(&row_items, self.gap(Axis::Vertical)),
        );
        Ok(Measured::composite(
            style,
            content,
            (any_stretch(&cols), any_stretch(&rows)),
        ))
    }

    fn arrange(&self, ctx: &mut LayoutContext, rect: Rect) -> Result<(), LayoutError> {
        let cols = self.tracks(ctx, Axis::Horizontal)?;
        let rows = self.tracks(ctx, Axis::Vertical)?;

        let layout_axis = |tracks: &[Track], axis: Axis| {
            let items: Vec<Item> = tracks.iter().map(Track::item).collect();
            let (origin, extent) = span(&rect, axis);
            let sizes = distribute(&items, extent, self.gap(axis));
            let starts = offsets(&sizes, origin, self.gap(axis));
            (sizes, starts)
        };
        let (widths, xs) = layout_axis(&cols, Axis::Horizontal);
        let (heights, ys) = layout_axis(&rows, Axis::Vertical);
        debug!(
            "Arranging {}x{} grid: columns {:?}, rows {:?}",
            self.nrows, self.ncols, widths, heights
        );

        for cell in &self.cells {
            let measured = ctx.measured(cell.node)?;
            let (track_w, track_h) = (widths[cell.col], heights[cell.row]);
            let width = measured.width.extent_in(track_w);
            let height = measured.height.extent_in(track_h);
            let x = xs[cell.col] + cols[cell.col].align.offset(track_w, width);
            let y = ys[cell.row] + rows[cell.row].align.offset(track_h, height);
            ctx.arrange(cell.node, Rect::new(x, y, width, height))?;
        }
        Ok(())
    }
}
