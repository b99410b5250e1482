use crate::ranges::FrameRanges;
use log::debug;
use plotbox_types::Rect;
use serde::{Deserialize, Serialize};

/// Which axes a box zoom rescales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimensions {
    #[default]
    Both,
    Width,
    Height,
}

/// Rescales the ranges of a plot to a box dragged over its frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxZoom {
    pub dimensions: Dimensions,
    /// Grow the dragged box so that it keeps the frame's aspect ratio.
    pub match_aspect: bool,
}

type Span = (f32, f32);

fn ordered(a: f32, b: f32) -> Span {
    if a <= b { (a, b) } else { (b, a) }
}

impl BoxZoom {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            match_aspect: false,
        }
    }

    pub fn with_match_aspect(mut self, match_aspect: bool) -> Self {
        self.match_aspect = match_aspect;
        self
    }

    pub fn tooltip(&self) -> &'static str {
        match self.dimensions {
            Dimensions::Both => "Box Zoom",
            Dimensions::Width => "Box Zoom (x-axis)",
            Dimensions::Height => "Box Zoom (y-axis)",
        }
    }

    /// Screen spans `(left, right)` and `(top, bottom)` selected by a drag
    /// from `start` to `end`. Both points are clipped to the frame.
    pub fn compute_limits(&self, frame: &Rect, start: (f32, f32), end: (f32, f32)) -> (Span, Span) {
        let clip = |(x, y): (f32, f32)| {
            (
                x.clamp(frame.x, frame.right()),
                y.clamp(frame.y, frame.bottom()),
            )
        };
        let (start, end) = (clip(start), clip(end));

        match self.dimensions {
            Dimensions::Width => (ordered(start.0, end.0), (frame.y, frame.bottom())),
            Dimensions::Height => ((frame.x, frame.right()), ordered(start.1, end.1)),
            Dimensions::Both if self.match_aspect => match_aspect(frame, start, end),
            Dimensions::Both => (ordered(start.0, end.0), ordered(start.1, end.1)),
        }
    }

    /// Applies the drag to every named range. Returns `false` and leaves the
    /// ranges untouched when the selected box is empty.
    pub fn apply(&self, ranges: &mut FrameRanges, start: (f32, f32), end: (f32, f32)) -> bool {
        let (sx, sy) = self.compute_limits(ranges.frame(), start, end);
        if sx.0 == sx.1 || sy.0 == sy.1 {
            debug!("Ignoring empty box zoom selection {:?} x {:?}", sx, sy);
            return false;
        }
        debug!("Box zoom to screen spans {:?} x {:?}", sx, sy);
        ranges.update(sx, sy);
        true
    }
}

/// Expands the dragged box along its shorter side to the frame's aspect
/// ratio, anchored at the drag start and clipped to the frame.
fn match_aspect(frame: &Rect, start: (f32, f32), end: (f32, f32)) -> (Span, Span) {
    let aspect = frame.aspect();
    let dx = (end.0 - start.0).abs();
    let dy = (end.1 - start.1).abs();
    if aspect <= 0.0 || dx == 0.0 || dy == 0.0 {
        return (ordered(start.0, end.0), ordered(start.1, end.1));
    }

    let drag_aspect = dx / dy;
    let x_scale = if drag_aspect >= aspect {
        1.0
    } else {
        aspect / drag_aspect
    };

    let rightward = start.0 <= end.0;
    let (mut left, mut right) = if rightward {
        (start.0, (start.0 + dx * x_scale).min(frame.right()))
    } else {
        ((start.0 - dx * x_scale).max(frame.x), start.0)
    };
    let width = right - left;

    let (top, bottom) = if start.1 <= end.1 {
        (start.1, (start.1 + width / aspect).min(frame.bottom()))
    } else {
        ((start.1 - width / aspect).max(frame.y), start.1)
    };
    let height = bottom - top;

    // Clipping may have cut the height; bring the width back in line.
    if rightward {
        right = left + aspect * height;
    } else {
        left = right - aspect * height;
    }
    ((left, right), (top, bottom))
}
