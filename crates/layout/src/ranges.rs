//! Data ranges attached to a plot frame, and the mapping between them and
//! screen coordinates. Screen y grows downward, data y grows upward.
use plotbox_types::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_RANGE: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range1d {
    pub start: f64,
    pub end: f64,
}

impl Range1d {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Value at `fraction` of the way from start to end.
    pub fn lerp(&self, fraction: f64) -> f64 {
        self.start + fraction * self.span()
    }

    /// Fraction of the way from start to end at which `value` lies.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            0.0
        } else {
            (value - self.start) / span
        }
    }
}

/// Named x and y ranges over a frame rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRanges {
    frame: Rect,
    x_ranges: BTreeMap<String, Range1d>,
    y_ranges: BTreeMap<String, Range1d>,
}

fn screen_fraction(offset: f32, extent: f32) -> f64 {
    if extent <= 0.0 {
        0.0
    } else {
        f64::from(offset) / f64::from(extent)
    }
}

impl FrameRanges {
    /// Ranges with a single `"default"` entry on each axis.
    pub fn new(frame: Rect, x: Range1d, y: Range1d) -> Self {
        Self {
            frame,
            x_ranges: BTreeMap::from([(DEFAULT_RANGE.to_string(), x)]),
            y_ranges: BTreeMap::from([(DEFAULT_RANGE.to_string(), y)]),
        }
    }

    pub fn with_x_range(mut self, name: impl Into<String>, range: Range1d) -> Self {
        self.x_ranges.insert(name.into(), range);
        self
    }

    pub fn with_y_range(mut self, name: impl Into<String>, range: Range1d) -> Self {
        self.y_ranges.insert(name.into(), range);
        self
    }

    pub fn frame(&self) -> &Rect {
        &self.frame
    }

    pub fn x_range(&self, name: &str) -> Option<&Range1d> {
        self.x_ranges.get(name)
    }

    pub fn y_range(&self, name: &str) -> Option<&Range1d> {
        self.y_ranges.get(name)
    }

    /// Data x of screen position `sx` in the named range.
    pub fn invert_x(&self, name: &str, sx: f32) -> Option<f64> {
        let fraction = screen_fraction(sx - self.frame.x, self.frame.width);
        self.x_range(name).map(|r| r.lerp(fraction))
    }

    /// Data y of screen position `sy` in the named range.
    pub fn invert_y(&self, name: &str, sy: f32) -> Option<f64> {
        let fraction = screen_fraction(self.frame.bottom() - sy, self.frame.height);
        self.y_range(name).map(|r| r.lerp(fraction))
    }

    /// Screen x of data value `x` in the named range.
    pub fn map_x(&self, name: &str, x: f64) -> Option<f32> {
        self.x_range(name)
            .map(|r| self.frame.x + (r.fraction(x) * f64::from(self.frame.width)) as f32)
    }

    /// Screen y of data value `y` in the named range.
    pub fn map_y(&self, name: &str, y: f64) -> Option<f32> {
        self.y_range(name)
            .map(|r| self.frame.bottom() - (r.fraction(y) * f64::from(self.frame.height)) as f32)
    }

    /// Rescales every named range so that the screen spans `sx` (left,
    /// right) and `sy` (top, bottom) cover the whole frame.
    pub fn update(&mut self, sx: (f32, f32), sy: (f32, f32)) {
        let (left, right) = (
            screen_fraction(sx.0 - self.frame.x, self.frame.width),
            screen_fraction(sx.1 - self.frame.x, self.frame.width),
        );
        let (low, high) = (
            screen_fraction(self.frame.bottom() - sy.1, self.frame.height),
            screen_fraction(self.frame.bottom() - sy.0, self.frame.height),
        );
        for range in self.x_ranges.values_mut() {
            *range = Range1d::new(range.lerp(left), range.lerp(right));
        }
        for range in self.y_ranges.values_mut() {
            *range = Range1d::new(range.lerp(low), range.lerp(high));
        }
    }
}
