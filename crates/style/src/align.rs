//! Alignment, axis and placement enums shared by the layout nodes.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset of an item inside a track or a container's cross axis when the
/// item is smaller than the space it was given.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Offset of an item of extent `item` inside a track of extent `track`.
    /// Overflowing items are pinned to the track start.
    pub fn offset(self, track: f32, item: f32) -> f32 {
        let free = (track - item).max(0.0);
        match self {
            Align::Start => 0.0,
            Align::Center => free / 2.0,
            Align::End => free,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Where a toolbar sits relative to the content it controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Above,
    Below,
    Left,
    Right,
}

impl Location {
    /// Axis along which the toolbar and its content are stacked.
    pub fn packing_axis(self) -> Axis {
        match self {
            Location::Above | Location::Below => Axis::Vertical,
            Location::Left | Location::Right => Axis::Horizontal,
        }
    }

    /// True when the toolbar precedes the content in packing order.
    pub fn is_leading(self) -> bool {
        matches!(self, Location::Above | Location::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_offsets() {
        assert_eq!(Align::Start.offset(90.0, 30.0), 0.0);
        assert_eq!(Align::Center.offset(90.0, 30.0), 30.0);
        assert_eq!(Align::End.offset(90.0, 30.0), 60.0);
        // overflow never yields a negative offset
        assert_eq!(Align::End.offset(30.0, 90.0), 0.0);
    }

    #[test]
    fn test_location_packing() {
        assert_eq!(Location::Above.packing_axis(), Axis::Vertical);
        assert_eq!(Location::Right.packing_axis(), Axis::Horizontal);
        assert!(Location::Left.is_leading());
        assert!(!Location::Below.is_leading());
    }
}
