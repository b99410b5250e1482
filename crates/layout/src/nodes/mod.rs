pub mod grid;
pub mod stack;
pub mod toolbar;

use plotbox_style::Axis;
use plotbox_types::{Rect, Size};

/// Origin and extent of `rect` along `axis`.
pub(crate) fn span(rect: &Rect, axis: Axis) -> (f32, f32) {
    match axis {
        Axis::Horizontal => (rect.x, rect.width),
        Axis::Vertical => (rect.y, rect.height),
    }
}

/// Builds a rectangle from spans on a main axis and its cross axis.
pub(crate) fn rect_from_spans(main_axis: Axis, main: (f32, f32), cross: (f32, f32)) -> Rect {
    match main_axis {
        Axis::Horizontal => Rect::new(main.0, cross.0, main.1, cross.1),
        Axis::Vertical => Rect::new(cross.0, main.0, cross.1, main.1),
    }
}

/// Builds a size from extents on a main axis and its cross axis.
pub(crate) fn size_from_extents(main_axis: Axis, main: f32, cross: f32) -> Size {
    match main_axis {
        Axis::Horizontal => Size::new(main, cross),
        Axis::Vertical => Size::new(cross, main),
    }
}
