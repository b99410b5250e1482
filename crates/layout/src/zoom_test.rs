use crate::ranges::DEFAULT_RANGE;
use crate::test_utils::layout;
use crate::{BoxStyle, BoxZoom, Borders, Dimensions, FrameRanges, LayoutTree, PlotContent, Range1d, Rect};

fn plot_ranges() -> FrameRanges {
    let mut tree = LayoutTree::new();
    let plot = tree
        .plot(
            BoxStyle::fixed(600.0, 600.0),
            PlotContent::new().with_borders(Borders::new(5.0, 30.0, 5.0, 5.0)),
        )
        .unwrap();
    let result = layout(&tree, plot, 800.0, 800.0);
    let frame = result.get(plot).unwrap().frame.unwrap();
    assert_eq!(frame, Rect::new(5.0, 5.0, 565.0, 590.0));

    FrameRanges::new(frame, Range1d::new(-1.0, 1.0), Range1d::new(-1.0, 1.0))
}

#[track_caller]
fn assert_range(actual: Option<&Range1d>, start: f64, end: f64) {
    let range = actual.expect("range exists");
    assert!(
        (range.start - start).abs() < 0.01 && (range.end - end).abs() < 0.01,
        "got {:?}, expected {}..{}",
        range,
        start,
        end
    );
}

#[test]
fn test_tooltips() {
    assert_eq!(BoxZoom::default().tooltip(), "Box Zoom");
    assert_eq!(BoxZoom::new(Dimensions::Width).tooltip(), "Box Zoom (x-axis)");
    assert_eq!(BoxZoom::new(Dimensions::Height).tooltip(), "Box Zoom (y-axis)");
}

#[test]
fn test_zoom_both_dimensions() {
    let mut ranges = plot_ranges();
    assert!(BoxZoom::default().apply(&mut ranges, (200.0, 100.0), (400.0, 500.0)));
    assert_range(ranges.x_range(DEFAULT_RANGE), -0.31, 0.40);
    assert_range(ranges.y_range(DEFAULT_RANGE), -0.678, 0.678);
}

#[test]
fn test_drag_direction_does_not_matter() {
    let mut ranges = plot_ranges();
    assert!(BoxZoom::default().apply(&mut ranges, (400.0, 500.0), (200.0, 100.0)));
    assert_range(ranges.x_range(DEFAULT_RANGE), -0.31, 0.40);
    assert_range(ranges.y_range(DEFAULT_RANGE), -0.678, 0.678);
}

#[test]
fn test_zoom_with_matched_aspect() {
    let mut ranges = plot_ranges();
    let zoom = BoxZoom::default().with_match_aspect(true);
    assert!(zoom.apply(&mut ranges, (200.0, 200.0), (400.0, 300.0)));
    assert_range(ranges.x_range(DEFAULT_RANGE), -0.31, 0.40);
    assert_range(ranges.y_range(DEFAULT_RANGE), -0.37, 0.34);
}

#[test]
fn test_single_dimension_zoom_keeps_other_axis() {
    let mut ranges = plot_ranges();
    assert!(BoxZoom::new(Dimensions::Width).apply(&mut ranges, (200.0, 100.0), (400.0, 500.0)));
    assert_range(ranges.x_range(DEFAULT_RANGE), -0.31, 0.40);
    assert_range(ranges.y_range(DEFAULT_RANGE), -1.0, 1.0);

    let mut ranges = plot_ranges();
    assert!(BoxZoom::new(Dimensions::Height).apply(&mut ranges, (200.0, 100.0), (400.0, 500.0)));
    assert_range(ranges.x_range(DEFAULT_RANGE), -1.0, 1.0);
    assert_range(ranges.y_range(DEFAULT_RANGE), -0.678, 0.678);
}

#[test]
fn test_selection_is_clipped_to_frame() {
    let ranges = plot_ranges();
    let zoom = BoxZoom::default();
    let (sx, sy) = zoom.compute_limits(ranges.frame(), (-50.0, -50.0), (1000.0, 1000.0));
    assert_eq!(sx, (5.0, 570.0));
    assert_eq!(sy, (5.0, 595.0));
}

#[test]
fn test_empty_selection_is_ignored() {
    let mut ranges = plot_ranges();
    let before = ranges.clone();
    assert!(!BoxZoom::default().apply(&mut ranges, (200.0, 100.0), (200.0, 500.0)));
    assert_eq!(ranges, before);

    let zoom = BoxZoom::default().with_match_aspect(true);
    assert!(!zoom.apply(&mut ranges, (200.0, 100.0), (400.0, 100.0)));
    assert_eq!(ranges, before);
}

#[test]
fn test_every_named_range_is_rescaled() {
    let mut ranges = plot_ranges()
        .with_x_range("secondary", Range1d::new(0.0, 100.0))
        .with_y_range("secondary", Range1d::new(0.0, 10.0));
    assert!(BoxZoom::default().apply(&mut ranges, (200.0, 100.0), (400.0, 500.0)));
    assert_range(ranges.x_range("secondary"), 34.513, 69.912);
    assert_range(ranges.y_range("secondary"), 1.61, 8.39);
}
