// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod fixtures;

use plotbox::{BoxReport, LayoutReport, PipelineBuilder, PipelineError};
use plotbox_types::Rect;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Lay out a JSON document and return the report
pub fn run_document(document: &Value) -> Result<LayoutReport, PipelineError> {
    let json = serde_json::to_string(document)?;
    PipelineBuilder::new().with_document_json(&json)?.build()?.run()
}

/// Find a box by name, failing the test when it is missing
pub fn named<'a>(report: &'a LayoutReport, name: &str) -> &'a BoxReport {
    report
        .find(name)
        .unwrap_or_else(|| panic!("no box named '{}' in report", name))
}

pub fn rect_of(report: &LayoutReport, name: &str) -> Rect {
    named(report, name).resolved.rect
}

/// Asserts that a named box was placed at `(x, y, width, height)`, within a
/// hundredth of a pixel.
#[macro_export]
macro_rules! assert_box_at {
    ($report:expr, $name:expr, $x:expr, $y:expr, $w:expr, $h:expr) => {{
        let rect = $crate::common::rect_of(&$report, $name);
        let expected = plotbox_types::Rect::new($x, $y, $w, $h);
        let close = |a: f32, b: f32| (a - b).abs() < 0.01;
        assert!(
            close(rect.x, expected.x)
                && close(rect.y, expected.y)
                && close(rect.width, expected.width)
                && close(rect.height, expected.height),
            "box '{}' placed at {:?}, expected {:?}",
            $name,
            rect,
            expected
        );
    }};
}
