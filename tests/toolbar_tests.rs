mod common;

use common::fixtures::*;
use common::{TestResult, named, rect_of, run_document};
use serde_json::{json, Value};

fn figure_with_toolbar(location: &str) -> Value {
    let mut plot = figure("plot", "pan,reset,help");
    plot["toolbarLocation"] = json!(location);
    document(plot)
}

#[test]
fn test_toolbar_above() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = run_document(&figure_with_toolbar("above"))?;
    assert_eq!(named(&report, "toolbar-box").kind, "Column");
    assert_box_at!(report, "toolbar-box", 0.0, 0.0, 200.0, 230.0);
    assert_box_at!(report, "toolbar", 110.0, 0.0, 90.0, 30.0);
    assert_box_at!(report, "plot", 0.0, 30.0, 200.0, 200.0);
    Ok(())
}

#[test]
fn test_toolbar_below() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = run_document(&figure_with_toolbar("below"))?;
    assert_box_at!(report, "plot", 0.0, 0.0, 200.0, 200.0);
    assert_box_at!(report, "toolbar", 110.0, 200.0, 90.0, 30.0);
    Ok(())
}

#[test]
fn test_toolbar_left() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = run_document(&figure_with_toolbar("left"))?;
    assert_eq!(named(&report, "toolbar-box").kind, "Row");
    assert_box_at!(report, "toolbar-box", 0.0, 0.0, 230.0, 200.0);
    assert_box_at!(report, "toolbar", 0.0, 0.0, 30.0, 90.0);
    assert_box_at!(report, "plot", 30.0, 0.0, 200.0, 200.0);
    Ok(())
}

#[test]
fn test_toolbar_right() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = run_document(&figure_with_toolbar("right"))?;
    assert_box_at!(report, "plot", 0.0, 0.0, 200.0, 200.0);
    assert_box_at!(report, "toolbar", 200.0, 0.0, 30.0, 90.0);
    Ok(())
}

#[test]
fn test_no_toolbar_location_keeps_plot_as_root() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = run_document(&document(figure("plot", "pan,reset,help")))?;
    assert_eq!(report.boxes.len(), 1);
    assert_eq!(report.root_box().map(|b| b.kind), Some("Plot"));
    assert!(report.find("toolbar").is_none());
    Ok(())
}

#[test]
fn test_toolbar_never_resizes_content() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    for location in ["above", "below", "left", "right"] {
        let report = run_document(&figure_with_toolbar(location))?;
        let plot = rect_of(&report, "plot");
        assert_eq!((plot.width, plot.height), (200.0, 200.0), "{}", location);
    }
    Ok(())
}

#[test]
fn test_standalone_toolbar_node() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = run_document(&document(json!({
        "type": "Row",
        "children": [
            { "type": "Toolbar", "tools": "pan, wheel_zoom", "location": "left" },
            { "type": "Spacer", "name": "content", "width": 100, "height": 100 }
        ]
    })))?;
    assert_box_at!(report, "toolbar", 0.0, 0.0, 30.0, 60.0);
    assert_box_at!(report, "content", 30.0, 0.0, 100.0, 100.0);
    Ok(())
}
