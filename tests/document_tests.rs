mod common;

use common::fixtures::*;
use common::{TestResult, run_document};
use plotbox::{PipelineBuilder, PipelineError};
use plotbox_layout::{LayoutConfig, LayoutError, Size};
use plotbox_style::ConfigError;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn stretchy_row() -> Value {
    json!({
        "type": "Row",
        "name": "row",
        "spacing": 10,
        "children": [
            fixed_spacer("a", 50.0, 50.0),
            { "type": "Spacer", "name": "flex", "widthPolicy": "flex", "height": 50 },
            fixed_spacer("b", 50.0, 50.0)
        ]
    })
}

#[test]
fn test_document_from_file() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut file = NamedTempFile::new()?;
    write!(file, "{}", document(stretchy_row()))?;

    let report = PipelineBuilder::new()
        .with_document_file(file.path())?
        .build()?
        .run()?;
    assert_eq!(report.viewport, Size::new(300.0, 300.0));
    assert_box_at!(report, "row", 0.0, 0.0, 300.0, 50.0);
    assert_box_at!(report, "flex", 60.0, 0.0, 180.0, 50.0);
    assert_box_at!(report, "b", 250.0, 0.0, 50.0, 50.0);
    Ok(())
}

#[test]
fn test_report_written_to_file() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let output = NamedTempFile::new()?;
    let pipeline = PipelineBuilder::new()
        .with_document_json(&document(stretchy_row()).to_string())?
        .build()?;
    let report = pipeline.run_to_file(output.path(), false)?;

    let written: Value = serde_json::from_str(&std::fs::read_to_string(output.path())?)?;
    assert_eq!(written["boxes"].as_array().map(Vec::len), Some(report.boxes.len()));
    let flex = written["boxes"]
        .as_array()
        .and_then(|boxes| boxes.iter().find(|b| b["name"] == "flex"))
        .ok_or("flex box missing from report")?;
    assert_eq!(flex["kind"], "Spacer");
    assert_eq!(flex["stretchWidth"], true);
    assert_eq!(flex["rect"]["width"], 180.0);
    Ok(())
}

#[test]
fn test_viewport_override_and_shorthand() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let json = document(stretchy_row()).to_string();
    let report = PipelineBuilder::new()
        .with_document_json(&json)?
        .with_viewport(Size::new(500.0, 100.0))
        .build()?
        .run()?;
    assert_box_at!(report, "flex", 60.0, 0.0, 380.0, 50.0);

    let report = PipelineBuilder::new()
        .with_document_json(&json)?
        .with_viewport_str("200px 100px")?
        .build()?
        .run()?;
    assert_box_at!(report, "flex", 60.0, 0.0, 80.0, 50.0);

    let err = PipelineBuilder::new().with_viewport_str("wide");
    assert!(matches!(err, Err(PipelineError::Style(_))));
    Ok(())
}

#[test]
fn test_missing_viewport_uses_natural_size() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let report = run_document(&json!({ "root": stretchy_row() }))?;
    assert_eq!(report.viewport, Size::new(120.0, 50.0));
    assert_box_at!(report, "flex", 60.0, 0.0, 0.0, 50.0);
    Ok(())
}

#[test]
fn test_config_override() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let json = document(json!({
        "type": "Plot",
        "name": "plot",
        "frameWidth": 100,
        "frameHeight": 100,
        "tools": "pan,reset",
        "toolbarLocation": "above"
    }))
    .to_string();
    let config = LayoutConfig {
        toolbar_button_size: 20.0,
        plot_min_border: 10.0,
        ..Default::default()
    };
    let report = PipelineBuilder::new()
        .with_document_json(&json)?
        .with_config(config)
        .build()?
        .run()?;
    assert_box_at!(report, "toolbar", 80.0, 0.0, 40.0, 20.0);
    assert_box_at!(report, "plot", 0.0, 20.0, 120.0, 120.0);
    Ok(())
}

#[test]
fn test_pipeline_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(matches!(
        PipelineBuilder::new().build(),
        Err(PipelineError::Config(_))
    ));
    assert!(matches!(
        PipelineBuilder::new().with_document_file("/nonexistent/plotbox.json"),
        Err(PipelineError::Io(_))
    ));
    assert!(matches!(
        PipelineBuilder::new().with_document_json(r#"{ "root": { "type": "Spacer", "widthPolicy": "stretchy" } }"#),
        Err(PipelineError::Json(_))
    ));

    let unsized_doc = document(json!({ "type": "Spacer", "widthPolicy": "fixed" }));
    assert!(matches!(
        run_document(&unsized_doc),
        Err(PipelineError::Layout(LayoutError::Config(ConfigError::MissingFixedSize(_))))
    ));

    let negative_spacing = document(json!({ "type": "Row", "spacing": -1, "children": [] }));
    assert!(matches!(
        run_document(&negative_spacing),
        Err(PipelineError::Layout(LayoutError::Config(ConfigError::NegativeSpacing(_))))
    ));

    let negative_viewport = json!({ "viewport": [-10, 100], "root": stretchy_row() });
    assert!(matches!(
        run_document(&negative_viewport),
        Err(PipelineError::Layout(LayoutError::NegativeOuterSize { .. }))
    ));
}
