use serde_json::{json, Value};

/// Wrap a root node into a document with a 300x300 viewport
pub fn document(root: Value) -> Value {
    json!({
        "viewport": [300, 300],
        "root": root
    })
}

/// A named spacer fixed on both axes
pub fn fixed_spacer(name: &str, width: f32, height: f32) -> Value {
    json!({
        "type": "Spacer",
        "name": name,
        "width": width,
        "height": height
    })
}

/// A named spacer with an explicit width policy and a fixed height
pub fn policy_spacer(name: &str, width_policy: &str, width: f32, height: f32) -> Value {
    json!({
        "type": "Spacer",
        "name": name,
        "widthPolicy": width_policy,
        "width": width,
        "height": height
    })
}

/// Cell name for row `row`, column `col`
pub fn cell_name(row: usize, col: usize) -> String {
    format!("r{}c{}", row, col)
}

/// Dense 3x3 grid children built from a per-cell generator
pub fn grid_children(cell: impl Fn(usize, usize, &str) -> Value) -> Value {
    let rows: Vec<Value> = (0..3)
        .map(|row| {
            let cols: Vec<Value> = (0..3).map(|col| cell(row, col, &cell_name(row, col))).collect();
            Value::Array(cols)
        })
        .collect();
    Value::Array(rows)
}

/// A 3x3 grid of fixed 50px spacers with `overrides` merged into the node
pub fn grid_3x3(cell: impl Fn(usize, usize, &str) -> Value, overrides: Value) -> Value {
    let mut grid = json!({
        "type": "Grid",
        "name": "grid",
        "children": grid_children(cell)
    });
    if let (Some(target), Value::Object(extra)) = (grid.as_object_mut(), overrides) {
        target.extend(extra);
    }
    grid
}

/// A plot with a fixed 200x200 size and the given tools
pub fn figure(name: &str, tools: &str) -> Value {
    json!({
        "type": "Plot",
        "name": name,
        "width": 200,
        "height": 200,
        "tools": tools
    })
}
