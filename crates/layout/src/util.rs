use plotbox_types::Rect;

const EPSILON: f32 = 0.01;

/// Robust floating point comparison for layout calculations.
/// Handles `Option<f32>` so that unset bounds compare equal to each other.
pub fn floats_fuzzy_eq(a: Option<f32>, b: Option<f32>) -> bool {
    match (a, b) {
        (Some(va), Some(vb)) => (va - vb).abs() < EPSILON,
        (None, None) => true,
        _ => false,
    }
}

/// Helper for comparing slices of floats (e.g., track sizes).
pub fn float_slices_fuzzy_eq(a: &[f32], b: &[f32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPSILON)
}

pub fn rects_fuzzy_eq(a: &Rect, b: &Rect) -> bool {
    float_slices_fuzzy_eq(
        &[a.x, a.y, a.width, a.height],
        &[b.x, b.y, b.width, b.height],
    )
}
