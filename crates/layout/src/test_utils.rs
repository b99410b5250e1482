use crate::util::rects_fuzzy_eq;
use crate::{
    AxisSizing, BoxStyle, LayoutEngine, LayoutError, LayoutResult, LayoutTree, NodeId, Rect, Size,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a default layout engine for testing purposes.
pub fn create_test_engine() -> LayoutEngine {
    init_logger();
    LayoutEngine::default()
}

pub fn layout(tree: &LayoutTree, root: NodeId, width: f32, height: f32) -> LayoutResult {
    create_test_engine()
        .layout(tree, root, Size::new(width, height))
        .expect("layout should succeed")
}

pub fn fixed_spacer(tree: &mut LayoutTree, width: f32, height: f32) -> NodeId {
    tree.spacer(BoxStyle::fixed(width, height))
        .expect("fixed spacer is valid")
}

pub fn spacer(tree: &mut LayoutTree, width: AxisSizing, height: AxisSizing) -> NodeId {
    tree.spacer(BoxStyle::new(width, height))
        .expect("spacer is valid")
}

pub fn try_layout(
    tree: &LayoutTree,
    root: NodeId,
    width: f32,
    height: f32,
) -> Result<LayoutResult, LayoutError> {
    create_test_engine().layout(tree, root, Size::new(width, height))
}

#[track_caller]
pub fn assert_rect(result: &LayoutResult, id: NodeId, expected: Rect) {
    let actual = result.rect(id).expect("node should be placed");
    assert!(
        rects_fuzzy_eq(&actual, &expected),
        "node {} placed at {:?}, expected {:?}",
        id,
        actual,
        expected
    );
}
