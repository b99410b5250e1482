//! Output types from the layout engine.
//!
//! A pass yields one [`ResolvedBox`] per node reachable from the root, in
//! absolute coordinates with the root at the origin.

use crate::tree::NodeId;
use plotbox_types::Rect;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBox {
    pub rect: Rect,
    /// Whether the box absorbed leftover width.
    pub stretch_width: bool,
    pub stretch_height: bool,
    /// The data frame of a plot: its rectangle inset by the plot borders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Rect>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    boxes: Vec<Option<ResolvedBox>>,
}

impl LayoutResult {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            boxes: vec![None; len],
        }
    }

    pub(crate) fn insert(&mut self, id: NodeId, resolved: ResolvedBox) {
        let index = id.index();
        if index >= self.boxes.len() {
            self.boxes.resize(index + 1, None);
        }
        self.boxes[index] = Some(resolved);
    }

    pub fn get(&self, id: NodeId) -> Option<&ResolvedBox> {
        self.boxes.get(id.index()).and_then(Option::as_ref)
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(|resolved| resolved.rect)
    }

    /// Placed boxes ordered by node id.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ResolvedBox)> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .filter_map(|(i, resolved)| resolved.as_ref().map(|b| (NodeId(i), b)))
    }

    /// Number of placed boxes.
    pub fn len(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
