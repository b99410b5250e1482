// src/report.rs
use crate::error::PipelineError;
use plotbox_layout::{LayoutResult, LayoutTree, ResolvedBox};
use plotbox_types::Size;
use serde::Serialize;

/// One placed box, as written to reports.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoxReport {
    pub id: usize,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,
    #[serde(flatten)]
    pub resolved: ResolvedBox,
}

/// The serialisable outcome of a pipeline run.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub viewport: Size,
    pub root: usize,
    pub boxes: Vec<BoxReport>,
}

impl LayoutReport {
    pub(crate) fn new(
        tree: &LayoutTree,
        viewport: Size,
        root: usize,
        result: &LayoutResult,
    ) -> Result<Self, PipelineError> {
        let boxes = result
            .iter()
            .map(|(id, resolved)| -> Result<BoxReport, PipelineError> {
                let data = tree.get(id)?;
                Ok(BoxReport {
                    id: id.index(),
                    kind: data.kind().as_str(),
                    name: data.style.name.clone(),
                    parent: data.parent().map(|p| p.index()),
                    resolved: *resolved,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            viewport,
            root,
            boxes,
        })
    }

    pub fn get(&self, id: usize) -> Option<&BoxReport> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// The first box carrying `name`.
    pub fn find(&self, name: &str) -> Option<&BoxReport> {
        self.boxes.iter().find(|b| b.name.as_deref() == Some(name))
    }

    pub fn root_box(&self) -> Option<&BoxReport> {
        self.get(self.root)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, PipelineError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
