//! JSON report of an editor's graph and faces.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gridcells::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: usize,
    pub x: i64,
    pub y: i64,
    pub edges: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationRecord {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: usize,
    pub n1: usize,
    pub n2: usize,
    pub orientation: OrientationRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRecord {
    pub key: String,
    pub nodes: Vec<usize>,
    pub area: i64,
}

/// Nodes, edges and minimal faces in local offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    pub area: AreaRecord,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub faces: Vec<FaceRecord>,
}

impl Snapshot {
    pub fn of(editor: &Editor) -> Self {
        let g = editor.graph();
        let area = g.area();
        let nodes = g
            .nodes()
            .iter()
            .map(|n| NodeRecord {
                id: n.id.0,
                x: n.offset.x,
                y: n.offset.y,
                edges: n.edges.iter().map(|e| e.0).collect(),
            })
            .collect();
        let edges = g
            .edges()
            .iter()
            .map(|e| EdgeRecord {
                id: e.id.0,
                n1: e.n1.0,
                n2: e.n2.0,
                orientation: match e.orientation {
                    Orientation::Horizontal => OrientationRecord::Horizontal,
                    Orientation::Vertical => OrientationRecord::Vertical,
                },
            })
            .collect();
        let faces = editor
            .minimal_faces()
            .iter()
            .map(|(key, cycle)| FaceRecord {
                key: key.to_string(),
                nodes: cycle.iter().map(|n| n.0).collect(),
                area: (gridcells::faces::face_polygon(g, cycle).area2().abs() / 2) as i64,
            })
            .collect();
        Self {
            version: gridcells::VERSION.to_string(),
            area: AreaRecord {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height,
            },
            nodes,
            edges,
            faces,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
