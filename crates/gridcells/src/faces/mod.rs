//! Face extraction: elementary-cycle enumeration followed by a containment filter.
//!
//! Purpose
//! - `enumerate_cycles` finds every elementary cycle of the current graph by
//!   depth-first search from each node (no incremental mode).
//! - `filter_minimal` drops every cycle whose polygon encloses another
//!   cycle's polygon, leaving the minimal faces (grid cells).
//!
//! Cost
//! - Enumeration is exponential in the worst case and the filter is quadratic
//!   in the number of cycles; run the pipeline once per settled edit.
//!
//! Code cross-refs: `graph::Graph::normalize` (dense ids required),
//! `geom::Polygon::contains_polygon`

mod dfs;
mod filter;
mod types;

pub use dfs::enumerate_cycles;
pub use filter::{face_polygon, filter_minimal};
pub use types::{CycleCatalog, CycleKey, Faces};

use crate::graph::Graph;

/// Convenience: enumerate and filter in one call.
pub fn minimal_faces(graph: &Graph) -> Faces {
    let cycles = enumerate_cycles(graph);
    Faces::from(filter_minimal(graph, &cycles))
}
