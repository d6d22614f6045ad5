//! Containment filter: keep only cycles that enclose no other cycle.

use tracing::trace;

use crate::geom::Polygon;
use crate::graph::{Graph, NodeId};

use super::types::CycleCatalog;

/// Closed polygon traced by a node sequence.
pub fn face_polygon(graph: &Graph, cycle: &[NodeId]) -> Polygon {
    Polygon::from_ring(cycle.iter().map(|&n| graph.offset(n)).collect())
}

/// Drop every cycle `C` for which some other cycle `D` lies inside `C`.
///
/// The polygons are scratch data for this call only.
pub fn filter_minimal(graph: &Graph, catalog: &CycleCatalog) -> CycleCatalog {
    let polys: Vec<Polygon> = catalog
        .values()
        .map(|cycle| face_polygon(graph, cycle))
        .collect();
    let composite: Vec<bool> = (0..polys.len())
        .map(|i| {
            (0..polys.len()).any(|j| i != j && polys[i].contains_polygon(&polys[j]))
        })
        .collect();
    let out: CycleCatalog = catalog
        .iter()
        .zip(composite)
        .filter(|(_, composite)| !composite)
        .map(|((k, c), _)| (k.clone(), c.clone()))
        .collect();
    trace!(cycles = catalog.len(), faces = out.len(), "face filter");
    out
}
