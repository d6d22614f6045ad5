//! EraseDivider: drop interior edges hit by a region, then prune.

use tracing::trace;

use crate::geom::Rect;
use crate::graph::{EdgeId, Graph};

use super::types::{NoChange, Outcome};

/// Erase every interior edge intersecting the closed `region`. Does not normalize.
pub(crate) fn erase_divider(g: &mut Graph, region: Rect) -> Outcome {
    let hits: Vec<EdgeId> = (0..g.edges().len())
        .map(EdgeId)
        .filter(|&e| !g.is_boundary(e) && intersects(g, e, region))
        .collect();
    if hits.is_empty() {
        return Outcome::Unchanged(NoChange::NothingToErase);
    }
    for &e in &hits {
        g.detach_edge(e);
    }
    let pruned = g.prune();
    g.compact();
    trace!(erased = hits.len(), pruned, "erase");
    Outcome::Changed
}

/// Closed segment/rectangle test for an axis-aligned edge.
fn intersects(g: &Graph, e: EdgeId, region: Rect) -> bool {
    let o = g.edge(e).orientation;
    let d = g.edge_offset(e);
    let (s, t) = g.edge_span(e);
    let (off_lo, off_hi) = region.span(o.perpendicular());
    let (lo, hi) = region.span(o);
    off_lo <= d && d <= off_hi && s <= hi && t >= lo
}
