//! AddDivider: bracket, split, and chain a new divider into the graph.

use crate::geom::{Orientation, Point};
use crate::graph::{EdgeId, Graph, NodeId};

use super::types::{GridCfg, NoChange, Outcome};

/// Add the divider `a`–`b` (clamped to the area). Does not normalize.
pub(crate) fn add_divider(g: &mut Graph, cfg: &GridCfg, a: Point, b: Point) -> Outcome {
    let bounds = g.bounds();
    let (a, b) = (bounds.clamp(a), bounds.clamp(b));
    if a == b {
        return Outcome::Unchanged(NoChange::Degenerate);
    }
    let Some(o) = Orientation::of(a, b) else {
        return Outcome::Unchanged(NoChange::NotAxisAligned);
    };
    let c = o.offset(a);
    let (lo, hi) = {
        let (s, t) = (o.along(a), o.along(b));
        (s.min(t), s.max(t))
    };
    let Some((near, far)) = brackets(g, o, c, lo, hi) else {
        return Outcome::Unchanged(NoChange::NoBracket);
    };
    let (from, to) = (g.edge_offset(near), g.edge_offset(far));
    if too_close(g, o, c, (from, to), cfg.clearance()) {
        return Outcome::Unchanged(NoChange::TooClose);
    }

    let start = endpoint(g, near, o.point(c, from));
    let end = endpoint(g, far, o.point(c, to));
    let mut stops: Vec<(i64, NodeId)> = vec![(from, start), (to, end)];
    let crossed: Vec<EdgeId> = perpendicular_through(g, o, c)
        .filter(|&e| {
            let d = g.edge_offset(e);
            from < d && d < to
        })
        .collect();
    for e in crossed {
        let d = g.edge_offset(e);
        let at = o.point(c, d);
        let n = match g.node_at(at) {
            Some(n) => n,
            None => g.split_edge(e, at),
        };
        stops.push((d, n));
    }
    stops.sort_unstable();
    stops.dedup_by_key(|s| s.0);
    for pair in stops.windows(2) {
        if let Err(err) = g.add_edge(pair[0].1, pair[1].1) {
            debug_assert!(false, "divider piece rejected: {err}");
        }
    }
    Outcome::Changed
}

/// Edges of the other orientation whose closed span contains `c`.
fn perpendicular_through(
    g: &Graph,
    o: Orientation,
    c: i64,
) -> impl Iterator<Item = EdgeId> + '_ {
    let p = o.perpendicular();
    g.edges()
        .iter()
        .filter(move |e| e.orientation == p)
        .map(|e| e.id)
        .filter(move |&e| {
            let (s, t) = g.edge_span(e);
            s <= c && c <= t
        })
}

/// Nearest perpendicular edges at or before `lo` and at or after `hi`.
fn brackets(g: &Graph, o: Orientation, c: i64, lo: i64, hi: i64) -> Option<(EdgeId, EdgeId)> {
    let mut near: Option<(i64, EdgeId)> = None;
    let mut far: Option<(i64, EdgeId)> = None;
    for e in perpendicular_through(g, o, c) {
        let d = g.edge_offset(e);
        if d <= lo && near.map_or(true, |(best, _)| d > best) {
            near = Some((d, e));
        }
        if d >= hi && far.map_or(true, |(best, _)| d < best) {
            far = Some((d, e));
        }
    }
    match (near, far) {
        (Some((_, n)), Some((_, f))) if n != f => Some((n, f)),
        _ => None,
    }
}

/// A parallel edge within `clearance` of `c` that shares the span `(from, to)`.
///
/// Sharing means overlapping on an open interval, or touching at an endpoint
/// from a different offset. A collinear edge that only touches is allowed.
fn too_close(
    g: &Graph,
    o: Orientation,
    c: i64,
    (from, to): (i64, i64),
    clearance: i64,
) -> bool {
    g.edges()
        .iter()
        .filter(|e| e.orientation == o)
        .any(|e| {
            let d = g.edge_offset(e.id);
            if (d - c).abs() >= clearance {
                return false;
            }
            let (s, t) = g.edge_span(e.id);
            let overlap = t.min(to) - s.max(from);
            overlap > 0 || (overlap == 0 && d != c)
        })
}

/// Existing node at `at`, or a new one splitting `bracket`.
fn endpoint(g: &mut Graph, bracket: EdgeId, at: Point) -> NodeId {
    match g.node_at(at) {
        Some(n) => n,
        None => g.split_edge(bracket, at),
    }
}
