//! MoveDivider: translate a maximal collinear chain to a new offset.

use std::collections::BTreeSet;

use crate::graph::{EdgeId, Graph, NodeId};

use super::types::{GridCfg, NoChange, Outcome};

/// Move the divider through `e` to `offset`. Requires normalized caches.
pub(crate) fn move_divider(g: &mut Graph, cfg: &GridCfg, e: EdgeId, offset: i64) -> Outcome {
    if e.0 >= g.edges().len() || g.is_boundary(e) {
        return Outcome::Unchanged(NoChange::NotMovable);
    }
    let o = g.edge(e).orientation;
    let current = g.edge_offset(e);
    if offset == current {
        return Outcome::Unchanged(NoChange::Degenerate);
    }
    let chain = chain_through(g, e);
    let (lo, hi) = chain_span(g, &chain);
    let cl = cfg.clearance();
    let (band_lo, band_hi) = (current.min(offset) - cl, current.max(offset) + cl);
    let blocked = g
        .edges()
        .iter()
        .filter(|f| f.orientation == o && !chain.contains(&f.id))
        .any(|f| {
            let d = g.edge_offset(f.id);
            let (s, t) = g.edge_span(f.id);
            band_lo < d && d < band_hi && s <= hi && t >= lo
        });
    if blocked {
        return Outcome::Unchanged(NoChange::Blocked);
    }
    let nodes: BTreeSet<NodeId> = chain
        .iter()
        .flat_map(|&c| {
            let edge = g.edge(c);
            [edge.n1, edge.n2]
        })
        .collect();
    for n in nodes {
        let along = o.along(g.offset(n));
        g.set_offset(n, o.point(offset, along));
    }
    Outcome::Changed
}

/// Every edge collinear with `e` reachable through shared nodes, `e` included.
pub fn chain_through(g: &Graph, e: EdgeId) -> Vec<EdgeId> {
    let edge = g.edge(e);
    let (back, fwd) = edge.orientation.directions();
    let mut chain = vec![e];
    let mut n = edge.n1;
    while let Some(prev) = g.node(n).edge_towards(back) {
        chain.push(prev);
        n = g.edge(prev).n1;
    }
    let mut n = edge.n2;
    while let Some(next) = g.node(n).edge_towards(fwd) {
        chain.push(next);
        n = g.edge(next).n2;
    }
    chain
}

fn chain_span(g: &Graph, chain: &[EdgeId]) -> (i64, i64) {
    chain
        .iter()
        .map(|&c| g.edge_span(c))
        .fold((i64::MAX, i64::MIN), |(lo, hi), (s, t)| (lo.min(s), hi.max(t)))
}
