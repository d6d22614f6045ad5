//! Pointer gestures and their translation into commands.

use crate::geom::{Orientation, Point, Rect};
use crate::graph::{EdgeId, Graph};

use super::types::{Command, GridCfg, WorkMode};

/// A press followed by drag samples, in local offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gesture {
    pub start: Point,
    pub current: Point,
}

impl Gesture {
    pub fn at(p: Point) -> Self {
        Self {
            start: p,
            current: p,
        }
    }
}

/// Command a gesture issues in `mode`, or `None` if it issues nothing.
///
/// - Draw: segment from the press point along the drag's dominant axis.
/// - Move: the edge picked at the press point, offset by the drag delta.
/// - Erase: the dragged rectangle grown by `pick_tolerance`.
pub fn command_for(
    mode: WorkMode,
    graph: &Graph,
    cfg: &GridCfg,
    gesture: &Gesture,
) -> Option<Command> {
    let Gesture { start, current } = *gesture;
    match mode {
        WorkMode::Draw => {
            let (dx, dy) = ((current.x - start.x).abs(), (current.y - start.y).abs());
            let b = if dx >= dy {
                Point::new(current.x, start.y)
            } else {
                Point::new(start.x, current.y)
            };
            (b != start).then_some(Command::AddDivider { a: start, b })
        }
        WorkMode::Move => {
            let edge = pick_edge(graph, start, cfg.pick_tolerance)?;
            let o = graph.edge(edge).orientation;
            let delta = o.offset(current) - o.offset(start);
            (delta != 0).then(|| Command::MoveDivider {
                edge,
                offset: graph.edge_offset(edge) + delta,
            })
        }
        WorkMode::Erase => {
            let r = Rect::from_corners(start, current);
            let t = cfg.pick_tolerance.max(0);
            Some(Command::EraseDivider {
                region: Rect::new(r.x - t, r.y - t, r.width + 2 * t, r.height + 2 * t),
            })
        }
    }
}

/// Nearest interior edge within `tolerance` of `p` (Chebyshev distance).
pub fn pick_edge(graph: &Graph, p: Point, tolerance: i64) -> Option<EdgeId> {
    graph
        .edges()
        .iter()
        .filter(|e| !graph.is_boundary(e.id))
        .map(|e| (distance(graph, e.id, e.orientation, p), e.id))
        .filter(|&(d, _)| d <= tolerance)
        .min()
        .map(|(_, e)| e)
}

fn distance(graph: &Graph, e: EdgeId, o: Orientation, p: Point) -> i64 {
    let (s, t) = graph.edge_span(e);
    let along = o.along(p);
    let gap = (s - along).max(along - t).max(0);
    (o.offset(p) - graph.edge_offset(e)).abs().max(gap)
}
