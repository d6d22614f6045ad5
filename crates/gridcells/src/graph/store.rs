//! Graph Store: owning arena of nodes and edges addressed by dense indices.

use std::collections::{BTreeSet, HashMap};

use crate::geom::{Direction, Orientation, Point, Rect};

use super::types::{Edge, EdgeId, GraphError, Node, NodeId};

/// Orthogonal planar graph over a rectangular area.
///
/// Invariants (after `normalize`):
/// - `nodes()[i].id == NodeId(i)` and `edges()[i].id == EdgeId(i)`.
/// - Every edge is axis-aligned and canonical (`n1` before `n2`).
/// - Edges meet only at shared nodes; at most one edge per node direction.
/// - The four area corners and the boundary (possibly split) are present.
///
/// Mutation is crate-private: collaborators go through the editor.
#[derive(Clone, Debug)]
pub struct Graph {
    area: Rect,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Graph holding the four-corner rectangle of `area`.
    pub fn new(area: Rect) -> Result<Self, GraphError> {
        let mut g = Self {
            area,
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        g.init(area)?;
        Ok(g)
    }

    /// Reset to the four corners and four boundary edges of `area`.
    ///
    /// Node offsets are local: the corners are `(0,0)`, `(w,0)`, `(w,h)`, `(0,h)`.
    pub fn init(&mut self, area: Rect) -> Result<(), GraphError> {
        if area.is_empty() {
            return Err(GraphError::EmptyArea);
        }
        self.area = area;
        self.nodes.clear();
        self.edges.clear();
        let corners = self.bounds().corners();
        let ids: Vec<NodeId> = corners.iter().map(|&p| self.add_node(p)).collect();
        for k in 0..4 {
            self.add_edge(ids[k], ids[(k + 1) % 4])?;
        }
        self.normalize();
        Ok(())
    }

    /// The subdivided area in caller coordinates.
    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// The area in local offsets: `(0, 0, width, height)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.area.width, self.area.height)
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Node by id. Panics if `id` is out of range.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Edge by id. Panics if `id` is out of range.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    #[inline]
    pub fn offset(&self, id: NodeId) -> Point {
        self.nodes[id.0].offset
    }

    /// Endpoint offsets of `e` in canonical order.
    #[inline]
    pub fn segment(&self, e: EdgeId) -> (Point, Point) {
        let edge = &self.edges[e.0];
        (self.offset(edge.n1), self.offset(edge.n2))
    }

    /// Fixed coordinate of `e` (x for vertical, y for horizontal).
    #[inline]
    pub fn edge_offset(&self, e: EdgeId) -> i64 {
        let edge = &self.edges[e.0];
        edge.orientation.offset(self.offset(edge.n1))
    }

    /// Closed span `(lo, hi)` of `e` along its varying coordinate.
    #[inline]
    pub fn edge_span(&self, e: EdgeId) -> (i64, i64) {
        let edge = &self.edges[e.0];
        let (a, b) = self.segment(e);
        (edge.orientation.along(a), edge.orientation.along(b))
    }

    pub fn node_at(&self, p: Point) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.offset == p).map(|n| n.id)
    }

    /// True for edges lying on the area boundary.
    pub fn is_boundary(&self, e: EdgeId) -> bool {
        let o = self.edges[e.0].orientation;
        let offset = self.edge_offset(e);
        let (lo, hi) = self.bounds().span(o.perpendicular());
        offset == lo || offset == hi
    }

    /// Anadromous predicate: `horizontal > 0 XOR vertical > 0` over incident edges.
    pub fn is_pass_through(&self, n: NodeId) -> bool {
        let (h, v) = self.nodes[n.0]
            .edges
            .iter()
            .fold((0usize, 0usize), |(h, v), &e| {
                if self.edges[e.0].is_horizontal() {
                    (h + 1, v)
                } else {
                    (h, v + 1)
                }
            });
        (h > 0) != (v > 0)
    }

    /// Perpendicular neighbor walk: for a horizontal edge the edge leaving its
    /// east node southward; for a vertical edge the edge leaving its south
    /// node westward.
    pub fn next_right_edge(&self, e: EdgeId) -> Option<EdgeId> {
        let edge = &self.edges[e.0];
        let far = self.node(edge.n2);
        match edge.orientation {
            Orientation::Horizontal => far.south(),
            Orientation::Vertical => far.west(),
        }
    }

    pub(crate) fn add_node(&mut self, p: Point) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, p));
        id
    }

    /// Add the edge `a`–`b`, oriented canonically. Rejected without mutation
    /// for coincident or diagonal endpoints.
    pub(crate) fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId, GraphError> {
        if a == b {
            return Err(GraphError::invalid_edge(format!("self-loop at {a}")));
        }
        let (pa, pb) = (self.offset(a), self.offset(b));
        let orientation = Orientation::of(pa, pb).ok_or_else(|| {
            GraphError::invalid_edge(format!(
                "{a} ({}, {}) and {b} ({}, {}) are not axis-aligned",
                pa.x, pa.y, pb.x, pb.y
            ))
        })?;
        let (n1, n2) = if orientation.along(pa) < orientation.along(pb) {
            (a, b)
        } else {
            (b, a)
        };
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            n1,
            n2,
            orientation,
        });
        self.nodes[a.0].edges.push(id);
        self.nodes[b.0].edges.push(id);
        Ok(id)
    }

    /// Split `e` at the interior point `at`: `e` keeps the `n1` half, a new
    /// edge takes the `n2` half, and both share the returned new node.
    pub(crate) fn split_edge(&mut self, e: EdgeId, at: Point) -> NodeId {
        let Edge {
            n2, orientation, ..
        } = self.edges[e.0];
        debug_assert!({
            let (lo, hi) = self.edge_span(e);
            let a = orientation.along(at);
            orientation.offset(at) == self.edge_offset(e) && lo < a && a < hi
        });
        let m = self.add_node(at);
        let tail = EdgeId(self.edges.len());
        self.edges[e.0].n2 = m;
        self.edges.push(Edge {
            id: tail,
            n1: m,
            n2,
            orientation,
        });
        for slot in self.nodes[n2.0].edges.iter_mut() {
            if *slot == e {
                *slot = tail;
            }
        }
        self.nodes[m.0].edges.extend([e, tail]);
        m
    }

    pub(crate) fn set_offset(&mut self, n: NodeId, p: Point) {
        self.nodes[n.0].offset = p;
    }

    /// Detach `e` from both endpoints; the slot stays until `compact`.
    pub(crate) fn detach_edge(&mut self, e: EdgeId) {
        let Edge { n1, n2, .. } = self.edges[e.0];
        for n in [n1, n2] {
            self.nodes[n.0].edges.retain(|&x| x != e);
        }
    }

    /// Remove pass-through structure left behind by detached edges, to a fixpoint:
    /// a node with a single edge goes with that dangling edge; a node with two
    /// collinear edges is merged away. Returns the number of nodes pruned.
    pub(crate) fn prune(&mut self) -> usize {
        let mut pruned = 0;
        while let Some(n) = (0..self.nodes.len())
            .map(NodeId)
            .find(|&n| self.is_pass_through(n))
        {
            match self.nodes[n.0].edges.clone().as_slice() {
                &[e] => self.detach_edge(e),
                &[a, b] => self.merge_at(n, a, b),
                _ => {
                    debug_assert!(false, "{n} has more than two collinear edges");
                    break;
                }
            }
            pruned += 1;
        }
        pruned
    }

    /// Merge collinear `a` and `b` meeting at `n` into `a`; `b` is detached.
    fn merge_at(&mut self, n: NodeId, a: EdgeId, b: EdgeId) {
        let (first, second) = if self.edges[a.0].n2 == n { (a, b) } else { (b, a) };
        let far = self.edges[second.0].n2;
        self.edges[first.0].n2 = far;
        for slot in self.nodes[far.0].edges.iter_mut() {
            if *slot == second {
                *slot = first;
            }
        }
        self.nodes[n.0].edges.clear();
    }

    /// Drop detached edges and isolated nodes, then remap every index densely.
    pub(crate) fn compact(&mut self) {
        let live: BTreeSet<EdgeId> = self
            .nodes
            .iter()
            .flat_map(|n| n.edges.iter().copied())
            .collect();
        let mut edge_map: Vec<Option<EdgeId>> = vec![None; self.edges.len()];
        let old_edges = std::mem::take(&mut self.edges);
        for edge in old_edges {
            if live.contains(&edge.id) {
                edge_map[edge.id.0] = Some(EdgeId(self.edges.len()));
                self.edges.push(edge);
            }
        }
        let mut node_map: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let old_nodes = std::mem::take(&mut self.nodes);
        for mut node in old_nodes {
            if node.is_empty() {
                continue;
            }
            node_map[node.id.0] = Some(NodeId(self.nodes.len()));
            node.edges = node.edges.iter().filter_map(|e| edge_map[e.0]).collect();
            self.nodes.push(node);
        }
        for edge in self.edges.iter_mut() {
            // Live edges are attached to live nodes, so both lookups succeed.
            if let (Some(n1), Some(n2)) = (node_map[edge.n1.0], node_map[edge.n2.0]) {
                edge.n1 = n1;
                edge.n2 = n2;
            }
        }
    }

    /// Re-assign dense indices and rebuild each node's direction cache.
    ///
    /// Must run after any structural change and before a cycle search.
    pub fn normalize(&mut self) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.id = NodeId(i);
        }
        for (i, edge) in self.edges.iter_mut().enumerate() {
            edge.id = EdgeId(i);
        }
        for i in 0..self.nodes.len() {
            let here = self.nodes[i].offset;
            let mut dirs = [None; 4];
            for &e in &self.nodes[i].edges {
                let other = self.edges[e.0].other(NodeId(i));
                if let Some(d) = Direction::between(here, self.nodes[other.0].offset) {
                    dirs[d.slot()].get_or_insert(e);
                }
            }
            let node = &mut self.nodes[i];
            node.edges.sort_by_key(|e| {
                dirs.iter()
                    .position(|slot| *slot == Some(*e))
                    .unwrap_or(Direction::ALL.len())
            });
            node.dirs = dirs;
        }
        debug_assert!(
            self.check_invariants().is_ok(),
            "{:?}",
            self.check_invariants()
        );
    }

    /// Full structural check. An `Err` means a programming error in an edit path.
    pub fn check_invariants(&self) -> Result<(), GraphError> {
        let bad = |reason: String| GraphError::invariant(reason);
        for (i, node) in self.nodes.iter().enumerate() {
            if node.id != NodeId(i) {
                return Err(bad(format!("node at position {i} has id {}", node.id.0)));
            }
        }
        let mut seen: HashMap<(i64, i64), NodeId> = HashMap::new();
        for node in &self.nodes {
            if let Some(prev) = seen.insert((node.offset.x, node.offset.y), node.id) {
                return Err(bad(format!("{prev} and {} share an offset", node.id)));
            }
        }
        for corner in self.bounds().corners() {
            if self.node_at(corner).is_none() {
                return Err(bad(format!("corner ({}, {}) missing", corner.x, corner.y)));
            }
        }
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.id != EdgeId(i) {
                return Err(bad(format!("edge at position {i} has id {}", edge.id.0)));
            }
            if edge.n1.0 >= self.nodes.len() || edge.n2.0 >= self.nodes.len() {
                return Err(bad(format!("{} references a missing node", edge.id)));
            }
            let (a, b) = self.segment(edge.id);
            if Orientation::of(a, b) != Some(edge.orientation) {
                return Err(bad(format!("{} is not {:?}", edge.id, edge.orientation)));
            }
            if edge.orientation.along(a) >= edge.orientation.along(b) {
                return Err(bad(format!("{} is not canonical", edge.id)));
            }
            for n in [edge.n1, edge.n2] {
                if !self.nodes[n.0].edges.contains(&edge.id) {
                    return Err(bad(format!("{n} does not list {}", edge.id)));
                }
            }
        }
        for node in &self.nodes {
            let mut slots = [0usize; 4];
            for &e in &node.edges {
                if e.0 >= self.edges.len() || !self.edges[e.0].has_node(node.id) {
                    return Err(bad(format!("{} lists foreign edge {e}", node.id)));
                }
                let other = self.offset(self.edges[e.0].other(node.id));
                if let Some(d) = Direction::between(node.offset, other) {
                    slots[d.slot()] += 1;
                }
            }
            if slots.iter().any(|&c| c > 1) {
                return Err(bad(format!("{} has two edges in one direction", node.id)));
            }
        }
        for i in 0..self.edges.len() {
            for j in (i + 1)..self.edges.len() {
                self.check_pair(EdgeId(i), EdgeId(j))?;
            }
        }
        Ok(())
    }

    /// Two edges may only touch at a shared endpoint.
    fn check_pair(&self, e: EdgeId, f: EdgeId) -> Result<(), GraphError> {
        let (ea, fa) = (&self.edges[e.0], &self.edges[f.0]);
        let (e_lo, e_hi) = self.edge_span(e);
        let (f_lo, f_hi) = self.edge_span(f);
        let (e_off, f_off) = (self.edge_offset(e), self.edge_offset(f));
        if ea.orientation == fa.orientation {
            if e_off == f_off && e_lo.max(f_lo) < e_hi.min(f_hi) {
                return Err(GraphError::invariant(format!("{e} and {f} overlap")));
            }
            return Ok(());
        }
        // Perpendicular: candidate meeting point.
        let touches = f_off >= e_lo && f_off <= e_hi && e_off >= f_lo && e_off <= f_hi;
        if !touches {
            return Ok(());
        }
        let at = ea.orientation.point(e_off, f_off);
        let shared = [ea.n1, ea.n2]
            .into_iter()
            .find(|&n| fa.has_node(n) && self.offset(n) == at);
        if shared.is_none() {
            return Err(GraphError::invariant(format!(
                "{e} and {f} cross at ({}, {}) without a shared node",
                at.x, at.y
            )));
        }
        Ok(())
    }
}
