//! Depth-first elementary-cycle search.

use tracing::trace;

use crate::graph::{EdgeId, Graph, NodeId};

use super::types::{CycleCatalog, CycleKey};

/// Enumerate every elementary cycle of `graph` (which must be normalized).
///
/// For each start node in index order a DFS walks incident edges, never
/// reusing the edge it just arrived by, and records the path whenever it
/// returns to the start. Only the first sequence found per `CycleKey` is kept.
pub fn enumerate_cycles(graph: &Graph) -> CycleCatalog {
    CycleRunner::new(graph).run()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    /// Already used as a start: every cycle through it is in the catalog.
    Closed,
}

/// DFS runner carrying the per-search marks and the current path.
struct CycleRunner<'a> {
    g: &'a Graph,
    marks: Vec<Mark>,
    path: Vec<NodeId>,
    start: NodeId,
    catalog: CycleCatalog,
}

impl<'a> CycleRunner<'a> {
    fn new(g: &'a Graph) -> Self {
        Self {
            g,
            marks: vec![Mark::Unvisited; g.nodes().len()],
            path: Vec::new(),
            start: NodeId(0),
            catalog: CycleCatalog::new(),
        }
    }

    fn run(mut self) -> CycleCatalog {
        let n = self.g.nodes().len();
        for s in 0..n {
            for m in self.marks.iter_mut() {
                if *m == Mark::OnPath {
                    *m = Mark::Unvisited;
                }
            }
            self.start = NodeId(s);
            self.path.clear();
            self.path.push(self.start);
            self.recur(self.start, None);
            self.marks[s] = Mark::Closed;
        }
        trace!(nodes = n, cycles = self.catalog.len(), "cycle enumeration");
        self.catalog
    }

    fn recur(&mut self, u: NodeId, via: Option<EdgeId>) {
        if u == self.start && via.is_some() {
            // Closing step; at least two nodes besides the start.
            if self.path.len() >= 4 {
                let key = CycleKey::from_cycle(&self.path);
                if !self.catalog.contains_key(&key) {
                    self.catalog.insert(key, self.path.clone());
                }
            }
            return;
        }
        if u != self.start {
            self.marks[u.0] = Mark::OnPath;
        }
        let g = self.g;
        for &e in &g.node(u).edges {
            if Some(e) == via {
                continue;
            }
            let w = g.edge(e).other(u);
            if self.marks[w.0] != Mark::Unvisited {
                continue;
            }
            self.path.push(w);
            self.recur(w, Some(e));
            self.path.pop();
        }
        if u != self.start {
            self.marks[u.0] = Mark::Unvisited;
        }
    }
}
