//! Node/edge records of the graph arena and the store's error type.

use std::fmt;

use crate::geom::{Direction, Orientation, Point};

/// Dense node index (position in `Graph::nodes()` after `normalize`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// Dense edge index (position in `Graph::edges()` after `normalize`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0 + 1)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Grid junction: offset plus incident edges.
///
/// `edges` is in East, South, West, North order after `Graph::normalize`;
/// `dirs` caches the edge leaving in each direction (at most one each).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub offset: Point,
    pub edges: Vec<EdgeId>,
    pub(crate) dirs: [Option<EdgeId>; 4],
}

impl Node {
    pub(crate) fn new(id: NodeId, offset: Point) -> Self {
        Self {
            id,
            offset,
            edges: Vec::new(),
            dirs: [None; 4],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Incident edge leaving towards `d`, from the incidence cache.
    #[inline]
    pub fn edge_towards(&self, d: Direction) -> Option<EdgeId> {
        self.dirs[d.slot()]
    }

    #[inline]
    pub fn east(&self) -> Option<EdgeId> {
        self.edge_towards(Direction::East)
    }

    #[inline]
    pub fn south(&self) -> Option<EdgeId> {
        self.edge_towards(Direction::South)
    }

    #[inline]
    pub fn west(&self) -> Option<EdgeId> {
        self.edge_towards(Direction::West)
    }

    #[inline]
    pub fn north(&self) -> Option<EdgeId> {
        self.edge_towards(Direction::North)
    }
}

/// Axis-aligned edge stored canonically: `n1` is the endpoint with the
/// smaller varying coordinate (smaller y if vertical, smaller x if horizontal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub n1: NodeId,
    pub n2: NodeId,
    pub orientation: Orientation,
}

impl Edge {
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    #[inline]
    pub fn has_node(&self, n: NodeId) -> bool {
        self.n1 == n || self.n2 == n
    }

    /// Endpoint opposite `n` (`n` must be an endpoint).
    #[inline]
    pub fn other(&self, n: NodeId) -> NodeId {
        if self.n1 == n {
            self.n2
        } else {
            self.n1
        }
    }
}

/// Errors raised at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge between coincident or non-axis-aligned points (no mutation happened).
    InvalidEdge { reason: String },
    /// The area has no interior, so the boundary rectangle cannot be built.
    EmptyArea,
    /// Structural invariant broken; only reachable through a programming error.
    Invariant { reason: String },
}

impl GraphError {
    pub(crate) fn invalid_edge(reason: impl Into<String>) -> Self {
        Self::InvalidEdge {
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::Invariant {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEdge { reason } => write!(f, "invalid edge: {reason}"),
            Self::EmptyArea => write!(f, "area must have positive width and height"),
            Self::Invariant { reason } => write!(f, "graph invariant violated: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}
