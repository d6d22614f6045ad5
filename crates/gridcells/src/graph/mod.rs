//! Graph Store: nodes, canonical axis-aligned edges, dense index normalization.
//!
//! Nodes and edges live in one owning arena (`Graph`) and refer to each other
//! by `NodeId`/`EdgeId`, so the node↔edge cross references never form an
//! ownership cycle and a whole graph is a plain `Clone`.
//!
//! Code cross-refs: `editor::Editor` (all mutation), `faces::enumerate_cycles`

mod store;
mod types;

pub use store::Graph;
pub use types::{Edge, EdgeId, GraphError, Node, NodeId};

#[cfg(test)]
mod tests;
