//! Orthogonal grid subdivision: dividers in, minimal cells out.
//!
//! A rectangular area is split by horizontal and vertical dividers kept in an
//! index-addressed planar graph. After each edit the elementary cycles of the
//! graph are enumerated and filtered by containment; what remains are the
//! cells of the grid.
//!
//! Layout
//! - `geom`: integer points, rectangles, exact polygon predicates.
//! - `graph`: the node/edge arena (read-only outside the crate).
//! - `editor`: AddDivider / MoveDivider / EraseDivider and the gesture layer.
//! - `faces`: cycle enumeration and the minimal-face filter.
//! - `sample`: replayable random layouts for tests, benches and the CLI.

pub mod editor;
pub mod faces;
pub mod geom;
pub mod graph;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for callers.
pub mod prelude {
    pub use crate::editor::{
        command_for, Command, Editor, Gesture, GridCfg, NoChange, Outcome, WorkMode,
    };
    pub use crate::faces::{
        enumerate_cycles, filter_minimal, minimal_faces, CycleCatalog, CycleKey, Faces,
    };
    pub use crate::geom::{Direction, Location, Orientation, Point, Polygon, Rect};
    pub use crate::graph::{Edge, EdgeId, Graph, GraphError, Node, NodeId};
    pub use crate::sample::{
        random_commands, random_editor, ReplayToken, SampleCfg, SampleError,
    };
}
