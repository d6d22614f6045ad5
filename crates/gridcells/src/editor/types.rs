//! Editor configuration, commands and outcomes.

use std::fmt;

use crate::geom::{Point, Rect};
use crate::graph::EdgeId;

/// Editor tolerances in local pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCfg {
    /// Minimum distance between parallel dividers sharing a span.
    pub min_clearance: i64,
    /// Maximum distance from a press point to an edge for it to be picked.
    pub pick_tolerance: i64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            min_clearance: 8,
            pick_tolerance: 6,
        }
    }
}

impl GridCfg {
    /// Effective clearance; never below one pixel.
    #[inline]
    pub fn clearance(&self) -> i64 {
        self.min_clearance.max(1)
    }
}

/// Which gesture the editor currently accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WorkMode {
    #[default]
    Draw,
    Move,
    Erase,
}

/// A single edit. Points and regions are local offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddDivider { a: Point, b: Point },
    MoveDivider { edge: EdgeId, offset: i64 },
    EraseDivider { region: Rect },
}

/// Result of an edit. Rejections are not errors: the graph is untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged(NoChange),
}

impl Outcome {
    #[inline]
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Why an edit left the graph as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoChange {
    /// Zero-length segment, zero move, or no gesture in progress.
    Degenerate,
    /// Segment endpoints share neither x nor y.
    NotAxisAligned,
    /// Fewer than two perpendicular edges bracket the candidate.
    NoBracket,
    /// A parallel edge sharing the span lies within the clearance.
    TooClose,
    /// Boundary edge or unknown edge.
    NotMovable,
    /// The move would bring the divider within the clearance of another.
    Blocked,
    /// No interior edge intersects the region.
    NothingToErase,
}

impl fmt::Display for NoChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate => write!(f, "degenerate input"),
            Self::NotAxisAligned => write!(f, "segment is not axis-aligned"),
            Self::NoBracket => write!(f, "no bracketing edges around the candidate"),
            Self::TooClose => write!(f, "too close to an existing divider"),
            Self::NotMovable => write!(f, "edge is not a movable divider"),
            Self::Blocked => write!(f, "move blocked by a neighboring divider"),
            Self::NothingToErase => write!(f, "no divider intersects the region"),
        }
    }
}

impl std::error::Error for NoChange {}
