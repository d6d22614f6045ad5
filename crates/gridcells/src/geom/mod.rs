//! Orthogonal integer geometry.
//!
//! Purpose
//! - Points, rectangles and axis tags for the subdivided area.
//! - Exact polygon predicates for the face filter (no rasterization, no
//!   floating point).
//!
//! Conventions
//! - Coordinates are `i64` offsets relative to the area origin; y grows
//!   downward, so "north" means smaller y.
//! - Code cross-refs: `graph::Graph`, `faces::filter_minimal`

mod polygon;
mod types;

pub use polygon::{Location, Polygon};
pub use types::{Direction, Orientation, Point, Rect};

#[cfg(test)]
mod tests;
