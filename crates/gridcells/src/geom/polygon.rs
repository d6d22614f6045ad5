//! Exact point/polygon predicates on integer rings.
//!
//! All products are evaluated in `i128`, so the predicates stay exact for any
//! `i64` input that fits the area.

use super::types::{Point, Rect};

/// Where a point lies relative to a closed polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

/// Simple polygon as a vertex ring (the closing vertex is not repeated).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Build from a ring; a trailing copy of the first vertex is dropped.
    pub fn from_ring(mut vertices: Vec<Point>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive vertex pairs, including the closing one.
    pub fn sides(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Bounding rectangle; `None` for an empty ring.
    pub fn bbox(&self) -> Option<Rect> {
        let first = *self.vertices.first()?;
        let (mut lo, mut hi) = (first, first);
        for p in &self.vertices[1..] {
            lo = Point::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = Point::new(hi.x.max(p.x), hi.y.max(p.y));
        }
        Some(Rect::from_corners(lo, hi))
    }

    /// Twice the signed area (shoelace). Positive for clockwise rings on screen.
    pub fn area2(&self) -> i128 {
        self.sides()
            .map(|(a, b)| a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128)
            .sum()
    }

    #[inline]
    pub fn locate(&self, p: Point) -> Location {
        self.locate_scaled(p, 1)
    }

    /// Locate `p` against this polygon with every vertex multiplied by `k`.
    fn locate_scaled(&self, p: Point, k: i64) -> Location {
        if self.vertices.len() < 3 {
            return Location::Outside;
        }
        let (px, py) = (p.x as i128, p.y as i128);
        let k = k as i128;
        let mut crossings = 0usize;
        for (a, b) in self.sides() {
            let (ax, ay) = (a.x as i128 * k, a.y as i128 * k);
            let (bx, by) = (b.x as i128 * k, b.y as i128 * k);
            if on_segment((ax, ay), (bx, by), (px, py)) {
                return Location::Boundary;
            }
            if (ay > py) != (by > py) {
                let lhs = (px - ax) * (by - ay);
                let rhs = (bx - ax) * (py - ay);
                let hit = if by > ay { lhs < rhs } else { lhs > rhs };
                if hit {
                    crossings += 1;
                }
            }
        }
        if crossings % 2 == 1 {
            Location::Inside
        } else {
            Location::Outside
        }
    }

    /// True iff `other`'s closed region lies inside this polygon's closed region.
    ///
    /// Pre: both rings are drawn from the same crossing-free edge set, so each
    /// side of `other` is either on this boundary, wholly inside, or wholly
    /// outside. Testing side midpoints is then exact; midpoints are taken on
    /// doubled coordinates.
    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        if self.vertices.len() < 3 || other.vertices.len() < 3 {
            return false;
        }
        match (self.bbox(), other.bbox()) {
            (Some(outer), Some(inner)) => {
                if inner.x < outer.x
                    || inner.y < outer.y
                    || inner.right() > outer.right()
                    || inner.bottom() > outer.bottom()
                {
                    return false;
                }
            }
            _ => return false,
        }
        other.sides().all(|(a, b)| {
            let mid2 = Point::new(a.x + b.x, a.y + b.y);
            self.locate_scaled(mid2, 2) != Location::Outside
        })
    }
}

fn on_segment(a: (i128, i128), b: (i128, i128), p: (i128, i128)) -> bool {
    let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    cross == 0
        && p.0 >= a.0.min(b.0)
        && p.0 <= a.0.max(b.0)
        && p.1 >= a.1.min(b.1)
        && p.1 <= a.1.max(b.1)
}
