//! Basic orthogonal types: `Point`, `Rect`, `Orientation`, `Direction`.

use nalgebra::Point2;

/// Integer offset inside the subdivided area.
pub type Point = Point2<i64>;

/// Axis-aligned rectangle `[x, x + width] × [y, y + height]` (closed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[inline]
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized rectangle spanned by two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Map a global point into offsets relative to this rectangle's origin.
    #[inline]
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.x, p.y - self.y)
    }

    /// Nearest point of the rectangle.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.x, self.right()),
            p.y.clamp(self.y, self.bottom()),
        )
    }

    /// Closed span along `o`'s varying axis.
    #[inline]
    pub fn span(&self, o: Orientation) -> (i64, i64) {
        match o {
            Orientation::Horizontal => (self.x, self.right()),
            Orientation::Vertical => (self.y, self.bottom()),
        }
    }
}

/// Orientation of an axis-aligned segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Orientation of the segment `a`–`b`; `None` if coincident or diagonal.
    pub fn of(a: Point, b: Point) -> Option<Self> {
        match (a.x == b.x, a.y == b.y) {
            (true, false) => Some(Self::Vertical),
            (false, true) => Some(Self::Horizontal),
            _ => None,
        }
    }

    #[inline]
    pub fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Coordinate that stays fixed along a segment of this orientation.
    #[inline]
    pub fn offset(self, p: Point) -> i64 {
        match self {
            Self::Horizontal => p.y,
            Self::Vertical => p.x,
        }
    }

    /// Coordinate that varies along a segment of this orientation.
    #[inline]
    pub fn along(self, p: Point) -> i64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Inverse of (`offset`, `along`).
    #[inline]
    pub fn point(self, offset: i64, along: i64) -> Point {
        match self {
            Self::Horizontal => Point::new(along, offset),
            Self::Vertical => Point::new(offset, along),
        }
    }

    /// Directions pointing backward and forward along this orientation.
    #[inline]
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Self::Horizontal => (Direction::West, Direction::East),
            Self::Vertical => (Direction::North, Direction::South),
        }
    }
}

/// Cardinal direction of an incident edge as seen from its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// Incidence cache order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Direction from `from` towards `to`; `None` unless axis-aligned and distinct.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        match Orientation::of(from, to)? {
            Orientation::Horizontal if to.x > from.x => Some(Self::East),
            Orientation::Horizontal => Some(Self::West),
            Orientation::Vertical if to.y > from.y => Some(Self::South),
            Orientation::Vertical => Some(Self::North),
        }
    }

    #[inline]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::East | Self::West => Orientation::Horizontal,
            Self::North | Self::South => Orientation::Vertical,
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::North => Self::South,
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            Self::East => 0,
            Self::South => 1,
            Self::West => 2,
            Self::North => 3,
        }
    }
}
