use super::*;

fn square(x: i64, y: i64, s: i64) -> Polygon {
    Polygon::from_ring(Rect::new(x, y, s, s).corners().to_vec())
}

#[test]
fn orientation_of_pairs() {
    let a = Point::new(0, 0);
    assert_eq!(
        Orientation::of(a, Point::new(0, 5)),
        Some(Orientation::Vertical)
    );
    assert_eq!(
        Orientation::of(a, Point::new(-3, 0)),
        Some(Orientation::Horizontal)
    );
    assert_eq!(Orientation::of(a, a), None);
    assert_eq!(Orientation::of(a, Point::new(1, 1)), None);
}

#[test]
fn orientation_offset_along_roundtrip() {
    let p = Point::new(7, -2);
    for o in [Orientation::Horizontal, Orientation::Vertical] {
        assert_eq!(o.point(o.offset(p), o.along(p)), p);
        assert_ne!(o, o.perpendicular());
    }
}

#[test]
fn direction_between_points() {
    let c = Point::new(10, 10);
    assert_eq!(Direction::between(c, Point::new(20, 10)), Some(Direction::East));
    assert_eq!(Direction::between(c, Point::new(0, 10)), Some(Direction::West));
    assert_eq!(Direction::between(c, Point::new(10, 30)), Some(Direction::South));
    assert_eq!(Direction::between(c, Point::new(10, 0)), Some(Direction::North));
    assert_eq!(Direction::between(c, c), None);
    for d in Direction::ALL {
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(d.orientation(), d.opposite().orientation());
    }
}

#[test]
fn rect_from_corners_normalizes() {
    let r = Rect::from_corners(Point::new(5, 9), Point::new(1, 2));
    assert_eq!(r, Rect::new(1, 2, 4, 7));
    assert!(r.contains(Point::new(1, 9)));
    assert!(!r.contains(Point::new(0, 5)));
    assert_eq!(r.clamp(Point::new(-10, 100)), Point::new(1, 9));
    assert_eq!(
        Rect::new(100, 50, 10, 10).to_local(Point::new(103, 52)),
        Point::new(3, 2)
    );
}

#[test]
fn locate_square() {
    let sq = square(0, 0, 10);
    assert_eq!(sq.locate(Point::new(5, 5)), Location::Inside);
    assert_eq!(sq.locate(Point::new(0, 5)), Location::Boundary);
    assert_eq!(sq.locate(Point::new(10, 10)), Location::Boundary);
    assert_eq!(sq.locate(Point::new(11, 5)), Location::Outside);
    assert_eq!(sq.locate(Point::new(5, -1)), Location::Outside);
}

#[test]
fn locate_l_shape_notch_is_outside() {
    // L-shape: 20x20 square minus its top-right 10x10 quadrant.
    let l = Polygon::from_ring(vec![
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(10, 10),
        Point::new(20, 10),
        Point::new(20, 20),
        Point::new(0, 20),
        Point::new(0, 0),
    ]);
    assert_eq!(l.len(), 6);
    assert_eq!(l.locate(Point::new(15, 5)), Location::Outside);
    assert_eq!(l.locate(Point::new(5, 5)), Location::Inside);
    assert_eq!(l.locate(Point::new(15, 15)), Location::Inside);
    assert_eq!(l.locate(Point::new(15, 10)), Location::Boundary);
    assert_eq!(l.area2(), 2 * 300);
}

#[test]
fn containment_of_nested_and_adjacent_cells() {
    let big = square(0, 0, 20);
    let quarter = square(0, 0, 10);
    let neighbor = square(20, 0, 10);
    assert!(big.contains_polygon(&quarter));
    assert!(!quarter.contains_polygon(&big));
    // Shares a side but lies outside.
    assert!(!big.contains_polygon(&neighbor));
    assert!(big.contains_polygon(&big));
}

#[test]
fn containment_rejects_l_notch_cell() {
    let l = Polygon::from_ring(vec![
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(10, 10),
        Point::new(20, 10),
        Point::new(20, 20),
        Point::new(0, 20),
    ]);
    // The notch cell shares two sides with the L and fits its bbox.
    let notch = square(10, 0, 10);
    assert!(!l.contains_polygon(&notch));
    assert!(l.contains_polygon(&square(0, 10, 10)));
}

#[test]
fn containment_is_exact_at_large_coordinates() {
    let base = 1_i64 << 40;
    let outer = square(base, base, 4);
    let inner = square(base + 1, base + 1, 2);
    let shifted = square(base + 3, base + 1, 2);
    assert!(outer.contains_polygon(&inner));
    assert!(!outer.contains_polygon(&shifted));
}
