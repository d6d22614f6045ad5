use super::*;
use crate::geom::{Direction, Orientation, Point, Rect};

fn area() -> Rect {
    Rect::new(0, 0, 400, 300)
}

#[test]
fn init_builds_four_corner_rectangle() {
    let g = Graph::new(area()).unwrap();
    assert_eq!(g.nodes().len(), 4);
    assert_eq!(g.edges().len(), 4);
    for node in g.nodes() {
        assert_eq!(node.edges.len(), 2);
        let h = node
            .edges
            .iter()
            .filter(|&&e| g.edge(e).is_horizontal())
            .count();
        assert_eq!(h, 1, "{} needs one horizontal and one vertical", node.id);
    }
    assert!(g.check_invariants().is_ok());
}

#[test]
fn init_uses_local_offsets_and_resets() {
    let mut g = Graph::new(Rect::new(100, 50, 40, 30)).unwrap();
    assert_eq!(g.offset(NodeId(2)), Point::new(40, 30));
    assert_eq!(g.area(), Rect::new(100, 50, 40, 30));
    let m = g.split_edge(EdgeId(0), Point::new(10, 0));
    assert_eq!(m, NodeId(4));
    g.normalize();
    assert_eq!(g.nodes().len(), 5);
    g.init(area()).unwrap();
    assert_eq!((g.nodes().len(), g.edges().len()), (4, 4));
    assert_eq!(g.bounds(), area());
}

#[test]
fn init_rejects_empty_area() {
    assert_eq!(
        Graph::new(Rect::new(0, 0, 0, 10)).unwrap_err(),
        GraphError::EmptyArea
    );
}

#[test]
fn add_edge_orients_canonically_and_rejects_diagonals() {
    let mut g = Graph::new(area()).unwrap();
    let a = g.add_node(Point::new(50, 200));
    let b = g.add_node(Point::new(50, 100));
    let c = g.add_node(Point::new(60, 110));
    let e = g.add_edge(a, b).unwrap();
    assert_eq!(g.edge(e).n1, b);
    assert_eq!(g.edge(e).n2, a);
    assert_eq!(g.edge(e).orientation, Orientation::Vertical);

    let before = g.edges().len();
    assert!(matches!(
        g.add_edge(a, c),
        Err(GraphError::InvalidEdge { .. })
    ));
    assert!(matches!(
        g.add_edge(a, a),
        Err(GraphError::InvalidEdge { .. })
    ));
    assert_eq!(g.edges().len(), before);
    assert!(g.node(c).is_empty());
}

#[test]
fn normalize_fills_direction_cache() {
    let g = Graph::new(area()).unwrap();
    let top_left = g.node(NodeId(0));
    assert_eq!(top_left.east(), Some(EdgeId(0)));
    assert_eq!(top_left.south(), Some(EdgeId(3)));
    assert_eq!(top_left.west(), None);
    assert_eq!(top_left.north(), None);
    // East, South, West, North order.
    assert_eq!(top_left.edges, vec![EdgeId(0), EdgeId(3)]);
    let bottom_right = g.node(NodeId(2));
    assert_eq!(bottom_right.edge_towards(Direction::North), Some(EdgeId(1)));
    assert_eq!(bottom_right.edge_towards(Direction::West), Some(EdgeId(2)));
    assert_eq!(bottom_right.edges, vec![EdgeId(2), EdgeId(1)]);
}

#[test]
fn split_edge_relinks_both_endpoints() {
    let mut g = Graph::new(area()).unwrap();
    let m = g.split_edge(EdgeId(0), Point::new(150, 0));
    g.normalize();
    assert_eq!(g.edges().len(), 5);
    assert_eq!(g.segment(EdgeId(0)), (Point::new(0, 0), Point::new(150, 0)));
    assert_eq!(g.segment(EdgeId(4)), (Point::new(150, 0), Point::new(400, 0)));
    assert_eq!(g.node(m).west(), Some(EdgeId(0)));
    assert_eq!(g.node(m).east(), Some(EdgeId(4)));
    assert_eq!(g.node(NodeId(1)).west(), Some(EdgeId(4)));
    assert!(g.is_pass_through(m));
    assert!(!g.is_pass_through(NodeId(0)));
    assert!(g.check_invariants().is_ok());
}

#[test]
fn prune_merges_pass_through_and_compact_reindexes() {
    let mut g = Graph::new(area()).unwrap();
    g.split_edge(EdgeId(0), Point::new(150, 0));
    g.split_edge(EdgeId(2), Point::new(150, 300));
    g.normalize();
    assert_eq!((g.nodes().len(), g.edges().len()), (6, 6));
    assert_eq!(g.prune(), 2);
    g.compact();
    g.normalize();
    assert_eq!((g.nodes().len(), g.edges().len()), (4, 4));
    assert_eq!(g.segment(EdgeId(0)), (Point::new(0, 0), Point::new(400, 0)));
    assert!(g.check_invariants().is_ok());
}

#[test]
fn prune_removes_dangling_chains() {
    let mut g = Graph::new(area()).unwrap();
    // Stub from the left side to (100, 150), then into the void to (100, 200).
    let side = g.split_edge(EdgeId(3), Point::new(0, 150));
    let elbow = g.add_node(Point::new(100, 150));
    let tip = g.add_node(Point::new(100, 200));
    g.add_edge(side, elbow).unwrap();
    g.add_edge(elbow, tip).unwrap();
    g.normalize();
    assert_eq!(g.nodes().len(), 7);
    // tip dangles, then elbow, then the side node becomes pass-through.
    assert_eq!(g.prune(), 3);
    g.compact();
    g.normalize();
    assert_eq!((g.nodes().len(), g.edges().len()), (4, 4));
}

#[test]
fn boundary_detection() {
    let mut g = Graph::new(area()).unwrap();
    let top = g.split_edge(EdgeId(0), Point::new(150, 0));
    let bottom = g.split_edge(EdgeId(2), Point::new(150, 300));
    let divider = g.add_edge(top, bottom).unwrap();
    g.normalize();
    assert!((0..4).all(|i| g.is_boundary(EdgeId(i))));
    assert!(!g.is_boundary(divider));
    assert_eq!(g.edge_offset(divider), 150);
    assert_eq!(g.edge_span(divider), (0, 300));
}

#[test]
fn next_right_edge_walks_perpendicular_neighbors() {
    let g = Graph::new(area()).unwrap();
    // Top edge → right side (south from the top-right corner).
    assert_eq!(g.next_right_edge(EdgeId(0)), Some(EdgeId(1)));
    // Right side → bottom edge (west from the bottom-right corner).
    assert_eq!(g.next_right_edge(EdgeId(1)), Some(EdgeId(2)));
    // Bottom edge ends at the bottom-right corner, which has no south edge.
    assert_eq!(g.next_right_edge(EdgeId(2)), None);
}

#[test]
fn invariant_check_reports_crossings() {
    let mut g = Graph::new(area()).unwrap();
    let top = g.split_edge(EdgeId(0), Point::new(150, 0));
    let bottom = g.split_edge(EdgeId(2), Point::new(150, 300));
    let left = g.split_edge(EdgeId(3), Point::new(0, 150));
    let right = g.split_edge(EdgeId(1), Point::new(400, 150));
    g.add_edge(top, bottom).unwrap();
    g.add_edge(left, right).unwrap();
    // The two dividers cross at (150, 150) without a node there.
    assert!(matches!(
        g.check_invariants(),
        Err(GraphError::Invariant { .. })
    ));
}

#[test]
fn display_labels() {
    assert_eq!(NodeId(0).to_string(), "p1");
    assert_eq!(EdgeId(3).to_string(), "e3");
}
