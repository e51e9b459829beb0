use super::*;
use crate::graph::Vertex;

const EPS: f64 = 1e-9;

#[test]
fn test_zero_points() {
    assert!(circular_layout(0).is_empty());
}

#[test]
fn test_single_point_at_angle_zero() {
    let pts = circular_layout(1);
    assert_eq!(pts, vec![Vector::UNIT_X]);
}

#[test]
fn test_all_points_on_unit_circle() {
    for n in 1..=32 {
        let pts = circular_layout(n);
        assert_eq!(pts.len(), n);
        for p in &pts {
            assert!((p.length() - 1.0).abs() < EPS, "n={n}: {p:?}");
        }
    }
}

#[test]
fn test_uniform_angular_step() {
    for n in 2..=17 {
        let pts = circular_layout(n);
        let step = TAU / n as f64;
        for pair in pts.windows(2) {
            let delta = (pair[1].angle() - pair[0].angle()).rem_euclid(TAU);
            assert!((delta - step).abs() < EPS, "n={n}: {delta} vs {step}");
        }
        // Wraps back around to the start.
        let wrap = (pts[0].angle() - pts[n - 1].angle()).rem_euclid(TAU);
        assert!((wrap - step).abs() < EPS);
    }
}

#[test]
fn test_four_points_are_compass_directions() {
    let pts = circular_layout(4);
    let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
    for (p, (x, y)) in pts.iter().zip(expected) {
        assert!((p.x - x).abs() < EPS && (p.y - y).abs() < EPS, "{p:?}");
    }
}

#[test]
fn test_layout_follows_vertex_count() {
    let g = Graph {
        vertices: vec![Vertex::bare(10), Vertex::bare(20), Vertex::bare(30)],
        edges: vec![],
    };
    assert_eq!(layout(&g), circular_layout(3));
    assert!(layout(&Graph::new()).is_empty());
}
