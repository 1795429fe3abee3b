use super::*;
use crate::geom2::ring::{area, boundary_distance, contains, is_ccw};
use crate::geom2::{build_edges, centroid, poly_sort, Edge};
use nalgebra::vector;
use proptest::prelude::*;

fn square(side: f64) -> Vec<Point2> {
    vec![
        vector![0.0, 0.0],
        vector![side, 0.0],
        vector![side, side],
        vector![0.0, side],
    ]
}

/// Two 10×10 lobes joined by a 10-long corridor of width 2, counter-clockwise.
fn dumbbell() -> Vec<Point2> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 4.0],
        vector![20.0, 4.0],
        vector![20.0, 0.0],
        vector![30.0, 0.0],
        vector![30.0, 10.0],
        vector![20.0, 10.0],
        vector![20.0, 6.0],
        vector![10.0, 6.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ]
}

fn l_shape() -> Vec<Point2> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 4.0],
        vector![4.0, 4.0],
        vector![4.0, 10.0],
        vector![0.0, 10.0],
    ]
}

fn regular_polygon(n: usize, center: Point2, radius: f64, phase: f64) -> Vec<Point2> {
    (0..n)
        .map(|k| {
            let th = phase + std::f64::consts::TAU * k as f64 / n as f64;
            center + vector![th.cos(), th.sin()] * radius
        })
        .collect()
}

#[test]
fn scale_identity_and_collapse() {
    let pts = poly_sort(&[
        vector![3.0, 1.0],
        vector![-2.0, 4.0],
        vector![0.5, -3.0],
        vector![6.0, 6.0],
    ]);
    let same = inset_by_scale(&pts, 1.0);
    for (a, b) in same.iter().zip(&pts) {
        assert!((a - b).norm() < 1e-12);
    }
    let c = centroid(&pts).unwrap();
    for p in inset_by_scale(&pts, 0.0) {
        assert!((p - c).norm() < 1e-12);
    }
    assert!(inset_by_scale(&[], 0.5).is_empty());
}

#[test]
fn scale_keeps_order_and_shrinks_radially() {
    let pts = square(10.0);
    let half = inset_by_scale(&pts, 0.5);
    assert_eq!(
        half,
        vec![
            vector![2.5, 2.5],
            vector![7.5, 2.5],
            vector![7.5, 7.5],
            vector![2.5, 7.5],
        ]
    );
    assert_eq!(poly_sort(&half), half);
    assert_eq!(build_edges(&half).len(), 4);
    assert!((area(&half) - 25.0).abs() < 1e-9);
}

#[test]
fn buffer_square_gives_smaller_square() {
    let rings = inset_by_buffer(&build_edges(&square(10.0)), 2.0);
    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert_eq!(ring.len(), 4);
    for corner in [
        vector![2.0, 2.0],
        vector![8.0, 2.0],
        vector![8.0, 8.0],
        vector![2.0, 8.0],
    ] {
        assert!(ring.iter().any(|p| (p - corner).norm() < 0.5), "missing {corner:?}");
    }
    assert!((centroid(ring).unwrap() - vector![5.0, 5.0]).norm() < 1e-9);
    assert!((area(ring) - 36.0).abs() < 1e-6);
    assert!(is_ccw(ring));
}

#[test]
fn buffer_erodes_square_completely() {
    let edges = build_edges(&square(10.0));
    assert!(inset_by_buffer(&edges, 10.0).is_empty());
    assert!(inset_by_buffer(&edges, 5.0).is_empty());
    assert_eq!(
        try_inset_by_buffer(&edges, 10.0, &GeomCfg::default()),
        Err(InsetError::DegenerateBuffer { distance: 10.0 })
    );
}

#[test]
fn buffer_accepts_unsorted_and_clockwise_edges() {
    let mut edges: Vec<Edge> = build_edges(&square(10.0)).iter().map(|e| e.reversed()).collect();
    edges.swap(0, 3);
    edges.swap(1, 2);
    let rings = inset_by_buffer(&edges, 2.0);
    assert_eq!(rings.len(), 1);
    assert!((area(&rings[0]) - 36.0).abs() < 1e-6);
    assert!(is_ccw(&rings[0]));
}

#[test]
fn buffer_splits_dumbbell() {
    let rings = inset_by_buffer(&build_edges(&dumbbell()), 2.0);
    assert_eq!(rings.len(), 2);
    let (left, right): (Vec<_>, Vec<_>) = rings.iter().partition(|r| r[0].x < 15.0);
    assert_eq!(left.len(), 1);
    assert_eq!(right.len(), 1);
    assert!(left[0].iter().all(|p| p.x > 1.99 && p.x < 10.0));
    assert!(right[0].iter().all(|p| p.x > 20.0 && p.x < 28.01));
    for ring in &rings {
        let a = area(ring);
        assert!(a > 36.0 && a < 38.0, "lobe area {a}");
        assert!(is_ccw(ring));
    }
}

#[test]
fn buffer_keeps_dumbbell_connected_for_small_distance() {
    let rings = inset_by_buffer(&build_edges(&dumbbell()), 0.5);
    assert_eq!(rings.len(), 1);
}

#[test]
fn buffer_rounds_reflex_corners_at_the_offset_distance() {
    let shape = l_shape();
    let d = 1.0;
    let cfg = GeomCfg::default();
    let rings = inset_by_buffer_with(&build_edges(&shape), d, &cfg);
    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    // Join vertices sit on the circumscribed polyline around (4,4).
    assert!(ring.len() > 6);
    for &p in ring {
        assert!(contains(&shape, p));
        let dist = boundary_distance(&shape, p);
        assert!(dist >= d - 1e-9, "vertex {p:?} too close: {dist}");
        assert!(dist <= d * (1.0 + cfg.arc_tolerance) + 1e-9, "vertex {p:?} too far: {dist}");
    }
    // A coarser tolerance uses fewer join vertices.
    let coarse = GeomCfg {
        arc_tolerance: 0.1,
        ..cfg
    };
    let rough = inset_by_buffer_with(&build_edges(&shape), d, &coarse);
    assert_eq!(rough.len(), 1);
    assert!(rough[0].len() < ring.len());
}

#[test]
fn buffer_twice_matches_single_buffer_on_convex_input() {
    let hex = regular_polygon(6, vector![3.0, -2.0], 10.0, 0.3);
    let once = inset_by_buffer(&build_edges(&hex), 2.5);
    let first = inset_by_buffer(&build_edges(&hex), 1.0);
    assert_eq!(first.len(), 1);
    let twice = inset_by_buffer(&build_edges(&first[0]), 1.5);
    assert_eq!(once.len(), 1);
    assert_eq!(twice.len(), 1);
    assert_eq!(once[0].len(), 6);
    assert_eq!(twice[0].len(), 6);
    assert!((area(&once[0]) - area(&twice[0])).abs() < 1e-6);
    for p in &once[0] {
        assert!(twice[0].iter().any(|q| (p - q).norm() < 1e-6));
    }
}

#[test]
fn buffer_rejects_invalid_input() {
    let cfg = GeomCfg::default();
    let bowtie = build_edges(&[
        vector![0.0, 0.0],
        vector![10.0, 10.0],
        vector![10.0, 0.0],
        vector![0.0, 10.0],
    ]);
    assert!(matches!(
        try_inset_by_buffer(&bowtie, 1.0, &cfg),
        Err(InsetError::InvalidPolygon { .. })
    ));
    assert!(inset_by_buffer(&bowtie, 1.0).is_empty());

    let open = &build_edges(&square(10.0))[..3];
    assert!(matches!(
        try_inset_by_buffer(open, 1.0, &cfg),
        Err(InsetError::InvalidPolygon { .. })
    ));

    let two = &build_edges(&square(10.0))[..2];
    assert_eq!(
        try_inset_by_buffer(two, 1.0, &cfg),
        Err(InsetError::InsufficientPoints { got: 2 })
    );

    let edges = build_edges(&square(10.0));
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            try_inset_by_buffer(&edges, bad, &cfg),
            Err(InsetError::InvalidParameter { .. })
        ));
    }

    let mut poisoned = square(10.0);
    poisoned[2] = vector![f64::NAN, 10.0];
    assert_eq!(
        try_inset_by_buffer(&build_edges(&poisoned), 1.0, &cfg),
        Err(InsetError::invalid_polygon("non-finite coordinate"))
    );
    poisoned[2] = vector![f64::INFINITY, 10.0];
    assert!(inset_by_buffer(&build_edges(&poisoned), 1.0).is_empty());

    let mut nested = build_edges(&square(10.0));
    nested.extend(build_edges(&[
        vector![4.0, 4.0],
        vector![6.0, 4.0],
        vector![6.0, 6.0],
        vector![4.0, 6.0],
    ]));
    assert!(matches!(
        try_inset_by_buffer(&nested, 1.0, &cfg),
        Err(InsetError::InvalidPolygon { .. })
    ));
}

#[test]
fn buffer_handles_disjoint_rings_independently() {
    let mut edges = build_edges(&square(10.0));
    edges.extend(build_edges(
        &square(10.0).iter().map(|p| p + vector![20.0, 0.0]).collect::<Vec<_>>(),
    ));
    let rings = inset_by_buffer(&edges, 2.0);
    assert_eq!(rings.len(), 2);
    for ring in &rings {
        assert!((area(ring) - 36.0).abs() < 1e-6);
    }
}

#[test]
fn strategy_validation() {
    assert!(InsetStrategy::Scale(0.0).validate().is_ok());
    assert!(InsetStrategy::Scale(1.0).validate().is_ok());
    assert!(InsetStrategy::Scale(1.5).validate().is_err());
    assert!(InsetStrategy::Scale(f64::NAN).validate().is_err());
    assert!(InsetStrategy::Buffer(0.1).validate().is_ok());
    assert!(InsetStrategy::Buffer(0.0).validate().is_err());
    assert!(InsetStrategy::Buffer(-3.0).validate().is_err());
}

#[test]
fn strategy_apply_dispatches() {
    let cfg = GeomCfg::default();
    let sq = square(10.0);
    let scaled = InsetStrategy::Scale(0.5).apply(&sq, &cfg);
    assert_eq!(scaled.len(), 1);
    assert_eq!(scaled[0], inset_by_scale(&sq, 0.5));
    let buffered = InsetStrategy::Buffer(2.0).apply(&sq, &cfg);
    assert_eq!(buffered, inset_by_buffer(&build_edges(&sq), 2.0));
    assert!(InsetStrategy::Scale(0.5).apply(&sq[..2], &cfg).is_empty());
    assert!(InsetStrategy::Buffer(2.0).apply(&sq[..2], &cfg).is_empty());
    assert!(InsetStrategy::Scale(2.0).apply(&sq, &cfg).is_empty());
}

#[test]
fn error_messages_name_the_problem() {
    let msg = InsetError::DegenerateBuffer { distance: 10.0 }.to_string();
    assert!(msg.contains("10"));
    let msg = InsetError::InsufficientPoints { got: 2 }.to_string();
    assert!(msg.contains("got 2"));
}

proptest! {
    #[test]
    fn regular_polygon_erodes_to_regular_polygon(
        n in 3usize..12,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
        radius in 1.0f64..100.0,
        phase in 0.0f64..std::f64::consts::TAU,
        frac in 0.05f64..0.9,
    ) {
        let poly = regular_polygon(n, vector![cx, cy], radius, phase);
        let r_in = radius * (std::f64::consts::PI / n as f64).cos();
        let d = frac * r_in;
        let rings = inset_by_buffer(&build_edges(&poly), d);
        prop_assert_eq!(rings.len(), 1);
        prop_assert_eq!(rings[0].len(), n);
        let expected = n as f64 * (r_in - d).powi(2) * (std::f64::consts::PI / n as f64).tan();
        prop_assert!((area(&rings[0]) - expected).abs() <= 1e-6 * expected.max(1.0));
        for &p in &rings[0] {
            prop_assert!((boundary_distance(&poly, p) - d).abs() <= 1e-6 * radius);
        }
    }
}
