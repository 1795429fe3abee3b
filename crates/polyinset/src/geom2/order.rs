//! Angular ordering of an unordered point set around its centroid.
//!
//! Points are sorted by polar angle `atan2(dy, dx)` measured from the centroid,
//! ascending from −π, so the result walks counter-clockwise. Points sharing an
//! exact angle (collinear with the centroid) are ordered by squared distance.
//! The polar annotation only lives as an ephemeral sort key.

use std::cmp::Ordering;

use super::types::Point2;

/// Arithmetic mean of `points`; `None` for an empty slice.
///
/// Never cached: callers recompute it on every snapshot.
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point2::zeros(), |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}

/// Polar key of `p` around `center`: `(angle, squared distance)`, angle in (−π, π].
#[inline]
pub fn polar_key(p: Point2, center: Point2) -> (f64, f64) {
    let d = p - center;
    (d.y.atan2(d.x), d.norm_squared())
}

/// Sort points counter-clockwise around their centroid.
///
/// Output is a permutation of the input. The sort is stable, so points with
/// identical `(angle, sq_dist)` keys keep their input order. Keys compare by
/// `total_cmp`, so non-finite coordinates cannot break the ordering. An empty
/// input yields an empty output.
pub fn poly_sort(points: &[Point2]) -> Vec<Point2> {
    let Some(center) = centroid(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<((f64, f64), Point2)> = points
        .iter()
        .map(|&p| (polar_key(p, center), p))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| cmp_key(*a, *b));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Angles of `points` seen from their own centroid, in input order.
pub fn angles_from_centroid(points: &[Point2]) -> Vec<f64> {
    match centroid(points) {
        Some(c) => points.iter().map(|&p| polar_key(p, c).0).collect(),
        None => Vec::new(),
    }
}

#[inline]
fn cmp_key(a: (f64, f64), b: (f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1))
}
