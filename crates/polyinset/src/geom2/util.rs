use super::types::Point2;

#[inline]
pub(crate) fn angle_of(v: Point2) -> f64 {
    v.y.atan2(v.x)
}

/// z-component of `a × b`.
#[inline]
pub(crate) fn cross(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Twice the signed area of triangle (a, b, c); positive when c lies left of a→b.
#[inline]
pub(crate) fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    cross(b - a, c - a)
}

/// Unit normal pointing left of `dir` (inward for a CCW ring). `dir` must be non-zero.
#[inline]
pub(crate) fn left_normal(dir: Point2) -> Point2 {
    let len = dir.norm();
    Point2::new(-dir.y / len, dir.x / len)
}

/// Bounding-box diagonal, used to turn relative epsilons into absolute ones.
/// Falls back to 1 for empty or single-point input.
pub(crate) fn extent(points: &[Point2]) -> f64 {
    let mut lo = Point2::repeat(f64::INFINITY);
    let mut hi = Point2::repeat(f64::NEG_INFINITY);
    for p in points {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    let diag = (hi - lo).norm();
    if diag.is_finite() && diag > 0.0 {
        diag
    } else {
        1.0
    }
}
