use crate::geom2::{centroid, Affine2, Point2};

/// Strategy A: move every point toward the centroid, `C + factor (P − C)`.
///
/// Relative order is preserved, so the result can go straight back through
/// `build_edges`. This is a uniform scale, not a constant-distance offset: thin
/// or non-convex shapes shrink unevenly and may self-intersect. Factor 1 is the
/// identity; factor 0 collapses everything onto the centroid. Empty in, empty out.
pub fn inset_by_scale(points: &[Point2], factor: f64) -> Vec<Point2> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let f = Affine2::uniform_scale_about(c, factor);
    points.iter().map(|&p| f.apply(p)).collect()
}
