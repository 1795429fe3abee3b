//! Edge building (ordered points → closed edge cycle) and its inverse, polygonize.

use super::order::poly_sort;
use super::types::{Edge, Point2};
use super::util::cross;

/// Close an ordered point sequence into a cycle of `n` edges.
///
/// Fewer than 3 points do not define a polygon: the result is empty, not an error.
pub fn build_edges(ordered: &[Point2]) -> Vec<Edge> {
    let n = ordered.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| Edge::new(ordered[i], ordered[(i + 1) % n]))
        .collect()
}

/// Sort `points` around their centroid, then build the boundary edges.
#[inline]
pub fn polygon_edges(points: &[Point2]) -> Vec<Edge> {
    if points.len() < 3 {
        return Vec::new();
    }
    build_edges(&poly_sort(points))
}

/// Result of `polygonize`.
#[derive(Clone, Debug, Default)]
pub struct Polygonized {
    /// Closed rings (closing point not repeated), at least 3 points each.
    pub rings: Vec<Vec<Point2>>,
    /// Chains that ran out of connecting segments before closing.
    pub dangling: usize,
}

/// Reconnect undirected segments into closed rings by shared endpoints.
///
/// Endpoints within `tol` match. Segments may come in any order and either
/// direction; zero-length segments are ignored. Where several unused segments
/// leave the same vertex, the walk takes the leftmost turn, so rings touching at
/// a single vertex come out separately. A reversal back along the incoming
/// segment is taken only as a last resort.
pub fn polygonize(edges: &[Edge], tol: f64) -> Polygonized {
    let segs: Vec<Edge> = edges.iter().filter(|e| e.length() > tol).copied().collect();
    let mut used = vec![false; segs.len()];
    let mut out = Polygonized::default();
    for first in 0..segs.len() {
        if used[first] {
            continue;
        }
        used[first] = true;
        let origin = segs[first].start;
        let mut ring = vec![origin];
        let mut prev = origin;
        let mut cur = segs[first].end;
        let closed = loop {
            if (cur - origin).norm() <= tol {
                break true;
            }
            ring.push(cur);
            match next_segment(&segs, &used, prev, cur, tol) {
                Some((k, far)) => {
                    used[k] = true;
                    prev = cur;
                    cur = far;
                }
                None => break false,
            }
        };
        if !closed {
            out.dangling += 1;
        } else if ring.len() >= 3 {
            out.rings.push(ring);
        }
    }
    out
}

/// Unused segment leaving `cur` with the leftmost turn relative to `prev → cur`.
fn next_segment(
    segs: &[Edge],
    used: &[bool],
    prev: Point2,
    cur: Point2,
    tol: f64,
) -> Option<(usize, Point2)> {
    let incoming = cur - prev;
    let mut best: Option<(usize, Point2, f64)> = None;
    for (k, seg) in segs.iter().enumerate() {
        if used[k] {
            continue;
        }
        let far = if (seg.start - cur).norm() <= tol {
            seg.end
        } else if (seg.end - cur).norm() <= tol {
            seg.start
        } else {
            continue;
        };
        let outgoing = far - cur;
        let mut turn = cross(incoming, outgoing).atan2(incoming.dot(&outgoing));
        if turn >= std::f64::consts::PI - 1e-12 {
            turn = -std::f64::consts::PI;
        }
        if best.map_or(true, |(_, _, t)| turn > t) {
            best = Some((k, far, turn));
        }
    }
    best.map(|(k, far, _)| (k, far))
}
