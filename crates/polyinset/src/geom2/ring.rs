//! Ring predicates and cleanup.
//!
//! A ring is an ordered `[Point2]` whose last point connects back to the first;
//! the closing point is never repeated. Orientation follows the shoelace sign:
//! positive signed area means counter-clockwise.
//!
//! Tolerances are absolute here (`tol` is a distance). Callers derive them from
//! `GeomCfg` and the input extent.

use super::types::Point2;
use super::util::{cross, orient};

/// Shoelace signed area; positive for counter-clockwise rings.
pub fn signed_area(ring: &[Point2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let n = ring.len();
    let twice: f64 = (0..n).map(|i| cross(ring[i], ring[(i + 1) % n])).sum();
    twice * 0.5
}

#[inline]
pub fn area(ring: &[Point2]) -> f64 {
    signed_area(ring).abs()
}

#[inline]
pub fn is_ccw(ring: &[Point2]) -> bool {
    signed_area(ring) > 0.0
}

/// Reverse in place if clockwise.
pub fn ensure_ccw(mut ring: Vec<Point2>) -> Vec<Point2> {
    if signed_area(&ring) < 0.0 {
        ring.reverse();
    }
    ring
}

/// Reverse in place if counter-clockwise.
pub fn ensure_cw(mut ring: Vec<Point2>) -> Vec<Point2> {
    if signed_area(&ring) > 0.0 {
        ring.reverse();
    }
    ring
}

/// Crossing-number containment. Points on the boundary may go either way.
pub fn contains(ring: &[Point2], p: Point2) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (vi, vj) = (ring[i], ring[j]);
        if (vi.y > p.y) != (vj.y > p.y)
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Euclidean distance from `p` to segment `a`–`b`.
pub fn point_segment_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Distance from `p` to the nearest edge of `ring`; infinite for fewer than 2 points.
pub fn boundary_distance(ring: &[Point2], p: Point2) -> f64 {
    let n = ring.len();
    if n < 2 {
        return f64::INFINITY;
    }
    (0..n)
        .map(|i| point_segment_distance(p, ring[i], ring[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}

/// Single crossing point of two non-parallel segments.
///
/// Returns `(t, u, p)` with `p = a0 + t (a1 − a0) = b0 + u (b1 − b0)`, both
/// parameters clamped to [0, 1]. Parallel and collinear pairs yield `None`.
pub fn segment_intersection(
    a0: Point2,
    a1: Point2,
    b0: Point2,
    b1: Point2,
) -> Option<(f64, f64, Point2)> {
    const SLOP: f64 = 1e-12;
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = cross(r, s);
    if denom.abs() <= 1e-12 * r.norm() * s.norm() || denom == 0.0 {
        return None;
    }
    let q = b0 - a0;
    let t = cross(q, s) / denom;
    let u = cross(q, r) / denom;
    if !(-SLOP..=1.0 + SLOP).contains(&t) || !(-SLOP..=1.0 + SLOP).contains(&u) {
        return None;
    }
    let t = t.clamp(0.0, 1.0);
    Some((t, u.clamp(0.0, 1.0), a0 + r * t))
}

/// Whether closed segments `a` and `b` share any point (within `tol`), collinear overlap included.
pub fn segments_touch(a0: Point2, a1: Point2, b0: Point2, b1: Point2, tol: f64) -> bool {
    let sign = |v: f64, len: f64| -> i8 {
        if v > tol * len {
            1
        } else if v < -tol * len {
            -1
        } else {
            0
        }
    };
    let la = (a1 - a0).norm();
    let lb = (b1 - b0).norm();
    let d1 = sign(orient(b0, b1, a0), lb);
    let d2 = sign(orient(b0, b1, a1), lb);
    let d3 = sign(orient(a0, a1, b0), la);
    let d4 = sign(orient(a0, a1, b1), la);
    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    (d1 == 0 && within_box(b0, b1, a0, tol))
        || (d2 == 0 && within_box(b0, b1, a1, tol))
        || (d3 == 0 && within_box(a0, a1, b0, tol))
        || (d4 == 0 && within_box(a0, a1, b1, tol))
}

#[inline]
fn within_box(a: Point2, b: Point2, p: Point2, tol: f64) -> bool {
    p.x >= a.x.min(b.x) - tol
        && p.x <= a.x.max(b.x) + tol
        && p.y >= a.y.min(b.y) - tol
        && p.y <= a.y.max(b.y) + tol
}

/// True if no two edges meet except consecutive edges at their shared vertex.
///
/// Spikes (an edge doubling back over its predecessor) count as self-intersections.
/// Rings with fewer than 3 points are not simple.
pub fn is_simple(ring: &[Point2], tol: f64) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let (a0, a1) = (ring[i], ring[(i + 1) % n]);
        if (a1 - a0).norm() <= tol {
            return false;
        }
        let a2 = ring[(i + 2) % n];
        let turn = orient(a0, a1, a2);
        if turn.abs() <= tol * (a2 - a0).norm() && (a1 - a0).dot(&(a2 - a1)) < 0.0 {
            return false;
        }
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b0, b1) = (ring[j], ring[(j + 1) % n]);
            if segments_touch(a0, a1, b0, b1, tol) {
                return false;
            }
        }
    }
    true
}

/// Drop consecutive near-duplicate points and a repeated closing point.
pub fn dedup_ring(ring: &[Point2], tol: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(ring.len());
    for &p in ring {
        if out.last().map_or(true, |q| (p - q).norm() > tol) {
            out.push(p);
        }
    }
    while out.len() > 1 && (out[0] - out[out.len() - 1]).norm() <= tol {
        out.pop();
    }
    out
}

/// Remove duplicate and collinear vertices (distance to the chord of neighbours `<= tol`).
///
/// Only straight-through vertices are removed; spikes are left for `is_simple` to reject.
pub fn remove_collinear(ring: &[Point2], tol: f64) -> Vec<Point2> {
    let mut out = dedup_ring(ring, tol);
    let mut i = 0;
    let mut stable = 0;
    while out.len() >= 3 && stable < out.len() {
        let n = out.len();
        let prev = out[(i + n - 1) % n];
        let cur = out[i % n];
        let next = out[(i + 1) % n];
        let chord = (next - prev).norm();
        let straight = orient(prev, cur, next).abs() <= tol * chord
            && (cur - prev).dot(&(next - cur)) >= 0.0;
        if straight {
            out.remove(i % n);
            stable = 0;
        } else {
            i = (i + 1) % n;
            stable += 1;
        }
        if !out.is_empty() {
            i %= out.len();
        }
    }
    out
}
