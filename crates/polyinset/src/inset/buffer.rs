//! Strategy B: true inward offset (Euclidean erosion) of a polygon given by its edges.
//!
//! Model
//! - The eroded boundary is the set of interior points at distance exactly `d`
//!   from the boundary. Each such point is nearest to either an edge (then it lies
//!   on that edge shifted inward by `d`) or a reflex vertex (then it lies on the
//!   circle of radius `d` around it, between the two edge normals).
//! - So: emit every shifted edge plus a round join per reflex vertex, split all
//!   pieces where they cross, keep the pieces whose midpoint is inside the ring and
//!   at least `d` from its boundary, and polygonize what is left.
//!
//! Round joins are circumscribed polylines: every piece stays at distance `>= d`
//! from the vertex, so the distance test never trims a true arc.

use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, TAU};

use super::InsetError;
use crate::geom2::ring::{
    area, boundary_distance, contains, ensure_ccw, is_simple, remove_collinear,
    segment_intersection, segments_touch,
};
use crate::geom2::util::{angle_of, cross, extent, left_normal};
use crate::geom2::{polygonize, Edge, GeomCfg, Point2};

/// Erode the polygon bounded by `edges` by `distance`, default tolerances.
///
/// Returns one ring per connected component, each counter-clockwise with the
/// closing point implied. Any failure (open or self-intersecting edges, full
/// erosion, bad distance) yields an empty set.
pub fn inset_by_buffer(edges: &[Edge], distance: f64) -> Vec<Vec<Point2>> {
    inset_by_buffer_with(edges, distance, &GeomCfg::default())
}

/// `inset_by_buffer` with explicit tolerances.
pub fn inset_by_buffer_with(edges: &[Edge], distance: f64, cfg: &GeomCfg) -> Vec<Vec<Point2>> {
    match try_inset_by_buffer(edges, distance, cfg) {
        Ok(rings) => rings,
        Err(err) => {
            tracing::debug!(%err, distance, edges = edges.len(), "buffer inset produced no rings");
            Vec::new()
        }
    }
}

/// Erosion that reports why no rings came out.
///
/// Edges may arrive unsorted and in either direction; they are reconnected by
/// shared endpoints first. Several disjoint rings are eroded independently;
/// nested or crossing rings (holes, overlaps) are rejected.
pub fn try_inset_by_buffer(
    edges: &[Edge],
    distance: f64,
    cfg: &GeomCfg,
) -> Result<Vec<Vec<Point2>>, InsetError> {
    if !(distance.is_finite() && distance > 0.0) {
        return Err(InsetError::invalid_parameter(format!(
            "buffer distance must be finite and > 0, got {distance}"
        )));
    }
    if edges.len() < 3 {
        return Err(InsetError::InsufficientPoints { got: edges.len() });
    }
    let endpoints: Vec<Point2> = edges.iter().flat_map(|e| [e.start, e.end]).collect();
    if endpoints.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(InsetError::invalid_polygon("non-finite coordinate"));
    }
    let scale = extent(&endpoints);
    let weld = cfg.eps_weld * scale;

    let polys = polygonize(edges, weld);
    if polys.dangling > 0 {
        return Err(InsetError::invalid_polygon(format!(
            "{} edge chain(s) do not close",
            polys.dangling
        )));
    }
    if polys.rings.is_empty() {
        return Err(InsetError::invalid_polygon("edges do not enclose any area"));
    }
    for (i, a) in polys.rings.iter().enumerate() {
        for b in &polys.rings[i + 1..] {
            if !rings_disjoint(a, b, weld) {
                return Err(InsetError::invalid_polygon(
                    "rings overlap or nest (holes are not supported)",
                ));
            }
        }
    }

    let mut out = Vec::new();
    for ring in &polys.rings {
        out.extend(erode_ring(ring, distance, scale, cfg)?);
    }
    if out.is_empty() {
        return Err(InsetError::DegenerateBuffer { distance });
    }
    Ok(out)
}

fn erode_ring(
    ring: &[Point2],
    distance: f64,
    scale: f64,
    cfg: &GeomCfg,
) -> Result<Vec<Vec<Point2>>, InsetError> {
    let weld = cfg.eps_weld * scale;
    let min_area = cfg.eps_area * scale * scale;
    let ring = remove_collinear(ring, weld);
    if ring.len() < 3 {
        return Err(InsetError::InsufficientPoints { got: ring.len() });
    }
    if area(&ring) <= min_area {
        return Err(InsetError::invalid_polygon("ring has no area"));
    }
    if !is_simple(&ring, weld) {
        return Err(InsetError::invalid_polygon("ring is self-intersecting"));
    }
    let ring = ensure_ccw(ring);

    let raw = offset_pieces(&ring, distance, cfg);
    let pieces = split_at_crossings(&raw, weld);
    let slack = cfg.eps_dist * (distance + scale);
    let kept: Vec<Edge> = pieces
        .into_iter()
        .filter(|e| {
            let m = e.midpoint();
            contains(&ring, m) && boundary_distance(&ring, m) >= distance - slack
        })
        .collect();
    tracing::trace!(raw = raw.len(), kept = kept.len(), "offset pieces");

    let assembled = polygonize(&kept, weld);
    if assembled.dangling > 0 {
        tracing::trace!(dangling = assembled.dangling, "dropped open offset chains");
    }
    Ok(assembled
        .rings
        .into_iter()
        .map(|r| remove_collinear(&r, weld))
        .filter(|r| r.len() >= 3 && area(r) > min_area)
        .map(ensure_ccw)
        .collect())
}

/// Shifted edges plus round joins at reflex vertices of a CCW ring.
fn offset_pieces(ring: &[Point2], d: f64, cfg: &GeomCfg) -> Vec<Edge> {
    let n = ring.len();
    let normals: Vec<Point2> = (0..n).map(|i| left_normal(ring[(i + 1) % n] - ring[i])).collect();
    let mut pieces = Vec::with_capacity(2 * n);
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        pieces.push(Edge::new(a + normals[i] * d, b + normals[i] * d));
    }
    for i in 0..n {
        let v = ring[i];
        let n_in = normals[(i + n - 1) % n];
        let n_out = normals[i];
        let turn = cross(n_in, n_out);
        if turn.abs() < 1e-9 && n_in.dot(&n_out) > 0.0 {
            // Nearly straight: bridge the sliver gap directly.
            pieces.push(Edge::new(v + n_in * d, v + n_out * d));
        } else if turn < 0.0 {
            push_round_join(&mut pieces, v, n_in, n_out, d, cfg);
        }
    }
    pieces
}

/// Clockwise join around reflex vertex `v` from `v + d n_in` to `v + d n_out`.
fn push_round_join(
    pieces: &mut Vec<Edge>,
    v: Point2,
    n_in: Point2,
    n_out: Point2,
    d: f64,
    cfg: &GeomCfg,
) {
    let a0 = angle_of(n_in);
    let mut sweep = angle_of(n_out) - a0;
    while sweep > 0.0 {
        sweep -= TAU;
    }
    while sweep <= -TAU {
        sweep += TAU;
    }
    // Tangent pieces overshoot the circle by d (1/cos h − 1); bound that by arc_tolerance.
    let h_max = (1.0 / (1.0 + cfg.arc_tolerance.max(1e-12))).acos();
    let by_tol = (sweep.abs() / (2.0 * h_max)).ceil() as usize;
    let by_angle = (sweep.abs() / FRAC_PI_2).ceil() as usize;
    let m = by_tol.min(cfg.max_arc_segments).max(by_angle).max(1);
    let h = sweep / (2.0 * m as f64);
    let r = d / h.cos();
    let mut prev = v + n_in * d;
    for k in 0..m {
        let ang = a0 + (2 * k + 1) as f64 * h;
        let corner = v + Point2::new(ang.cos(), ang.sin()) * r;
        pieces.push(Edge::new(prev, corner));
        prev = corner;
    }
    pieces.push(Edge::new(prev, v + n_out * d));
}

/// Split every piece at its crossings with the others.
///
/// Each crossing point is computed once and handed to both pieces, so the split
/// ends match exactly. Sub-pieces not longer than `weld` are dropped.
fn split_at_crossings(pieces: &[Edge], weld: f64) -> Vec<Edge> {
    let n = pieces.len();
    let mut cuts: Vec<Vec<(f64, Point2)>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (pieces[i], pieces[j]);
            if let Some((t, u, p)) = segment_intersection(a.start, a.end, b.start, b.end) {
                cuts[i].push((t, p));
                cuts[j].push((u, p));
            }
        }
    }
    let mut out = Vec::with_capacity(n);
    for (piece, mut at) in pieces.iter().zip(cuts) {
        at.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(Ordering::Equal));
        let mut from = piece.start;
        for (_, p) in at {
            if (p - from).norm() > weld && (piece.end - p).norm() > weld {
                out.push(Edge::new(from, p));
                from = p;
            }
        }
        if (piece.end - from).norm() > weld {
            out.push(Edge::new(from, piece.end));
        }
    }
    out
}

fn rings_disjoint(a: &[Point2], b: &[Point2], tol: f64) -> bool {
    if contains(a, b[0]) || contains(b, a[0]) {
        return false;
    }
    let (na, nb) = (a.len(), b.len());
    for i in 0..na {
        for j in 0..nb {
            if segments_touch(a[i], a[(i + 1) % na], b[j], b[(j + 1) % nb], tol) {
                return false;
            }
        }
    }
    true
}
