//! Basic 2D types and tolerances shared by ordering, edge building and insets.
//!
//! - `Point2`: plain `nalgebra` column vector; points have no identity beyond position.
//! - `Edge`: one boundary segment `(start, end)`.
//! - `Affine2`: 2D affine map, used for the centroid-scaling inset.
//! - `GeomCfg`: centralizes epsilons for welding, distance checks and arc discretization.

use nalgebra::{Matrix2, Vector2};

/// A point (or vector) in the plane.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// The `eps_*` values are relative: they are multiplied by the extent of the
/// polygon being processed, so the same defaults work for unit-square inputs and
/// for pixel coordinates alike.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Endpoints closer than `eps_weld * scale` are the same vertex.
    pub eps_weld: f64,
    /// Slack on the erosion distance test, relative to `distance + scale`.
    pub eps_dist: f64,
    /// Rings with `|area| <= eps_area * scale²` are degenerate.
    pub eps_area: f64,
    /// Max radial error of a discretized round join, relative to the offset distance.
    pub arc_tolerance: f64,
    /// Upper bound on polyline pieces per round join.
    pub max_arc_segments: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_weld: 1e-9,
            eps_dist: 1e-9,
            eps_area: 1e-12,
            arc_tolerance: 1e-3,
            max_arc_segments: 64,
        }
    }
}

/// Directed boundary segment. Direction matters for rendering only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    #[inline]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        (self.start + self.end) * 0.5
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl From<(Point2, Point2)> for Edge {
    #[inline]
    fn from((start, end): (Point2, Point2)) -> Self {
        Self { start, end }
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    /// Uniform scale by `factor` with `center` held fixed: `x ↦ c + s (x − c)`.
    #[inline]
    pub fn uniform_scale_about(center: Point2, factor: f64) -> Self {
        Self {
            m: Matrix2::identity() * factor,
            t: center * (1.0 - factor),
        }
    }
    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        self.m * p + self.t
    }
}
