//! Per-update pipeline for an editable point set.
//!
//! Every mutation (add, drag, delete) is followed by one full recompute:
//! sort → edges → inset → inset edges. Nothing is cached between frames, so the
//! output always reflects the current points.

use crate::geom2::{build_edges, poly_sort, Edge, GeomCfg, Point2};
use crate::inset::InsetStrategy;

/// Everything a renderer needs for one update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Points in angular order around their centroid.
    pub outline: Vec<Point2>,
    /// Closed boundary of `outline`; empty below 3 points.
    pub edges: Vec<Edge>,
    /// Inset rings, possibly none.
    pub inset_rings: Vec<Vec<Point2>>,
    /// Closed boundary of each inset ring.
    pub inset_edges: Vec<Vec<Edge>>,
}

impl Frame {
    /// True when no inset survived (too few points, full erosion, bad input).
    pub fn inset_is_empty(&self) -> bool {
        self.inset_rings.is_empty()
    }
}

/// Run the whole pipeline on an unordered point set.
pub fn compute_frame(points: &[Point2], strategy: InsetStrategy, cfg: &GeomCfg) -> Frame {
    let outline = poly_sort(points);
    let edges = build_edges(&outline);
    let inset_rings = strategy.apply(&outline, cfg);
    let inset_edges = inset_rings.iter().map(|r| build_edges(r)).collect();
    tracing::debug!(
        points = points.len(),
        rings = inset_rings.len(),
        ?strategy,
        "frame recomputed"
    );
    Frame {
        outline,
        edges,
        inset_rings,
        inset_edges,
    }
}

/// Mutable point collection with hit-testing, as an editor would hold it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, p: Point2) {
        self.points.push(p);
    }

    /// Remove point `i`; `None` if out of range.
    pub fn remove(&mut self, i: usize) -> Option<Point2> {
        (i < self.points.len()).then(|| self.points.remove(i))
    }

    /// Move point `i` to `p`; false if out of range.
    pub fn set(&mut self, i: usize, p: Point2) -> bool {
        match self.points.get_mut(i) {
            Some(slot) => {
                *slot = p;
                true
            }
            None => false,
        }
    }

    /// Index of the first point within `radius` of `pos` (insertion order).
    pub fn hit(&self, pos: Point2, radius: f64) -> Option<usize> {
        let r2 = radius * radius;
        self.points.iter().position(|p| (p - pos).norm_squared() <= r2)
    }

    /// Recompute the frame for the current points.
    pub fn frame(&self, strategy: InsetStrategy, cfg: &GeomCfg) -> Frame {
        compute_frame(&self.points, strategy, cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square_set() -> PointSet {
        PointSet::from_points(vec![
            vector![10.0, 10.0],
            vector![0.0, 0.0],
            vector![0.0, 10.0],
            vector![10.0, 0.0],
        ])
    }

    #[test]
    fn frame_runs_the_full_pipeline() {
        let set = square_set();
        let f = set.frame(InsetStrategy::Buffer(2.0), &GeomCfg::default());
        assert_eq!(f.outline[0], vector![0.0, 0.0]);
        assert_eq!(f.edges.len(), 4);
        assert_eq!(f.inset_rings.len(), 1);
        assert_eq!(f.inset_edges.len(), 1);
        assert_eq!(f.inset_edges[0].len(), f.inset_rings[0].len());
        assert!(!f.inset_is_empty());
    }

    #[test]
    fn too_few_points_give_an_empty_frame() {
        let mut set = PointSet::new();
        set.push(vector![1.0, 1.0]);
        set.push(vector![2.0, 1.0]);
        let f = set.frame(InsetStrategy::Scale(0.5), &GeomCfg::default());
        assert_eq!(f.outline.len(), 2);
        assert!(f.edges.is_empty());
        assert!(f.inset_is_empty());
    }

    #[test]
    fn every_edit_is_reflected_in_the_next_frame() {
        let cfg = GeomCfg::default();
        let mut set = square_set();
        let before = set.frame(InsetStrategy::Scale(0.5), &cfg);

        let i = set.hit(vector![10.2, 9.9], 0.5).expect("corner under cursor");
        assert_eq!(set.points()[i], vector![10.0, 10.0]);
        assert!(set.set(i, vector![20.0, 20.0]));
        let dragged = set.frame(InsetStrategy::Scale(0.5), &cfg);
        assert_ne!(before, dragged);
        assert!(dragged.outline.contains(&vector![20.0, 20.0]));

        assert_eq!(set.remove(i), Some(vector![20.0, 20.0]));
        assert_eq!(set.len(), 3);
        assert_eq!(set.frame(InsetStrategy::Scale(0.5), &cfg).edges.len(), 3);
    }

    #[test]
    fn out_of_range_edits_are_rejected() {
        let mut set = square_set();
        assert_eq!(set.remove(9), None);
        assert!(!set.set(9, vector![0.0, 0.0]));
        assert_eq!(set.hit(vector![50.0, 50.0], 1.0), None);
        assert_eq!(set.len(), 4);
    }
}
