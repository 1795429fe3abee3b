//! 2D geometry for the polygon pipeline.
//!
//! Purpose
//! - Turn an unordered point snapshot into a simple polygon boundary
//!   (`order::poly_sort` → `edges::build_edges`).
//! - Provide the ring predicates the inset strategies rely on (area,
//!   orientation, containment, simplicity, segment distance/intersection).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` values; nothing here owns or mutates
//!   caller state.
//! - Rings never repeat their closing point. Counter-clockwise is positive area.
//! - Tolerances are explicit: `GeomCfg` holds relative epsilons, ring predicates
//!   take an absolute `tol`.

pub mod edges;
pub mod order;
pub mod rand;
pub mod ring;
mod types;
pub(crate) mod util;

pub use edges::{build_edges, polygon_edges, polygonize, Polygonized};
pub use order::{angles_from_centroid, centroid, poly_sort, polar_key};
pub use types::{Affine2, Edge, GeomCfg, Point2};
