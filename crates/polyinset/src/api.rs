//! Curated surface for front-ends (UNSTABLE).
//!
//! Important
//! - Internal convenience re-exports for the CLI and any future editor shell.
//!   Breaking changes are allowed.
//! - Prefer these names over reaching into submodules.

// Ordering and boundary
pub use crate::geom2::{
    angles_from_centroid, build_edges, centroid, poly_sort, polygon_edges, polygonize, Edge,
    GeomCfg, Point2, Polygonized,
};
// Ring predicates
pub use crate::geom2::ring::{area, boundary_distance, contains, is_ccw, signed_area};
// Random point clouds
pub use crate::geom2::rand::{
    draw_points_uniform, PointCloudCfg, ReplayToken as CloudReplay, VertexCount,
};
// Insets
pub use crate::inset::{
    inset_by_buffer, inset_by_buffer_with, inset_by_scale, try_inset_by_buffer, InsetError,
    InsetStrategy,
};
// Pipeline
pub use crate::frame::{compute_frame, Frame, PointSet};
// Building footprint
pub use crate::footprint::{BuildingCfg, BuildingError, Footprint};
