//! Angular polygon ordering and inward offsets.
//!
//! Pipeline per update: unordered points → `geom2::poly_sort` →
//! `geom2::build_edges` → `inset::InsetStrategy::apply` → edges per inset ring.
//! `frame` bundles the steps for an editable point set; `footprint` turns a frame
//! into an outline with courtyards plus building heights.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they improve the design.

pub mod api;
pub mod footprint;
pub mod frame;
pub mod geom2;
pub mod inset;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use footprint::{BuildingCfg, BuildingError, Footprint};
pub use frame::{compute_frame, Frame, PointSet};
pub use geom2::{Edge, GeomCfg, Point2};
pub use inset::{InsetError, InsetStrategy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::footprint::{BuildingCfg, Footprint};
    pub use crate::frame::{compute_frame, Frame, PointSet};
    pub use crate::geom2::rand::{draw_points_uniform, PointCloudCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{build_edges, poly_sort, Edge, GeomCfg, Point2};
    pub use crate::inset::{inset_by_buffer, inset_by_scale, InsetError, InsetStrategy};
    pub use nalgebra::Vector2 as Vec2;
}
