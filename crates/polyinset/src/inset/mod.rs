//! Inward offsets ("insets") of a polygon boundary.
//!
//! Two interchangeable strategies, picked explicitly by the caller:
//! - `InsetStrategy::Scale(factor)`: affine shrink toward the centroid. Cheap, but
//!   not a constant-distance offset; non-convex input can self-intersect.
//! - `InsetStrategy::Buffer(distance)`: true Euclidean erosion. May split the
//!   polygon into several rings or erase it. This is the canonical one.
//!
//! Every failure mode is recoverable: the infallible entry points return an empty
//! ring set and the caller simply draws nothing for that update.

mod buffer;
mod scale;

use std::fmt;

use crate::geom2::{build_edges, GeomCfg, Point2};

pub use buffer::{inset_by_buffer, inset_by_buffer_with, try_inset_by_buffer};
pub use scale::inset_by_scale;

/// Why an inset produced no rings.
#[derive(Clone, Debug, PartialEq)]
pub enum InsetError {
    /// Fewer than 3 points/edges to form a polygon.
    InsufficientPoints { got: usize },
    /// The erosion consumed the whole polygon.
    DegenerateBuffer { distance: f64 },
    /// Edges do not close, or the ring self-intersects / has no area.
    InvalidPolygon { reason: String },
    /// Strategy parameter outside its domain.
    InvalidParameter { reason: String },
}

impl InsetError {
    pub(crate) fn invalid_polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { got } => {
                write!(f, "need at least 3 points for a polygon, got {got}")
            }
            Self::DegenerateBuffer { distance } => {
                write!(f, "inset distance {distance} erodes the whole polygon")
            }
            Self::InvalidPolygon { reason } => write!(f, "invalid polygon: {reason}"),
            Self::InvalidParameter { reason } => write!(f, "invalid inset parameter: {reason}"),
        }
    }
}

impl std::error::Error for InsetError {}

/// Inset strategy selected by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsetStrategy {
    /// Scale toward the centroid by a dimensionless factor in [0, 1].
    Scale(f64),
    /// Erode by a distance in the units of the point coordinates.
    Buffer(f64),
}

impl InsetStrategy {
    /// Check the parameter domain: factor finite in [0, 1], distance finite and > 0.
    pub fn validate(&self) -> Result<(), InsetError> {
        match *self {
            Self::Scale(factor) if !(factor.is_finite() && (0.0..=1.0).contains(&factor)) => Err(
                InsetError::invalid_parameter(format!("scale factor must lie in [0, 1], got {factor}")),
            ),
            Self::Buffer(distance) if !(distance.is_finite() && distance > 0.0) => {
                Err(InsetError::invalid_parameter(format!(
                    "buffer distance must be finite and > 0, got {distance}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Inset an angularly ordered boundary; one `Vec` per resulting ring.
    ///
    /// `Scale` yields at most one ring (none below 3 points); `Buffer` yields
    /// zero or more. Invalid parameters yield no rings.
    pub fn apply(&self, ordered: &[Point2], cfg: &GeomCfg) -> Vec<Vec<Point2>> {
        if let Err(err) = self.validate() {
            tracing::debug!(%err, "inset skipped");
            return Vec::new();
        }
        if ordered.len() < 3 {
            return Vec::new();
        }
        match *self {
            Self::Scale(factor) => vec![inset_by_scale(ordered, factor)],
            Self::Buffer(distance) => inset_by_buffer_with(&build_edges(ordered), distance, cfg),
        }
    }
}

#[cfg(test)]
mod tests;
