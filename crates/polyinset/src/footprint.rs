//! Building footprint: the sorted outline with its inset rings cut out as courtyards.
//!
//! Conventions
//! - The outer ring is counter-clockwise, every courtyard clockwise, so the
//!   footprint reads as one polygon with holes under the usual winding rule.
//! - Courtyards with no area (e.g. a scale inset with factor 0) are dropped.
//! - Heights are plain numbers; meshing and roofs are left to the renderer.

use std::fmt;

use crate::frame::Frame;
use crate::geom2::ring::{area, ensure_ccw, ensure_cw};
use crate::geom2::Point2;

/// Why a building configuration was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildingError {
    InvalidParameter { reason: String },
}

impl fmt::Display for BuildingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { reason } => write!(f, "invalid building parameter: {reason}"),
        }
    }
}

impl std::error::Error for BuildingError {}

/// Vertical dimensions of the extruded footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingCfg {
    pub floor_height: f64,
    pub floor_count: u32,
    /// Roof rise above the top floor.
    pub roof_height: f64,
}

impl Default for BuildingCfg {
    fn default() -> Self {
        Self {
            floor_height: 1.0,
            floor_count: 1,
            roof_height: 0.5,
        }
    }
}

impl BuildingCfg {
    /// Heights must be finite and non-negative.
    pub fn validate(&self) -> Result<(), BuildingError> {
        for (name, v) in [("floor_height", self.floor_height), ("roof_height", self.roof_height)] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(BuildingError::InvalidParameter {
                    reason: format!("{name} must be finite and >= 0, got {v}"),
                });
            }
        }
        Ok(())
    }

    /// Extrusion depth of the walls: `floor_height * floor_count`.
    #[inline]
    pub fn wall_height(&self) -> f64 {
        self.floor_height * f64::from(self.floor_count)
    }

    #[inline]
    pub fn total_height(&self) -> f64 {
        self.wall_height() + self.roof_height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    pub outer: Vec<Point2>,
    pub courtyards: Vec<Vec<Point2>>,
}

impl Footprint {
    /// Outline plus inset rings of `frame`; `None` below 3 outline points.
    pub fn from_frame(frame: &Frame) -> Option<Self> {
        if frame.outline.len() < 3 {
            return None;
        }
        let courtyards: Vec<Vec<Point2>> = frame
            .inset_rings
            .iter()
            .filter(|r| r.len() >= 3 && area(r) > 0.0)
            .map(|r| ensure_cw(r.clone()))
            .collect();
        if courtyards.len() < frame.inset_rings.len() {
            tracing::debug!(
                dropped = frame.inset_rings.len() - courtyards.len(),
                "zero-area courtyards skipped"
            );
        }
        Some(Self {
            outer: ensure_ccw(frame.outline.clone()),
            courtyards,
        })
    }

    /// Outline area minus courtyard area.
    pub fn net_area(&self) -> f64 {
        area(&self.outer) - self.courtyards.iter().map(|c| area(c)).sum::<f64>()
    }

    /// True when no courtyard survived.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.courtyards.is_empty()
    }
}
