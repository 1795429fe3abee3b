//! On-disk form of a computed frame (`run` writes it, `figure` reads it).

use polyinset::{BuildingCfg, Edge, Footprint, Frame, Point2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameDoc {
    pub strategy: String,
    pub amount: f64,
    /// Sorted input points.
    pub outline: Vec<[f64; 2]>,
    pub edges: Vec<[[f64; 2]; 2]>,
    pub inset_rings: Vec<Vec<[f64; 2]>>,
    /// Absent below 3 points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<BuildingDoc>,
}

/// Footprint rings (outer CCW, courtyards CW) and extrusion heights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingDoc {
    pub outer: Vec<[f64; 2]>,
    pub courtyards: Vec<Vec<[f64; 2]>>,
    pub net_area: f64,
    pub floor_height: f64,
    pub floor_count: u32,
    pub wall_height: f64,
    pub total_height: f64,
}

impl BuildingDoc {
    pub fn new(footprint: &Footprint, cfg: &BuildingCfg) -> Self {
        Self {
            outer: footprint.outer.iter().map(xy).collect(),
            courtyards: footprint
                .courtyards
                .iter()
                .map(|r| r.iter().map(xy).collect())
                .collect(),
            net_area: footprint.net_area(),
            floor_height: cfg.floor_height,
            floor_count: cfg.floor_count,
            wall_height: cfg.wall_height(),
            total_height: cfg.total_height(),
        }
    }
}

fn xy(p: &Point2) -> [f64; 2] {
    [p.x, p.y]
}

fn seg(e: &Edge) -> [[f64; 2]; 2] {
    [xy(&e.start), xy(&e.end)]
}

impl FrameDoc {
    pub fn new(strategy: &str, amount: f64, frame: &Frame, building: &BuildingCfg) -> Self {
        Self {
            strategy: strategy.to_string(),
            amount,
            outline: frame.outline.iter().map(xy).collect(),
            edges: frame.edges.iter().map(seg).collect(),
            inset_rings: frame
                .inset_rings
                .iter()
                .map(|r| r.iter().map(xy).collect())
                .collect(),
            building: Footprint::from_frame(frame).map(|fp| BuildingDoc::new(&fp, building)),
        }
    }
}
