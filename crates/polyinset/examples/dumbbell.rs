//! Erode a dumbbell at growing distances and watch it split, then vanish.
//!
//! Usage:
//!   cargo run -p polyinset --example dumbbell

use nalgebra::vector;
use polyinset::geom2::ring::area;
use polyinset::geom2::{build_edges, GeomCfg};
use polyinset::inset::try_inset_by_buffer;

fn main() {
    let outline = vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 4.0],
        vector![20.0, 4.0],
        vector![20.0, 0.0],
        vector![30.0, 0.0],
        vector![30.0, 10.0],
        vector![20.0, 10.0],
        vector![20.0, 6.0],
        vector![10.0, 6.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ];
    let edges = build_edges(&outline);
    let cfg = GeomCfg::default();
    for d in [0.5, 1.0, 2.0, 4.0, 5.0] {
        match try_inset_by_buffer(&edges, d, &cfg) {
            Ok(rings) => {
                let areas: Vec<String> = rings.iter().map(|r| format!("{:.3}", area(r))).collect();
                println!("d={d}: {} ring(s), areas [{}]", rings.len(), areas.join(", "));
            }
            Err(err) => println!("d={d}: {err}"),
        }
    }
}
