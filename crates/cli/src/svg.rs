//! Minimal SVG rendering of a frame: boundary, inset rings, point markers.

use crate::frame_doc::FrameDoc;
use std::fmt::Write;

const SIZE: f64 = 480.0;
const MARGIN: f64 = 16.0;

/// Render `doc` into a square SVG document, y axis pointing up.
pub fn render(doc: &FrameDoc) -> String {
    let all: Vec<[f64; 2]> = doc
        .outline
        .iter()
        .chain(doc.inset_rings.iter().flatten())
        .copied()
        .collect();
    let (lo, hi) = bounds(&all);
    let span = (hi[0] - lo[0]).max(hi[1] - lo[1]).max(1e-12);
    let k = (SIZE - 2.0 * MARGIN) / span;
    let map = |p: &[f64; 2]| (MARGIN + (p[0] - lo[0]) * k, SIZE - MARGIN - (p[1] - lo[1]) * k);
    let pts = |ring: &[[f64; 2]]| -> String {
        ring.iter()
            .map(|p| {
                let (x, y) = map(p);
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
    );
    if doc.outline.len() >= 3 {
        let _ = writeln!(
            s,
            r##"  <polygon points="{}" fill="none" stroke="#333" stroke-width="1.5"/>"##,
            pts(&doc.outline)
        );
    }
    for ring in &doc.inset_rings {
        let _ = writeln!(
            s,
            r##"  <polygon points="{}" fill="#4a90d955" stroke="#1f5fa8" stroke-width="1"/>"##,
            pts(ring)
        );
    }
    for p in &doc.outline {
        let (x, y) = map(p);
        let _ = writeln!(s, r##"  <circle cx="{x:.2}" cy="{y:.2}" r="3" fill="#c0392b"/>"##);
    }
    s.push_str("</svg>\n");
    s
}

fn bounds(points: &[[f64; 2]]) -> ([f64; 2], [f64; 2]) {
    if points.is_empty() {
        return ([0.0, 0.0], [1.0, 1.0]);
    }
    let mut lo = [f64::INFINITY; 2];
    let mut hi = [f64::NEG_INFINITY; 2];
    for p in points {
        for i in 0..2 {
            lo[i] = lo[i].min(p[i]);
            hi[i] = hi[i].max(p[i]);
        }
    }
    (lo, hi)
}
