//! SVG preview geometry.
//!
//! Points are percentage-x / value-y; the viewport maps x ∈ [0, 100] onto
//! `[0, width]` and y = 0 / y = 1 onto `height` / `0` (SVG y grows down).
//! Values outside `[0, 1]` land outside the box, which is what overshoot
//! previews want.

use crate::math::format_number;
use crate::params::BezierParams;
use crate::sampler::CurvePoint;

const COORD_DECIMALS: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn project(&self, x_percent: f64, y: f64) -> (String, String) {
        (
            format_number(x_percent / 100.0 * self.width, COORD_DECIMALS),
            format_number((1.0 - y) * self.height, COORD_DECIMALS),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// `points` attribute of a `<polyline>`: `"x,y x,y …"`.
pub fn polyline_points(points: &[CurvePoint], vp: Viewport) -> String {
    points
        .iter()
        .map(|p| {
            let (x, y) = vp.project(p.x, p.y);
            format!("{x},{y}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `d` attribute of a `<path>`: `"M x y L x y …"`.
pub fn path_data(points: &[CurvePoint], vp: Viewport) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        let (x, y) = vp.project(p.x, p.y);
        if i > 0 {
            out.push(' ');
        }
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push_str(&format!("{x} {y}"));
    }
    out
}

/// `d` attribute for a Bezier timing curve: `"M 0 h C …"`.
pub fn cubic_bezier_path(p: &BezierParams, vp: Viewport) -> String {
    let (sx, sy) = vp.project(0.0, 0.0);
    let (c1x, c1y) = vp.project(p.x1 * 100.0, p.y1);
    let (c2x, c2y) = vp.project(p.x2 * 100.0, p.y2);
    let (ex, ey) = vp.project(100.0, 1.0);
    format!("M{sx} {sy} C{c1x} {c1y} {c2x} {c2y} {ex} {ey}")
}
