//! CSS timing-function serialisation.

use crate::math::format_number;
use crate::params::BezierParams;
use crate::sampler::{CurvePoint, X_DECIMALS, Y_DECIMALS};

/// `cubic-bezier(x1, y1, x2, y2)`.
pub fn cubic_bezier(p: &BezierParams) -> String {
    format!(
        "cubic-bezier({}, {}, {}, {})",
        format_number(p.x1, 2),
        format_number(p.y1, 2),
        format_number(p.x2, 2),
        format_number(p.y2, 2)
    )
}

/// `linear(v0, v1 p1%, …, vn)` from percentage-x points.
///
/// Stops at exactly 0% or 100% carry no percentage. Consecutive stops with
/// the same value are all emitted; CSS reads them as a hold.
pub fn linear(points: &[CurvePoint]) -> String {
    let stops: Vec<String> = points
        .iter()
        .map(|p| {
            let value = format_number(p.y, Y_DECIMALS);
            if p.x <= 0.0 || p.x >= 100.0 {
                value
            } else {
                format!("{value} {}%", format_number(p.x, X_DECIMALS))
            }
        })
        .collect();
    format!("linear({})", stops.join(", "))
}
