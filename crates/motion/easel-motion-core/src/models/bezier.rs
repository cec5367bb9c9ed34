//! Two-control-point cubic Bezier timing curve (`cubic-bezier(x1, y1, x2, y2)`).
//!
//! CSS supports this natively, so it is only evaluated for previews: either
//! parametrically ([`BezierModel::point_at`]) or as a timing function of x
//! ([`EasingModel::value_at`], x inverted by bisection).

use crate::params::BezierParams;

use super::EasingModel;

const BISECT_STEPS: usize = 24;
const BISECT_EPSILON: f64 = 1e-7;

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierModel {
    params: BezierParams,
}

impl BezierModel {
    pub fn new(params: &BezierParams) -> Self {
        Self { params: *params }
    }

    /// Point on the curve at curve parameter `u ∈ [0, 1]`, as `(x, y)`.
    pub fn point_at(&self, u: f64) -> (f64, f64) {
        let p = &self.params;
        (
            cubic_bezier(0.0, p.x1, p.x2, 1.0, u),
            cubic_bezier(0.0, p.y1, p.y2, 1.0, u),
        )
    }

    fn solve_u(&self, x: f64) -> f64 {
        let p = &self.params;
        // x is monotonic in u because x1, x2 ∈ [0, 1]
        let mut lo = 0.0f64;
        let mut hi = 1.0f64;
        let mut mid = x;
        for _ in 0..BISECT_STEPS {
            let cx = cubic_bezier(0.0, p.x1, p.x2, 1.0, mid);
            if (cx - x).abs() < BISECT_EPSILON {
                break;
            }
            if cx < x {
                lo = mid;
            } else {
                hi = mid;
            }
            mid = 0.5 * (lo + hi);
        }
        mid
    }
}

impl EasingModel for BezierModel {
    fn value_at(&self, t: f64) -> f64 {
        let x = t.clamp(0.0, 1.0);
        let p = &self.params;
        // Bezier(0,0,1,1) is exactly linear
        if p.x1 == 0.0 && p.y1 == 0.0 && p.x2 == 1.0 && p.y2 == 1.0 {
            return x;
        }
        let u = self.solve_u(x);
        cubic_bezier(0.0, p.y1, p.y2, 1.0, u)
    }
}
