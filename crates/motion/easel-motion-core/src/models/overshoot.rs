//! Cubic "back" curves with an overshoot coefficient and a power time-warp.
//!
//! - coefficient `s = mass · 0.5`
//! - warp exponent from damping mapped onto `[1, 0.5]` (0 leaves time untouched)
//! - `IN`:     `(s+1)u³ - s·u²`
//! - `OUT`:    `1 - IN(1-u)`
//! - `IN_OUT`: two half-cubics with `s · 1.525`, scaled into each half

use crate::math::map_range;
use crate::params::{OvershootParams, OvershootStyle};

use super::EasingModel;

pub const WARP_RANGE: (f64, f64) = (1.0, 0.5);
const OVERSHOOT_PER_MASS: f64 = 0.5;
const IN_OUT_SCALE: f64 = 1.525;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OvershootModel {
    style: OvershootStyle,
    overshoot: f64,
    exponent: f64,
}

impl OvershootModel {
    pub fn new(p: &OvershootParams) -> Self {
        Self {
            style: p.style,
            overshoot: p.mass * OVERSHOOT_PER_MASS,
            exponent: map_range(p.damping, 0.0, 100.0, WARP_RANGE.0, WARP_RANGE.1),
        }
    }

    fn ease_in(&self, u: f64) -> f64 {
        let s = self.overshoot;
        (s + 1.0) * u * u * u - s * u * u
    }

    fn ease_in_out(&self, u: f64) -> f64 {
        let s = self.overshoot * IN_OUT_SCALE;
        if u < 0.5 {
            let v = 2.0 * u;
            v * v * ((s + 1.0) * v - s) / 2.0
        } else {
            let v = 2.0 * u - 2.0;
            (v * v * ((s + 1.0) * v + s) + 2.0) / 2.0
        }
    }
}

impl EasingModel for OvershootModel {
    fn value_at(&self, t: f64) -> f64 {
        let u = t.clamp(0.0, 1.0).powf(self.exponent);
        match self.style {
            OvershootStyle::In => self.ease_in(u),
            OvershootStyle::Out => 1.0 - self.ease_in(1.0 - u),
            OvershootStyle::InOut => self.ease_in_out(u),
        }
    }
}
