//! Parametric bounce on `t ∈ [0, 1]`: `1 - |cos(nπt)| · (1-t)^p · e^(-d·t)`.
//!
//! Each zero of the cosine is a touch-down on 1, so `bounces = n` gives `n`
//! contacts. `(1-t)^p` pins the end at exactly 1; `d` comes from the UI
//! damping mapped onto `[-2, 2]`.

use std::f64::consts::PI;

use crate::math::map_range;
use crate::params::BounceParams;

use super::EasingModel;

pub const DAMPING_RANGE: (f64, f64) = (-2.0, 2.0);
const ENVELOPE_POWER: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceModel {
    frequency: f64,
    decay: f64,
}

impl BounceModel {
    pub fn new(p: &BounceParams) -> Self {
        Self {
            frequency: p.bounces * PI,
            decay: map_range(p.damping, 0.0, 100.0, DAMPING_RANGE.0, DAMPING_RANGE.1),
        }
    }

    fn envelope(&self, t: f64) -> f64 {
        (1.0 - t).powf(ENVELOPE_POWER) * (-self.decay * t).exp()
    }
}

impl EasingModel for BounceModel {
    fn value_at(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (self.frequency * t).cos().abs() * self.envelope(t)
    }
}
