//! Damped sinusoid under a raised-cosine window on `t ∈ [0, 1]`.
//!
//! `ω0 = wiggles·π`, decay `ζ·ω0` with the UI damping mapped onto `[0, 0.2]`.
//! The Hann window forces 0 at both ends, and the result is scaled so the
//! largest excursion is 1. The motion returns to 0.

use std::f64::consts::PI;

use crate::math::map_range;
use crate::params::WiggleParams;

use super::EasingModel;

pub const DAMPING_RANGE: (f64, f64) = (0.0, 0.2);
const PEAK_SCAN_STEPS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WiggleModel {
    omega: f64,
    decay: f64,
    scale: f64,
}

impl WiggleModel {
    pub fn new(p: &WiggleParams) -> Self {
        let omega = p.wiggles * PI;
        let zeta = map_range(p.damping, 0.0, 100.0, DAMPING_RANGE.0, DAMPING_RANGE.1);
        let mut model = Self {
            omega,
            decay: zeta * omega,
            scale: 1.0,
        };
        let peak = (0..=PEAK_SCAN_STEPS)
            .map(|i| model.raw(i as f64 / PEAK_SCAN_STEPS as f64).abs())
            .fold(0.0_f64, f64::max);
        if peak > 0.0 {
            model.scale = peak.recip();
        }
        model
    }

    fn raw(&self, t: f64) -> f64 {
        let window = 0.5 * (1.0 - (2.0 * PI * t).cos());
        window * (-self.decay * t).exp() * (self.omega * t).sin()
    }
}

impl EasingModel for WiggleModel {
    fn value_at(&self, t: f64) -> f64 {
        self.raw(t.clamp(0.0, 1.0)) * self.scale
    }

    fn target(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalised_peak_and_neutral_ends() {
        let m = WiggleModel::new(&WiggleParams {
            wiggles: 4.0,
            damping: 40.0,
        });
        assert!(m.value_at(0.0).abs() < 1e-12);
        assert!(m.value_at(1.0).abs() < 1e-9);
        let peak = (0..=1000)
            .map(|i| m.value_at(i as f64 / 1000.0).abs())
            .fold(0.0_f64, f64::max);
        assert!((peak - 1.0).abs() < 1e-9);
        assert_eq!(m.target(), 0.0);
    }
}
