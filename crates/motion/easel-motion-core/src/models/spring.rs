//! Damped harmonic oscillator released from rest at 0 towards 1.
//!
//! UI stiffness/damping in `[0, 100]` map linearly onto `k ∈ [1, 500]` and
//! `c ∈ [5, 25]`; mass is used as is. Time is in seconds and unbounded, so
//! the sampler pairs this model with [`crate::settle`].

use crate::math::map_range;
use crate::params::SpringParams;

use super::EasingModel;

/// Physical stiffness range `k`.
pub const STIFFNESS_RANGE: (f64, f64) = (1.0, 500.0);
/// Physical damping coefficient range `c`.
pub const DAMPING_RANGE: (f64, f64) = (5.0, 25.0);

const CRITICAL_EPSILON: f64 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    Under,
    Critical,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringModel {
    /// Natural frequency ω0 = √(k/m).
    pub omega0: f64,
    /// Damping ratio ζ = c / (2√(km)).
    pub zeta: f64,
}

impl SpringModel {
    pub fn new(p: &SpringParams) -> Self {
        let k = map_range(p.stiffness, 0.0, 100.0, STIFFNESS_RANGE.0, STIFFNESS_RANGE.1);
        let c = map_range(p.damping, 0.0, 100.0, DAMPING_RANGE.0, DAMPING_RANGE.1);
        let m = p.mass;
        Self {
            omega0: (k / m).sqrt(),
            zeta: c / (2.0 * (k * m).sqrt()),
        }
    }

    pub fn regime(&self) -> DampingRegime {
        if (self.zeta - 1.0).abs() < CRITICAL_EPSILON {
            DampingRegime::Critical
        } else if self.zeta < 1.0 {
            DampingRegime::Under
        } else {
            DampingRegime::Over
        }
    }
}

impl EasingModel for SpringModel {
    fn value_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.omega0;
        let zeta = self.zeta;
        match self.regime() {
            DampingRegime::Under => {
                let wd = w0 * (1.0 - zeta * zeta).sqrt();
                let envelope = (-zeta * w0 * t).exp();
                1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
            }
            DampingRegime::Critical => 1.0 - (-w0 * t).exp() * (1.0 + w0 * t),
            DampingRegime::Over => {
                let root = (zeta * zeta - 1.0).sqrt();
                let r1 = -w0 * (zeta - root);
                let r2 = -w0 * (zeta + root);
                1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring(stiffness: f64, damping: f64, mass: f64) -> SpringModel {
        SpringModel::new(&SpringParams {
            stiffness,
            damping,
            mass,
        })
    }

    #[test]
    fn heavy_preset_is_underdamped() {
        let s = spring(20.0, 26.0, 3.5);
        assert_eq!(s.regime(), DampingRegime::Under);
        assert!((s.omega0 - (100.8f64 / 3.5).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn every_regime_starts_at_rest_and_converges() {
        // soft + heavy + max damping is overdamped
        let over = spring(0.0, 100.0, 5.0);
        assert_eq!(over.regime(), DampingRegime::Over);
        let under = spring(100.0, 0.0, 1.0);
        assert_eq!(under.regime(), DampingRegime::Under);
        let critical = SpringModel {
            omega0: 4.0,
            zeta: 1.0,
        };
        assert_eq!(critical.regime(), DampingRegime::Critical);

        for s in [over, under, critical] {
            assert_eq!(s.value_at(0.0), 0.0);
            assert!(s.value_at(1e-4).abs() < 1e-3);
            assert!((s.value_at(200.0) - 1.0).abs() < 1e-3);
        }
    }
}
