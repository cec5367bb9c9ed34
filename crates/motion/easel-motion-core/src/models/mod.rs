//! Motion models: pure `t ↦ progress` functions built from validated params.
//!
//! [`Model::new`] is the single dispatch point from [`MotionParams`] to a
//! model; nothing else switches on the curve kind to pick math.

pub mod bezier;
pub mod bounce;
pub mod overshoot;
pub mod spring;
pub mod wiggle;

pub use bezier::BezierModel;
pub use bounce::BounceModel;
pub use overshoot::OvershootModel;
pub use spring::{DampingRegime, SpringModel};
pub use wiggle::WiggleModel;

use crate::params::MotionParams;

pub trait EasingModel {
    /// Progress at time `t`. Models on a normalized timeline clamp `t` to `[0, 1]`.
    fn value_at(&self, t: f64) -> f64;

    /// Value the motion comes to rest on.
    fn target(&self) -> f64 {
        1.0
    }
}

/// How the sampler finds the time span of a model.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Timeline {
    /// Fixed span of 1.
    Normalized,
    /// Span found by [`crate::settle::estimate`], in seconds.
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Model {
    Bezier(BezierModel),
    Spring(SpringModel),
    Bounce(BounceModel),
    Wiggle(WiggleModel),
    Overshoot(OvershootModel),
}

impl Model {
    /// Build the model for `params`. Params are expected to be validated.
    pub fn new(params: &MotionParams) -> Model {
        match params {
            MotionParams::Bezier(p) => Model::Bezier(BezierModel::new(p)),
            MotionParams::Spring(p) => Model::Spring(SpringModel::new(p)),
            MotionParams::Bounce(p) => Model::Bounce(BounceModel::new(p)),
            MotionParams::Wiggle(p) => Model::Wiggle(WiggleModel::new(p)),
            MotionParams::Overshoot(p) => Model::Overshoot(OvershootModel::new(p)),
        }
    }

    pub fn timeline(&self) -> Timeline {
        match self {
            Model::Spring(_) => Timeline::Settling,
            Model::Bezier(_) | Model::Bounce(_) | Model::Wiggle(_) | Model::Overshoot(_) => {
                Timeline::Normalized
            }
        }
    }
}

impl EasingModel for Model {
    fn value_at(&self, t: f64) -> f64 {
        match self {
            Model::Bezier(m) => m.value_at(t),
            Model::Spring(m) => m.value_at(t),
            Model::Bounce(m) => m.value_at(t),
            Model::Wiggle(m) => m.value_at(t),
            Model::Overshoot(m) => m.value_at(t),
        }
    }

    fn target(&self) -> f64 {
        match self {
            Model::Bezier(m) => m.target(),
            Model::Spring(m) => m.target(),
            Model::Bounce(m) => m.target(),
            Model::Wiggle(m) => m.target(),
            Model::Overshoot(m) => m.target(),
        }
    }
}
