//! Field bounds and rounding for [`MotionParams`].
//!
//! Every numeric input is rounded to its field's precision and then checked
//! against `[min, max]`. Violations are collected, never clamped: the models
//! assume validated input.

use crate::error::{MotionError, ValidationCode, ValidationError, ValidationErrors};
use crate::math::round_to;
use crate::params::{
    BezierParams, BounceParams, MotionParams, OvershootParams, SpringParams, WiggleParams,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub decimals: u32,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64, decimals: u32) -> Self {
        Self { min, max, decimals }
    }

    #[inline]
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimals)
    }

    pub fn contains(&self, value: f64) -> bool {
        let v = self.round(value);
        v >= self.min && v <= self.max
    }

    /// Push an error for `path` if `value` is non-finite or out of range.
    pub fn check(&self, path: &str, value: f64, errors: &mut ValidationErrors) {
        if !value.is_finite() {
            errors.push(ValidationError {
                code: ValidationCode::NotFinite,
                message: format!("expected a finite number, got {value}"),
                path: path.to_string(),
            });
            return;
        }
        if !self.contains(value) {
            errors.push(ValidationError {
                code: ValidationCode::OutOfRange,
                message: format!(
                    "expected a value in [{}, {}], got {}",
                    self.min, self.max, value
                ),
                path: path.to_string(),
            });
        }
    }
}

pub const BEZIER_X: FieldBounds = FieldBounds::new(0.0, 1.0, 2);
pub const BEZIER_Y: FieldBounds = FieldBounds::new(-1.0, 2.0, 2);
pub const SPRING_STIFFNESS: FieldBounds = FieldBounds::new(0.0, 100.0, 0);
pub const SPRING_DAMPING: FieldBounds = FieldBounds::new(0.0, 100.0, 0);
pub const SPRING_MASS: FieldBounds = FieldBounds::new(1.0, 5.0, 1);
pub const BOUNCE_COUNT: FieldBounds = FieldBounds::new(1.0, 10.0, 0);
pub const BOUNCE_DAMPING: FieldBounds = FieldBounds::new(0.0, 100.0, 0);
pub const WIGGLE_COUNT: FieldBounds = FieldBounds::new(1.0, 10.0, 0);
pub const WIGGLE_DAMPING: FieldBounds = FieldBounds::new(0.0, 100.0, 0);
pub const OVERSHOOT_MASS: FieldBounds = FieldBounds::new(1.0, 10.0, 1);
pub const OVERSHOOT_DAMPING: FieldBounds = FieldBounds::new(0.0, 100.0, 0);

impl MotionParams {
    /// Collect every out-of-range or non-finite field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        match self {
            MotionParams::Bezier(p) => {
                BEZIER_X.check("x1", p.x1, &mut errors);
                BEZIER_Y.check("y1", p.y1, &mut errors);
                BEZIER_X.check("x2", p.x2, &mut errors);
                BEZIER_Y.check("y2", p.y2, &mut errors);
            }
            MotionParams::Spring(p) => {
                SPRING_STIFFNESS.check("stiffness", p.stiffness, &mut errors);
                SPRING_DAMPING.check("damping", p.damping, &mut errors);
                SPRING_MASS.check("mass", p.mass, &mut errors);
            }
            MotionParams::Bounce(p) => {
                BOUNCE_COUNT.check("bounces", p.bounces, &mut errors);
                BOUNCE_DAMPING.check("damping", p.damping, &mut errors);
            }
            MotionParams::Wiggle(p) => {
                WIGGLE_COUNT.check("wiggles", p.wiggles, &mut errors);
                WIGGLE_DAMPING.check("damping", p.damping, &mut errors);
            }
            MotionParams::Overshoot(p) => {
                OVERSHOOT_MASS.check("mass", p.mass, &mut errors);
                OVERSHOOT_DAMPING.check("damping", p.damping, &mut errors);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Round every field to its fixed precision.
    pub fn normalized(&self) -> MotionParams {
        match *self {
            MotionParams::Bezier(p) => MotionParams::Bezier(BezierParams {
                x1: BEZIER_X.round(p.x1),
                y1: BEZIER_Y.round(p.y1),
                x2: BEZIER_X.round(p.x2),
                y2: BEZIER_Y.round(p.y2),
            }),
            MotionParams::Spring(p) => MotionParams::Spring(SpringParams {
                stiffness: SPRING_STIFFNESS.round(p.stiffness),
                damping: SPRING_DAMPING.round(p.damping),
                mass: SPRING_MASS.round(p.mass),
            }),
            MotionParams::Bounce(p) => MotionParams::Bounce(BounceParams {
                bounces: BOUNCE_COUNT.round(p.bounces),
                damping: BOUNCE_DAMPING.round(p.damping),
            }),
            MotionParams::Wiggle(p) => MotionParams::Wiggle(WiggleParams {
                wiggles: WIGGLE_COUNT.round(p.wiggles),
                damping: WIGGLE_DAMPING.round(p.damping),
            }),
            MotionParams::Overshoot(p) => MotionParams::Overshoot(OvershootParams {
                style: p.style,
                mass: OVERSHOOT_MASS.round(p.mass),
                damping: OVERSHOOT_DAMPING.round(p.damping),
            }),
        }
    }

    /// Validate, then round. This is what [`crate::sample_motion`] runs first.
    pub fn validated(&self) -> Result<MotionParams, MotionError> {
        self.validate().map_err(MotionError::Validation)?;
        Ok(self.normalized())
    }
}
