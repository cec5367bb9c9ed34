//! Physical parameters for each curve kind.
//!
//! Values here are UI-facing (sliders): `stiffness` and `damping` live in
//! `[0, 100]` and are mapped into physical ranges inside the models. Bounds
//! and rounding live in [`crate::validation`].

use serde::{Deserialize, Serialize};

named_enum! {
    /// Curve family selected in the editor.
    pub enum EasingType ("easing type") {
        Bezier => "BEZIER",
        Spring => "SPRING",
        Bounce => "BOUNCE",
        Wiggle => "WIGGLE",
        Overshoot => "OVERSHOOT",
    }
}

named_enum! {
    /// Direction of an overshoot curve. `OUT` is the time reversal of `IN`.
    pub enum OvershootStyle ("overshoot style") {
        In => "IN",
        Out => "OUT",
        InOut => "IN_OUT",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BezierParams {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BounceParams {
    pub bounces: f64,
    pub damping: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WiggleParams {
    pub wiggles: f64,
    pub damping: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OvershootParams {
    pub style: OvershootStyle,
    pub mass: f64,
    pub damping: f64,
}

/// Parameters of one curve, tagged by `kind`.
///
/// JSON shape: `{ "kind": "spring", "stiffness": 20, "damping": 26, "mass": 3.5 }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MotionParams {
    Bezier(BezierParams),
    Spring(SpringParams),
    Bounce(BounceParams),
    Wiggle(WiggleParams),
    Overshoot(OvershootParams),
}

impl MotionParams {
    pub fn easing_type(&self) -> EasingType {
        match self {
            MotionParams::Bezier(_) => EasingType::Bezier,
            MotionParams::Spring(_) => EasingType::Spring,
            MotionParams::Bounce(_) => EasingType::Bounce,
            MotionParams::Wiggle(_) => EasingType::Wiggle,
            MotionParams::Overshoot(_) => EasingType::Overshoot,
        }
    }
}

impl From<BezierParams> for MotionParams {
    fn from(p: BezierParams) -> Self {
        MotionParams::Bezier(p)
    }
}

impl From<SpringParams> for MotionParams {
    fn from(p: SpringParams) -> Self {
        MotionParams::Spring(p)
    }
}

impl From<BounceParams> for MotionParams {
    fn from(p: BounceParams) -> Self {
        MotionParams::Bounce(p)
    }
}

impl From<WiggleParams> for MotionParams {
    fn from(p: WiggleParams) -> Self {
        MotionParams::Wiggle(p)
    }
}

impl From<OvershootParams> for MotionParams {
    fn from(p: OvershootParams) -> Self {
        MotionParams::Overshoot(p)
    }
}
