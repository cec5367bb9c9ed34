//! Static catalog of named curves.
//!
//! Bezier presets are keyed by (style, curve) and use the conventional
//! easings.net control points. The physical families map a curve name to
//! slider values; overshoot combines its curve with an independent style.

use crate::params::{
    BezierParams, BounceParams, OvershootParams, OvershootStyle, SpringParams, WiggleParams,
};

named_enum! {
    pub enum BezierStyle ("bezier style") {
        In => "IN",
        Out => "OUT",
        InOut => "IN_OUT",
    }
}

named_enum! {
    pub enum BezierCurve ("bezier curve") {
        Sine => "SINE",
        Quad => "QUAD",
        Cubic => "CUBIC",
        Quart => "QUART",
        Quint => "QUINT",
        Expo => "EXPO",
        Circ => "CIRC",
        Back => "BACK",
    }
}

named_enum! {
    pub enum SpringCurve ("spring curve") {
        Heavy => "HEAVY",
        Bouncy => "BOUNCY",
        Drop => "DROP",
        Glide => "GLIDE",
        Snappy => "SNAPPY",
        Lazy => "LAZY",
        Elastic => "ELASTIC",
    }
}

named_enum! {
    pub enum BounceCurve ("bounce curve") {
        Firm => "FIRM",
        Soft => "SOFT",
        Sharp => "SHARP",
        Subtle => "SUBTLE",
        Playful => "PLAYFUL",
        Springy => "SPRINGY",
    }
}

named_enum! {
    pub enum WiggleCurve ("wiggle curve") {
        Subtle => "SUBTLE",
        Energetic => "ENERGETIC",
        Playful => "PLAYFUL",
        Sharp => "SHARP",
        Smooth => "SMOOTH",
        Intense => "INTENSE",
    }
}

named_enum! {
    pub enum OvershootCurve ("overshoot curve") {
        Soft => "SOFT",
        Firm => "FIRM",
        Smooth => "SMOOTH",
        Dynamic => "DYNAMIC",
        Dramatic => "DRAMATIC",
    }
}

const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> BezierParams {
    BezierParams { x1, y1, x2, y2 }
}

/// Control points for a named Bezier curve.
pub fn bezier_preset(style: BezierStyle, curve: BezierCurve) -> BezierParams {
    use BezierCurve as C;
    use BezierStyle as S;
    match (style, curve) {
        (S::In, C::Sine) => bezier(0.12, 0.0, 0.39, 0.0),
        (S::In, C::Quad) => bezier(0.11, 0.0, 0.5, 0.0),
        (S::In, C::Cubic) => bezier(0.32, 0.0, 0.67, 0.0),
        (S::In, C::Quart) => bezier(0.5, 0.0, 0.75, 0.0),
        (S::In, C::Quint) => bezier(0.64, 0.0, 0.78, 0.0),
        (S::In, C::Expo) => bezier(0.7, 0.0, 0.84, 0.0),
        (S::In, C::Circ) => bezier(0.55, 0.0, 1.0, 0.45),
        (S::In, C::Back) => bezier(0.36, 0.0, 0.66, -0.56),
        (S::Out, C::Sine) => bezier(0.61, 1.0, 0.88, 1.0),
        (S::Out, C::Quad) => bezier(0.5, 1.0, 0.89, 1.0),
        (S::Out, C::Cubic) => bezier(0.33, 1.0, 0.68, 1.0),
        (S::Out, C::Quart) => bezier(0.25, 1.0, 0.5, 1.0),
        (S::Out, C::Quint) => bezier(0.22, 1.0, 0.36, 1.0),
        (S::Out, C::Expo) => bezier(0.16, 1.0, 0.3, 1.0),
        (S::Out, C::Circ) => bezier(0.0, 0.55, 0.45, 1.0),
        (S::Out, C::Back) => bezier(0.34, 1.56, 0.64, 1.0),
        (S::InOut, C::Sine) => bezier(0.37, 0.0, 0.63, 1.0),
        (S::InOut, C::Quad) => bezier(0.45, 0.0, 0.55, 1.0),
        (S::InOut, C::Cubic) => bezier(0.65, 0.0, 0.35, 1.0),
        (S::InOut, C::Quart) => bezier(0.76, 0.0, 0.24, 1.0),
        (S::InOut, C::Quint) => bezier(0.83, 0.0, 0.17, 1.0),
        (S::InOut, C::Expo) => bezier(0.87, 0.0, 0.13, 1.0),
        (S::InOut, C::Circ) => bezier(0.85, 0.0, 0.15, 1.0),
        (S::InOut, C::Back) => bezier(0.68, -0.6, 0.32, 1.6),
    }
}

impl SpringCurve {
    pub fn params(self) -> SpringParams {
        let (stiffness, damping, mass) = match self {
            SpringCurve::Heavy => (20.0, 26.0, 3.5),
            SpringCurve::Bouncy => (50.0, 10.0, 1.0),
            SpringCurve::Drop => (35.0, 30.0, 2.0),
            SpringCurve::Glide => (15.0, 60.0, 1.5),
            SpringCurve::Snappy => (80.0, 45.0, 1.0),
            SpringCurve::Lazy => (10.0, 40.0, 4.0),
            SpringCurve::Elastic => (70.0, 5.0, 1.0),
        };
        SpringParams {
            stiffness,
            damping,
            mass,
        }
    }
}

impl BounceCurve {
    pub fn params(self) -> BounceParams {
        let (bounces, damping) = match self {
            BounceCurve::Firm => (4.0, 60.0),
            BounceCurve::Soft => (2.0, 30.0),
            BounceCurve::Sharp => (3.0, 90.0),
            BounceCurve::Subtle => (1.0, 50.0),
            BounceCurve::Playful => (5.0, 20.0),
            BounceCurve::Springy => (6.0, 40.0),
        };
        BounceParams { bounces, damping }
    }
}

impl WiggleCurve {
    pub fn params(self) -> WiggleParams {
        let (wiggles, damping) = match self {
            WiggleCurve::Subtle => (2.0, 60.0),
            WiggleCurve::Energetic => (6.0, 20.0),
            WiggleCurve::Playful => (4.0, 40.0),
            WiggleCurve::Sharp => (8.0, 70.0),
            WiggleCurve::Smooth => (3.0, 80.0),
            WiggleCurve::Intense => (10.0, 10.0),
        };
        WiggleParams { wiggles, damping }
    }
}

impl OvershootCurve {
    pub fn params(self, style: OvershootStyle) -> OvershootParams {
        let (mass, damping) = match self {
            OvershootCurve::Soft => (2.0, 60.0),
            OvershootCurve::Firm => (3.0, 40.0),
            OvershootCurve::Smooth => (1.5, 80.0),
            OvershootCurve::Dynamic => (4.0, 20.0),
            OvershootCurve::Dramatic => (5.0, 0.0),
        };
        OvershootParams {
            style,
            mass,
            damping,
        }
    }
}
