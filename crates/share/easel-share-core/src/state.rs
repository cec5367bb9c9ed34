//! The full editor state and field access by [`ShareKey`].

use std::str::FromStr;

use easel_motion_core::{
    bezier_preset, named_enum, sample_motion, AccuracyTier, BezierCurve, BezierParams,
    BezierStyle, BounceCurve, BounceParams, CurvePoint, EasingType, FieldBounds, MotionError,
    MotionParams, OvershootCurve, OvershootParams, OvershootStyle, SampledCurve, SpringCurve,
    SpringParams, ValidationErrors, WiggleCurve, WiggleParams,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ShareError;
use crate::keys::{FieldCodec, ShareKey};
use crate::share_state::ShareValue;

named_enum! {
    /// Property animated by the editor preview.
    pub enum PreviewAnimationType ("preview animation type") {
        MoveX => "MOVE_X",
        MoveY => "MOVE_Y",
        Scale => "SCALE",
        Rotate => "ROTATE",
        Opacity => "OPACITY",
    }
}

/// Preview duration in seconds.
pub const PREVIEW_DURATION: FieldBounds = FieldBounds::new(0.1, 10.0, 1);

/// Every field the editor works with.
///
/// Source fields (selections and raw parameters) are what gets shared;
/// `*_value`, `*_points` and `spring_time` are derived and always recomputed
/// through [`EasingState::recompute`]. Every kind keeps its own fields so
/// switching `easing_type` does not lose work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasingState {
    pub easing_type: EasingType,
    pub preview_duration: f64,
    pub preview_animation_type: PreviewAnimationType,
    pub editor_accuracy: AccuracyTier,

    pub bezier_style: BezierStyle,
    pub bezier_curve: BezierCurve,
    pub bezier_is_custom: bool,
    pub bezier_x1: f64,
    pub bezier_y1: f64,
    pub bezier_x2: f64,
    pub bezier_y2: f64,
    pub bezier_value: String,
    pub bezier_points: Vec<CurvePoint>,

    pub spring_curve: SpringCurve,
    pub spring_is_custom: bool,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub spring_mass: f64,
    pub spring_value: String,
    pub spring_points: Vec<CurvePoint>,
    pub spring_time: f64,

    pub bounce_curve: BounceCurve,
    pub bounce_is_custom: bool,
    pub bounce_bounces: f64,
    pub bounce_damping: f64,
    pub bounce_value: String,
    pub bounce_points: Vec<CurvePoint>,

    pub wiggle_curve: WiggleCurve,
    pub wiggle_is_custom: bool,
    pub wiggle_wiggles: f64,
    pub wiggle_damping: f64,
    pub wiggle_value: String,
    pub wiggle_points: Vec<CurvePoint>,

    pub overshoot_style: OvershootStyle,
    pub overshoot_curve: OvershootCurve,
    pub overshoot_is_custom: bool,
    pub overshoot_mass: f64,
    pub overshoot_damping: f64,
    pub overshoot_value: String,
    pub overshoot_points: Vec<CurvePoint>,
}

impl EasingState {
    /// A state selecting the given presets, with raw parameters filled from
    /// them and no derived curves yet.
    pub(crate) fn from_presets(presets: &Presets) -> EasingState {
        let mut state = EasingState {
            easing_type: presets.easing_type,
            preview_duration: presets.preview_duration,
            preview_animation_type: presets.preview_animation_type,
            editor_accuracy: presets.editor_accuracy,
            bezier_style: presets.bezier_style,
            bezier_curve: presets.bezier_curve,
            bezier_is_custom: false,
            bezier_x1: 0.0,
            bezier_y1: 0.0,
            bezier_x2: 0.0,
            bezier_y2: 0.0,
            bezier_value: String::new(),
            bezier_points: Vec::new(),
            spring_curve: presets.spring_curve,
            spring_is_custom: false,
            spring_stiffness: 0.0,
            spring_damping: 0.0,
            spring_mass: 0.0,
            spring_value: String::new(),
            spring_points: Vec::new(),
            spring_time: 0.0,
            bounce_curve: presets.bounce_curve,
            bounce_is_custom: false,
            bounce_bounces: 0.0,
            bounce_damping: 0.0,
            bounce_value: String::new(),
            bounce_points: Vec::new(),
            wiggle_curve: presets.wiggle_curve,
            wiggle_is_custom: false,
            wiggle_wiggles: 0.0,
            wiggle_damping: 0.0,
            wiggle_value: String::new(),
            wiggle_points: Vec::new(),
            overshoot_style: presets.overshoot_style,
            overshoot_curve: presets.overshoot_curve,
            overshoot_is_custom: false,
            overshoot_mass: 0.0,
            overshoot_damping: 0.0,
            overshoot_value: String::new(),
            overshoot_points: Vec::new(),
        };
        for kind in EasingType::ALL {
            state.apply_preset(*kind);
        }
        state
    }

    pub fn is_custom(&self, kind: EasingType) -> bool {
        match kind {
            EasingType::Bezier => self.bezier_is_custom,
            EasingType::Spring => self.spring_is_custom,
            EasingType::Bounce => self.bounce_is_custom,
            EasingType::Wiggle => self.wiggle_is_custom,
            EasingType::Overshoot => self.overshoot_is_custom,
        }
    }

    pub fn set_custom(&mut self, kind: EasingType, custom: bool) {
        let flag = match kind {
            EasingType::Bezier => &mut self.bezier_is_custom,
            EasingType::Spring => &mut self.spring_is_custom,
            EasingType::Bounce => &mut self.bounce_is_custom,
            EasingType::Wiggle => &mut self.wiggle_is_custom,
            EasingType::Overshoot => &mut self.overshoot_is_custom,
        };
        *flag = custom;
    }

    /// Raw parameters of one kind as the motion core takes them.
    pub fn params(&self, kind: EasingType) -> MotionParams {
        match kind {
            EasingType::Bezier => MotionParams::Bezier(BezierParams {
                x1: self.bezier_x1,
                y1: self.bezier_y1,
                x2: self.bezier_x2,
                y2: self.bezier_y2,
            }),
            EasingType::Spring => MotionParams::Spring(SpringParams {
                stiffness: self.spring_stiffness,
                damping: self.spring_damping,
                mass: self.spring_mass,
            }),
            EasingType::Bounce => MotionParams::Bounce(BounceParams {
                bounces: self.bounce_bounces,
                damping: self.bounce_damping,
            }),
            EasingType::Wiggle => MotionParams::Wiggle(WiggleParams {
                wiggles: self.wiggle_wiggles,
                damping: self.wiggle_damping,
            }),
            EasingType::Overshoot => MotionParams::Overshoot(OvershootParams {
                style: self.overshoot_style,
                mass: self.overshoot_mass,
                damping: self.overshoot_damping,
            }),
        }
    }

    /// Overwrite one kind's raw parameters with its selected preset.
    pub fn apply_preset(&mut self, kind: EasingType) {
        match kind {
            EasingType::Bezier => {
                let p = bezier_preset(self.bezier_style, self.bezier_curve);
                self.bezier_x1 = p.x1;
                self.bezier_y1 = p.y1;
                self.bezier_x2 = p.x2;
                self.bezier_y2 = p.y2;
            }
            EasingType::Spring => {
                let p = self.spring_curve.params();
                self.spring_stiffness = p.stiffness;
                self.spring_damping = p.damping;
                self.spring_mass = p.mass;
            }
            EasingType::Bounce => {
                let p = self.bounce_curve.params();
                self.bounce_bounces = p.bounces;
                self.bounce_damping = p.damping;
            }
            EasingType::Wiggle => {
                let p = self.wiggle_curve.params();
                self.wiggle_wiggles = p.wiggles;
                self.wiggle_damping = p.damping;
            }
            EasingType::Overshoot => {
                let p = self.overshoot_curve.params(self.overshoot_style);
                self.overshoot_mass = p.mass;
                self.overshoot_damping = p.damping;
            }
        }
    }

    /// Resolve one kind's parameters (preset unless custom) and resample its
    /// derived fields at the editor accuracy.
    pub fn recompute(&mut self, kind: EasingType) -> Result<(), MotionError> {
        if !self.is_custom(kind) {
            self.apply_preset(kind);
        }
        let curve = sample_motion(&self.params(kind), self.editor_accuracy)?;
        debug!(
            "recomputed {kind} curve ({} points, custom: {})",
            curve.points.len(),
            self.is_custom(kind)
        );
        self.store_curve(kind, curve);
        Ok(())
    }

    fn store_curve(&mut self, kind: EasingType, curve: SampledCurve) {
        let SampledCurve {
            css_value,
            points,
            total_time_seconds,
        } = curve;
        match kind {
            EasingType::Bezier => {
                self.bezier_value = css_value;
                self.bezier_points = points;
            }
            EasingType::Spring => {
                self.spring_value = css_value;
                self.spring_points = points;
                self.spring_time = total_time_seconds.unwrap_or(1.0);
            }
            EasingType::Bounce => {
                self.bounce_value = css_value;
                self.bounce_points = points;
            }
            EasingType::Wiggle => {
                self.wiggle_value = css_value;
                self.wiggle_points = points;
            }
            EasingType::Overshoot => {
                self.overshoot_value = css_value;
                self.overshoot_points = points;
            }
        }
    }

    /// CSS value of the active kind.
    pub fn css_value(&self) -> &str {
        match self.easing_type {
            EasingType::Bezier => &self.bezier_value,
            EasingType::Spring => &self.spring_value,
            EasingType::Bounce => &self.bounce_value,
            EasingType::Wiggle => &self.wiggle_value,
            EasingType::Overshoot => &self.overshoot_value,
        }
    }

    /// Sampled points of the active kind.
    pub fn points(&self) -> &[CurvePoint] {
        match self.easing_type {
            EasingType::Bezier => &self.bezier_points,
            EasingType::Spring => &self.spring_points,
            EasingType::Bounce => &self.bounce_points,
            EasingType::Wiggle => &self.wiggle_points,
            EasingType::Overshoot => &self.overshoot_points,
        }
    }

    pub fn get(&self, key: ShareKey) -> ShareValue {
        let choice = |s: &'static str| ShareValue::Choice(s.to_string());
        match key {
            ShareKey::EasingType => choice(self.easing_type.as_str()),
            ShareKey::PreviewDuration => ShareValue::Number(self.preview_duration),
            ShareKey::PreviewAnimationType => choice(self.preview_animation_type.as_str()),
            ShareKey::EditorAccuracy => choice(self.editor_accuracy.as_str()),
            ShareKey::BezierStyle => choice(self.bezier_style.as_str()),
            ShareKey::BezierCurve => choice(self.bezier_curve.as_str()),
            ShareKey::BezierX1 => ShareValue::Number(self.bezier_x1),
            ShareKey::BezierY1 => ShareValue::Number(self.bezier_y1),
            ShareKey::BezierX2 => ShareValue::Number(self.bezier_x2),
            ShareKey::BezierY2 => ShareValue::Number(self.bezier_y2),
            ShareKey::SpringCurve => choice(self.spring_curve.as_str()),
            ShareKey::SpringStiffness => ShareValue::Number(self.spring_stiffness),
            ShareKey::SpringDamping => ShareValue::Number(self.spring_damping),
            ShareKey::SpringMass => ShareValue::Number(self.spring_mass),
            ShareKey::BounceCurve => choice(self.bounce_curve.as_str()),
            ShareKey::BounceBounces => ShareValue::Number(self.bounce_bounces),
            ShareKey::BounceDamping => ShareValue::Number(self.bounce_damping),
            ShareKey::WiggleCurve => choice(self.wiggle_curve.as_str()),
            ShareKey::WiggleWiggles => ShareValue::Number(self.wiggle_wiggles),
            ShareKey::WiggleDamping => ShareValue::Number(self.wiggle_damping),
            ShareKey::OvershootStyle => choice(self.overshoot_style.as_str()),
            ShareKey::OvershootCurve => choice(self.overshoot_curve.as_str()),
            ShareKey::OvershootMass => ShareValue::Number(self.overshoot_mass),
            ShareKey::OvershootDamping => ShareValue::Number(self.overshoot_damping),
        }
    }

    /// Write one source field. Numbers are range-checked and rounded to the
    /// key's precision; choices must name a known variant.
    pub fn set(&mut self, key: ShareKey, value: &ShareValue) -> Result<(), ShareError> {
        match key {
            ShareKey::EasingType => self.easing_type = parse_choice(key, value)?,
            ShareKey::PreviewDuration => self.preview_duration = parse_number(key, value)?,
            ShareKey::PreviewAnimationType => {
                self.preview_animation_type = parse_choice(key, value)?
            }
            ShareKey::EditorAccuracy => self.editor_accuracy = parse_choice(key, value)?,
            ShareKey::BezierStyle => self.bezier_style = parse_choice(key, value)?,
            ShareKey::BezierCurve => self.bezier_curve = parse_choice(key, value)?,
            ShareKey::BezierX1 => self.bezier_x1 = parse_number(key, value)?,
            ShareKey::BezierY1 => self.bezier_y1 = parse_number(key, value)?,
            ShareKey::BezierX2 => self.bezier_x2 = parse_number(key, value)?,
            ShareKey::BezierY2 => self.bezier_y2 = parse_number(key, value)?,
            ShareKey::SpringCurve => self.spring_curve = parse_choice(key, value)?,
            ShareKey::SpringStiffness => self.spring_stiffness = parse_number(key, value)?,
            ShareKey::SpringDamping => self.spring_damping = parse_number(key, value)?,
            ShareKey::SpringMass => self.spring_mass = parse_number(key, value)?,
            ShareKey::BounceCurve => self.bounce_curve = parse_choice(key, value)?,
            ShareKey::BounceBounces => self.bounce_bounces = parse_number(key, value)?,
            ShareKey::BounceDamping => self.bounce_damping = parse_number(key, value)?,
            ShareKey::WiggleCurve => self.wiggle_curve = parse_choice(key, value)?,
            ShareKey::WiggleWiggles => self.wiggle_wiggles = parse_number(key, value)?,
            ShareKey::WiggleDamping => self.wiggle_damping = parse_number(key, value)?,
            ShareKey::OvershootStyle => self.overshoot_style = parse_choice(key, value)?,
            ShareKey::OvershootCurve => self.overshoot_curve = parse_choice(key, value)?,
            ShareKey::OvershootMass => self.overshoot_mass = parse_number(key, value)?,
            ShareKey::OvershootDamping => self.overshoot_damping = parse_number(key, value)?,
        }
        Ok(())
    }
}

/// Preset selections and editor settings a [`Defaults`](crate::Defaults)
/// version starts from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Presets {
    pub easing_type: EasingType,
    pub preview_duration: f64,
    pub preview_animation_type: PreviewAnimationType,
    pub editor_accuracy: AccuracyTier,
    pub bezier_style: BezierStyle,
    pub bezier_curve: BezierCurve,
    pub spring_curve: SpringCurve,
    pub bounce_curve: BounceCurve,
    pub wiggle_curve: WiggleCurve,
    pub overshoot_style: OvershootStyle,
    pub overshoot_curve: OvershootCurve,
}

fn invalid(key: ShareKey, value: &ShareValue) -> ShareError {
    ShareError::InvalidValue {
        key,
        token: value.to_string(),
    }
}

fn parse_choice<T>(key: ShareKey, value: &ShareValue) -> Result<T, ShareError>
where
    T: FromStr<Err = MotionError>,
{
    match value {
        ShareValue::Choice(name) => name.parse().map_err(|_| invalid(key, value)),
        ShareValue::Number(_) => Err(invalid(key, value)),
    }
}

fn parse_number(key: ShareKey, value: &ShareValue) -> Result<f64, ShareError> {
    let (ShareValue::Number(v), FieldCodec::Number(bounds)) = (value, key.codec()) else {
        return Err(invalid(key, value));
    };
    let mut errors = ValidationErrors::default();
    bounds.check(key.as_str(), *v, &mut errors);
    if !errors.is_empty() {
        return Err(MotionError::Validation(errors).into());
    }
    Ok(bounds.round(*v))
}
