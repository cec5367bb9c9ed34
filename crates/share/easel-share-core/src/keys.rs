//! The share whitelist: which [`EasingState`](crate::EasingState) fields may
//! travel in a share string, under which one-letter key, and how their values
//! are written.
//!
//! Short keys are assigned explicitly rather than derived from declaration
//! order, so reordering [`ShareKey`] never changes the wire format. Adding a
//! key means appending a new letter; reusing a letter requires a new
//! [`ShareVersion`](crate::ShareVersion).

use easel_motion_core::validation::{
    BEZIER_X, BEZIER_Y, BOUNCE_COUNT, BOUNCE_DAMPING, OVERSHOOT_DAMPING, OVERSHOOT_MASS,
    SPRING_DAMPING, SPRING_MASS, SPRING_STIFFNESS, WIGGLE_COUNT, WIGGLE_DAMPING,
};
use easel_motion_core::{
    named_enum, AccuracyTier, BezierCurve, BezierStyle, BounceCurve, EasingType, FieldBounds,
    OvershootCurve, OvershootStyle, SpringCurve, WiggleCurve,
};

use crate::state::{PreviewAnimationType, PREVIEW_DURATION};

named_enum! {
    pub enum ShareKey ("share key") {
        EasingType => "easingType",
        PreviewDuration => "previewDuration",
        PreviewAnimationType => "previewAnimationType",
        EditorAccuracy => "editorAccuracy",
        BezierStyle => "bezierStyle",
        BezierCurve => "bezierCurve",
        BezierX1 => "bezierX1",
        BezierY1 => "bezierY1",
        BezierX2 => "bezierX2",
        BezierY2 => "bezierY2",
        SpringCurve => "springCurve",
        SpringStiffness => "springStiffness",
        SpringDamping => "springDamping",
        SpringMass => "springMass",
        BounceCurve => "bounceCurve",
        BounceBounces => "bounceBounces",
        BounceDamping => "bounceDamping",
        WiggleCurve => "wiggleCurve",
        WiggleWiggles => "wiggleWiggles",
        WiggleDamping => "wiggleDamping",
        OvershootStyle => "overshootStyle",
        OvershootCurve => "overshootCurve",
        OvershootMass => "overshootMass",
        OvershootDamping => "overshootDamping",
    }
}

/// How a key takes part in reduction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Editor-wide setting, independent of the curve kind.
    Shared,
    /// Preset selector; kept only while the kind is not custom.
    Named,
    /// Raw parameter; kept only while the kind is custom, and its presence
    /// marks the kind as custom on rehydration.
    Custom,
    /// Needed by both named and custom curves of its kind.
    Variant,
}

/// Wire representation of a key's value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FieldCodec {
    /// Written as the index into the table.
    Choice(&'static [&'static str]),
    /// Written as a decimal rounded to the field's precision.
    Number(FieldBounds),
}

impl ShareKey {
    pub fn short_key(self) -> char {
        match self {
            ShareKey::EasingType => 'a',
            ShareKey::PreviewDuration => 'b',
            ShareKey::PreviewAnimationType => 'c',
            ShareKey::EditorAccuracy => 'd',
            ShareKey::BezierStyle => 'e',
            ShareKey::BezierCurve => 'f',
            ShareKey::BezierX1 => 'g',
            ShareKey::BezierY1 => 'h',
            ShareKey::BezierX2 => 'i',
            ShareKey::BezierY2 => 'j',
            ShareKey::SpringCurve => 'k',
            ShareKey::SpringStiffness => 'l',
            ShareKey::SpringDamping => 'm',
            ShareKey::SpringMass => 'n',
            ShareKey::BounceCurve => 'o',
            ShareKey::BounceBounces => 'p',
            ShareKey::BounceDamping => 'q',
            ShareKey::WiggleCurve => 'r',
            ShareKey::WiggleWiggles => 's',
            ShareKey::WiggleDamping => 't',
            ShareKey::OvershootStyle => 'u',
            ShareKey::OvershootCurve => 'v',
            ShareKey::OvershootMass => 'w',
            ShareKey::OvershootDamping => 'x',
        }
    }

    pub fn from_short_key(c: char) -> Option<ShareKey> {
        ShareKey::ALL.iter().copied().find(|k| k.short_key() == c)
    }

    /// The curve kind this key belongs to, `None` for editor-wide keys.
    pub fn group(self) -> Option<EasingType> {
        match self {
            ShareKey::EasingType
            | ShareKey::PreviewDuration
            | ShareKey::PreviewAnimationType
            | ShareKey::EditorAccuracy => None,
            ShareKey::BezierStyle
            | ShareKey::BezierCurve
            | ShareKey::BezierX1
            | ShareKey::BezierY1
            | ShareKey::BezierX2
            | ShareKey::BezierY2 => Some(EasingType::Bezier),
            ShareKey::SpringCurve
            | ShareKey::SpringStiffness
            | ShareKey::SpringDamping
            | ShareKey::SpringMass => Some(EasingType::Spring),
            ShareKey::BounceCurve | ShareKey::BounceBounces | ShareKey::BounceDamping => {
                Some(EasingType::Bounce)
            }
            ShareKey::WiggleCurve | ShareKey::WiggleWiggles | ShareKey::WiggleDamping => {
                Some(EasingType::Wiggle)
            }
            ShareKey::OvershootStyle
            | ShareKey::OvershootCurve
            | ShareKey::OvershootMass
            | ShareKey::OvershootDamping => Some(EasingType::Overshoot),
        }
    }

    pub fn role(self) -> Role {
        match self {
            ShareKey::EasingType
            | ShareKey::PreviewDuration
            | ShareKey::PreviewAnimationType
            | ShareKey::EditorAccuracy => Role::Shared,
            ShareKey::BezierStyle
            | ShareKey::BezierCurve
            | ShareKey::SpringCurve
            | ShareKey::BounceCurve
            | ShareKey::WiggleCurve
            | ShareKey::OvershootCurve => Role::Named,
            ShareKey::OvershootStyle => Role::Variant,
            ShareKey::BezierX1
            | ShareKey::BezierY1
            | ShareKey::BezierX2
            | ShareKey::BezierY2
            | ShareKey::SpringStiffness
            | ShareKey::SpringDamping
            | ShareKey::SpringMass
            | ShareKey::BounceBounces
            | ShareKey::BounceDamping
            | ShareKey::WiggleWiggles
            | ShareKey::WiggleDamping
            | ShareKey::OvershootMass
            | ShareKey::OvershootDamping => Role::Custom,
        }
    }

    pub fn codec(self) -> FieldCodec {
        use FieldCodec::{Choice, Number};
        match self {
            ShareKey::EasingType => Choice(EasingType::NAMES),
            ShareKey::PreviewDuration => Number(PREVIEW_DURATION),
            ShareKey::PreviewAnimationType => Choice(PreviewAnimationType::NAMES),
            ShareKey::EditorAccuracy => Choice(AccuracyTier::NAMES),
            ShareKey::BezierStyle => Choice(BezierStyle::NAMES),
            ShareKey::BezierCurve => Choice(BezierCurve::NAMES),
            ShareKey::BezierX1 | ShareKey::BezierX2 => Number(BEZIER_X),
            ShareKey::BezierY1 | ShareKey::BezierY2 => Number(BEZIER_Y),
            ShareKey::SpringCurve => Choice(SpringCurve::NAMES),
            ShareKey::SpringStiffness => Number(SPRING_STIFFNESS),
            ShareKey::SpringDamping => Number(SPRING_DAMPING),
            ShareKey::SpringMass => Number(SPRING_MASS),
            ShareKey::BounceCurve => Choice(BounceCurve::NAMES),
            ShareKey::BounceBounces => Number(BOUNCE_COUNT),
            ShareKey::BounceDamping => Number(BOUNCE_DAMPING),
            ShareKey::WiggleCurve => Choice(WiggleCurve::NAMES),
            ShareKey::WiggleWiggles => Number(WIGGLE_COUNT),
            ShareKey::WiggleDamping => Number(WIGGLE_DAMPING),
            ShareKey::OvershootStyle => Choice(OvershootStyle::NAMES),
            ShareKey::OvershootCurve => Choice(OvershootCurve::NAMES),
            ShareKey::OvershootMass => Number(OVERSHOOT_MASS),
            ShareKey::OvershootDamping => Number(OVERSHOOT_DAMPING),
        }
    }

    /// Keys that carry a kind's raw parameters.
    pub fn custom_keys(kind: EasingType) -> impl Iterator<Item = ShareKey> {
        ShareKey::ALL
            .iter()
            .copied()
            .filter(move |k| k.group() == Some(kind) && k.role() == Role::Custom)
    }
}
