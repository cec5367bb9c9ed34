//! Versioned default state.
//!
//! Reduction drops fields equal to the defaults and rehydration fills the
//! rest from them, so both sides of a link must agree on the defaults of the
//! link's version. The defaults are passed around explicitly; `current()` is
//! only a lazily built instance of the newest version.

use easel_motion_core::{
    named_enum, AccuracyTier, BezierCurve, BezierStyle, BounceCurve, EasingType, OvershootCurve,
    OvershootStyle, SpringCurve, WiggleCurve,
};
use once_cell::sync::Lazy;

use crate::error::ShareError;
use crate::state::{EasingState, Presets, PreviewAnimationType};

named_enum! {
    /// Share string format version, written as the first character.
    pub enum ShareVersion ("share version") {
        V0 => "0",
    }
}

impl ShareVersion {
    pub const CURRENT: ShareVersion = ShareVersion::V0;
}

static CURRENT: Lazy<Defaults> = Lazy::new(|| {
    Defaults::for_version(ShareVersion::CURRENT).expect("built-in defaults should sample")
});

#[derive(Clone, Debug, PartialEq)]
pub struct Defaults {
    version: ShareVersion,
    state: EasingState,
}

impl Defaults {
    /// Build the defaults of `version`, with derived curves computed for
    /// every kind.
    pub fn for_version(version: ShareVersion) -> Result<Defaults, ShareError> {
        let presets = match version {
            ShareVersion::V0 => Presets {
                easing_type: EasingType::Bezier,
                preview_duration: 1.0,
                preview_animation_type: PreviewAnimationType::MoveX,
                editor_accuracy: AccuracyTier::High,
                bezier_style: BezierStyle::InOut,
                bezier_curve: BezierCurve::Cubic,
                spring_curve: SpringCurve::Heavy,
                bounce_curve: BounceCurve::Firm,
                wiggle_curve: WiggleCurve::Playful,
                overshoot_style: OvershootStyle::Out,
                overshoot_curve: OvershootCurve::Soft,
            },
        };
        let mut state = EasingState::from_presets(&presets);
        for kind in EasingType::ALL {
            state.recompute(*kind)?;
        }
        Ok(Defaults { version, state })
    }

    /// Defaults of [`ShareVersion::CURRENT`], built on first use.
    pub fn current() -> &'static Defaults {
        &CURRENT
    }

    pub fn version(&self) -> ShareVersion {
        self.version
    }

    pub fn state(&self) -> &EasingState {
        &self.state
    }
}
