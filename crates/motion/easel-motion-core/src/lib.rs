//! easel-motion-core: physical motion → CSS timing function compiler.
//!
//! Pipeline: [`MotionParams`] → [`models`] → [`settle`] (springs only) →
//! [`sampler`] (dense sampling + [`rdp`] reduction) → [`SampledCurve`]
//! (`linear()` / `cubic-bezier()` string plus SVG-ready points).
//!
//! Everything here is synchronous, allocation-light and free of shared state.

#[macro_use]
mod names;

pub mod accuracy;
pub mod config;
pub mod css;
pub mod error;
pub mod math;
pub mod models;
pub mod params;
pub mod presets;
pub mod rdp;
pub mod sampler;
pub mod settle;
pub mod svg;
pub mod validation;

// Re-exports for consumers (share codec, wasm adapters)
pub use accuracy::AccuracyTier;
pub use config::{Config, SettleConfig};
pub use error::{MotionError, ValidationCode, ValidationError, ValidationErrors};
pub use models::{EasingModel, Model, Timeline};
pub use params::{
    BezierParams, BounceParams, EasingType, MotionParams, OvershootParams, OvershootStyle,
    SpringParams, WiggleParams,
};
pub use presets::{
    bezier_preset, BezierCurve, BezierStyle, BounceCurve, OvershootCurve, SpringCurve,
    WiggleCurve,
};
pub use sampler::{
    export_sampled_json, sample_motion, sample_motion_with_config, CurvePoint, SampledCurve,
};
pub use settle::Settling;
pub use validation::FieldBounds;
