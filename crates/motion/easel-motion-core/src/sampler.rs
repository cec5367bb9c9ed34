//! Motion → CSS compiler: sample, reduce with RDP, serialise.
//!
//! Model:
//! - Sample `n` equally spaced times over `[0, total]` where `n` and the RDP
//!   tolerance come from the [`AccuracyTier`]. `total` is 1 for normalized
//!   models and the settling time (seconds) for springs.
//! - Reduce the `(t, y)` polyline with RDP; the first and last samples always survive.
//! - Emit points as percentage-of-duration x (2 decimals) and y (3 decimals),
//!   plus the `linear()` string built from exactly those points.
//! - Bezier curves are emitted as `cubic-bezier()`; their points come from the
//!   parametric curve so previews can draw them the same way.

use serde::{Deserialize, Serialize};

use crate::accuracy::AccuracyTier;
use crate::config::Config;
use crate::css;
use crate::error::MotionError;
use crate::math::round_to;
use crate::models::{BezierModel, EasingModel, Model, Timeline};
use crate::params::{BezierParams, MotionParams};
use crate::rdp;
use crate::settle::{self, Settling};

pub(crate) const X_DECIMALS: u32 = 2;
pub(crate) const Y_DECIMALS: u32 = 3;

/// One retained point: `x` is a percentage of the duration, `y` the progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledCurve {
    pub css_value: String,
    pub points: Vec<CurvePoint>,
    /// Present only for curves whose duration was estimated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_seconds: Option<f64>,
}

/// Sample `params` at `accuracy` with the default [`Config`].
pub fn sample_motion(
    params: &MotionParams,
    accuracy: AccuracyTier,
) -> Result<SampledCurve, MotionError> {
    sample_motion_with_config(params, accuracy, &Config::default())
}

pub fn sample_motion_with_config(
    params: &MotionParams,
    accuracy: AccuracyTier,
    cfg: &Config,
) -> Result<SampledCurve, MotionError> {
    let params = params.validated()?;
    let curve = match params {
        MotionParams::Bezier(p) => sample_bezier(&p, accuracy),
        _ => sample_model(&Model::new(&params), accuracy, cfg),
    };
    Ok(curve)
}

fn sample_model(model: &Model, accuracy: AccuracyTier, cfg: &Config) -> SampledCurve {
    let settling: Option<Settling> = match model.timeline() {
        Timeline::Normalized => None,
        Timeline::Settling => Some(settle::estimate(model, &cfg.settle)),
    };
    let total = settling.map_or(1.0, |s| s.duration_secs);

    let n = accuracy.sample_count();
    let last = (n - 1) as f64;
    let samples: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let t = total * i as f64 / last;
            (t, model.value_at(t))
        })
        .collect();

    let kept = rdp::simplify(&samples, accuracy.tolerance());
    let mut points: Vec<CurvePoint> = kept
        .iter()
        .map(|&(t, y)| CurvePoint {
            x: round_to(t / total * 100.0, X_DECIMALS),
            y: round_to(y, Y_DECIMALS),
        })
        .collect();

    if let (Some(s), Some(tail)) = (settling, points.last_mut()) {
        if s.converged && cfg.snap_settled_tail {
            tail.y = round_to(model.target(), Y_DECIMALS);
        }
    }

    SampledCurve {
        css_value: css::linear(&points),
        points,
        total_time_seconds: settling.map(|s| s.duration_secs),
    }
}

fn sample_bezier(p: &BezierParams, accuracy: AccuracyTier) -> SampledCurve {
    let model = BezierModel::new(p);
    let n = accuracy.sample_count();
    let last = (n - 1) as f64;
    let samples: Vec<(f64, f64)> = (0..n).map(|i| model.point_at(i as f64 / last)).collect();

    let points = rdp::simplify(&samples, accuracy.tolerance())
        .into_iter()
        .map(|(x, y)| CurvePoint {
            x: round_to(x * 100.0, X_DECIMALS),
            y: round_to(y, Y_DECIMALS),
        })
        .collect();

    SampledCurve {
        css_value: css::cubic_bezier(p),
        points,
        total_time_seconds: None,
    }
}

/// Export a sampled curve as serde_json::Value (stable schema for FFI/serialization).
pub fn export_sampled_json(curve: &SampledCurve) -> serde_json::Value {
    serde_json::to_value(curve).unwrap_or(serde_json::Value::Null)
}
