//! Settling-time estimation for models without a natural duration.
//!
//! Two passes over simulated frames:
//! 1. coarse: step until |Δy/Δt| stays within `velocity_epsilon` for
//!    `settle_frames` frames in a row, so a zero crossing of an oscillation
//!    cannot end the search on its own;
//! 2. fine: keep stepping until the value rounds (2 decimals) onto the target.
//!
//! Both passes stop at `cutoff_secs`. Hitting the cutoff is not an error: the
//! cutoff time is used and [`Settling::converged`] is false.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::SettleConfig;
use crate::math::round_to;
use crate::models::EasingModel;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settling {
    /// Duration rounded to `duration_step_secs`.
    pub duration_secs: f64,
    /// False when the cutoff was reached first.
    pub converged: bool,
}

pub fn estimate<M: EasingModel + ?Sized>(model: &M, cfg: &SettleConfig) -> Settling {
    let dt = cfg.frame_step_secs;
    let target = round_to(model.target(), 2);
    let max_frames = (cfg.cutoff_secs / dt).ceil() as usize;
    let time = |frame: usize| frame as f64 * dt;

    let mut frame = 0usize;
    let mut calm = 0usize;
    while frame < max_frames {
        let t = time(frame);
        let velocity = (model.value_at(t + dt) - model.value_at(t)) / dt;
        if velocity.abs() <= cfg.velocity_epsilon {
            calm += 1;
            if calm >= cfg.settle_frames {
                break;
            }
        } else {
            calm = 0;
        }
        frame += 1;
    }

    while frame < max_frames && round_to(model.value_at(time(frame)), 2) != target {
        frame += 1;
    }

    let converged = frame < max_frames;
    let raw = time(frame.min(max_frames)).min(cfg.cutoff_secs);
    let step = cfg.duration_step_secs;
    let duration_secs = round_to(((raw / step).round() * step).max(step), 3);

    if converged {
        debug!("settled after {frame} frames -> {duration_secs}s");
    } else {
        warn!(
            "motion did not settle within {}s; using best-effort duration {duration_secs}s",
            cfg.cutoff_secs
        );
    }

    Settling {
        duration_secs,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl EasingModel for Constant {
        fn value_at(&self, _t: f64) -> f64 {
            self.0
        }
    }

    /// Never calms down.
    struct Sawtooth;

    impl EasingModel for Sawtooth {
        fn value_at(&self, t: f64) -> f64 {
            (t * 10.0).fract()
        }
    }

    #[test]
    fn already_settled_model_needs_only_the_calm_window() {
        let s = estimate(&Constant(1.0), &SettleConfig::default());
        assert!(s.converged);
        // 25 calm frames at 16ms, rounded to 0.1s
        assert_eq!(s.duration_secs, 0.4);
    }

    #[test]
    fn cutoff_is_best_effort() {
        let cfg = SettleConfig::default();
        let s = estimate(&Sawtooth, &cfg);
        assert!(!s.converged);
        assert_eq!(s.duration_secs, cfg.cutoff_secs);
    }
}
