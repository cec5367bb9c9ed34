//! Configuration for easel-motion-core.

use serde::{Deserialize, Serialize};

/// Constants for the settling-time estimator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    /// Simulated frame step (seconds).
    pub frame_step_secs: f64,
    /// |velocity| at or below this counts as calm (progress units per second).
    pub velocity_epsilon: f64,
    /// Consecutive calm frames required before the fine pass starts.
    pub settle_frames: usize,
    /// Hard stop for the simulation (seconds).
    pub cutoff_secs: f64,
    /// Final durations are rounded to a multiple of this (seconds).
    pub duration_step_secs: f64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            frame_step_secs: 0.016,
            velocity_epsilon: 0.005,
            settle_frames: 25,
            cutoff_secs: 25.0,
            duration_step_secs: 0.1,
        }
    }
}

/// Sampler configuration. Keep this minimal; accuracy itself is chosen per call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settle: SettleConfig,
    /// Land the last point of a converged settling curve exactly on its target.
    pub snap_settled_tail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle: SettleConfig::default(),
            snap_settled_tail: true,
        }
    }
}
