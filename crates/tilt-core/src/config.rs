use crate::constants::*;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive, finite number of seconds (got {value})")]
    TimeConstant { name: &'static str, value: f32 },
    #[error("{name} must be finite and >= 0 (got {value})")]
    Distance { name: &'static str, value: f32 },
    #[error("initial duration must be finite and >= 0 ms (got {0})")]
    InitialDuration(f64),
    #[error("entrance start must be finite (got {0:?})")]
    EntranceStart(Vec2),
}

/// Tuning for one tilt engine. `Default` matches the shipped card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub initial_tau_sec: f32,
    pub tracking_tau_sec: f32,
    /// Per-axis distance under which the loop may go idle.
    pub settle_epsilon: f32,
    /// Distance under which a "return to center" counts as visually done.
    pub release_distance: f32,
    pub initial_duration_ms: f64,
    /// Entrance start as (inset from right edge, offset from top).
    pub entrance_start: Vec2,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            initial_tau_sec: INITIAL_TAU_SEC,
            tracking_tau_sec: TRACKING_TAU_SEC,
            settle_epsilon: SETTLE_EPSILON,
            release_distance: RELEASE_SETTLE_DISTANCE,
            initial_duration_ms: INITIAL_DURATION_MS,
            entrance_start: Vec2::new(ENTRANCE_INSET_X, ENTRANCE_Y),
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("initial_tau_sec", self.initial_tau_sec),
            ("tracking_tau_sec", self.tracking_tau_sec),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::TimeConstant { name, value });
            }
        }
        for (name, value) in [
            ("settle_epsilon", self.settle_epsilon),
            ("release_distance", self.release_distance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Distance { name, value });
            }
        }
        if !(self.initial_duration_ms.is_finite() && self.initial_duration_ms >= 0.0) {
            return Err(ConfigError::InitialDuration(self.initial_duration_ms));
        }
        if !self.entrance_start.is_finite() {
            return Err(ConfigError::EntranceStart(self.entrance_start));
        }
        Ok(())
    }

    /// Use `ms` as the entrance duration, falling back to the current value
    /// when it is negative or not finite.
    pub fn with_initial_duration_ms(mut self, ms: f64) -> Self {
        if ms.is_finite() && ms >= 0.0 {
            self.initial_duration_ms = ms;
        } else {
            log::warn!(
                "[tilt] ignoring initial duration {}; using {}ms",
                ms,
                self.initial_duration_ms
            );
        }
        self
    }

    /// Off-center point the card starts from on mount, for a surface of `width`.
    #[inline]
    pub fn entrance_point(&self, width: f32) -> Vec2 {
        Vec2::new(width - self.entrance_start.x, self.entrance_start.y)
    }
}
