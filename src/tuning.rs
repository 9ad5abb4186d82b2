//! Physics tuning
//!
//! Friction and restitution are tuned by feel, not measured, so they live in
//! one serializable struct instead of being spread across code paths.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable physics and shot parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-tick velocity multiplier while rolling
    pub friction: f32,
    /// Speed kept after bouncing off an obstacle
    pub obstacle_restitution: f32,
    /// Speed kept after bouncing off a surface edge
    pub wall_restitution: f32,
    /// Speed under which the ball snaps to rest
    pub stop_speed: f32,
    /// Velocity magnitude of a full-power shot
    pub max_power: f32,
    /// Drag length that reaches full power
    pub drag_max: f32,
    /// Minimum power for a drag to count as a shot
    pub min_shot_power: f32,
    /// Length multiplier for the proposed-shot arrow
    pub aim_preview_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            obstacle_restitution: OBSTACLE_RESTITUTION,
            wall_restitution: WALL_RESTITUTION,
            stop_speed: STOP_SPEED,
            max_power: MAX_POWER,
            drag_max: DRAG_MAX,
            min_shot_power: MIN_SHOT_POWER,
            aim_preview_scale: AIM_PREVIEW_SCALE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; fields that are absent keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!(
            "Loaded tuning (friction {}, restitution {}/{})",
            tuning.friction,
            tuning.obstacle_restitution,
            tuning.wall_restitution
        );
        Ok(tuning)
    }

    /// Launch speed that rolls the ball about `distance` on open ground
    ///
    /// Each tick moves the ball by its speed and then applies friction, so a
    /// shot travels `(v - v_stop) / (1 - friction)` before it snaps to rest.
    /// Capped at `max_power`.
    pub fn launch_speed(&self, distance: f32) -> f32 {
        let speed = distance.max(0.0) * (1.0 - self.friction) + self.stop_speed;
        speed.clamp(0.0, self.max_power)
    }
}
