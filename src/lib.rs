//! Gold Golf - A drag-to-shoot mini-golf game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (physics, collisions, round state)
//! - `best_score`: Best round total, persisted through a key-value store
//! - `tuning`: Data-driven physics balance
//! - `view`: Per-frame snapshot handed to the renderer/HUD
//! - `platform`: Browser input normalization and bindings

pub mod best_score;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod view;

pub use best_score::{BestScore, MemoryStore, ScoreStore};
pub use tuning::Tuning;
pub use view::FrameView;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playing surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 960.0;
    pub const SURFACE_HEIGHT: f32 = 640.0;

    /// Ball and cup
    pub const BALL_RADIUS: f32 = 10.0;
    pub const HOLE_RADIUS: f32 = 18.0;

    /// Shot power (pixels per tick at full pull)
    pub const MAX_POWER: f32 = 22.0;
    /// Drag distance that maps to full power
    pub const DRAG_MAX: f32 = 160.0;
    /// Shots at or below this power are treated as accidental
    pub const MIN_SHOT_POWER: f32 = 0.5;

    /// Pointer must land this close to the ball to start aiming
    pub const GRAB_RADIUS: f32 = 40.0;

    /// Per-tick velocity multiplier while rolling
    pub const FRICTION: f32 = 0.985;
    /// Below this speed the ball is considered stopped
    pub const STOP_SPEED: f32 = 0.08;
    /// Fraction of speed kept after hitting an obstacle or a wall
    pub const OBSTACLE_RESTITUTION: f32 = 0.7;
    pub const WALL_RESTITUTION: f32 = 0.7;

    /// Pause between sinking the ball and starting the next hole (ms)
    pub const HOLE_ADVANCE_DELAY_MS: f32 = 600.0;
    /// Pause between finishing the round and offering a restart (ms)
    pub const ROUND_COMPLETE_DELAY_MS: f32 = 80.0;

    /// Proposed-shot arrow length per unit of velocity
    pub const AIM_PREVIEW_SCALE: f32 = 8.0;

    /// Key for the persisted best score
    pub const BEST_SCORE_KEY: &str = "gold-golf-best";
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Clamp `x` into `[min, max]`
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    x.max(min).min(max)
}

/// Unit vector in the direction of `v`, or `None` for a zero-length vector
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = v.length();
    if len > 0.0 { Some(v / len) } else { None }
}
