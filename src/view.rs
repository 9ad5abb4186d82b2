//! Per-frame snapshot for the renderer and HUD
//!
//! Everything a frontend needs to draw one frame and fill in the HUD, built
//! from the session without exposing it. Serializes to JSON for a JS host.

use glam::Vec2;
use serde::Serialize;

use crate::best_score::ScoreStore;
use crate::consts::HOLE_RADIUS;
use crate::sim::rect::Rect;
use crate::sim::state::{GamePhase, GameSession};

/// Aim line drawn while dragging
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AimGuide {
    pub from: Vec2,
    pub to: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView<'a> {
    pub surface: Vec2,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub cup: Vec2,
    pub hole_radius: f32,
    pub obstacles: &'a [Rect],
    /// Line from the ball along the pull-back, while dragging
    pub aim: Option<AimGuide>,
    /// Arrow tip for a shot waiting on confirmation
    pub proposed_tip: Option<Vec2>,
    /// Power meter fill (0..=1)
    pub power_ratio: f32,
    pub hole_number: usize,
    pub hole_count: usize,
    pub hole_label: String,
    pub strokes: u32,
    pub best: Option<u32>,
    pub best_label: String,
    pub phase: GamePhase,
    /// Confirm/cancel buttons should be visible
    pub can_confirm: bool,
}

impl<S: ScoreStore> GameSession<S> {
    /// Aim line for the drag in progress, capped at the full-power length
    pub fn aim_guide(&self) -> Option<AimGuide> {
        let drag = self.drag?;
        let pull = drag.pull();
        let dir = crate::normalize(pull)?;
        let len = pull.length().min(self.tuning.drag_max);
        Some(AimGuide {
            from: self.ball.pos,
            to: self.ball.pos + dir * len,
        })
    }

    /// Tip of the proposed-shot arrow
    pub fn proposed_tip(&self) -> Option<Vec2> {
        self.pending_shot
            .map(|shot| self.ball.pos + shot.velocity * self.tuning.aim_preview_scale)
    }

    /// Snapshot the session for drawing
    pub fn frame_view(&self) -> FrameView<'_> {
        let hole = self.display_hole();
        FrameView {
            surface: self.course.bounds(),
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            cup: hole.cup,
            hole_radius: HOLE_RADIUS,
            obstacles: &hole.obstacles,
            aim: self.aim_guide(),
            proposed_tip: self.proposed_tip(),
            power_ratio: self.power_ratio,
            hole_number: self.hole_number(),
            hole_count: self.hole_count(),
            hole_label: self.hole_label(),
            strokes: self.strokes,
            best: self.best.get(),
            best_label: self.best.label(),
            phase: self.phase,
            can_confirm: self.pending_shot.is_some(),
        }
    }
}
