//! Aiming input: pointer drag and shot confirmation
//!
//! The platform layer turns mouse/touch events into surface points before
//! calling these; nothing here sees a raw event.

use glam::Vec2;

use super::shot::{plan_shot, power_ratio};
use super::state::{DragGesture, GameEvent, GamePhase, GameSession, PendingShot};
use crate::best_score::ScoreStore;
use crate::consts::GRAB_RADIUS;
use crate::distance;

impl<S: ScoreStore> GameSession<S> {
    /// Whether a new drag may start right now
    pub fn can_aim(&self) -> bool {
        matches!(self.phase, GamePhase::Idle | GamePhase::Aiming)
    }

    /// Pointer pressed; starts aiming if it lands on the ball
    ///
    /// A new drag replaces any shot that was waiting for confirmation.
    pub fn pointer_down(&mut self, point: Vec2) -> bool {
        if !self.can_aim() || distance(point, self.ball.pos) >= GRAB_RADIUS {
            return false;
        }
        self.drag = Some(DragGesture::new(point));
        self.pending_shot = None;
        self.power_ratio = 0.0;
        self.phase = GamePhase::Aiming;
        true
    }

    /// Pointer moved; updates the aim and power meter while dragging
    pub fn pointer_move(&mut self, point: Vec2) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = point;
            self.power_ratio = power_ratio(drag.start, drag.current, self.tuning.drag_max);
        }
    }

    /// Pointer released; plans a shot from the drag
    ///
    /// Returns the planned velocity. A drag too weak to count leaves no
    /// pending shot and drops back to `Idle` without charging a stroke.
    pub fn pointer_up(&mut self) -> Option<Vec2> {
        let drag = self.drag.take()?;
        match plan_shot(drag.start, drag.current, &self.tuning) {
            Some(velocity) => {
                self.power_ratio = power_ratio(drag.start, drag.current, self.tuning.drag_max);
                self.pending_shot = Some(PendingShot {
                    velocity,
                    origin: drag,
                });
                log::debug!(
                    "Shot planned: {:?} (power {:.0}%)",
                    velocity,
                    self.power_ratio * 100.0
                );
                Some(velocity)
            }
            None => {
                self.pending_shot = None;
                self.power_ratio = 0.0;
                self.phase = GamePhase::Idle;
                None
            }
        }
    }

    /// Hit the planned shot: sets the ball moving and charges one stroke
    pub fn confirm_pending_shot(&mut self) -> bool {
        if self.phase != GamePhase::Aiming {
            return false;
        }
        let Some(shot) = self.pending_shot.take() else {
            return false;
        };
        self.ball.vel = shot.velocity;
        self.strokes += 1;
        self.power_ratio = 0.0;
        self.phase = GamePhase::Rolling;
        log::debug!("Stroke {}: {:?}", self.strokes, shot.velocity);
        self.push_event(GameEvent::ShotTaken {
            strokes: self.strokes,
        });
        true
    }

    /// Throw away the planned shot; no stroke is charged
    ///
    /// Does nothing when no shot is pending.
    pub fn cancel_pending_shot(&mut self) {
        if self.pending_shot.take().is_some() {
            self.power_ratio = 0.0;
            if self.drag.is_none() {
                self.phase = GamePhase::Idle;
            }
        }
    }
}
