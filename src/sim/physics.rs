//! Ball physics for one simulation tick
//!
//! Order matters: integrate, push out of obstacles, then walls, then
//! friction, then the stop and sink checks.

use glam::Vec2;

use super::collision::{ball_in_cup, ball_rect_collision, reflect_velocity, resolve_walls};
use super::course::HoleDef;
use super::rect::Rect;
use super::state::Ball;
use crate::consts::HOLE_RADIUS;
use crate::tuning::Tuning;

/// What the ball did during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still moving
    Rolling,
    /// Slowed below the stop speed and came to rest
    Stopped,
    /// Dropped into the cup
    Holed,
}

/// Push the ball out of every obstacle it overlaps and bounce it
///
/// Obstacles are handled one at a time in order. When the ball overlaps two
/// at once the second correction can partly undo the first; at this speed
/// and obstacle count that is accepted. Returns the number of contacts.
pub fn resolve_obstacles(ball: &mut Ball, obstacles: &[Rect], restitution: f32) -> u32 {
    let mut contacts = 0;
    for rect in obstacles {
        let hit = ball_rect_collision(ball.pos, ball.radius, rect);
        if !hit.hit {
            continue;
        }
        ball.pos += hit.normal * hit.penetration;
        ball.vel = reflect_velocity(ball.vel, hit.normal) * restitution;
        contacts += 1;
    }
    contacts
}

/// Advance the ball by one tick on `hole`, inside a surface of size `bounds`
pub fn advance(ball: &mut Ball, hole: &HoleDef, bounds: Vec2, tuning: &Tuning) -> StepOutcome {
    ball.pos += ball.vel;

    let contacts = resolve_obstacles(ball, &hole.obstacles, tuning.obstacle_restitution);
    if contacts > 0 {
        log::debug!("Obstacle contacts: {} at {:?}", contacts, ball.pos);
    }

    let radius = ball.radius;
    resolve_walls(
        &mut ball.pos,
        &mut ball.vel,
        radius,
        bounds,
        tuning.wall_restitution,
    );

    ball.vel *= tuning.friction;

    let mut outcome = StepOutcome::Rolling;
    if ball.speed() < tuning.stop_speed {
        ball.vel = Vec2::ZERO;
        outcome = StepOutcome::Stopped;
    }

    // Checked every tick, so a fast ball can drop without stopping first
    if ball_in_cup(ball.pos, hole.cup, HOLE_RADIUS) {
        ball.vel = Vec2::ZERO;
        outcome = StepOutcome::Holed;
    }

    outcome
}
