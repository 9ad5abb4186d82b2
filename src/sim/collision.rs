//! Collision detection and response for a ball on a rectangular course
//!
//! Circle vs. axis-aligned rectangle for obstacles, circle vs. the four
//! surface edges for walls, and a capture radius for the cup.

use glam::Vec2;

use super::rect::Rect;

/// Normal used when the ball center sits exactly on an obstacle (straight up)
pub const FALLBACK_NORMAL: Vec2 = Vec2::new(0.0, -1.0);

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal at collision (pointing toward ball center, for reflection)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between a ball and an axis-aligned rectangle
///
/// The contact normal points from the closest point on the rectangle to the
/// ball center. A ball whose center lies on or inside the rectangle has no
/// such direction and falls back to [`FALLBACK_NORMAL`].
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    let closest = rect.closest_point(ball_pos);
    let offset = ball_pos - closest;
    let dist_sq = offset.length_squared();

    if dist_sq >= ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    let normal = if dist == 0.0 {
        FALLBACK_NORMAL
    } else {
        offset / dist
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: ball_radius - dist,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Which surface edges the ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Keep the ball on the surface `[0, bounds.x] x [0, bounds.y]`
///
/// Each axis is handled on its own, so a corner hit bounces both components
/// in the same call. Crossing an edge clamps the position to it and points
/// that velocity component back inward, scaled by `restitution`.
pub fn resolve_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    bounds: Vec2,
    restitution: f32,
) -> WallHits {
    let mut hits = WallHits::default();

    if pos.x < radius {
        pos.x = radius;
        vel.x = vel.x.abs() * restitution;
        hits.left = true;
    }
    if pos.x > bounds.x - radius {
        pos.x = bounds.x - radius;
        vel.x = -vel.x.abs() * restitution;
        hits.right = true;
    }
    if pos.y < radius {
        pos.y = radius;
        vel.y = vel.y.abs() * restitution;
        hits.top = true;
    }
    if pos.y > bounds.y - radius {
        pos.y = bounds.y - radius;
        vel.y = -vel.y.abs() * restitution;
        hits.bottom = true;
    }

    hits
}

/// Check if the ball center is within the cup's capture radius
#[inline]
pub fn ball_in_cup(ball_pos: Vec2, cup: Vec2, hole_radius: f32) -> bool {
    ball_pos.distance(cup) <= hole_radius
}
