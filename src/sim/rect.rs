//! Axis-aligned rectangle geometry for course obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// A solid axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Closest point on (or in) the rectangle to `p`
    ///
    /// Points inside the rectangle map to themselves.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.x, self.x + self.width),
            clamp(p.y, self.y, self.y + self.height),
        )
    }

    /// Check if a point lies inside or on the edge of the rectangle
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Check if the rectangle lies fully within `[0, width] x [0, height]`
    pub fn within_bounds(&self, bounds: Vec2) -> bool {
        let max = self.max();
        self.x >= 0.0 && self.y >= 0.0 && max.x <= bounds.x && max.y <= bounds.y
    }
}
