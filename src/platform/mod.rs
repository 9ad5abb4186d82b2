//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (mouse and touch folded into one surface point)
//! - Storage (LocalStorage on web, see `best_score`)

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec2;

/// Convert a viewport (client) position into surface coordinates
///
/// `rect_left`/`rect_top` are the canvas's on-screen origin. The canvas may
/// be drawn at a different size than its backing surface; `scale` maps one
/// CSS pixel to surface pixels.
pub fn client_to_surface(client: Vec2, rect_left: f32, rect_top: f32, scale: Vec2) -> Vec2 {
    (client - Vec2::new(rect_left, rect_top)) * scale
}

/// Ratio of backing-surface size to displayed size, per axis
///
/// Falls back to 1:1 when the element has no layout size yet.
pub fn surface_scale(surface: Vec2, displayed: Vec2) -> Vec2 {
    let axis = |s: f32, d: f32| if d > 0.0 { s / d } else { 1.0 };
    Vec2::new(axis(surface.x, displayed.x), axis(surface.y, displayed.y))
}
