//! Browser bindings
//!
//! A page owns one `WebGolf`, forwards canvas mouse/touch events and button
//! clicks to it, calls `tick` from `requestAnimationFrame`, and draws from
//! `frame_json`.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

use super::{client_to_surface, surface_scale};
use crate::best_score::LocalStorageStore;
use crate::sim::{Course, GameSession, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Gold Golf loaded");
}

/// One game bound to a canvas
#[wasm_bindgen]
pub struct WebGolf {
    session: GameSession<LocalStorageStore>,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl WebGolf {
    /// Create a game on `canvas`, optionally with JSON tuning and course overrides
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        tuning_json: Option<String>,
        course_json: Option<String>,
    ) -> WebGolf {
        let tuning = match tuning_json.as_deref().map(Tuning::from_json) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Bad tuning, using defaults: {}", e);
                Tuning::default()
            }
            None => Tuning::default(),
        };
        let course = match course_json.as_deref().map(Course::from_json) {
            Some(Ok(course)) => course,
            Some(Err(e)) => {
                log::warn!("Bad course, using the classic nine: {}", e);
                Course::classic()
            }
            None => Course::classic(),
        };
        let session = GameSession::new(course, tuning, LocalStorageStore);
        log::info!("Game ready ({} holes)", session.hole_count());
        WebGolf { session, canvas }
    }

    /// Convert a viewport position into surface coordinates
    fn surface_point(&self, client_x: i32, client_y: i32) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let displayed = Vec2::new(rect.width() as f32, rect.height() as f32);
        let scale = surface_scale(self.session.course.bounds(), displayed);
        client_to_surface(
            Vec2::new(client_x as f32, client_y as f32),
            rect.left() as f32,
            rect.top() as f32,
            scale,
        )
    }

    /// First touch point, if any finger is down
    fn touch_point(&self, event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        Some(self.surface_point(touch.client_x(), touch.client_y()))
    }

    pub fn mouse_down(&mut self, event: MouseEvent) -> bool {
        let p = self.surface_point(event.client_x(), event.client_y());
        self.session.pointer_down(p)
    }

    pub fn mouse_move(&mut self, event: MouseEvent) {
        let p = self.surface_point(event.client_x(), event.client_y());
        self.session.pointer_move(p);
    }

    /// Returns true if the release planned a shot
    pub fn mouse_up(&mut self) -> bool {
        self.session.pointer_up().is_some()
    }

    pub fn touch_start(&mut self, event: TouchEvent) -> bool {
        event.prevent_default();
        match self.touch_point(&event) {
            Some(p) => self.session.pointer_down(p),
            None => false,
        }
    }

    pub fn touch_move(&mut self, event: TouchEvent) {
        if let Some(p) = self.touch_point(&event) {
            self.session.pointer_move(p);
        }
    }

    pub fn touch_end(&mut self) -> bool {
        self.session.pointer_up().is_some()
    }

    pub fn confirm_shot(&mut self) -> bool {
        self.session.confirm_pending_shot()
    }

    pub fn cancel_shot(&mut self) {
        self.session.cancel_pending_shot();
    }

    /// Restart the round (the page asks the player first)
    pub fn restart(&mut self) {
        self.session.request_restart();
    }

    pub fn reset_best(&mut self) {
        self.session.reset_best_score();
    }

    /// Advance one animation frame
    pub fn tick(&mut self, elapsed_ms: f32) {
        tick(&mut self.session, elapsed_ms);
    }

    /// Current frame as JSON (see `FrameView`)
    pub fn frame_json(&self) -> String {
        serde_json::to_string(&self.session.frame_view()).unwrap_or_default()
    }

    /// Events since the last call, as a JSON array
    pub fn events_json(&mut self) -> String {
        serde_json::to_string(&self.session.drain_events()).unwrap_or_else(|_| "[]".to_string())
    }
}
