//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One unit physics step per tick
//! - Input arrives as surface points, never raw events
//! - Deferred transitions go through a single-slot timer

pub mod collision;
pub mod course;
pub mod input;
pub mod physics;
pub mod rect;
pub mod shot;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{CollisionResult, ball_in_cup, ball_rect_collision, reflect_velocity};
pub use course::{Course, HoleDef};
pub use physics::{StepOutcome, advance};
pub use rect::Rect;
pub use shot::{plan_shot, power_ratio};
pub use state::{Ball, DragGesture, GameEvent, GamePhase, GameSession, PendingShot};
pub use tick::{RoundSummary, advance_hole, finalize_round_if_complete, tick};
pub use timer::{DeferredAction, TransitionTimer};
