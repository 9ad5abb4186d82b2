//! Game session state and core simulation types
//!
//! One `GameSession` owns everything that changes during play: the ball, the
//! round counters, the in-progress aim, and the pending transition. The host
//! keeps it and passes it to `tick` and the input handlers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::course::{Course, HoleDef};
use super::timer::TransitionTimer;
use crate::best_score::{BestScore, MemoryStore, ScoreStore};
use crate::consts::BALL_RADIUS;
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest, waiting for the player to aim
    Idle,
    /// Drag in progress, or a planned shot waiting for confirmation
    Aiming,
    /// Ball in motion
    Rolling,
    /// Ball in the cup, next hole pending
    Holed,
    /// All holes played
    RoundComplete,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Put the ball at rest on a tee
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A pointer drag that started on the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub start: Vec2,
    pub current: Vec2,
}

impl DragGesture {
    pub fn new(at: Vec2) -> Self {
        Self {
            start: at,
            current: at,
        }
    }

    /// Pull-back vector (points the way the ball will go)
    #[inline]
    pub fn pull(&self) -> Vec2 {
        self.start - self.current
    }
}

/// A planned shot awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingShot {
    pub velocity: Vec2,
    pub origin: DragGesture,
}

/// Notable things that happened, for the HUD and dialogs to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A confirmed shot was charged
    ShotTaken { strokes: u32 },
    /// A hole is ready to play (1-based)
    HoleStarted { hole: usize },
    /// The ball dropped (1-based hole, strokes so far)
    Holed { hole: usize, strokes: u32 },
    /// Every hole played
    RoundComplete { total: u32, new_best: bool },
    /// Time to ask the player about a new round
    OfferRestart { total: u32 },
    /// The round was reset to the first hole
    RoundRestarted,
    /// The persisted best score was cleared
    BestScoreReset,
}

/// Complete session state for one player
#[derive(Debug)]
pub struct GameSession<S: ScoreStore = MemoryStore> {
    /// Holes for the round (never empty)
    pub course: Course,
    /// Physics and shot tuning
    pub tuning: Tuning,
    /// The one ball in play
    pub ball: Ball,
    /// Current hole (0-based; equals the hole count once the round is done)
    pub hole_index: usize,
    /// Strokes charged this round across all holes
    pub strokes: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Drag in progress
    pub drag: Option<DragGesture>,
    /// Shot waiting for confirm/cancel
    pub pending_shot: Option<PendingShot>,
    /// Power meter fill (0..=1)
    pub power_ratio: f32,
    /// Lowest completed round total
    pub best: BestScore,
    /// Deferred hole advance / restart offer
    pub transitions: TransitionTimer,
    events: Vec<GameEvent>,
    store: S,
}

impl<S: ScoreStore> GameSession<S> {
    /// Start a round on the first hole, reading the best score from `store`
    pub fn new(course: Course, tuning: Tuning, store: S) -> Self {
        let best = BestScore::load(&store);
        let start = course.holes()[0].start;
        let mut session = Self {
            course,
            tuning,
            ball: Ball::new(start),
            hole_index: 0,
            strokes: 0,
            phase: GamePhase::Idle,
            drag: None,
            pending_shot: None,
            power_ratio: 0.0,
            best,
            transitions: TransitionTimer::new(),
            events: Vec::new(),
            store,
        };
        session.push_event(GameEvent::HoleStarted { hole: 1 });
        session
    }

    /// The hole being played, or `None` once the round is complete
    pub fn current_hole(&self) -> Option<&HoleDef> {
        self.course.hole(self.hole_index)
    }

    /// The hole to draw: the current one, or the last one after the round
    pub fn display_hole(&self) -> &HoleDef {
        let last = self.course.len() - 1;
        &self.course.holes()[self.hole_index.min(last)]
    }

    /// 1-based hole number for the HUD
    pub fn hole_number(&self) -> usize {
        (self.hole_index + 1).min(self.course.len())
    }

    pub fn hole_count(&self) -> usize {
        self.course.len()
    }

    /// HUD label, e.g. "3 / 9"
    pub fn hole_label(&self) -> String {
        format!("{} / {}", self.hole_number(), self.hole_count())
    }

    pub fn is_round_complete(&self) -> bool {
        self.hole_index >= self.course.len()
    }

    /// Hard reset to the first hole from any state
    ///
    /// Clears strokes, aim and pending shot, and cancels any in-flight
    /// transition so a stale hole advance cannot fire into the new round.
    pub fn request_restart(&mut self) {
        if let Some(action) = self.transitions.cancel() {
            log::debug!("Cancelled pending {:?} on restart", action);
        }
        self.hole_index = 0;
        self.strokes = 0;
        let start = self.course.holes()[0].start;
        self.ball.place(start);
        self.phase = GamePhase::Idle;
        self.drag = None;
        self.pending_shot = None;
        self.power_ratio = 0.0;
        log::info!("Round restarted");
        self.push_event(GameEvent::RoundRestarted);
        self.push_event(GameEvent::HoleStarted { hole: 1 });
    }

    /// Clear the best score in memory and in storage
    pub fn reset_best_score(&mut self) {
        self.best.reset(&mut self.store);
        log::info!("Best score reset");
        self.push_event(GameEvent::BestScoreReset);
    }

    /// Record a finished round total; true if it became the new best
    pub(crate) fn record_round(&mut self, total: u32) -> bool {
        self.best.record(total, &mut self.store)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl GameSession<MemoryStore> {
    /// Classic course, default tuning, nothing persisted yet
    pub fn classic() -> Self {
        Self::new(Course::classic(), Tuning::default(), MemoryStore::new())
    }
}
