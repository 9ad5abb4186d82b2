//! Per-frame simulation tick and hole progression
//!
//! The host calls [`tick`] once per displayed frame. Ball physics advance by
//! one unit step per call; `elapsed_ms` only drives the deferred transitions.

use super::physics::{StepOutcome, advance};
use super::state::{GameEvent, GamePhase, GameSession};
use super::timer::DeferredAction;
use crate::best_score::ScoreStore;
use crate::consts::{HOLE_ADVANCE_DELAY_MS, ROUND_COMPLETE_DELAY_MS};

/// Summary of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub total: u32,
    pub new_best: bool,
}

/// Advance the session by one frame
pub fn tick<S: ScoreStore>(session: &mut GameSession<S>, elapsed_ms: f32) {
    // Run due transitions first so one armed below waits a full frame
    if let Some(action) = session.transitions.advance(elapsed_ms) {
        match action {
            DeferredAction::AdvanceHole => advance_hole(session),
            DeferredAction::OfferRestart => {
                log::info!("Offering a new round");
                session.push_event(GameEvent::OfferRestart {
                    total: session.strokes,
                });
            }
        }
    }

    if session.phase != GamePhase::Rolling {
        return;
    }

    let Some(hole) = session.course.hole(session.hole_index) else {
        return;
    };

    let bounds = session.course.bounds();
    match advance(&mut session.ball, hole, bounds, &session.tuning) {
        StepOutcome::Rolling => {}
        StepOutcome::Stopped => {
            session.phase = GamePhase::Idle;
        }
        StepOutcome::Holed => {
            session.phase = GamePhase::Holed;
            let hole_number = session.hole_index + 1;
            log::info!(
                "Hole {} sunk ({} strokes so far)",
                hole_number,
                session.strokes
            );
            session.push_event(GameEvent::Holed {
                hole: hole_number,
                strokes: session.strokes,
            });
            if !session
                .transitions
                .schedule(DeferredAction::AdvanceHole, HOLE_ADVANCE_DELAY_MS)
            {
                // Something else held the slot; move on now rather than strand the ball
                log::warn!("Hole advance could not be deferred, advancing now");
                advance_hole(session);
            }
        }
    }
}

/// Move on from a sunk hole
///
/// Places the ball on the next tee with strokes carried over, or finishes
/// the round after the last hole. Ignored unless the ball is in the cup.
pub fn advance_hole<S: ScoreStore>(session: &mut GameSession<S>) {
    if session.phase != GamePhase::Holed {
        log::debug!("Ignoring hole advance in {:?}", session.phase);
        return;
    }

    session.hole_index += 1;
    if finalize_round_if_complete(session).is_some() {
        return;
    }

    let Some(start) = session.current_hole().map(|h| h.start) else {
        return;
    };
    session.ball.place(start);
    session.phase = GamePhase::Idle;
    let hole = session.hole_number();
    log::info!("Starting hole {}", session.hole_label());
    session.push_event(GameEvent::HoleStarted { hole });
}

/// Close out the round once every hole is played
///
/// Compares the total to the best score (persisting an improvement), moves
/// to `RoundComplete`, and arms the restart offer. Returns `None` if holes
/// remain or the round was already finalized.
pub fn finalize_round_if_complete<S: ScoreStore>(
    session: &mut GameSession<S>,
) -> Option<RoundSummary> {
    if !session.is_round_complete() || session.phase == GamePhase::RoundComplete {
        return None;
    }

    let total = session.strokes;
    let new_best = session.record_round(total);
    session.phase = GamePhase::RoundComplete;
    session.drag = None;
    session.pending_shot = None;
    session.power_ratio = 0.0;
    log::info!(
        "Round complete: {} strokes{}",
        total,
        if new_best { " (new best)" } else { "" }
    );
    session.push_event(GameEvent::RoundComplete { total, new_best });
    if !session
        .transitions
        .schedule(DeferredAction::OfferRestart, ROUND_COMPLETE_DELAY_MS)
    {
        log::warn!("Restart offer could not be deferred, offering now");
        session.push_event(GameEvent::OfferRestart { total });
    }

    Some(RoundSummary { total, new_best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_score::MemoryStore;
    use crate::sim::course::{Course, HoleDef};
    use crate::tuning::Tuning;
    use glam::Vec2;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Three open holes, each cup straight right of its tee
    fn short_course() -> Course {
        let hole = |y: f32| HoleDef::new(Vec2::new(100.0, y), Vec2::new(300.0, y), Vec::new());
        Course::new(960.0, 640.0, vec![hole(100.0), hole(300.0), hole(500.0)]).unwrap()
    }

    fn session_with(store: MemoryStore) -> GameSession {
        GameSession::new(short_course(), Tuning::default(), store)
    }

    /// Aim and confirm a shot with the given pull-back offset
    fn shoot(session: &mut GameSession, pull: Vec2) {
        let at = session.ball.pos;
        assert!(session.pointer_down(at));
        session.pointer_move(at - pull);
        assert!(session.pointer_up().is_some());
        assert!(session.confirm_pending_shot());
    }

    /// Tick until the ball is no longer rolling
    fn roll_out(session: &mut GameSession) {
        for _ in 0..5000 {
            if session.phase != GamePhase::Rolling {
                return;
            }
            tick(session, FRAME_MS);
        }
        panic!("ball never stopped");
    }

    /// Tick through any pending transition
    fn wait(session: &mut GameSession, ms: f32) {
        let mut waited = 0.0;
        while waited < ms {
            tick(session, FRAME_MS);
            waited += FRAME_MS;
        }
    }

    /// Sink the current hole: a shot that stops right over the cup
    fn sink(session: &mut GameSession) {
        // 200px at default friction needs ~3px/tick; drag 24px -> 3.3 px/tick
        shoot(session, Vec2::new(24.0, 0.0));
        roll_out(session);
        assert_eq!(session.phase, GamePhase::Holed);
    }

    #[test]
    fn test_rolling_ball_comes_to_rest() {
        let mut session = session_with(MemoryStore::new());
        // Shoot down, away from the cup
        shoot(&mut session, Vec2::new(0.0, 10.0));
        roll_out(&mut session);
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.ball.vel, Vec2::ZERO);
        assert_eq!(session.strokes, 1);
    }

    #[test]
    fn test_strokes_counted_per_shot_not_per_tick() {
        let mut session = session_with(MemoryStore::new());
        for pull in [Vec2::new(0.0, 8.0), Vec2::new(0.0, -8.0), Vec2::new(-6.0, 0.0)] {
            shoot(&mut session, pull);
            roll_out(&mut session);
        }
        assert_eq!(session.strokes, 3);

        // Cancelled shot is free
        let at = session.ball.pos;
        session.pointer_down(at);
        session.pointer_move(at + Vec2::new(0.0, 30.0));
        session.pointer_up();
        session.cancel_pending_shot();
        assert_eq!(session.strokes, 3);
    }

    #[test]
    fn test_holed_advances_after_delay() {
        let mut session = session_with(MemoryStore::new());
        sink(&mut session);
        assert_eq!(session.hole_index, 0);
        assert!(session.transitions.is_armed());

        // No input accepted while the ball sits in the cup
        let at = session.ball.pos;
        assert!(!session.pointer_down(at));

        wait(&mut session, HOLE_ADVANCE_DELAY_MS + FRAME_MS);
        assert_eq!(session.hole_index, 1);
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.ball.pos, Vec2::new(100.0, 300.0));
        assert_eq!(session.strokes, 1);
    }

    #[test]
    fn test_overlapping_advance_does_not_double_step() {
        let mut session = session_with(MemoryStore::new());
        sink(&mut session);
        // A second request while one is in flight is refused
        assert!(
            !session
                .transitions
                .schedule(DeferredAction::AdvanceHole, HOLE_ADVANCE_DELAY_MS)
        );
        wait(&mut session, 2.0 * HOLE_ADVANCE_DELAY_MS);
        assert_eq!(session.hole_index, 1);

        // Stray direct call outside the Holed phase is ignored
        advance_hole(&mut session);
        assert_eq!(session.hole_index, 1);
    }

    #[test]
    fn test_full_round_sets_first_best() {
        let mut session = session_with(MemoryStore::new());
        for _ in 0..3 {
            sink(&mut session);
            wait(&mut session, HOLE_ADVANCE_DELAY_MS + FRAME_MS);
        }
        assert_eq!(session.phase, GamePhase::RoundComplete);
        assert_eq!(session.hole_index, 3);
        assert_eq!(session.best.get(), Some(3));
        assert_eq!(session.store().read_best(), Some(3));

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::RoundComplete {
            total: 3,
            new_best: true
        }));

        wait(&mut session, ROUND_COMPLETE_DELAY_MS + FRAME_MS);
        assert!(
            session
                .drain_events()
                .contains(&GameEvent::OfferRestart { total: 3 })
        );
    }

    #[test]
    fn test_worse_or_equal_round_keeps_best() {
        for prior in ["3", "2"] {
            let mut session = session_with(MemoryStore::with_raw(prior));
            for _ in 0..3 {
                sink(&mut session);
                wait(&mut session, HOLE_ADVANCE_DELAY_MS + FRAME_MS);
            }
            assert_eq!(session.phase, GamePhase::RoundComplete);
            assert_eq!(session.store().raw(), Some(prior));
        }
    }

    #[test]
    fn test_better_round_replaces_best() {
        let mut session = session_with(MemoryStore::with_raw("12"));
        for _ in 0..3 {
            sink(&mut session);
            wait(&mut session, HOLE_ADVANCE_DELAY_MS + FRAME_MS);
        }
        assert_eq!(session.best.get(), Some(3));
        assert_eq!(session.store().read_best(), Some(3));
    }

    #[test]
    fn test_sink_with_busy_timer_still_advances() {
        let mut session = session_with(MemoryStore::new());
        shoot(&mut session, Vec2::new(24.0, 0.0));
        // Slot already taken by a long wait
        assert!(
            session
                .transitions
                .schedule(DeferredAction::OfferRestart, 60_000.0)
        );
        roll_out(&mut session);
        assert_eq!(session.hole_index, 1);
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.ball.pos, Vec2::new(100.0, 300.0));
        assert!(
            session
                .drain_events()
                .contains(&GameEvent::HoleStarted { hole: 2 })
        );
    }

    #[test]
    fn test_round_end_with_busy_timer_still_offers_restart() {
        let mut session = session_with(MemoryStore::new());
        session.strokes = 4;
        session.hole_index = 3;
        session.phase = GamePhase::Holed;
        session
            .transitions
            .schedule(DeferredAction::AdvanceHole, 60_000.0);
        assert!(finalize_round_if_complete(&mut session).is_some());
        assert!(
            session
                .drain_events()
                .contains(&GameEvent::OfferRestart { total: 4 })
        );
    }

    #[test]
    fn test_finalize_only_once() {
        let mut session = session_with(MemoryStore::new());
        assert!(finalize_round_if_complete(&mut session).is_none());

        session.strokes = 7;
        session.hole_index = 3;
        session.phase = GamePhase::Holed;
        let summary = finalize_round_if_complete(&mut session).unwrap();
        assert_eq!(summary, RoundSummary { total: 7, new_best: true });
        assert!(finalize_round_if_complete(&mut session).is_none());
    }

    #[test]
    fn test_restart_cancels_pending_advance() {
        let mut session = session_with(MemoryStore::new());
        sink(&mut session);
        session.request_restart();
        wait(&mut session, 2.0 * HOLE_ADVANCE_DELAY_MS);
        assert_eq!(session.hole_index, 0);
        assert_eq!(session.strokes, 0);
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.ball.pos, Vec2::new(100.0, 100.0));
        assert!(session.pending_shot.is_none());
    }

    #[test]
    fn test_restart_after_round_complete() {
        let mut session = session_with(MemoryStore::new());
        for _ in 0..3 {
            sink(&mut session);
            wait(&mut session, HOLE_ADVANCE_DELAY_MS + FRAME_MS);
        }
        session.request_restart();
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.hole_index, 0);
        // Best score survives a restart
        assert_eq!(session.best.get(), Some(3));
    }
}
