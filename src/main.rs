//! Gold Golf entry point
//!
//! The browser build is driven from `platform::web`. Natively there is no
//! window; the binary plays a headless round with a simple routing player
//! and prints how it went.
//!
//! Usage: `gold-golf [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;

    use gold_golf::sim::{Course, GameEvent, GamePhase, GameSession, Rect, tick};
    use gold_golf::{MemoryStore, ScoreStore, Tuning};

    /// Simulated frame length (60 Hz)
    const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Give up on a hole after this many strokes
    const MAX_STROKES_PER_HOLE: u32 = 12;
    /// Safety cap on frames spent waiting for one shot to settle
    const MAX_FRAMES_PER_SHOT: u32 = 20_000;
    /// Extra room kept between the ball and an obstacle when routing
    const CLEARANCE: f32 = 6.0;
    /// How far past a waypoint corner the player parks the ball
    const CORNER_OFFSET: f32 = 4.0;
    /// Roll this far past the cup; the ball drops on the way through
    const CUP_OVERSHOOT: f32 = 30.0;

    /// How a demo round ended
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Outcome {
        Finished { total: u32, new_best: bool },
        Abandoned { hole: String, strokes: u32 },
    }

    /// Does the segment `a..b` cross `rect` grown by `pad` on every side?
    fn segment_hits_rect(a: Vec2, b: Vec2, rect: &Rect, pad: f32) -> bool {
        let lo = Vec2::new(rect.x, rect.y) - Vec2::splat(pad);
        let hi = rect.max() + Vec2::splat(pad);
        let d = b - a;
        let (mut t0, mut t1) = (0.0f32, 1.0f32);
        for axis in 0..2 {
            if d[axis].abs() < 1e-6 {
                if a[axis] < lo[axis] || a[axis] > hi[axis] {
                    return false;
                }
                continue;
            }
            let ta = (lo[axis] - a[axis]) / d[axis];
            let tb = (hi[axis] - a[axis]) / d[axis];
            t0 = t0.max(ta.min(tb));
            t1 = t1.min(ta.max(tb));
            if t0 > t1 {
                return false;
            }
        }
        true
    }

    fn inside_padded(p: Vec2, rect: &Rect, pad: f32) -> bool {
        p.x >= rect.x - pad
            && p.y >= rect.y - pad
            && p.x <= rect.x + rect.width + pad
            && p.y <= rect.y + rect.height + pad
    }

    /// Can a ball roll straight from `a` to `b` without touching anything?
    ///
    /// A ball resting against an obstacle only needs to move away from it,
    /// so that obstacle is checked without the extra clearance.
    fn clear_path(a: Vec2, b: Vec2, obstacles: &[Rect], radius: f32) -> bool {
        let pad = radius + CLEARANCE;
        obstacles.iter().all(|rect| {
            let pad = if inside_padded(a, rect, pad) {
                radius - 0.5
            } else {
                pad
            };
            !segment_hits_rect(a, b, rect, pad)
        })
    }

    /// Parking spots just off each obstacle corner
    fn corner_waypoints(obstacles: &[Rect], bounds: Vec2, radius: f32) -> Vec<Vec2> {
        let off = radius + CLEARANCE + CORNER_OFFSET;
        let margin = radius + 2.0;
        obstacles
            .iter()
            .flat_map(|r| {
                let max = r.max();
                [
                    Vec2::new(r.x - off, r.y - off),
                    Vec2::new(max.x + off, r.y - off),
                    Vec2::new(r.x - off, max.y + off),
                    Vec2::new(max.x + off, max.y + off),
                ]
            })
            .filter(|p| {
                p.x >= margin && p.y >= margin && p.x <= bounds.x - margin && p.y <= bounds.y - margin
            })
            .filter(|p| {
                !obstacles
                    .iter()
                    .any(|r| inside_padded(*p, r, radius + CLEARANCE))
            })
            .collect()
    }

    /// Next point to roll to: the cup if it is in sight, otherwise the first
    /// hop of the shortest clear route through corner waypoints
    pub fn next_target(ball: Vec2, cup: Vec2, obstacles: &[Rect], bounds: Vec2, radius: f32) -> Vec2 {
        // Node 0 is the ball, node 1 the cup
        let mut nodes = vec![ball, cup];
        nodes.extend(corner_waypoints(obstacles, bounds, radius));

        let n = nodes.len();
        let mut dist = vec![f32::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut done = vec![false; n];
        dist[0] = 0.0;

        while let Some(u) = (0..n)
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))
        {
            done[u] = true;
            if u == 1 {
                break;
            }
            for v in 0..n {
                if done[v] || !clear_path(nodes[u], nodes[v], obstacles, radius) {
                    continue;
                }
                let d = dist[u] + nodes[u].distance(nodes[v]);
                if d < dist[v] {
                    dist[v] = d;
                    prev[v] = Some(u);
                }
            }
        }

        // Walk back from the cup to the hop right after the ball
        let mut hop = 1;
        while let Some(p) = prev[hop] {
            if p == 0 {
                return nodes[hop];
            }
            hop = p;
        }
        log::debug!("No clear route from {:?}, aiming straight", ball);
        cup
    }

    /// Pointer position that pulls back hard enough to roll the ball to `target`
    fn drag_toward<S: ScoreStore>(session: &GameSession<S>, target: Vec2, past: f32) -> Option<Vec2> {
        let to_target = target - session.ball.pos;
        let dir = gold_golf::normalize(to_target)?;
        let tuning = &session.tuning;
        let speed = tuning
            .launch_speed(to_target.length() + past)
            .max(tuning.min_shot_power + 0.1);
        let drag = speed / tuning.max_power * tuning.drag_max;
        // Pull back the opposite way
        Some(session.ball.pos - dir * drag)
    }

    /// Tick until nothing is rolling or pending
    fn settle<S: ScoreStore>(session: &mut GameSession<S>) {
        for _ in 0..MAX_FRAMES_PER_SHOT {
            tick(session, FRAME_MS);
            if matches!(session.phase, GamePhase::Idle | GamePhase::RoundComplete)
                && !session.transitions.is_armed()
            {
                return;
            }
        }
        log::warn!("Shot did not settle");
    }

    fn report(session: &mut GameSession) {
        for event in session.drain_events() {
            match event {
                GameEvent::Holed { hole, strokes } => {
                    println!("Hole {}: in after {} total strokes", hole, strokes)
                }
                GameEvent::RoundComplete { total, new_best } => println!(
                    "Round complete: {} strokes{}",
                    total,
                    if new_best { " (new best)" } else { "" }
                ),
                _ => {}
            }
        }
    }

    pub fn run(tuning: Tuning) -> Outcome {
        let mut session = GameSession::new(Course::classic(), tuning, MemoryStore::new());
        let bounds = session.course.bounds();

        loop {
            report(&mut session);
            if session.phase == GamePhase::RoundComplete {
                let total = session.strokes;
                return Outcome::Finished {
                    total,
                    new_best: session.best.get() == Some(total),
                };
            }

            let hole = session.hole_index;
            let strokes_at_tee = session.strokes;
            let abandon = |session: &GameSession| Outcome::Abandoned {
                hole: session.hole_label(),
                strokes: session.strokes,
            };

            while session.hole_index == hole && session.phase != GamePhase::RoundComplete {
                if session.strokes - strokes_at_tee >= MAX_STROKES_PER_HOLE {
                    log::warn!("Giving up on hole {}", session.hole_label());
                    return abandon(&session);
                }
                let Some(current) = session.current_hole() else {
                    break;
                };
                let at = session.ball.pos;
                let target = next_target(at, current.cup, &current.obstacles, bounds, session.ball.radius);
                let past = if target == current.cup { CUP_OVERSHOOT } else { 0.0 };
                let Some(pull_to) = drag_toward(&session, target, past) else {
                    return abandon(&session);
                };
                session.pointer_down(at);
                session.pointer_move(pull_to);
                if session.pointer_up().is_none() || !session.confirm_pending_shot() {
                    log::warn!("Shot from {:?} was too weak to play", at);
                    session.cancel_pending_shot();
                    return abandon(&session);
                }
                settle(&mut session);
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gold Golf (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => gold_golf::Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Bad tuning file {}: {}; using defaults", path, e);
                gold_golf::Tuning::default()
            }),
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path, e);
                gold_golf::Tuning::default()
            }
        },
        None => gold_golf::Tuning::default(),
    };

    match demo::run(tuning) {
        demo::Outcome::Finished { total, new_best } => {
            println!("Best: {}{}", total, if new_best { " (this round)" } else { "" })
        }
        demo::Outcome::Abandoned { hole, strokes } => {
            println!("Round abandoned on hole {} after {} strokes", hole, strokes);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
