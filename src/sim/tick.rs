//! Fixed timestep simulation tick
//!
//! One call advances a Playing session by exactly one frame. Velocities are
//! per frame, so the caller must run this at `Tuning::frame_rate`.

use super::ai;
use super::physics;
use super::round;
use super::state::{GameEvent, GameRng, Mode, Session, Side};
use crate::tuning::Tuning;

/// Held direction keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleCommand {
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Clock time in seconds; only used for the spawn pause
    pub now: f64,
    pub left: PaddleCommand,
    /// Ignored when the right paddle is AI-controlled
    pub right: PaddleCommand,
}

/// Advance the session by one frame
///
/// Order: paddles (human, then AI), ball activation, ball motion and
/// collisions, scoring.
pub fn tick(
    session: &mut Session,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut GameRng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    session
        .left
        .drive(input.left.up, input.left.down, tuning.paddle_speed);

    match session.mode {
        Mode::Ai(difficulty) => {
            let profile = difficulty.profile(tuning);
            ai::steer(
                &mut session.right,
                &session.ball,
                Side::Right,
                &profile,
                tuning,
                rng,
            );
        }
        Mode::Human => {
            session
                .right
                .drive(input.right.up, input.right.down, tuning.paddle_speed);
        }
    }

    if round::try_activate(&mut session.ball, input.now, tuning, rng) {
        events.push(GameEvent::BallLaunched);
    }

    let contacts = physics::step_ball(
        &mut session.ball,
        &session.left,
        &session.right,
        &mut session.round,
        tuning,
    );
    if let Some(side) = contacts.paddle {
        events.push(GameEvent::PaddleHit {
            side,
            hits: session.round.hit_count,
        });
    }
    if contacts.wall {
        events.push(GameEvent::WallBounce);
    }

    if let Some(side) = round::check_scoring(&mut session.ball, &mut session.round, input.now) {
        events.push(GameEvent::Scored(side));
    }

    debug_assert!(session.left.in_field(), "left paddle left the field");
    debug_assert!(session.right.in_field(), "right paddle left the field");

    events
}
