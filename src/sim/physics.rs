//! Ball motion and collision response
//!
//! Collisions flip velocity signs only. The ball is never pushed back out of a
//! wall or paddle, and the bounce angle does not depend on where it struck;
//! overlap of up to one frame's travel is expected.

use glam::Vec2;

use super::round::RoundState;
use super::state::{Ball, Paddle, Side};
use crate::consts::FIELD_HEIGHT;
use crate::tuning::Tuning;

/// Collisions detected in one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Paddle the ball bounced off, if any
    pub paddle: Option<Side>,
    /// Whether the ball bounced off the top or bottom wall
    pub wall: bool,
}

/// Move the ball by one frame of velocity; a paused ball stays put
pub fn advance(ball: &mut Ball) {
    if ball.is_paused() {
        return;
    }
    ball.rect.x += ball.vel.x;
    ball.rect.y += ball.vel.y;
}

/// Reflect vertical velocity when touching the top or bottom wall
pub fn bounce_walls(ball: &mut Ball) -> bool {
    if ball.rect.top() <= 0.0 || ball.rect.bottom() >= FIELD_HEIGHT {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Reflect horizontal velocity if the ball overlaps a paddle
///
/// Counts the hit and applies speed escalation once `speedup_hits` is reached.
pub fn bounce_paddles(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    round: &mut RoundState,
    tuning: &Tuning,
) -> Option<Side> {
    let side = if ball.rect.intersects(&left.rect) {
        Side::Left
    } else if ball.rect.intersects(&right.rect) {
        Side::Right
    } else {
        return None;
    };

    ball.vel.x = -ball.vel.x;
    let hits = round.register_hit();
    if hits >= tuning.speedup_hits {
        ball.vel = escalate(ball.vel, tuning.speed_increment);
    }
    Some(side)
}

/// Grow each component's magnitude by `increment`, keeping its sign
pub fn escalate(vel: Vec2, increment: f32) -> Vec2 {
    let grow = |v: f32| if v > 0.0 { v + increment } else { v - increment };
    Vec2::new(grow(vel.x), grow(vel.y))
}

/// Full ball step: move, then paddle check, then wall check
pub fn step_ball(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    round: &mut RoundState,
    tuning: &Tuning,
) -> Contacts {
    advance(ball);
    let paddle = bounce_paddles(ball, left, right, round, tuning);
    let wall = bounce_walls(ball);
    Contacts { paddle, wall }
}
