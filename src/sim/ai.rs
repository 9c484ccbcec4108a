//! Reactive AI opponent
//!
//! The AI only looks at the ball while it is heading its way and chases the
//! ball's centre at a fixed speed, with an occasional random twitch. It never
//! predicts where the ball will arrive.

use rand::Rng;

use super::state::{Ball, GameRng, Paddle, Side};
use crate::tuning::Tuning;

/// Selectable AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Movement speed and mistake odds for this difficulty
    pub fn profile(&self, tuning: &Tuning) -> AiProfile {
        let (slowdown, mistake_chance) = match self {
            Difficulty::Easy => (4.0, 15),
            Difficulty::Medium => (2.0, 7),
            Difficulty::Hard => (0.0, 3),
        };
        AiProfile {
            speed: tuning.paddle_speed - slowdown,
            mistake_chance,
        }
    }
}

/// Per-frame AI parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Pixels per frame
    pub speed: f32,
    /// A twitch fires with probability `1 / (mistake_chance + 1)` per frame
    pub mistake_chance: u32,
}

/// True while the ball travels toward `side`
pub fn ball_approaching(ball: &Ball, side: Side) -> bool {
    ball.vel.x * side.approach_sign() > 0.0
}

/// Vertical step that moves the paddle centre toward the ball centre
///
/// Returns 0 inside the dead-zone so the paddle does not jitter.
pub fn tracking_step(paddle_y: f32, ball_y: f32, speed: f32, dead_zone: f32) -> f32 {
    if paddle_y < ball_y - dead_zone {
        speed
    } else if paddle_y > ball_y + dead_zone {
        -speed
    } else {
        0.0
    }
}

/// Roll for a random twitch of `±nudge`
pub fn roll_mistake(rng: &mut GameRng, mistake_chance: u32, nudge: f32) -> Option<f32> {
    if rng.0.random_range(0..=mistake_chance) != 0 {
        return None;
    }
    Some(if rng.0.random_bool(0.5) { nudge } else { -nudge })
}

/// Move the AI paddle for one frame; returns the displacement applied
pub fn steer(
    paddle: &mut Paddle,
    ball: &Ball,
    side: Side,
    profile: &AiProfile,
    tuning: &Tuning,
    rng: &mut GameRng,
) -> f32 {
    let before = paddle.rect.y;
    if ball_approaching(ball, side) {
        let mut dy = tracking_step(
            paddle.center_y(),
            ball.center().y,
            profile.speed,
            tuning.ai_dead_zone,
        );
        if let Some(twitch) = roll_mistake(rng, profile.mistake_chance, tuning.ai_nudge) {
            dy += twitch;
        }
        paddle.rect.y += dy;
    }
    paddle.clamp_to_field();
    paddle.rect.y - before
}
