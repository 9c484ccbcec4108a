//! Game state and core simulation types
//!
//! Everything a Playing session owns lives in `Session`; it is created on
//! entering a game and dropped when returning to the menu.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ai::Difficulty;
use super::rect::Rect;
use super::round::RoundState;
use crate::consts::*;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of horizontal velocity that moves the ball toward this side
    pub fn approach_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Two humans on one keyboard (W/S and Up/Down)
    Human,
    /// Right paddle driven by the AI at the given difficulty
    Ai(Difficulty),
}

/// A player paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle at its starting spot, vertically centred
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => FIELD_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        };
        let y = (FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0).floor();
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    pub fn center_y(&self) -> f32 {
        self.rect.center_y()
    }

    /// Keyboard movement; a direction is only taken while the paddle has room
    pub fn drive(&mut self, up: bool, down: bool, speed: f32) {
        if up && self.rect.top() > 0.0 {
            self.rect.y -= speed;
        }
        if down && self.rect.bottom() < FIELD_HEIGHT {
            self.rect.y += speed;
        }
        self.clamp_to_field();
    }

    /// Shift vertically by `dy` then clamp
    pub fn shift(&mut self, dy: f32) {
        self.rect.y += dy;
        self.clamp_to_field();
    }

    /// Keep the whole paddle inside `[0, FIELD_HEIGHT]`
    pub fn clamp_to_field(&mut self) {
        self.rect.y = self.rect.y.clamp(0.0, FIELD_HEIGHT - self.rect.h);
    }

    pub fn in_field(&self) -> bool {
        self.rect.top() >= 0.0 && self.rect.bottom() <= FIELD_HEIGHT
    }
}

/// The ball; zero velocity means it is waiting out its spawn pause
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    /// Clock time (seconds) at which this ball was created
    pub spawned_at: f64,
}

impl Ball {
    /// A paused ball at field centre
    pub fn spawn(now: f64) -> Self {
        let half = (BALL_SIZE / 2.0).floor();
        Self {
            rect: Rect::new(
                FIELD_WIDTH / 2.0 - half,
                FIELD_HEIGHT / 2.0 - half,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel: Vec2::ZERO,
            spawned_at: now,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Give the ball its launch velocity, diagonal in a random quadrant
    pub fn launch(&mut self, speed: f32, rng: &mut GameRng) {
        let sx = if rng.0.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(speed * sx, speed * sy);
    }
}

/// Seedable random source for launches and AI mistakes
#[derive(Debug, Clone)]
pub struct GameRng(pub Pcg32);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A paused ball received its velocity
    BallLaunched,
    /// Ball bounced off the given paddle; `hits` is the count after this hit
    PaddleHit { side: Side, hits: u32 },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// The given side won the point
    Scored(Side),
}

/// State of one Playing session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub mode: Mode,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub round: RoundState,
}

impl Session {
    /// Fresh session: centred paddles, 0-0, paused ball
    pub fn new(mode: Mode, now: f64) -> Self {
        Self {
            mode,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::spawn(now),
            round: RoundState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_start_centred() {
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        assert_eq!(left.rect.x, 50.0);
        assert_eq!(right.rect.x, 740.0);
        assert_eq!(left.rect.y, 250.0);
        assert_eq!(left.center_y(), 300.0);
    }

    #[test]
    fn test_ball_spawns_paused_at_centre() {
        let ball = Ball::spawn(3.0);
        assert!(ball.is_paused());
        assert_eq!(ball.rect.x, 393.0);
        assert_eq!(ball.rect.y, 293.0);
        assert_eq!(ball.spawned_at, 3.0);
    }

    #[test]
    fn test_launch_is_diagonal_at_base_speed() {
        let mut rng = GameRng::new(7);
        for _ in 0..20 {
            let mut ball = Ball::spawn(0.0);
            ball.launch(BALL_SPEED, &mut rng);
            assert_eq!(ball.vel.x.abs(), BALL_SPEED);
            assert_eq!(ball.vel.y.abs(), BALL_SPEED);
        }
    }

    #[test]
    fn test_launch_covers_all_quadrants() {
        let mut rng = GameRng::new(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let mut ball = Ball::spawn(0.0);
            ball.launch(BALL_SPEED, &mut rng);
            seen.insert((ball.vel.x > 0.0, ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_drive_stops_at_walls() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.rect.y = 3.0;
        paddle.drive(true, false, PADDLE_SPEED);
        assert_eq!(paddle.rect.y, 0.0);
        paddle.drive(true, false, PADDLE_SPEED);
        assert_eq!(paddle.rect.y, 0.0);

        paddle.rect.y = FIELD_HEIGHT - PADDLE_HEIGHT - 2.0;
        paddle.drive(false, true, PADDLE_SPEED);
        assert_eq!(paddle.rect.bottom(), FIELD_HEIGHT);
    }

    #[test]
    fn test_up_and_down_cancel() {
        let mut paddle = Paddle::new(Side::Right);
        let y = paddle.rect.y;
        paddle.drive(true, true, PADDLE_SPEED);
        assert_eq!(paddle.rect.y, y);
    }
}
