//! Scores, hit counting and the spawn-pause-launch cycle of the ball

use super::state::{Ball, GameRng, Side};
use crate::consts::FIELD_WIDTH;
use crate::tuning::Tuning;

/// Score and rally state for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundState {
    pub left_score: u32,
    pub right_score: u32,
    /// Paddle contacts since the last point
    pub hit_count: u32,
}

impl RoundState {
    /// Count a paddle contact and return the new total
    pub fn register_hit(&mut self) -> u32 {
        self.hit_count += 1;
        self.hit_count
    }

    /// Award a point and start a new rally
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left_score += 1,
            Side::Right => self.right_score += 1,
        }
        self.hit_count = 0;
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }
}

/// Launch a paused ball once its pause has elapsed; returns true on launch
pub fn try_activate(ball: &mut Ball, now: f64, tuning: &Tuning, rng: &mut GameRng) -> bool {
    if ball.is_paused() && now - ball.spawned_at >= tuning.pause_secs {
        ball.launch(tuning.ball_speed, rng);
        return true;
    }
    false
}

/// Check whether the ball has left through either goal line
///
/// On a point the ball is replaced by a freshly spawned (paused) one and the
/// hit count resets, so callers never see a scored ball still in play.
pub fn check_scoring(ball: &mut Ball, round: &mut RoundState, now: f64) -> Option<Side> {
    if ball.is_paused() {
        return None;
    }
    let scorer = if ball.rect.left() <= 0.0 {
        Side::Right
    } else if ball.rect.right() >= FIELD_WIDTH {
        Side::Left
    } else {
        return None;
    };

    round.award(scorer);
    *ball = Ball::spawn(now);
    log::debug!(
        "{:?} scores ({} - {})",
        scorer,
        round.left_score,
        round.right_score
    );
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, vx: f32) -> Ball {
        let mut ball = Ball::spawn(0.0);
        ball.rect.x = x;
        ball.vel = Vec2::new(vx, 4.0);
        ball
    }

    #[test]
    fn test_pause_holds_until_elapsed() {
        let tuning = Tuning::default();
        let mut rng = GameRng::new(1);
        let mut ball = Ball::spawn(10.0);

        assert!(!try_activate(&mut ball, 10.0, &tuning, &mut rng));
        assert!(!try_activate(&mut ball, 11.49, &tuning, &mut rng));
        assert!(ball.is_paused());

        assert!(try_activate(&mut ball, 11.5, &tuning, &mut rng));
        assert!(!ball.is_paused());
        assert_eq!(ball.vel.abs(), Vec2::splat(tuning.ball_speed));
    }

    #[test]
    fn test_active_ball_not_relaunched() {
        let tuning = Tuning::default();
        let mut rng = GameRng::new(1);
        let mut ball = ball_at(300.0, -6.0);
        assert!(!try_activate(&mut ball, 100.0, &tuning, &mut rng));
        assert_eq!(ball.vel.x, -6.0);
    }

    #[test]
    fn test_left_exit_scores_for_right() {
        let mut round = RoundState {
            hit_count: 7,
            ..Default::default()
        };
        let mut ball = ball_at(-1.0, -4.0);

        assert_eq!(check_scoring(&mut ball, &mut round, 5.0), Some(Side::Right));
        assert_eq!(round.right_score, 1);
        assert_eq!(round.left_score, 0);
        assert_eq!(round.hit_count, 0);
        assert!(ball.is_paused());
        assert_eq!((ball.rect.x, ball.rect.y), (393.0, 293.0));
        assert_eq!(ball.spawned_at, 5.0);
    }

    #[test]
    fn test_right_exit_scores_for_left() {
        let mut round = RoundState::default();
        let mut ball = ball_at(FIELD_WIDTH - 10.0, 4.0);
        assert_eq!(check_scoring(&mut ball, &mut round, 0.0), Some(Side::Left));
        assert_eq!(round.left_score, 1);
    }

    #[test]
    fn test_hit_count_resets_for_any_prior_value() {
        for hits in [0, 1, 9, 10, 57] {
            let mut round = RoundState {
                hit_count: hits,
                ..Default::default()
            };
            let mut ball = ball_at(-3.0, -4.0);
            check_scoring(&mut ball, &mut round, 0.0);
            assert_eq!(round.hit_count, 0);
        }
    }

    #[test]
    fn test_paused_ball_never_scores() {
        let mut round = RoundState::default();
        let mut ball = Ball::spawn(0.0);
        ball.rect.x = -5.0;
        assert_eq!(check_scoring(&mut ball, &mut round, 0.0), None);
        assert_eq!(round, RoundState::default());
    }

    #[test]
    fn test_in_bounds_no_score() {
        let mut round = RoundState::default();
        let mut ball = ball_at(400.0, 4.0);
        assert_eq!(check_scoring(&mut ball, &mut round, 0.0), None);
    }
}
