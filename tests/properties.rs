use glam::Vec2;
use paddle_pong::consts::*;
use paddle_pong::sim::physics::bounce_paddles;
use paddle_pong::sim::{
    Ball, Difficulty, GameRng, Mode, PaddleCommand, Paddle, RoundState, Session, Side, TickInput,
    tick,
};
use paddle_pong::Tuning;
use proptest::prelude::*;

fn command() -> impl Strategy<Value = PaddleCommand> {
    (any::<bool>(), any::<bool>()).prop_map(|(up, down)| PaddleCommand { up, down })
}

fn mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Human),
        Just(Mode::Ai(Difficulty::Easy)),
        Just(Mode::Ai(Difficulty::Medium)),
        Just(Mode::Ai(Difficulty::Hard)),
    ]
}

proptest! {
    #[test]
    fn paddles_stay_in_field(
        seed in any::<u64>(),
        mode in mode(),
        commands in prop::collection::vec((command(), command()), 1..400),
    ) {
        let tuning = Tuning::default();
        let mut rng = GameRng::new(seed);
        let mut session = Session::new(mode, 0.0);
        for (i, (left, right)) in commands.into_iter().enumerate() {
            let input = TickInput { now: i as f64 * tuning.frame_secs(), left, right };
            tick(&mut session, &input, &tuning, &mut rng);
            prop_assert!(session.left.in_field());
            prop_assert!(session.right.in_field());
        }
    }

    #[test]
    fn paused_ball_holds_during_pause(seed in any::<u64>(), frames in 1usize..89) {
        let tuning = Tuning::default();
        let mut rng = GameRng::new(seed);
        let mut session = Session::new(Mode::Ai(Difficulty::Hard), 100.0);
        let spawn = session.ball;
        for i in 0..frames {
            let input = TickInput { now: 100.0 + i as f64 * tuning.frame_secs(), ..Default::default() };
            tick(&mut session, &input, &tuning, &mut rng);
            prop_assert_eq!(session.ball, spawn);
        }
    }

    #[test]
    fn escalation_grows_both_components(
        hits in 9u32..200,
        vx in prop_oneof![Just(-1.0f32), Just(1.0f32)],
        vy in prop_oneof![Just(-1.0f32), Just(1.0f32)],
        speed in 4.0f32..20.0,
    ) {
        let tuning = Tuning::default();
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        let mut round = RoundState { hit_count: hits, ..Default::default() };
        let mut ball = Ball::spawn(0.0);
        ball.rect.x = right.rect.x;
        ball.rect.y = right.rect.y + 10.0;
        ball.vel = Vec2::new(vx * speed, vy * speed);

        bounce_paddles(&mut ball, &left, &right, &mut round, &tuning);
        prop_assert_eq!(ball.vel.x.abs(), speed + SPEED_INCREMENT);
        prop_assert_eq!(ball.vel.y.abs(), speed + SPEED_INCREMENT);
        prop_assert_eq!(ball.vel.x.signum(), -vx);
        prop_assert_eq!(ball.vel.y.signum(), vy);
    }
}
