use glam::Vec2;
use proptest::prelude::*;

use paddle_balls::Settings;
use paddle_balls::consts::GRAVITY_STEP;
use paddle_balls::sim::{Ball, FallState, GameState, TickInput, tick};

fn run(state: &mut GameState, input: TickInput, frames: usize) {
    for _ in 0..frames {
        tick(state, &input);
    }
}

proptest! {
    #[test]
    fn spawned_balls_stay_in_window(seed in any::<u64>()) {
        let mut state = GameState::new(seed);
        for _ in 0..1000 {
            state.spawn_ball();
        }
        prop_assert_eq!(state.balls.len(), 1000);
        for ball in &state.balls {
            prop_assert!((0.0..=1600.0).contains(&ball.pos.x));
            prop_assert!((0.0..=900.0).contains(&ball.pos.y));
            prop_assert!((20.0..=100.0).contains(&ball.diameter()));
        }
    }

    #[test]
    fn paddle_stays_within_one_step_of_window(
        start in 0.0f32..1494.0,
        moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..400),
    ) {
        let mut state = GameState::new(1);
        state.paddle.pos.x = start;
        // A full right step may overhang the edge by less than one step
        let max_x = state.width() - state.paddle.width + state.paddle.height;
        for (left, right) in moves {
            tick(&mut state, &TickInput { left, right });
            prop_assert!(state.paddle.pos.x >= 0.0);
            prop_assert!(state.paddle.pos.x < max_x);
        }
    }

    #[test]
    fn falling_velocity_never_decreases(seed in any::<u64>(), frames in 1usize..200) {
        let mut state = GameState::new(seed);
        for _ in 0..20 {
            state.spawn_ball();
        }
        for _ in 0..frames {
            let before: Vec<(FallState, f32)> =
                state.balls.iter().map(|b| (b.fall, b.vel.y)).collect();
            tick(&mut state, &TickInput::default());
            for (ball, (fall, vy)) in state.balls.iter().zip(before) {
                // A catch and release in the same frame returns (v + g) - g
                if fall == FallState::Falling && ball.fall == FallState::Falling {
                    prop_assert!(ball.vel.y >= vy - 1e-4);
                }
            }
        }
    }
}

#[test]
fn ball_dropped_on_paddle_bounces_repeatedly() {
    let mut state = GameState::new(7);
    let d = 40.0;
    let x = state.paddle.pos.x + state.paddle.width / 2.0 - d / 2.0;
    let ball = Ball::new(x, 100.0, d, None, state.rng_mut());
    state.balls.push(ball);

    let mut catches = 0;
    let mut releases = 0;
    let mut prev = state.balls[0].fall;
    for _ in 0..2000 {
        tick(&mut state, &TickInput::default());
        let ball = &state.balls[0];
        match (prev, ball.fall) {
            (FallState::Falling, FallState::Rising) => catches += 1,
            (FallState::Rising, FallState::Falling) => releases += 1,
            _ => {}
        }
        prev = ball.fall;
        // Never falls through the paddle
        assert!(ball.pos.y < state.height());
    }
    assert!(catches >= 2, "expected repeated catches, got {catches}");
    assert!(releases >= 2, "expected repeated releases, got {releases}");
}

#[test]
fn ball_missing_paddle_falls_out_of_window() {
    let mut state = GameState::new(7);
    let ball = Ball::new(50.0, 100.0, 30.0, None, state.rng_mut());
    state.balls.push(ball);

    run(&mut state, TickInput::default(), 300);
    let ball = &state.balls[0];
    assert!(ball.is_falling());
    assert!(ball.pos.y > state.height());
    // Balls are never removed
    assert_eq!(state.balls.len(), 1);
}

#[test]
fn ball_bounces_between_walls() {
    let mut state = GameState::new(3);
    let mut ball = Ball::new(800.0, 0.0, 50.0, None, state.rng_mut());
    ball.vel = Vec2::new(25.0, 0.0);
    state.balls.push(ball);

    // Right wall after ~30 frames, left wall after ~90, still above the floor
    let mut sign_changes = 0;
    let mut prev_vx = 25.0f32;
    for _ in 0..100 {
        tick(&mut state, &TickInput::default());
        let vx = state.balls[0].vel.x;
        if vx.signum() != prev_vx.signum() {
            sign_changes += 1;
        }
        prev_vx = vx;
    }
    assert!(sign_changes >= 2);
    assert_eq!(state.balls[0].vel.x.abs(), 25.0);
}

#[test]
fn settings_drive_session() {
    let settings = Settings::from_json(r#"{ "width": 640, "height": 480, "gravity": 9.8 }"#).unwrap();
    let mut state = settings.new_game(9).unwrap();
    assert!((state.gravity_step - GRAVITY_STEP).abs() < 1e-6);
    for _ in 0..200 {
        state.spawn_ball();
    }
    assert!(state.balls.iter().all(|b| b.pos.x <= 640.0 && b.pos.y <= 480.0));
}
