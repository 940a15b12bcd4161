//! Per-frame simulation step
//!
//! Advances the paddle and every ball by exactly one frame.

use super::state::{Ball, FallState, GameState, Paddle};
use crate::consts::*;

/// Held-key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
}

/// Velocity gained in one frame of constant acceleration `g`
#[inline]
pub fn gravity_step(g: f32) -> f32 {
    g * FRAME_TIME_SCALE * FRAME_TIME_SCALE / 2.0
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let (width, height) = (state.width(), state.height());

    move_paddle(&mut state.paddle, input, width);

    let paddle = &state.paddle;
    for ball in &mut state.balls {
        step_ball(ball, paddle, input, width, height, state.gravity_step);
    }

    state.frame += 1;
}

/// Left wins over right. The step size is the paddle height. A left step stops
/// at 0; a right step is taken in full once the paddle's right edge is inside
/// the window.
fn move_paddle(paddle: &mut Paddle, input: &TickInput, width: f32) {
    if input.left {
        if paddle.pos.x > 0.0 {
            paddle.pos.x = (paddle.pos.x - paddle.height).max(0.0);
        }
    } else if input.right && paddle.right() < width {
        paddle.pos.x += paddle.height;
    }
}

fn step_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    input: &TickInput,
    width: f32,
    height: f32,
    g_step: f32,
) {
    let d = ball.diameter();

    // Player nudges balls resting in the paddle band
    let in_push_band = ball.pos.y > height - d - paddle.height
        && ball.pos.x >= paddle.pos.x - d / 2.0
        && ball.pos.x < paddle.right();
    if in_push_band {
        if input.left {
            ball.vel.x -= 1.0;
        }
        if input.right {
            ball.vel.x += 1.0;
        }
    }

    if ball.fall == FallState::Falling {
        ball.vel.y += g_step;
        ball.pos.y += ball.vel.y;

        // Catch band is skewed: 70% overhang allowed on the left, 30% on the right
        let caught = ball.pos.y >= paddle.pos.y - d
            && ball.pos.y < height
            && ball.pos.x >= paddle.pos.x - CATCH_LEFT_TOLERANCE * d
            && ball.pos.x <= paddle.right() - CATCH_RIGHT_TOLERANCE * d;
        if caught {
            log::debug!("Ball caught at ({}, {})", ball.pos.x, ball.pos.y);
            ball.fall = FallState::Rising;
        }
    }

    // Runs on the catch frame too
    if ball.fall == FallState::Rising {
        ball.pos.y -= ball.vel.y;
        ball.vel.y -= g_step;
        if ball.vel.y < 0.0 {
            ball.fall = FallState::Falling;
        }
    }

    // Wall bounce applies the reversed velocity once here and once below
    if ball.pos.x > width - d || (ball.pos.x < 0.0 && ball.pos.y < height) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x += ball.vel.x;
    }

    ball.pos.x += ball.vel.x;
}
