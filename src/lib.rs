//! Paddle Balls - catch falling balls with a keyboard-driven paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, per-frame physics, draw contract)
//! - `renderer`: wgpu vertex pipeline for ellipses and thick lines
//! - `input`: Keyboard events to simulation commands
//! - `pacing`: Target frame-rate clock
//! - `settings`: Window and physics configuration

pub mod input;
pub mod pacing;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Physical acceleration fed into the per-frame gravity step
    pub const STANDARD_GRAVITY: f32 = 9.8;
    /// Frame-to-real-time conversion factor of the integrator
    pub const FRAME_TIME_SCALE: f32 = 0.16;
    /// Velocity added to a falling ball every frame (~0.12544)
    pub const GRAVITY_STEP: f32 = STANDARD_GRAVITY * FRAME_TIME_SCALE * FRAME_TIME_SCALE / 2.0;

    /// Window defaults
    pub const DEFAULT_WIDTH: u32 = 1600;
    pub const DEFAULT_HEIGHT: u32 = 900;
    pub const DEFAULT_FPS: u32 = 60;

    /// Paddle defaults when constructed without explicit size
    pub const PADDLE_DEFAULT_WIDTH: f32 = 20.0;
    pub const PADDLE_DEFAULT_HEIGHT: f32 = 8.0;
    /// Session paddle width is the window width divided by this
    pub const PADDLE_WIDTH_DIVISOR: u32 = 15;

    /// Spawned ball diameter range (inclusive)
    pub const BALL_MIN_DIAMETER: u32 = 20;
    pub const BALL_MAX_DIAMETER: u32 = 100;

    /// Catch band overlap tolerance on the paddle's left and right edge,
    /// as a fraction of the ball diameter
    pub const CATCH_LEFT_TOLERANCE: f32 = 0.7;
    pub const CATCH_RIGHT_TOLERANCE: f32 = 0.3;
}
