//! Session state and entity types
//!
//! Everything one window session owns lives here: the paddle, the balls in
//! spawn order, the window bounds and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::palette::{Rgba, random_color};
use crate::consts::*;

/// Vertical phase of a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallState {
    /// Accelerating downward under gravity
    #[default]
    Falling,
    /// Bounced off the paddle, decelerating upward
    Rising,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left corner of the bounding square (y grows downward)
    pub pos: Vec2,
    /// Width and height of the ball; fixed at creation
    diameter: f32,
    pub color: Rgba,
    /// Horizontal (x) and vertical (y) velocity accumulators
    pub vel: Vec2,
    pub fall: FallState,
}

impl Ball {
    /// Create a falling ball at rest. Any coordinates and diameter are
    /// accepted; off-window values simply render off-screen.
    pub fn new<R: Rng + ?Sized>(
        x: f32,
        y: f32,
        diameter: f32,
        color: Option<Rgba>,
        rng: &mut R,
    ) -> Self {
        Self {
            pos: Vec2::new(x, y),
            diameter,
            color: color.unwrap_or_else(|| random_color(rng)),
            vel: Vec2::ZERO,
            fall: FallState::Falling,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.fall == FallState::Falling
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
}

impl Paddle {
    /// Build a paddle from its center x and bottom y. The stored position is
    /// the top-left corner: `x - width / 2`, `y - height / 2`.
    pub fn new<R: Rng + ?Sized>(
        center_x: f32,
        bottom_y: f32,
        color: Option<Rgba>,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Self {
        Self {
            pos: Vec2::new(center_x - width / 2.0, bottom_y - height / 2.0),
            width,
            height,
            color: color.unwrap_or_else(|| random_color(rng)),
        }
    }

    /// Paddle with the default 20x8 size
    pub fn with_default_size<R: Rng + ?Sized>(
        center_x: f32,
        bottom_y: f32,
        color: Option<Rgba>,
        rng: &mut R,
    ) -> Self {
        Self::new(
            center_x,
            bottom_y,
            color,
            PADDLE_DEFAULT_WIDTH,
            PADDLE_DEFAULT_HEIGHT,
            rng,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// One window session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Window size in pixels
    pub resolution: (u32, u32),
    /// Target frame rate
    pub fps: u32,
    /// Velocity added per frame while falling
    pub gravity_step: f32,
    /// Inclusive diameter range for spawned balls (either order)
    pub diameter_range: (u32, u32),
    /// Frames simulated so far
    pub frame: u64,
    pub paddle: Paddle,
    /// Balls in spawn order; never shrinks
    pub balls: Vec<Ball>,
    rng: Pcg32,
}

impl GameState {
    /// Create a session with the default 1600x900 window
    pub fn new(seed: u64) -> Self {
        Self::with_resolution(DEFAULT_WIDTH, DEFAULT_HEIGHT, seed)
    }

    /// Create a session for the given window size. The paddle is centered
    /// horizontally on the bottom edge and is `width / 15` pixels wide.
    pub fn with_resolution(width: u32, height: u32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(
            (width / 2) as f32,
            height as f32,
            None,
            (width / PADDLE_WIDTH_DIVISOR) as f32,
            PADDLE_DEFAULT_HEIGHT,
            &mut rng,
        );

        Self {
            seed,
            resolution: (width, height),
            fps: DEFAULT_FPS,
            gravity_step: GRAVITY_STEP,
            diameter_range: (BALL_MIN_DIAMETER, BALL_MAX_DIAMETER),
            frame: 0,
            paddle,
            balls: Vec::new(),
            rng,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.resolution.0 as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.resolution.1 as f32
    }

    /// Mutable access to the session RNG (for entities built outside spawn)
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Append one ball at a random position inside the window with a random
    /// diameter and colour.
    pub fn spawn_ball(&mut self) -> &Ball {
        let (w, h) = self.resolution;
        let (a, b) = self.diameter_range;
        let (min_d, max_d) = (a.min(b), a.max(b));
        let x = self.rng.random_range(0..=w) as f32;
        let y = self.rng.random_range(0..=h) as f32;
        let diameter = self.rng.random_range(min_d..=max_d) as f32;
        let ball = Ball::new(x, y, diameter, None, &mut self.rng);

        log::debug!(
            "Spawned ball #{} at ({x}, {y}) d={diameter}",
            self.balls.len() + 1
        );
        self.balls.push(ball);
        &self.balls[self.balls.len() - 1]
    }
}
