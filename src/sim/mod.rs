//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Balls updated in insertion order
//! - No window, GPU or platform dependencies

pub mod draw;
pub mod palette;
pub mod state;
pub mod tick;

pub use draw::{Canvas, draw};
pub use palette::{Rgba, random_color};
pub use state::{Ball, FallState, GameState, Paddle};
pub use tick::{TickInput, gravity_step, tick};
