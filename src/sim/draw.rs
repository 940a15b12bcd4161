//! Drawing contract between the simulation and a 2D backend

use glam::Vec2;

use super::palette::Rgba;
use super::state::GameState;

/// Minimal 2D drawing surface (pixel coordinates, y down)
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgba);

    /// Filled ellipse inscribed in the rect at `top_left` with `size`
    fn fill_ellipse(&mut self, top_left: Vec2, size: Vec2, color: Rgba);

    /// Line from `from` to `to`, `thickness` pixels wide, centered on the segment
    fn thick_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);
}

/// Emit one frame: background, balls in spawn order, then the paddle on top
pub fn draw<C: Canvas + ?Sized>(state: &GameState, background: Rgba, canvas: &mut C) {
    canvas.clear(background);

    for ball in &state.balls {
        let d = ball.diameter();
        canvas.fill_ellipse(ball.pos, Vec2::splat(d), ball.color);
    }

    let paddle = &state.paddle;
    canvas.thick_line(
        paddle.pos,
        Vec2::new(paddle.right(), paddle.pos.y),
        paddle.height,
        paddle.color,
    );
}
