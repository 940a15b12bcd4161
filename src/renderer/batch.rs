//! Per-frame vertex batch

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::sim::{Canvas, Rgba};

/// Collects one frame of shapes in pixel coordinates
#[derive(Debug, Clone, Default)]
pub struct ShapeBatch {
    clear_color: Rgba,
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear_color(&self) -> Rgba {
        self.clear_color
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for ShapeBatch {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_ellipse(&mut self, top_left: Vec2, size: Vec2, color: Rgba) {
        let segments = shapes::ellipse_segments(size);
        self.vertices
            .extend(shapes::ellipse(top_left, size, color, segments));
    }

    fn thick_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        self.vertices
            .extend(shapes::thick_line(from, to, thickness, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, draw};
    use crate::sim::palette::WHITE;

    #[test]
    fn clear_resets_previous_frame() {
        let mut batch = ShapeBatch::new();
        batch.thick_line(Vec2::ZERO, Vec2::X, 2.0, WHITE);
        assert_eq!(batch.vertices().len(), 6);
        batch.clear([0.5, 0.5, 0.5, 1.0]);
        assert!(batch.vertices().is_empty());
        assert_eq!(batch.clear_color(), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn session_frame_ends_with_paddle_quad() {
        let mut state = GameState::new(11);
        state.spawn_ball();
        let mut batch = ShapeBatch::new();
        draw(&state, WHITE, &mut batch);

        let segments = shapes::ellipse_segments(Vec2::splat(state.balls[0].diameter()));
        assert_eq!(batch.vertices().len(), (segments * 3) as usize + 6);
        let last = batch.vertices().last().unwrap();
        assert_eq!(last.color, state.paddle.color);
        assert_eq!(batch.clear_color(), WHITE);
    }
}
