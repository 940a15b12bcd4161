//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rgba;

/// Segment count that keeps an ellipse of this size visually smooth
pub fn ellipse_segments(size: Vec2) -> u32 {
    let extent = size.x.abs().max(size.y.abs());
    ((extent / 2.0) as u32).clamp(12, 64)
}

/// Generate vertices for a filled ellipse inscribed in a rect
pub fn ellipse(top_left: Vec2, size: Vec2, color: Rgba, segments: u32) -> Vec<Vertex> {
    let radii = size / 2.0;
    let center = top_left + radii;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line segment of the given thickness
pub fn thick_line(from: Vec2, to: Vec2, thickness: f32, color: Rgba) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    // Perpendicular for width
    let half = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    // Quad corners
    let a = from + half;
    let b = from - half;
    let c = to + half;
    let d = to - half;

    [a, b, c, c, b, d]
        .into_iter()
        .map(|p| Vertex::at(p, color))
        .collect()
}
