use crate::types::Rgba;
use glam::Vec2;

/// Polygon-fill surface supplied by the host renderer.
///
/// The core never touches pixels: every frame it hands finished vertex
/// sets to this trait. Coordinates are in the tree's own surface space
/// (origin top-left, y growing downward); the host is free to map them
/// however it likes.
pub trait Canvas {
    fn fill_triangle(&mut self, vertices: [Vec2; 3], color: Rgba);
    fn fill_quad(&mut self, vertices: [Vec2; 4], color: Rgba);
}

/// Canvas that records every call instead of drawing, for traversal
/// assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub triangles: Vec<([Vec2; 3], Rgba)>,
    pub quads: Vec<([Vec2; 4], Rgba)>,
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn fill_triangle(&mut self, vertices: [Vec2; 3], color: Rgba) {
        self.triangles.push((vertices, color));
    }

    fn fill_quad(&mut self, vertices: [Vec2; 4], color: Rgba) {
        self.quads.push((vertices, color));
    }
}
