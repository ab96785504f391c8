//! Rendering module
//!
//! The simulation draws through [`RenderSurface`] in screen space. A GPU
//! backend implements the trait directly or uploads what [`VertexSurface`]
//! collects.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Drawing primitives issued by the simulation
pub trait RenderSurface {
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
    fn fill_polygon(&mut self, points: &[Vec2], color: [f32; 4]);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: [f32; 4]);
}

/// A queued text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
}

/// Surface that tessellates everything into a triangle list
#[derive(Debug, Default)]
pub struct VertexSurface {
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextCommand>,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.texts.clear();
    }

    /// Raw vertex bytes ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderSurface for VertexSurface {
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(rect, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: [f32; 4]) {
        self.vertices.extend(shapes::convex_polygon(points, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: [f32; 4]) {
        self.texts.push(TextCommand {
            text: text.to_owned(),
            pos,
            color,
        });
    }
}
