//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.125, 0.5, 1.0, 1.0];
    pub const HERO: [f32; 4] = [0.78, 0.9, 1.0, 1.0];
    pub const MOUNTAIN: [f32; 4] = [0.5, 0.25, 0.125, 1.0];
    pub const GROUND: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const CLOUD: [f32; 4] = [0.95, 0.95, 1.0, 0.9];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.3, 0.2, 1.0];
    pub const VICTORY: [f32; 4] = [1.0, 0.85, 0.3, 1.0];
}
