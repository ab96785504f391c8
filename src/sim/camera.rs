//! Scrolling camera

use glam::Vec2;

/// World-space scroll offset; screen = world - offset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset()
    }

    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset()
    }

    /// Scroll right by `dx` world units
    pub fn advance(&mut self, dx: f32) {
        self.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_world_roundtrip() {
        let mut cam = Camera::default();
        cam.advance(120.0);
        let world = Vec2::new(500.0, 300.0);
        assert_eq!(cam.to_screen(world), Vec2::new(380.0, 300.0));
        assert_eq!(cam.to_world(cam.to_screen(world)), world);
    }
}
