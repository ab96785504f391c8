//! Shape tessellation for 2D primitives

use glam::Vec2;

use super::Rect;
use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(rect: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = rect.min;
    let max = rect.min + rect.size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled convex polygon as a triangle fan
///
/// Fewer than 3 points produce no geometry.
pub fn convex_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let origin = points[0];

    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(origin.x, origin.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_two_triangles() {
        let verts = rect(Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[5].position, [40.0, 60.0]);
    }

    #[test]
    fn test_polygon_fan() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(convex_polygon(&square, [1.0; 4]).len(), 6);
        assert!(convex_polygon(&square[..2], [1.0; 4]).is_empty());
    }
}
