//! Separating Axis Theorem collision detection
//!
//! Two convex polygons are disjoint iff one of their edge normals is an axis
//! on which their projections do not overlap. Projections that only touch are
//! treated as overlapping, so polygons sharing an edge or a vertex collide.

use glam::Vec2;

use super::vector::VectorExt;
use crate::error::{Error, Result};

/// A convex polygon in world space (implicitly closed)
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Build a polygon, rejecting fewer than 3 vertices or zero-length edges
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        validate(&vertices)?;
        Ok(Self { vertices })
    }

    /// Axis-aligned box from its top-left corner and size
    pub fn rect(min: Vec2, size: Vec2) -> Result<Self> {
        Self::new(vec![
            min,
            Vec2::new(min.x + size.x, min.y),
            min + size,
            Vec2::new(min.x, min.y + size.y),
        ])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
}

fn validate(vertices: &[Vec2]) -> Result<()> {
    if vertices.len() < 3 {
        return Err(Error::invalid_polygon(format!(
            "need at least 3 vertices, got {}",
            vertices.len()
        )));
    }
    if vertices.iter().any(|v| !v.is_finite()) {
        return Err(Error::invalid_polygon("non-finite vertex"));
    }
    for (i, edge) in edges(vertices).enumerate() {
        if edge.length_squared() == 0.0 {
            return Err(Error::invalid_polygon(format!("edge {i} has zero length")));
        }
    }
    Ok(())
}

/// Edge vectors, including the closing edge from last to first vertex
fn edges(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| vertices[(i + 1) % n] - vertices[i])
}

/// Scalar interval of a polygon projected onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

impl Projection {
    /// Project vertices onto an axis
    ///
    /// `vertices` must be non-empty; callers pass validated polygons.
    pub(crate) fn project(vertices: &[Vec2], axis: Vec2) -> Self {
        let first = axis.dot(vertices[0]);
        vertices
            .iter()
            .skip(1)
            .fold(Self { min: first, max: first }, |acc, v| {
                let p = axis.dot(*v);
                Self {
                    min: acc.min.min(p),
                    max: acc.max.max(p),
                }
            })
    }

    /// Strictly apart; touching intervals are not separated
    #[inline]
    pub fn separated(&self, other: Self) -> bool {
        self.max < other.min || other.max < self.min
    }
}

/// Check whether two convex polygons intersect
pub fn sat_collision_check(a: &Polygon, b: &Polygon) -> Result<bool> {
    overlaps(&a.vertices, &b.vertices)
}

/// Same as [`sat_collision_check`] for raw vertex lists, validating both first
pub fn sat_collision_check_points(a: &[Vec2], b: &[Vec2]) -> Result<bool> {
    validate(a)?;
    validate(b)?;
    overlaps(a, b)
}

fn overlaps(a: &[Vec2], b: &[Vec2]) -> Result<bool> {
    for edge in edges(a).chain(edges(b)) {
        let axis = edge.get_perpendicular().get_normalized()?;
        let pa = Projection::project(a, axis);
        let pb = Projection::project(b, axis);
        if pa.separated(pb) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Polygon {
        Polygon::rect(Vec2::new(x, y), Vec2::new(w, h)).unwrap()
    }

    fn triangle(base_x: f32, base_y: f32, width: f32, height: f32) -> Polygon {
        Polygon::new(vec![
            Vec2::new(base_x - width / 2.0, base_y),
            Vec2::new(base_x, base_y - height),
            Vec2::new(base_x + width / 2.0, base_y),
        ])
        .unwrap()
    }

    #[test]
    fn test_hero_touching_ground_collides() {
        let hero = Polygon::new(vec![
            Vec2::new(0.0, 80.0),
            Vec2::new(100.0, 80.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ])
        .unwrap();
        let ground = rect(0.0, 100.0, 800.0, 50.0);
        assert!(sat_collision_check(&hero, &ground).unwrap());
    }

    #[test]
    fn test_hero_far_from_mountain() {
        let hero = rect(100.0, 30.0, 100.0, 20.0);
        let mountain = triangle(1000.0, 550.0, 300.0, 300.0);
        assert!(!sat_collision_check(&hero, &mountain).unwrap());
    }

    #[test]
    fn test_box_clipping_mountain_slope() {
        let mountain = triangle(400.0, 550.0, 200.0, 200.0);
        // Corner dips into the left slope
        let hero = rect(300.0, 470.0, 40.0, 20.0);
        assert!(sat_collision_check(&hero, &mountain).unwrap());
        // Same height but left of the slope: bounding boxes overlap, shapes do not
        let hero = rect(300.0, 360.0, 40.0, 20.0);
        assert!(!sat_collision_check(&hero, &mountain).unwrap());
    }

    #[test]
    fn test_identical_polygons_collide() {
        let m = triangle(0.0, 0.0, 10.0, 10.0);
        assert!(sat_collision_check(&m, &m.clone()).unwrap());
    }

    #[test]
    fn test_too_few_vertices() {
        let err = Polygon::new(vec![Vec2::ZERO, Vec2::ONE]).unwrap_err();
        assert!(matches!(err, Error::InvalidPolygon { .. }));
    }

    #[test]
    fn test_zero_length_edge() {
        let pts = [Vec2::ZERO, Vec2::ZERO, Vec2::new(1.0, 1.0)];
        let err = Polygon::new(pts.to_vec()).unwrap_err();
        assert!(matches!(err, Error::InvalidPolygon { .. }));

        let ok = [Vec2::ZERO, Vec2::X, Vec2::Y];
        let err = sat_collision_check_points(&ok, &pts).unwrap_err();
        assert!(matches!(err, Error::InvalidPolygon { .. }));
    }

    #[test]
    fn test_projection_touching_not_separated() {
        let a = Projection { min: 0.0, max: 1.0 };
        let b = Projection { min: 1.0, max: 2.0 };
        assert!(!a.separated(b));
        let c = Projection { min: 1.01, max: 2.0 };
        assert!(a.separated(c));
    }

    #[test]
    fn test_projection_of_triangle() {
        let tri = triangle(0.0, 0.0, 10.0, 10.0);
        let p = Projection::project(tri.vertices(), Vec2::X);
        assert_eq!(p, Projection { min: -5.0, max: 5.0 });
        let p = Projection::project(tri.vertices(), Vec2::Y);
        assert_eq!(p, Projection { min: -10.0, max: 0.0 });
    }

    /// Regular convex polygon around a center
    fn regular(center: Vec2, radius: f32, sides: usize, phase: f32) -> Polygon {
        let verts = (0..sides)
            .map(|i| {
                let t = phase + i as f32 / sides as f32 * std::f32::consts::TAU;
                center + Vec2::new(t.cos(), t.sin()) * radius
            })
            .collect();
        Polygon::new(verts).unwrap()
    }

    proptest! {
        #[test]
        fn sat_is_symmetric(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0,
            bx in -200.0f32..200.0, by in -200.0f32..200.0,
            ra in 1.0f32..100.0, rb in 1.0f32..100.0,
            na in 3usize..8, nb in 3usize..8,
            phase in 0.0f32..6.28,
        ) {
            let a = regular(Vec2::new(ax, ay), ra, na, phase);
            let b = regular(Vec2::new(bx, by), rb, nb, 0.0);
            prop_assert_eq!(
                sat_collision_check(&a, &b).unwrap(),
                sat_collision_check(&b, &a).unwrap()
            );
        }

        #[test]
        fn far_apart_polygons_do_not_collide(
            ra in 1.0f32..100.0, rb in 1.0f32..100.0,
            na in 3usize..8, nb in 3usize..8,
            angle in 0.0f32..6.28, extra in 1.0f32..500.0,
        ) {
            let a = regular(Vec2::ZERO, ra, na, 0.0);
            let offset = Vec2::new(angle.cos(), angle.sin()) * (ra + rb + extra);
            let b = regular(offset, rb, nb, angle);
            prop_assert!(!sat_collision_check(&a, &b).unwrap());
        }

        #[test]
        fn polygon_collides_with_itself(
            cx in -500.0f32..500.0, cy in -500.0f32..500.0,
            r in 1.0f32..100.0, n in 3usize..10,
        ) {
            let a = regular(Vec2::new(cx, cy), r, n, 0.3);
            prop_assert!(sat_collision_check(&a, &a).unwrap());
        }
    }
}
