//! 2D vector helpers
//!
//! `Vector2` is glam's `Vec2`: add, subtract, elementwise multiply and divide
//! and `length` come from glam. The operations that can divide by zero are
//! wrapped here so they fail loudly instead of producing NaN.

use glam::Vec2;

use crate::error::{Error, Result};

pub type Vector2 = Vec2;

/// Checked vector operations
pub trait VectorExt: Sized {
    /// Unit vector in the same direction
    fn get_normalized(self) -> Result<Self>;
    /// Vector rotated 90° counter-clockwise: `(-y, x)`
    fn get_perpendicular(self) -> Self;
    /// Elementwise division, rejecting zero components
    fn try_div_elementwise(self, rhs: Self) -> Result<Self>;
}

impl VectorExt for Vec2 {
    fn get_normalized(self) -> Result<Self> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Err(Error::DivisionByZero);
        }
        Ok(self / len)
    }

    #[inline]
    fn get_perpendicular(self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    fn try_div_elementwise(self, rhs: Self) -> Result<Self> {
        if rhs.x == 0.0 || rhs.y == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, 2.0);
        assert_eq!(a + b, Vector2::new(4.0, 6.0));
        assert_eq!(a - b, Vector2::new(2.0, 2.0));
        assert_eq!(a * b, Vector2::new(3.0, 8.0));
        assert_eq!(a.try_div_elementwise(b).unwrap(), Vector2::new(3.0, 2.0));
        assert_eq!(a.length(), 5.0);
    }

    #[test]
    fn test_zero_vector_normalize_fails() {
        assert!(matches!(
            Vector2::ZERO.get_normalized(),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn test_divide_by_zero_component_fails() {
        let a = Vector2::new(1.0, 1.0);
        assert!(matches!(
            a.try_div_elementwise(Vector2::new(0.0, 2.0)),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn test_perpendicular_direction() {
        assert_eq!(
            Vector2::new(1.0, 0.0).get_perpendicular(),
            Vector2::new(0.0, 1.0)
        );
    }

    proptest! {
        #[test]
        fn normalized_has_unit_length(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
            let v = Vector2::new(x, y);
            prop_assume!(v.length() > 1.0e-3);
            let n = v.get_normalized().unwrap();
            prop_assert!((n.length() - 1.0).abs() < 1.0e-4);
        }

        #[test]
        fn perpendicular_is_orthogonal(x in -1.0e3f32..1.0e3, y in -1.0e3f32..1.0e3) {
            let v = Vector2::new(x, y);
            let p = v.get_perpendicular();
            prop_assert!(v.dot(p).abs() < 1.0e-3);
        }
    }
}
