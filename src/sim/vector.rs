//! Fluent vector helpers on top of `glam::Vec2`
//!
//! glam already provides the value-returning arithmetic. This adds the
//! receiver-mutating forms used when building bullet patterns, and a
//! `normalize` that leaves a zero vector untouched instead of producing NaN.

use glam::Vec2;

/// In-place, chainable vector operations
pub trait VecExt {
    /// Add `other` to self
    fn add_mut(&mut self, other: Vec2) -> &mut Self;
    /// Subtract `other` from self
    fn sub_mut(&mut self, other: Vec2) -> &mut Self;
    /// Multiply self by `k`
    fn scale_mut(&mut self, k: f32) -> &mut Self;
    /// Scale self to unit length; a zero vector is left unchanged
    fn normalize_mut(&mut self) -> &mut Self;
}

impl VecExt for Vec2 {
    #[inline]
    fn add_mut(&mut self, other: Vec2) -> &mut Self {
        *self += other;
        self
    }

    #[inline]
    fn sub_mut(&mut self, other: Vec2) -> &mut Self {
        *self -= other;
        self
    }

    #[inline]
    fn scale_mut(&mut self, k: f32) -> &mut Self {
        *self *= k;
        self
    }

    #[inline]
    fn normalize_mut(&mut self) -> &mut Self {
        let len = self.length();
        if len > 0.0 {
            *self /= len;
        }
        self
    }
}

/// Unit vector in the direction of `v`, or `v` itself if it has no length
#[inline]
pub fn normalized(mut v: Vec2) -> Vec2 {
    *v.normalize_mut()
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Unit vector at `angle` radians
#[inline]
pub fn from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vec2::ZERO;
        v.normalize_mut();
        assert_eq!(v, Vec2::ZERO);
        assert!(!v.x.is_nan() && !v.y.is_nan());
        // Scaling the result stays a no-op
        v.scale_mut(250.0);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_fluent_chain() {
        let mut v = Vec2::new(3.0, 0.0);
        v.add_mut(Vec2::new(0.0, 4.0)).normalize_mut().scale_mut(10.0);
        assert!((v - Vec2::new(6.0, 8.0)).length() < 1e-4);
        v.sub_mut(Vec2::new(6.0, 8.0));
        assert!(v.length() < 1e-4);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), 5.0);
        assert_eq!(distance(Vec2::ZERO, Vec2::ZERO), 0.0);
    }

    proptest! {
        #[test]
        fn prop_normalize_nonzero_is_unit(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let n = normalized(Vec2::new(x, y));
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn prop_scale_is_linear(x in -1.0e3f32..1.0e3, y in -1.0e3f32..1.0e3, k in 0.0f32..100.0) {
            let v = Vec2::new(x, y);
            let mut scaled = v;
            scaled.scale_mut(k);
            let expected = k * v.length();
            prop_assert!((scaled.length() - expected).abs() <= 1e-3 * expected.max(1.0));
        }
    }
}
