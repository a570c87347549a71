//! Stateless geometry and interpolation helpers
//!
//! Rects use half-open intervals: `[x, x + width) × [y, y + height)`.
//! Two rects that only share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || other.right() <= self.x
            || self.bottom() <= other.y
            || other.bottom() <= self.y)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Clamp `v` to `[lo, hi]`
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Linear interpolation, `t` is not bounded
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector in the direction of `v`, or zero for a zero-length input
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

#[inline]
pub fn point_in_rect(p: Vec2, rect: &Rect) -> bool {
    rect.contains_point(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_and_lerp() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 3.0), 2.0);

        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        // t is not clamped
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let n = normalize(Vec2::ZERO);
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());

        let n = normalize(Vec2::new(0.0, -5.0));
        assert!((n.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!rect_overlap(&a, &b));
        assert!(!rect_overlap(&b, &a));

        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rect_overlap(&a, &below));

        let nudged = Rect::new(9.99, 0.0, 10.0, 10.0);
        assert!(rect_overlap(&a, &nudged));
    }

    #[test]
    fn test_point_in_rect_half_open() {
        let r = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert!(point_in_rect(Vec2::ZERO, &r));
        assert!(point_in_rect(Vec2::new(15.9, 15.9), &r));
        assert!(!point_in_rect(Vec2::new(16.0, 8.0), &r));
        assert!(!point_in_rect(Vec2::new(8.0, 16.0), &r));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..50.0, 0.0f32..50.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn rect_overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(rect_overlap(&a, &b), rect_overlap(&b, &a));
        }

        #[test]
        fn normalize_is_unit_or_zero(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let n = normalize(Vec2::new(x, y));
            if x == 0.0 && y == 0.0 {
                prop_assert_eq!(n, Vec2::ZERO);
            } else {
                prop_assert!((n.length() - 1.0).abs() < 1e-3);
            }
        }
    }
}
