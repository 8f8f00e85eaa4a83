//! Axis-aligned rectangle primitive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world coordinates.
///
/// Coordinates follow the screen convention: y grows downward, so `min` is
/// the top-left corner and `max` the bottom-right.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. The constructor asserts
/// it and every mutator preserves it; code that writes the corners directly
/// must uphold it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Rect {
    /// Construct a rectangle from corner coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x0 > x1` or `y0 > y1`.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        assert!(x0 <= x1 && y0 <= y1, "invalid rect: min > max");
        Self {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns `true` if this rectangle overlaps another.
    ///
    /// The comparison is strict: rectangles that only share a boundary edge
    /// do not overlap. Resting contact on a tile top therefore never reads
    /// as a collision.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Move the left edge to `x`, preserving width.
    pub fn set_left(&mut self, x: f32) {
        let w = self.width();
        self.min.x = x;
        self.max.x = x + w;
    }

    /// Move the right edge to `x`, preserving width.
    pub fn set_right(&mut self, x: f32) {
        let w = self.width();
        self.min.x = x - w;
        self.max.x = x;
    }

    /// Move the top edge to `y`, preserving height.
    pub fn set_top(&mut self, y: f32) {
        let h = self.height();
        self.min.y = y;
        self.max.y = y + h;
    }

    /// Move the bottom edge to `y`, preserving height.
    pub fn set_bottom(&mut self, y: f32) {
        let h = self.height();
        self.min.y = y - h;
        self.max.y = y;
    }

    /// Translate horizontally by `dx`.
    #[inline]
    pub fn move_x(&mut self, dx: f32) {
        self.min.x += dx;
        self.max.x += dx;
    }

    /// Translate vertically by `dy`.
    #[inline]
    pub fn move_y(&mut self, dy: f32) {
        self.min.y += dy;
        self.max.y += dy;
    }

    /// Shrink the rectangle by `factor`, toward the horizontal center on X
    /// and toward the bottom edge on Y.
    ///
    /// X loses width symmetrically; Y loses height by moving only the top
    /// edge down, leaving `max.y` untouched. A squashed player keeps its
    /// feet planted.
    pub fn scale(&mut self, factor: f32) {
        let dx = 0.5 * self.width() * (1.0 - factor);
        let dy = 0.5 * self.height() * (1.0 - factor);
        self.min.x += dx;
        self.max.x -= dx;
        self.min.y += 2.0 * dy;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_dimensions() {
        let r = Rect::new(1.0, 2.0, 4.0, 10.0);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 8.0);
    }

    #[test]
    #[should_panic(expected = "invalid rect")]
    fn test_inverted_rect_panics() {
        let _ = Rect::new(5.0, 0.0, 1.0, 10.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);

        // Sharing only the right edge: not an overlap.
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));

        // Sharing only the bottom edge: not an overlap.
        let below = Rect::new(0.0, 10.0, 10.0, 20.0);
        assert!(!a.overlaps(&below));

        // Sharing only a corner: not an overlap.
        let corner = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(!a.overlaps(&corner));

        // Any interpenetration is.
        let inside = Rect::new(9.9, 9.9, 20.0, 20.0);
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_edge_setters_preserve_dimensions() {
        let mut r = Rect::new(3.0, 4.0, 10.0, 9.0);
        let (w, h) = (r.width(), r.height());

        r.set_left(-2.5);
        assert_eq!(r.min.x, -2.5);
        assert_eq!(r.width(), w);

        r.set_right(100.0);
        assert_eq!(r.max.x, 100.0);
        assert_eq!(r.width(), w);

        r.set_top(7.25);
        assert_eq!(r.min.y, 7.25);
        assert_eq!(r.height(), h);

        r.set_bottom(0.0);
        assert_eq!(r.max.y, 0.0);
        assert_eq!(r.height(), h);
    }

    #[test]
    fn test_translation() {
        let mut r = Rect::new(0.0, 0.0, 4.0, 4.0);
        r.move_x(3.5);
        r.move_y(-1.5);
        assert_eq!(r, Rect::new(3.5, -1.5, 7.5, 2.5));
    }

    #[test]
    fn test_scale_identity() {
        let mut r = Rect::new(2.0, 3.0, 34.0, 35.0);
        let before = r;
        r.scale(1.0);
        assert_eq!(r, before);
    }

    #[test]
    fn test_scale_composes_on_width() {
        let mut twice = Rect::new(0.0, 0.0, 32.0, 32.0);
        twice.scale(0.9);
        twice.scale(0.9);

        let mut once = Rect::new(0.0, 0.0, 32.0, 32.0);
        once.scale(0.81);

        assert!(
            (twice.width() - once.width()).abs() < EPSILON,
            "0.9 twice should match 0.81 once on width: {} vs {}",
            twice.width(),
            once.width()
        );
    }

    #[test]
    fn test_scale_keeps_bottom_edge() {
        let mut r = Rect::new(0.0, 0.0, 32.0, 32.0);
        r.scale(0.9);

        // X shrinks symmetrically around the center.
        assert!((r.min.x - 1.6).abs() < EPSILON);
        assert!((r.max.x - 30.4).abs() < EPSILON);

        // Y shrinks by moving the top edge down only.
        assert!((r.min.y - 3.2).abs() < EPSILON);
        assert_eq!(r.max.y, 32.0);
        assert!(r.min.y < r.max.y);
    }
}
