//! Geometry carriers for colour interpolation
//!
//! Interpolation positions live in the unit colour space of a drawable's
//! quad: `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.
//! These types carry positions only; they do no geometry of their own.

/// A 2D interpolation position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Four corner positions of a quadrilateral, expressed in the unit
/// colour-interpolation space of an ancestor quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl Quad {
    /// The full unit quad, covering the ancestor exactly.
    pub const UNIT: Quad = Quad {
        top_left: Vec2::new(0.0, 0.0),
        top_right: Vec2::new(1.0, 0.0),
        bottom_left: Vec2::new(0.0, 1.0),
        bottom_right: Vec2::new(1.0, 1.0),
    };

    /// Create a quad from four explicit corners.
    #[inline]
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Create an axis-aligned quad from an origin and a size.
    #[inline]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            top_left: Vec2::new(x, y),
            top_right: Vec2::new(x + width, y),
            bottom_left: Vec2::new(x, y + height),
            bottom_right: Vec2::new(x + width, y + height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_quad_matches_from_rect() {
        assert_eq!(Quad::UNIT, Quad::from_rect(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn from_rect_corner_layout() {
        let q = Quad::from_rect(0.25, 0.5, 0.5, 0.25);
        assert_eq!(Vec2::new(0.25, 0.5), q.top_left);
        assert_eq!(Vec2::new(0.75, 0.5), q.top_right);
        assert_eq!(Vec2::new(0.25, 0.75), q.bottom_left);
        assert_eq!(Vec2::new(0.75, 0.75), q.bottom_right);
    }
}
