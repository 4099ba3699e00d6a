//! Linear-space accumulator colour
//!
//! [`LinearColour`] wraps a [`Colour4`] that is *known* to be in linear
//! space. It exists so that a chain of blending operations can stay in
//! linear space and pay the sRGB round-trip only once, at the ends of the
//! expression. For anything longer-lived, prefer [`SrgbColour`].

use std::ops::{Add, Mul};

use super::colour4::Colour4;
use super::srgb::SrgbColour;

/// A colour in linearized sRGB space, used as a short-lived accumulator
/// for blending arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearColour {
    /// The linear-space payload.
    pub raw: Colour4,
}

impl LinearColour {
    /// Create a linear colour from components already in linear space.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            raw: Colour4::new(r, g, b, a),
        }
    }

    /// Wrap a [`Colour4`] whose components are already linear.
    #[inline]
    pub const fn from_colour4(colour: Colour4) -> Self {
        Self { raw: colour }
    }

    /// Convert back to gamma-corrected sRGB space.
    #[inline]
    pub fn to_srgb(self) -> SrgbColour {
        SrgbColour::new(self.raw.to_srgb())
    }
}

impl Add for LinearColour {
    type Output = LinearColour;

    /// Componentwise linear addition, capped at 1 per component.
    #[inline]
    fn add(self, rhs: LinearColour) -> LinearColour {
        LinearColour::from_colour4(self.raw + rhs.raw)
    }
}

impl Mul for LinearColour {
    type Output = LinearColour;

    /// Componentwise linear multiplication (alpha included), unclamped.
    #[inline]
    fn mul(self, rhs: LinearColour) -> LinearColour {
        LinearColour::from_colour4(self.raw * rhs.raw)
    }
}

impl Mul<f32> for LinearColour {
    type Output = LinearColour;

    /// Scalar multiplication, capped at 1 per component.
    ///
    /// # Panics
    /// Panics if `scalar` is negative.
    #[inline]
    fn mul(self, scalar: f32) -> LinearColour {
        LinearColour::from_colour4(self.raw * scalar)
    }
}
