//! Gamma-space colour wrapper
//!
//! [`SrgbColour`] is the type drawables author and store: a colour whose
//! payload is always interpreted as gamma-corrected sRGB. Its operators
//! round-trip through linear space so that blending remains physically
//! correct, with fast paths for the cases that need no conversion at all.

use std::fmt;
use std::ops::{Add, Div, Mul};

use super::colour4::Colour4;
use super::linear::LinearColour;

/// A colour in gamma-corrected sRGB space.
///
/// The stored [`raw`](Self::raw) payload is always gamma-corrected; never
/// store pre-linearized data here. The linear counterpart is computed on
/// demand via [`linear`](Self::linear) or [`to_linear`](Self::to_linear)
/// and deliberately not cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrgbColour {
    /// The gamma-corrected payload.
    pub raw: Colour4,
}

impl SrgbColour {
    /// Wrap a [`Colour4`] containing gamma-corrected sRGB values.
    #[inline]
    pub const fn new(colour: Colour4) -> Self {
        Self { raw: colour }
    }

    /// Create a colour from 8-bit gamma-corrected RGBA values.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(Colour4::from_rgba8(r, g, b, a))
    }

    /// The payload converted to linearized sRGB space, as a plain
    /// [`Colour4`].
    #[inline]
    pub fn linear(self) -> Colour4 {
        self.raw.to_linear()
    }

    /// The colour converted to a [`LinearColour`] accumulator.
    #[inline]
    pub fn to_linear(self) -> LinearColour {
        LinearColour::from_colour4(self.raw.to_linear())
    }

    /// The alpha component.
    #[inline]
    pub fn alpha(self) -> f32 {
        self.raw.a
    }

    /// Returns the colour with its alpha multiplied by `scalar`, capped at
    /// 1. Alpha carries no gamma, so this needs no linear round-trip.
    ///
    /// # Panics
    /// Panics if `scalar` is negative.
    #[inline]
    pub fn multiply_alpha(self, scalar: f32) -> Self {
        Self::new(self.raw.multiply_alpha(scalar))
    }

    /// Returns the colour with its alpha replaced, clamped to 0-1.
    #[inline]
    pub fn opacity(self, alpha: f32) -> Self {
        Self::new(self.raw.opacity(alpha))
    }

    #[inline]
    fn is_white(self) -> bool {
        self.raw.r == 1.0 && self.raw.g == 1.0 && self.raw.b == 1.0
    }
}

impl Mul for SrgbColour {
    type Output = SrgbColour;

    /// Multiplies two colours in linear space, returning the sRGB result.
    ///
    /// White operands skip the round-trip entirely: multiplying by opaque
    /// white is the identity, and multiplying by translucent white keeps
    /// the other operand's RGB and multiplies the alphas. The asymmetry is
    /// deliberate compositing semantics — white tints nothing.
    fn mul(self, rhs: SrgbColour) -> SrgbColour {
        if self.is_white() {
            if self.alpha() == 1.0 {
                return rhs;
            }

            return rhs.multiply_alpha(self.alpha());
        }

        if rhs.is_white() {
            if rhs.alpha() == 1.0 {
                return self;
            }

            return self.multiply_alpha(rhs.alpha());
        }

        (self.to_linear() * rhs.to_linear()).to_srgb()
    }
}

impl Mul<f32> for SrgbColour {
    type Output = SrgbColour;

    /// Scales the colour (alpha included) in linear space. Scaling by
    /// exactly 1 returns the colour unchanged without converting.
    ///
    /// # Panics
    /// Panics if `scalar` is negative.
    fn mul(self, scalar: f32) -> SrgbColour {
        if scalar == 1.0 {
            return self;
        }

        (self.to_linear() * scalar).to_srgb()
    }
}

impl Div<f32> for SrgbColour {
    type Output = SrgbColour;

    /// Division, defined as multiplication by the reciprocal.
    #[inline]
    fn div(self, scalar: f32) -> SrgbColour {
        self * (1.0 / scalar)
    }
}

impl Add for SrgbColour {
    type Output = SrgbColour;

    /// Adds two colours in linear space, returning the sRGB result.
    ///
    /// Unlike multiplication there is no white fast path: addition is not
    /// identity-preserving for any operand, so both sides always convert.
    fn add(self, rhs: SrgbColour) -> SrgbColour {
        (self.to_linear() + rhs.to_linear()).to_srgb()
    }
}

impl fmt::Display for SrgbColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "srgb: {}, linear: {}", self.raw, self.linear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn white() -> SrgbColour {
        SrgbColour::new(Colour4::white())
    }

    #[test]
    fn opaque_white_multiplication_is_identity() {
        let tan = SrgbColour::new(Colour4::tan());

        // Bit-for-bit identity in both operand positions: the fast path
        // must not round-trip through linear space.
        assert_eq!(tan, white() * tan);
        assert_eq!(tan, tan * white());

        let translucent = tan.opacity(0.3);
        assert_eq!(translucent, white() * translucent);
        assert_eq!(translucent, translucent * white());
    }

    /// Translucent white keeps the *other* operand's RGB verbatim and only
    /// multiplies the alphas. This diverges from naive componentwise
    /// multiplication and is load-bearing for compositing: a half-faded
    /// white parent must fade its children without tinting them.
    #[test]
    fn translucent_white_keeps_other_rgb() {
        let tan = SrgbColour::new(Colour4::tan()).opacity(0.5);
        let half_white = white().opacity(0.5);

        let expected = SrgbColour::new(Colour4::tan().opacity(0.25));
        assert_eq!(expected, half_white * tan);
        assert_eq!(expected, tan * half_white);
    }

    #[test]
    fn general_multiplication_round_trips_through_linear() {
        let red = SrgbColour::new(Colour4::red());
        let blue = SrgbColour::new(Colour4::blue());

        // Disjoint channels annihilate in linear space.
        assert_eq!(SrgbColour::new(Colour4::black()), red * blue);

        // Against the definition directly.
        let a = SrgbColour::from_rgba8(200, 100, 50, 255);
        let b = SrgbColour::from_rgba8(100, 200, 50, 128);
        assert_eq!((a.to_linear() * b.to_linear()).to_srgb(), a * b);
    }

    #[test]
    fn scalar_one_is_identity() {
        let c = SrgbColour::from_rgba8(123, 45, 67, 200);
        assert_eq!(c, c * 1.0);
    }

    #[test]
    fn scalar_multiplication_scales_in_linear_space() {
        let grey = SrgbColour::new(Colour4::new(0.5, 0.5, 0.5, 1.0));
        let scaled = grey * 0.5;

        // Halving linear light is a much smaller step in gamma space.
        let expected = Colour4::new(
            (0.5f32 + 0.055) / 1.055,
            (0.5f32 + 0.055) / 1.055,
            (0.5f32 + 0.055) / 1.055,
            0.5,
        );
        let expected = Colour4::new(
            expected.r.powf(2.4),
            expected.g.powf(2.4),
            expected.b.powf(2.4),
            expected.a,
        );
        let expected = Colour4::new(
            expected.r * 0.5,
            expected.g * 0.5,
            expected.b * 0.5,
            expected.a,
        )
        .to_srgb();

        assert_eq!(SrgbColour::new(expected), scaled);
    }

    #[test]
    fn division_is_reciprocal_multiplication() {
        let c = SrgbColour::from_rgba8(120, 140, 160, 255);
        assert_eq!(c * (1.0 / 2.0), c / 2.0);
    }

    #[test]
    fn addition_always_converts() {
        let a = SrgbColour::new(Colour4::new(0.5, 0.0, 0.0, 1.0));
        let b = SrgbColour::new(Colour4::new(0.5, 0.0, 0.0, 1.0));

        // Linear-space addition: 2 * toLinear(0.5) is still below 1, so
        // the gamma-space sum exceeds the naive 1.0.
        let sum = (a + b).raw;
        let linear_expected = 2.0 * Colour4::new(0.5, 0.0, 0.0, 1.0).to_linear().r;
        assert!((sum.r - Colour4::new(linear_expected, 0.0, 0.0, 1.0).to_srgb().r).abs() < 1e-6);

        // No fast path for white.
        let white_sum = white() + SrgbColour::new(Colour4::black());
        assert_eq!(white(), white_sum);
    }

    #[test]
    fn equality_is_structural_on_the_gamma_payload() {
        let a = SrgbColour::from_rgba8(1, 2, 3, 4);
        let b = SrgbColour::new(Colour4::from_rgba8(1, 2, 3, 4));
        assert_eq!(a, b);
        assert_ne!(a, a.opacity(0.9));
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn multiply_alpha_rejects_negative_factors() {
        let _ = white().multiply_alpha(-1.0);
    }
}
