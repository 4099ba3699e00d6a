//! Canonical linear-space RGBA colour type
//!
//! [`Colour4`] owns all raw colour arithmetic: operators, clamping helpers,
//! colour-space conversion, and the hex / packed-integer / HSV / HSL codecs.
//! Higher-level types ([`crate::SrgbColour`], [`crate::ColourInfo`]) delegate
//! their numeric work here.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use super::error::ParseColourError;
use super::transfer::{linear_to_srgb, srgb_to_linear};

/// An RGBA colour with components in the 0-1 range, semantically in
/// *linear* colour space.
///
/// Values are not force-clamped on construction; individual operations
/// document whether and how they clamp.
///
/// # Example
/// ```
/// use quad_colour::Colour4;
///
/// let half_grey = Colour4::new(0.5, 0.5, 0.5, 1.0);
/// let from_bytes = Colour4::from_rgba8(255, 128, 0, 255);
/// assert_eq!(from_bytes.r, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour4 {
    /// Red component (0.0..=1.0).
    pub r: f32,
    /// Green component (0.0..=1.0).
    pub g: f32,
    /// Blue component (0.0..=1.0).
    pub b: f32,
    /// Alpha component (0.0..=1.0). Never gamma-transformed.
    pub a: f32,
}

impl Colour4 {
    /// Create a colour from components in the 0-1 range. No clamping is
    /// performed.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a colour from 8-bit components. Each byte is divided by 255
    /// exactly.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a colour from an `[r, g, b, a]` array in the 0-1 range.
    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// The colour as an `[r, g, b, a]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the colour with its alpha multiplied by `scalar`, capped at
    /// 1. RGB is unchanged.
    ///
    /// # Panics
    /// Panics if `scalar` is negative.
    #[inline]
    pub fn multiply_alpha(self, scalar: f32) -> Self {
        if scalar < 0.0 {
            panic!("cannot multiply alpha by a negative value ({scalar})");
        }

        Self::new(self.r, self.g, self.b, (self.a * scalar).min(1.0))
    }

    /// Returns the colour with its alpha *replaced* (not multiplied) by the
    /// given value, clamped to the 0-1 range.
    #[inline]
    pub fn opacity(self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }

    /// Returns the colour with its alpha replaced by an 8-bit value mapped
    /// linearly into the 0-1 range.
    #[inline]
    pub fn opacity8(self, alpha: u8) -> Self {
        self.opacity(alpha as f32 / 255.0)
    }

    /// Returns the colour with every component clamped into the 0-1 range.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Returns a lightened version of the colour: RGB multiplied by
    /// `max(1, 1 + amount)` and clamped. Alpha is untouched.
    pub fn lighten(self, amount: f32) -> Self {
        let scalar = (1.0 + amount).max(1.0);
        Self::new(self.r * scalar, self.g * scalar, self.b * scalar, self.a).clamped()
    }

    /// Returns a darkened version of the colour: RGB divided by
    /// `max(1, 1 + amount)` and clamped. Alpha is untouched.
    pub fn darken(self, amount: f32) -> Self {
        let scalar = (1.0 + amount).max(1.0);
        Self::new(self.r / scalar, self.g / scalar, self.b / scalar, self.a).clamped()
    }

    /// Applies the sRGB→linear transfer function to each chromatic
    /// component. Alpha is unchanged.
    #[inline]
    pub fn to_linear(self) -> Self {
        Self::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a,
        )
    }

    /// Applies the linear→sRGB transfer function to each chromatic
    /// component. Alpha is unchanged.
    #[inline]
    pub fn to_srgb(self) -> Self {
        Self::new(
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
            self.a,
        )
    }

    /// Packs the colour as `R<<24 | G<<16 | B<<8 | A`. Each channel is
    /// capped at 1, scaled by 255 and truncated.
    pub fn to_rgba(self) -> u32 {
        ((self.r.min(1.0) * 255.0) as u32) << 24
            | ((self.g.min(1.0) * 255.0) as u32) << 16
            | ((self.b.min(1.0) * 255.0) as u32) << 8
            | (self.a.min(1.0) * 255.0) as u32
    }

    /// Unpacks a colour from `R<<24 | G<<16 | B<<8 | A`. Exact inverse of
    /// [`to_rgba`](Self::to_rgba) at 8-bit precision.
    pub fn from_rgba(rgba: u32) -> Self {
        Self::from_rgba8(
            (rgba >> 24) as u8,
            (rgba >> 16) as u8,
            (rgba >> 8) as u8,
            rgba as u8,
        )
    }

    /// Packs the colour as `A<<24 | R<<16 | G<<8 | B`.
    pub fn to_argb(self) -> u32 {
        ((self.a.min(1.0) * 255.0) as u32) << 24
            | ((self.r.min(1.0) * 255.0) as u32) << 16
            | ((self.g.min(1.0) * 255.0) as u32) << 8
            | (self.b.min(1.0) * 255.0) as u32
    }

    /// Unpacks a colour from `A<<24 | R<<16 | G<<8 | B`.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgba8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Parses an RGB(A) hex colour code.
    ///
    /// Supported formats, each with an optional leading `#`:
    /// `RGB`, `RGBA`, `RRGGBB`, `RRGGBBAA`. In the short forms each digit
    /// is replicated (`#123` is `#112233`). Digits are case-insensitive.
    ///
    /// # Errors
    /// [`ParseColourError::InvalidLength`] for any other digit count,
    /// [`ParseColourError::InvalidDigit`] for a character outside
    /// `[0-9a-fA-F]`.
    ///
    /// # Example
    /// ```
    /// use quad_colour::Colour4;
    ///
    /// let c = Colour4::from_hex("#6495ED80").unwrap();
    /// assert_eq!(c, Colour4::from_rgba8(100, 149, 237, 128));
    /// assert!(Colour4::from_hex("12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ParseColourError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let len = hex.chars().count();
        if !matches!(len, 3 | 4 | 6 | 8) {
            return Err(ParseColourError::InvalidLength);
        }

        let mut digits = [0u8; 8];

        for (i, c) in hex.chars().enumerate() {
            digits[i] = c.to_digit(16).ok_or(ParseColourError::InvalidDigit(c))? as u8;
        }

        Ok(match len {
            // Short forms replicate each nibble: 0xF -> 0xFF.
            3 => Self::from_rgba8(digits[0] * 17, digits[1] * 17, digits[2] * 17, 255),
            4 => Self::from_rgba8(
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
                digits[3] * 17,
            ),
            6 => Self::from_rgba8(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
                255,
            ),
            _ => Self::from_rgba8(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
                digits[6] << 4 | digits[7],
            ),
        })
    }

    /// Formats the colour as an uppercase hex code.
    ///
    /// Emits `#RRGGBB` when alpha is exactly 255 and `always_output_alpha`
    /// is false, `#RRGGBBAA` otherwise.
    pub fn to_hex(self, always_output_alpha: bool) -> String {
        let argb = self.to_argb();
        let a = (argb >> 24) as u8;
        let r = (argb >> 16) as u8;
        let g = (argb >> 8) as u8;
        let b = argb as u8;

        if !always_output_alpha && a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Converts an HSV colour to a [`Colour4`]. All components are in the
    /// 0-1 range; the hue is compressed (1.0 is a full turn).
    pub fn from_hsv(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        let hi = (hue * 6.0) as i32;
        let f = hue * 6.0 - hi as f32;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        // Out-of-range sectors (hue exactly 1.0 gives hi == 6) wrap into
        // the first sector, where f == 0 makes t and p coincide.
        match hi {
            1 => Self::new(q, value, p, alpha),
            2 => Self::new(p, value, t, alpha),
            3 => Self::new(p, q, value, alpha),
            4 => Self::new(t, p, value, alpha),
            5 => Self::new(value, p, q, alpha),
            _ => Self::new(value, t, p, alpha),
        }
    }

    /// Converts the colour to HSV, returned as `[hue, saturation, value,
    /// alpha]` with every component compressed into the 0-1 range.
    ///
    /// Hue is 0 for achromatic colours (R = G = B), and saturation is 0
    /// when the value is 0.
    pub fn to_hsv(self) -> [f32; 4] {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        let hue = if max == min {
            0.0
        } else if max == self.r {
            (6.0 + (self.g - self.b) / (max - min)) % 6.0
        } else if max == self.g {
            (self.b - self.r) / (max - min) + 2.0
        } else {
            (self.r - self.g) / (max - min) + 4.0
        };

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };
        let hue = (hue / 6.0).clamp(0.0, 1.0);

        [if hue == 1.0 { 0.0 } else { hue }, saturation, max, self.a]
    }

    /// Converts an HSL colour to a [`Colour4`]. All components are in the
    /// 0-1 range; the hue is compressed (1.0 is a full turn).
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let h = hue * 6.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());

        let (r, g, b) = if (0.0..1.0).contains(&h) {
            (c, x, 0.0)
        } else if (1.0..2.0).contains(&h) {
            (x, c, 0.0)
        } else if (2.0..3.0).contains(&h) {
            (0.0, c, x)
        } else if (3.0..4.0).contains(&h) {
            (0.0, x, c)
        } else if (4.0..5.0).contains(&h) {
            (x, 0.0, c)
        } else if (5.0..=6.0).contains(&h) {
            (c, 0.0, x)
        } else {
            (0.0, 0.0, 0.0)
        };

        let m = lightness - c * 0.5;
        Self::new(r + m, g + m, b + m, alpha)
    }

    /// Converts the colour to HSL, returned as `[hue, saturation,
    /// lightness, alpha]` with every component compressed into the 0-1
    /// range.
    ///
    /// Degenerate inputs short-circuit: lightness 0 returns all-zero hue
    /// and saturation, and an achromatic colour returns zero hue and
    /// saturation with its lightness intact.
    pub fn to_hsl(self) -> [f32; 4] {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        let lightness = (max + min) / 2.0;
        if lightness <= 0.0 {
            return [0.0, 0.0, 0.0, self.a];
        }

        let diff = max - min;
        if diff <= 0.0 {
            return [0.0, 0.0, lightness, self.a];
        }

        let saturation = if lightness <= 0.5 {
            diff / (min + max)
        } else {
            diff / (2.0 - max - min)
        };

        let mut hue = if max == self.r {
            (self.g - self.b) / diff
        } else if max == self.g {
            (self.b - self.r) / diff + 2.0
        } else {
            (self.r - self.g) / diff + 4.0
        };

        hue /= 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }

        [hue, saturation, lightness, self.a]
    }
}

impl Add for Colour4 {
    type Output = Colour4;

    /// Componentwise linear addition, capped at 1 per component. Inputs
    /// are assumed non-negative; no floor is applied.
    #[inline]
    fn add(self, rhs: Colour4) -> Colour4 {
        Colour4::new(
            (self.r + rhs.r).min(1.0),
            (self.g + rhs.g).min(1.0),
            (self.b + rhs.b).min(1.0),
            (self.a + rhs.a).min(1.0),
        )
    }
}

impl Sub for Colour4 {
    type Output = Colour4;

    /// Componentwise subtraction, floored at 0 per component.
    #[inline]
    fn sub(self, rhs: Colour4) -> Colour4 {
        Colour4::new(
            (self.r - rhs.r).max(0.0),
            (self.g - rhs.g).max(0.0),
            (self.b - rhs.b).max(0.0),
            (self.a - rhs.a).max(0.0),
        )
    }
}

impl Mul for Colour4 {
    type Output = Colour4;

    /// Componentwise multiplication, unclamped. Inputs are assumed to be
    /// in range.
    #[inline]
    fn mul(self, rhs: Colour4) -> Colour4 {
        Colour4::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

impl Mul<f32> for Colour4 {
    type Output = Colour4;

    /// Componentwise scalar multiplication, capped at 1 per component.
    ///
    /// # Panics
    /// Panics if `scalar` is negative.
    #[inline]
    fn mul(self, scalar: f32) -> Colour4 {
        if scalar < 0.0 {
            panic!("cannot multiply a colour by a negative value ({scalar})");
        }

        Colour4::new(
            (self.r * scalar).min(1.0),
            (self.g * scalar).min(1.0),
            (self.b * scalar).min(1.0),
            (self.a * scalar).min(1.0),
        )
    }
}

impl Div<f32> for Colour4 {
    type Output = Colour4;

    /// Scalar division, implemented as multiplication by the reciprocal.
    ///
    /// # Panics
    /// Panics if `scalar` is zero or negative.
    #[inline]
    fn div(self, scalar: f32) -> Colour4 {
        if scalar <= 0.0 {
            panic!("cannot divide a colour by a non-positive value ({scalar})");
        }

        self * (1.0 / scalar)
    }
}

impl FromStr for Colour4 {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(R, G, B, A) = ({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}
