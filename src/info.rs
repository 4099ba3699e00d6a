//! Per-quad colour state
//!
//! [`ColourInfo`] holds the colour of a drawable quad: either a single
//! colour for all four corners or four independent corner colours forming
//! a gradient. Corners are stored in gamma-corrected sRGB space;
//! interpolation and composition happen in linear space.
//!
//! The core operation is [`apply_child`](ColourInfo::apply_child):
//! descending a draw hierarchy, each child's colour state is combined
//! with its parent's, sampling the parent gradient at the child's corner
//! positions where needed.

use std::fmt;

use thiserror::Error;

use crate::colour::{Colour4, LinearColour, SrgbColour};
use crate::quad::{Quad, Vec2};

/// Error returned when reading a single colour from a gradient.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("attempted to read a single colour from a multi-colour ColourInfo")]
pub struct MultiColourError;

/// The colour state of a quad: a single colour or a four-corner gradient.
///
/// The corner fields are private so that the single-colour invariant can
/// be enforced: whenever `has_single_colour` is set, all four corners
/// hold the same value. Equality compares the *declared* representation,
/// so a gradient whose four corners happen to be equal does not compare
/// equal to a single colour.
#[derive(Debug, Clone, Copy)]
pub struct ColourInfo {
    top_left: SrgbColour,
    top_right: SrgbColour,
    bottom_left: SrgbColour,
    bottom_right: SrgbColour,
    has_single_colour: bool,
}

impl ColourInfo {
    /// A state where all four corners share one colour.
    pub const fn single_colour(colour: SrgbColour) -> Self {
        Self {
            top_left: colour,
            top_right: colour,
            bottom_left: colour,
            bottom_right: colour,
            has_single_colour: true,
        }
    }

    /// A horizontal gradient: `left` on the left edge, `right` on the
    /// right edge.
    pub const fn gradient_horizontal(left: SrgbColour, right: SrgbColour) -> Self {
        Self {
            top_left: left,
            bottom_left: left,
            top_right: right,
            bottom_right: right,
            has_single_colour: false,
        }
    }

    /// A vertical gradient: `top` on the top edge, `bottom` on the bottom
    /// edge.
    pub const fn gradient_vertical(top: SrgbColour, bottom: SrgbColour) -> Self {
        Self {
            top_left: top,
            top_right: top,
            bottom_left: bottom,
            bottom_right: bottom,
            has_single_colour: false,
        }
    }

    /// Whether this state declares a single colour.
    #[inline]
    pub fn has_single_colour(&self) -> bool {
        self.has_single_colour
    }

    /// The single colour, if this state declares one.
    #[inline]
    pub fn try_extract_single_colour(&self) -> Option<SrgbColour> {
        if self.has_single_colour {
            Some(self.top_left)
        } else {
            None
        }
    }

    /// The single colour, or an error if this state is a gradient.
    #[inline]
    pub fn as_single_colour(&self) -> Result<SrgbColour, MultiColourError> {
        self.try_extract_single_colour().ok_or(MultiColourError)
    }

    /// The top-left corner colour.
    #[inline]
    pub fn top_left(&self) -> SrgbColour {
        self.top_left
    }

    /// The top-right corner colour.
    #[inline]
    pub fn top_right(&self) -> SrgbColour {
        self.top_right
    }

    /// The bottom-left corner colour.
    #[inline]
    pub fn bottom_left(&self) -> SrgbColour {
        self.bottom_left
    }

    /// The bottom-right corner colour.
    #[inline]
    pub fn bottom_right(&self) -> SrgbColour {
        self.bottom_right
    }

    #[inline]
    fn single(&self) -> SrgbColour {
        debug_assert!(self.has_single_colour);
        self.top_left
    }

    #[inline]
    fn set_single(&mut self, colour: SrgbColour) {
        debug_assert!(self.has_single_colour);
        self.top_left = colour;
        self.top_right = colour;
        self.bottom_left = colour;
        self.bottom_right = colour;
    }

    /// Bilinearly interpolate the corner colours at a position in the unit
    /// quad, in linear space.
    ///
    /// `t.x` runs left to right and `t.y` top to bottom; `(0, 0)` yields
    /// the top-left corner. Positions outside the unit quad extrapolate.
    pub fn interpolate(&self, t: Vec2) -> LinearColour {
        if self.has_single_colour {
            return self.top_left.to_linear();
        }

        (self.top_left.to_linear() * (1.0 - t.x) + self.top_right.to_linear() * t.x)
            * (1.0 - t.y)
            + (self.bottom_left.to_linear() * (1.0 - t.x) + self.bottom_right.to_linear() * t.x)
                * t.y
    }

    /// Sample this state at the four corners of `quad`, yielding the
    /// colour state of the sub-region `quad` covers.
    ///
    /// A single colour is position-independent and is returned unchanged,
    /// preserving bit-exactness.
    pub fn interpolate_quad(&self, quad: Quad) -> ColourInfo {
        if self.has_single_colour {
            return *self;
        }

        ColourInfo {
            top_left: self.interpolate(quad.top_left).to_srgb(),
            top_right: self.interpolate(quad.top_right).to_srgb(),
            bottom_left: self.interpolate(quad.bottom_left).to_srgb(),
            bottom_right: self.interpolate(quad.bottom_right).to_srgb(),
            has_single_colour: false,
        }
    }

    /// Combine a child's colour state into this one, for a child covering
    /// this quad exactly.
    ///
    /// Single-colour operands take multiplication fast paths (including
    /// the white identity); anything else samples and multiplies per
    /// corner.
    pub fn apply_child(&mut self, child: ColourInfo) {
        if !self.has_single_colour {
            self.apply_child_quad(child, Quad::UNIT);
            return;
        }

        if child.has_single_colour {
            self.set_single(self.single() * child.single());
            return;
        }

        let parent = self.single();
        self.has_single_colour = false;
        self.top_left = child.top_left * parent;
        self.top_right = child.top_right * parent;
        self.bottom_left = child.bottom_left * parent;
        self.bottom_right = child.bottom_right * parent;
    }

    /// Combine a child's colour state into this one, for a child covering
    /// the sub-region `interp` of this quad.
    ///
    /// # Panics
    /// Panics if this state declares a single colour; sampling a single
    /// colour at a sub-quad is meaningless, use
    /// [`apply_child`](Self::apply_child) instead.
    pub fn apply_child_quad(&mut self, child: ColourInfo, interp: Quad) {
        assert!(
            !self.has_single_colour,
            "child quad interpolation requires a multi-colour parent"
        );

        let top_left = (self.interpolate(interp.top_left) * child.top_left.to_linear()).to_srgb();
        let top_right =
            (self.interpolate(interp.top_right) * child.top_right.to_linear()).to_srgb();
        let bottom_left =
            (self.interpolate(interp.bottom_left) * child.bottom_left.to_linear()).to_srgb();
        let bottom_right =
            (self.interpolate(interp.bottom_right) * child.bottom_right.to_linear()).to_srgb();

        self.top_left = top_left;
        self.top_right = top_right;
        self.bottom_left = bottom_left;
        self.bottom_right = bottom_right;
    }

    /// Multiply two colour states corner by corner in linear space.
    ///
    /// The result always declares a gradient, even when both inputs are
    /// single colours; use [`apply_child`](Self::apply_child) to preserve
    /// the single-colour representation.
    pub fn multiply(first: ColourInfo, second: ColourInfo) -> ColourInfo {
        ColourInfo {
            top_left: (first.top_left.to_linear() * second.top_left.to_linear()).to_srgb(),
            top_right: (first.top_right.to_linear() * second.top_right.to_linear()).to_srgb(),
            bottom_left: (first.bottom_left.to_linear() * second.bottom_left.to_linear())
                .to_srgb(),
            bottom_right: (first.bottom_right.to_linear() * second.bottom_right.to_linear())
                .to_srgb(),
            has_single_colour: false,
        }
    }

    /// Returns this state with every corner's alpha multiplied by `alpha`.
    ///
    /// Multiplying by exactly 1 returns the state unchanged. Alpha carries
    /// no gamma, so no linear round-trip is involved.
    ///
    /// # Panics
    /// Panics if `alpha` is negative.
    pub fn multiply_alpha(&self, alpha: f32) -> ColourInfo {
        if alpha == 1.0 {
            return *self;
        }

        if self.has_single_colour {
            return ColourInfo::single_colour(self.single().multiply_alpha(alpha));
        }

        ColourInfo {
            top_left: self.top_left.multiply_alpha(alpha),
            top_right: self.top_right.multiply_alpha(alpha),
            bottom_left: self.bottom_left.multiply_alpha(alpha),
            bottom_right: self.bottom_right.multiply_alpha(alpha),
            has_single_colour: false,
        }
    }

    /// The arithmetic mean of the four corner colours, averaged on the raw
    /// gamma-space components.
    ///
    /// This is a cheap display heuristic, not a physically meaningful
    /// blend; averaging in gamma space skews towards dark tones.
    pub fn average_colour(&self) -> SrgbColour {
        if self.has_single_colour {
            return self.single();
        }

        let tl = self.top_left.raw;
        let tr = self.top_right.raw;
        let bl = self.bottom_left.raw;
        let br = self.bottom_right.raw;

        SrgbColour::new(Colour4::new(
            (tl.r + tr.r + bl.r + br.r) / 4.0,
            (tl.g + tr.g + bl.g + br.g) / 4.0,
            (tl.b + tr.b + bl.b + br.b) / 4.0,
            (tl.a + tr.a + bl.a + br.a) / 4.0,
        ))
    }

    /// The largest corner alpha.
    pub fn max_alpha(&self) -> f32 {
        let mut max = self.top_left.alpha();
        if self.top_right.alpha() > max {
            max = self.top_right.alpha();
        }
        if self.bottom_left.alpha() > max {
            max = self.bottom_left.alpha();
        }
        if self.bottom_right.alpha() > max {
            max = self.bottom_right.alpha();
        }
        max
    }

    /// The smallest corner alpha.
    pub fn min_alpha(&self) -> f32 {
        let mut min = self.top_left.alpha();
        if self.top_right.alpha() < min {
            min = self.top_right.alpha();
        }
        if self.bottom_left.alpha() < min {
            min = self.bottom_left.alpha();
        }
        if self.bottom_right.alpha() < min {
            min = self.bottom_right.alpha();
        }
        min
    }
}

impl From<SrgbColour> for ColourInfo {
    #[inline]
    fn from(colour: SrgbColour) -> Self {
        ColourInfo::single_colour(colour)
    }
}

/// Equality on the declared representation: a single colour never equals
/// a gradient, even one whose corners all hold the same value.
impl PartialEq for ColourInfo {
    fn eq(&self, other: &Self) -> bool {
        if self.has_single_colour != other.has_single_colour {
            return false;
        }

        if self.has_single_colour {
            return self.top_left == other.top_left;
        }

        self.top_left == other.top_left
            && self.top_right == other.top_right
            && self.bottom_left == other.bottom_left
            && self.bottom_right == other.bottom_right
    }
}

impl PartialEq<SrgbColour> for ColourInfo {
    /// A colour state equals a plain colour only when it declares a single
    /// colour with that value.
    fn eq(&self, other: &SrgbColour) -> bool {
        self.has_single_colour && self.top_left == *other
    }
}

impl fmt::Display for ColourInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_single_colour {
            write!(f, "{} (Single)", self.top_left)
        } else {
            write!(
                f,
                "Top: {} / {}, Bottom: {} / {}",
                self.top_left, self.top_right, self.bottom_left, self.bottom_right
            )
        }
    }
}
