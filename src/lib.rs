//! quad-colour: Gamma-correct colour representation and compositing for
//! quad-based renderers
//!
//! This library provides the colour state of a 2D draw hierarchy: value
//! types with an explicit sRGB/linear distinction, codecs for authoring
//! formats, and per-quad gradient state that composes correctly as it
//! descends a tree of drawables.
//!
//! # Quick Start
//!
//! ```
//! use quad_colour::{Colour4, ColourInfo, SrgbColour, Vec2};
//!
//! // Corner colours are authored in gamma-corrected sRGB.
//! let gradient = ColourInfo::gradient_horizontal(
//!     SrgbColour::new(Colour4::black()),
//!     SrgbColour::new(Colour4::white()),
//! );
//!
//! // Sampling happens in linear space: the midpoint of a black-to-white
//! // gradient is 50% light, which is a bright sRGB value.
//! let mid = gradient.interpolate(Vec2::new(0.5, 0.0)).to_srgb();
//! assert!(mid.raw.r > 0.7);
//!
//! // Composing a child into a parent multiplies their colours. Opaque
//! // white is the identity, bit-for-bit.
//! let mut state = ColourInfo::single_colour(SrgbColour::new(Colour4::white()));
//! state.apply_child(gradient);
//! assert_eq!(gradient, state);
//! ```
//!
//! # Colour Spaces
//!
//! Two spaces appear throughout, and confusing them is the classic bug
//! this library's types exist to prevent:
//!
//! - **sRGB** is the gamma-corrected encoding (IEC 61966-2-1) that files,
//!   hex codes and vertex buffers use. It is what [`SrgbColour`] stores.
//!   It is NOT suitable for arithmetic: adding two sRGB values does not
//!   produce the combined light output.
//! - **Linear space** is physically proportional to light intensity, so
//!   blending arithmetic is only correct there. [`LinearColour`] marks
//!   values known to be linear.
//!
//! [`SrgbColour`]'s operators round-trip through linear space
//! automatically, with fast paths where the result is exact without
//! converting (multiplication by white, scaling by 1). [`Colour4`] is the
//! untyped payload underneath both wrappers; its own operators are plain
//! componentwise arithmetic with no space conversion, and it carries the
//! codecs (hex, packed integers, HSV, HSL) and the named colour table.
//!
//! # Quad Colour State
//!
//! [`ColourInfo`] stores either a single colour or four corner colours
//! forming a gradient. [`ColourInfo::apply_child`] composes a child's
//! state into its parent's, and [`ColourInfo::interpolate_quad`] samples
//! a sub-region; together they propagate colour down a hierarchy where
//! every drawable may tint, fade, or re-gradient its subtree.

pub mod colour;
pub mod info;
pub mod quad;

#[cfg(test)]
mod domain_tests;

pub use colour::{Colour4, LinearColour, ParseColourError, SrgbColour};
pub use info::{ColourInfo, MultiColourError};
pub use quad::{Quad, Vec2};
