//! Colour value types and conversion
//!
//! This module provides type-safe colour handling with an explicit
//! distinction between gamma-corrected and linear colour spaces:
//!
//! - [`Colour4`]: the canonical RGBA value type; owns all raw arithmetic
//!   and the hex / packed-integer / HSV / HSL codecs.
//! - [`SrgbColour`]: a gamma-space wrapper whose operators round-trip
//!   through linear space. Use this for colours that are stored.
//! - [`LinearColour`]: a linear-space accumulator. Use this to chain
//!   blending arithmetic without repeated conversions.
//!
//! # Example
//!
//! ```
//! use quad_colour::{Colour4, SrgbColour};
//!
//! // Authored colours are gamma-corrected sRGB.
//! let red = SrgbColour::new(Colour4::from_hex("#ff0000").unwrap());
//!
//! // Arithmetic happens in linear space behind the scenes.
//! let darker = red * 0.25;
//! assert!(darker.raw.r > 0.25); // gamma encoding compresses dark tones
//! ```

mod colour4;
mod constants;
mod error;
mod linear;
mod srgb;
pub mod transfer;

pub use colour4::Colour4;
pub use error::ParseColourError;
pub use linear::LinearColour;
pub use srgb::SrgbColour;
