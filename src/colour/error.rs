//! Error types for colour parsing.

use thiserror::Error;

/// Error returned when parsing a hex colour string fails.
///
/// The digit count is validated before the digits themselves, so a
/// five-character string reports [`InvalidLength`] even when it also
/// contains non-hex characters.
///
/// [`InvalidLength`]: ParseColourError::InvalidLength
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseColourError {
    /// The string has an unsupported number of hex digits (expected 3, 4,
    /// 6 or 8 after stripping an optional `#`).
    #[error("invalid hex colour length (expected 3, 4, 6 or 8 digits)")]
    InvalidLength,

    /// A character outside `[0-9a-fA-F]` was encountered.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
