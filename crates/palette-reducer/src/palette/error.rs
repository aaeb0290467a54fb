//! Error types for palette operations
//!
//! Building a table from colors never fails; an unusable color list falls
//! back to the default palette. Errors come from parsing hex colors and from
//! loading a serialized lookup table.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3, 6 or 8 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette construction from external data.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// A preloaded lookup table does not have one entry per quantized color
    PreloadLength {
        /// Required number of entries
        expected: usize,
        /// Number of entries supplied
        actual: usize,
    },
    /// A preload string contains a character outside ISO-8859-1
    PreloadChar {
        /// Character position of the offending char
        index: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::PreloadLength { expected, actual } => {
                write!(
                    f,
                    "preload length mismatch: expected {} entries, got {}",
                    expected, actual
                )
            }
            PaletteError::PreloadChar { index } => {
                write!(f, "preload character at {} is not ISO-8859-1", index)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
