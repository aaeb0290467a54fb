//! Serialized lookup tables
//!
//! A built table can be stored as text with one ISO-8859-1 character per
//! entry and loaded back with [`PaletteTable::with_preload`], skipping the
//! nearest-color sweep.
//!
//! [`PaletteTable::with_preload`]: super::PaletteTable::with_preload

use std::fmt::Write;

use super::error::PaletteError;
use super::table::TABLE_SIZE;

/// Bytes per line in [`to_rust_literal`] output.
const LITERAL_LINE: usize = 128;

/// Encode lookup entries as ISO-8859-1 text, one char per byte.
pub fn encode_latin1(mapping: &[u8]) -> String {
    mapping.iter().map(|&b| b as char).collect()
}

/// Decode text produced by [`encode_latin1`] into a full lookup table.
pub fn decode_latin1(text: &str) -> Result<Box<[u8; TABLE_SIZE]>, PaletteError> {
    let mut bytes = Vec::with_capacity(TABLE_SIZE);
    for (index, c) in text.chars().enumerate() {
        let code = c as u32;
        if code > 0xFF {
            return Err(PaletteError::PreloadChar { index });
        }
        bytes.push(code as u8);
    }
    let actual = bytes.len();
    bytes
        .into_boxed_slice()
        .try_into()
        .map_err(|_| PaletteError::PreloadLength {
            expected: TABLE_SIZE,
            actual,
        })
}

/// Render lookup entries as a Rust `concat!` of string literals whose
/// concatenation equals [`encode_latin1`] of the same bytes.
///
/// Control characters are written as `\u{..}` escapes; everything else is
/// written literally.
pub fn to_rust_literal(mapping: &[u8]) -> String {
    let mut out = String::with_capacity(mapping.len() * 2 + 64);
    out.push_str("concat!(\n");
    for line in mapping.chunks(LITERAL_LINE) {
        out.push_str("    \"");
        for &b in line {
            match b {
                b'\t' => out.push_str("\\t"),
                b'\n' => out.push_str("\\n"),
                b'\r' => out.push_str("\\r"),
                b'"' => out.push_str("\\\""),
                b'\\' => out.push_str("\\\\"),
                _ if (b as char).is_control() => {
                    let _ = write!(out, "\\u{{{:02x}}}", b);
                }
                _ => out.push(b as char),
            }
        }
        out.push_str("\",\n");
    }
    out.push(')');
    out
}
