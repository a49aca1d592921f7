//! Building search arrays and keys from external input.
//!
//! Text input is a list of unsigned integers separated by commas,
//! whitespace or newlines, in decimal or `0x` hex. Lines starting with `#`
//! are comments. Binary input is the raw element bytes, little-endian for
//! 32-bit elements.
//!
//! # Example
//!
//! ```rust
//! use lfind_simd::input::{read_values, InputFormat};
//!
//! let text = "1, 2, 0x10\n255 7\n";
//! let values: Vec<u8> = read_values(text.as_bytes(), InputFormat::Text).unwrap();
//! assert_eq!(values, vec![1, 2, 16, 255, 7]);
//! ```

use std::io::Read;

use crate::error::{LfindError, Result};

/// How input bytes encode the elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Delimited decimal or hex integers.
    #[default]
    Text,
    /// Raw element bytes.
    Binary,
}

/// An element type the searches operate on.
pub trait Element: Copy + Sized {
    /// Width in bits.
    const WIDTH: u32;

    /// Narrow a parsed value, or `None` if it does not fit.
    fn from_u64(value: u64) -> Option<Self>;

    /// Decode one element from exactly `WIDTH / 8` little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

impl Element for u8 {
    const WIDTH: u32 = 8;

    fn from_u64(value: u64) -> Option<Self> {
        u8::try_from(value).ok()
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl Element for u32 {
    const WIDTH: u32 = 32;

    fn from_u64(value: u64) -> Option<Self> {
        u32::try_from(value).ok()
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

/// Parse an unsigned decimal or `0x`-prefixed hex integer.
pub fn parse_number(token: &str) -> Option<u64> {
    let token = token.trim();
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => token.parse().ok(),
    }
}

/// Parse a search key for element type `T`.
pub fn parse_key<T: Element>(token: &str) -> Result<T> {
    parse_number(token)
        .and_then(T::from_u64)
        .ok_or_else(|| LfindError::InvalidKey {
            token: token.to_string(),
            width: T::WIDTH,
        })
}

/// Read every element from `reader`.
pub fn read_values<T: Element, R: Read>(reader: R, format: InputFormat) -> Result<Vec<T>> {
    match format {
        InputFormat::Text => read_text(reader),
        InputFormat::Binary => read_binary(reader),
    }
}

fn read_text<T: Element, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        for token in record.iter().flat_map(|field| field.split_whitespace()) {
            let value = parse_number(token).ok_or_else(|| LfindError::InvalidNumber {
                line,
                token: token.to_string(),
            })?;
            let element = T::from_u64(value).ok_or(LfindError::OutOfRange {
                line,
                value,
                width: T::WIDTH,
            })?;
            values.push(element);
        }
    }
    Ok(values)
}

fn read_binary<T: Element, R: Read>(mut reader: R) -> Result<Vec<T>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let size = (T::WIDTH / 8) as usize;
    if bytes.len() % size != 0 {
        return Err(LfindError::TruncatedInput {
            len: bytes.len(),
            width: T::WIDTH,
        });
    }
    Ok(bytes.chunks_exact(size).map(T::from_le_slice).collect())
}
