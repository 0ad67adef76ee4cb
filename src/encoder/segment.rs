//! Data segments: a run of input tagged with its encoding mode

use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::{
    alphanumeric::AlphanumericEncoder, byte::ByteEncoder, numeric::NumericEncoder,
};
use crate::error::Result;
use crate::models::Version;

/// Segment encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Decimal digits, 3 per 10 bits
    Numeric,
    /// 45-character set, 2 per 11 bits
    Alphanumeric,
    /// Arbitrary bytes, 8 bits each
    Byte,
    /// Shift JIS double-byte characters (defined, never produced)
    Kanji,
    /// Extended Channel Interpretation designator (defined, never produced)
    Eci,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn mode_bits(self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
            Mode::Kanji => 0x8,
            Mode::Eci => 0x7,
        }
    }

    /// Width of the character count field at `version`
    ///
    /// Widths change at the version bands 1-9, 10-26 and 27-40.
    pub fn char_count_bits(self, version: Version) -> u8 {
        let band = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        let widths: [u8; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
            Mode::Eci => [0, 0, 0],
        };
        widths[band]
    }
}

/// One chunk of packed input data
///
/// Immutable once built. `num_chars` counts input units (digits, characters
/// or bytes), not bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    num_chars: usize,
    data: Vec<bool>,
}

impl Segment {
    /// Build a segment from already packed bits
    pub fn new(mode: Mode, num_chars: usize, data: Vec<bool>) -> Self {
        Self {
            mode,
            num_chars,
            data,
        }
    }

    /// Byte-mode segment over raw binary data
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer::with_capacity(data.len() * 8);
        ByteEncoder::encode(data, &mut bb);
        Self::new(Mode::Byte, data.len(), bb.into_bits())
    }

    /// Numeric-mode segment; fails on any non-digit character
    pub fn make_numeric(digits: &str) -> Result<Self> {
        let mut bb = BitBuffer::with_capacity(digits.len() * 10 / 3 + 4);
        NumericEncoder::encode(digits, &mut bb)?;
        Ok(Self::new(Mode::Numeric, digits.len(), bb.into_bits()))
    }

    /// Alphanumeric-mode segment; fails on characters outside the 45-character set
    pub fn make_alphanumeric(text: &str) -> Result<Self> {
        let mut bb = BitBuffer::with_capacity(text.len() * 11 / 2 + 6);
        AlphanumericEncoder::encode(text, &mut bb)?;
        Ok(Self::new(Mode::Alphanumeric, text.chars().count(), bb.into_bits()))
    }

    /// Pick a single mode for the whole text: numeric, else alphanumeric,
    /// else byte over its UTF-8 encoding. Empty text yields no segments.
    pub fn make_segments(text: &str) -> Vec<Self> {
        if text.is_empty() {
            return Vec::new();
        }
        let seg = Self::make_numeric(text)
            .or_else(|_| Self::make_alphanumeric(text))
            .unwrap_or_else(|_| Self::make_bytes(text.as_bytes()));
        vec![seg]
    }

    /// Segment mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of input units
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Packed payload bits
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Bits needed to store `segments` at `version`: mode indicator, count
    /// field and payload per segment. `None` if any count overflows its field.
    pub fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
        let mut result = 0usize;
        for seg in segments {
            let ccbits = seg.mode.char_count_bits(version);
            if seg.num_chars >= 1usize << ccbits {
                return None;
            }
            result = result.checked_add(4 + usize::from(ccbits) + seg.data.len())?;
        }
        Some(result)
    }
}
