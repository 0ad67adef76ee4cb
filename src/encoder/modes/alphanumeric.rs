/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::segment::Mode;
use crate::error::{QrError, Result};

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Index of `c` in the 45-character table
    pub fn index_of(c: char) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&t| t == c)
            .map(|i| i as u32)
    }

    /// True if every character is in the alphanumeric table (empty counts)
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| Self::index_of(c).is_some())
    }

    /// Pack `text` into `out`
    pub fn encode(text: &str, out: &mut BitBuffer) -> Result<()> {
        let indices = text
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                Self::index_of(ch).ok_or(QrError::InvalidCharacter {
                    mode: Mode::Alphanumeric,
                    ch,
                    position,
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        for pair in indices.chunks(2) {
            match *pair {
                [first, second] => out.append_bits(first * 45 + second, 11),
                [single] => out.append_bits(single, 6),
                _ => unreachable!("chunks(2) yields one or two items"),
            }
        }
        Ok(())
    }
}
