/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::segment::Mode;
use crate::error::{QrError, Result};

pub struct NumericEncoder;

impl NumericEncoder {
    /// True if every character is an ASCII decimal digit (empty counts)
    pub fn is_numeric(text: &str) -> bool {
        text.bytes().all(|b| b.is_ascii_digit())
    }

    /// Pack `digits` into `out`, left to right in groups of three
    pub fn encode(digits: &str, out: &mut BitBuffer) -> Result<()> {
        if let Some((position, ch)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(QrError::InvalidCharacter {
                mode: Mode::Numeric,
                ch,
                position,
            });
        }

        for group in digits.as_bytes().chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            // 3n + 1 bits for n digits
            out.append_bits(value, group.len() as u8 * 3 + 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(value: u32, len: u8) -> Vec<bool> {
        let mut bb = BitBuffer::new();
        bb.append_bits(value, len);
        bb.into_bits()
    }

    #[test]
    fn test_numeric_groups() {
        // "12345" -> "123" in 10 bits, "45" in 7 bits
        let mut bb = BitBuffer::new();
        NumericEncoder::encode("12345", &mut bb).unwrap();
        assert_eq!(bb.len(), 17);
        let mut expected = bits_of(123, 10);
        expected.extend(bits_of(45, 7));
        assert_eq!(bb.as_bits(), expected.as_slice());
    }

    #[test]
    fn test_numeric_single_trailing_digit() {
        let mut bb = BitBuffer::new();
        NumericEncoder::encode("0001", &mut bb).unwrap();
        let mut expected = bits_of(0, 10);
        expected.extend(bits_of(1, 4));
        assert_eq!(bb.as_bits(), expected.as_slice());
    }

    #[test]
    fn test_numeric_rejects_non_digits() {
        let mut bb = BitBuffer::new();
        let err = NumericEncoder::encode("12a4", &mut bb).unwrap_err();
        assert_eq!(
            err,
            QrError::InvalidCharacter {
                mode: Mode::Numeric,
                ch: 'a',
                position: 2
            }
        );
        assert!(!NumericEncoder::is_numeric("１２")); // full-width digits are not ASCII
        assert!(NumericEncoder::is_numeric(""));
    }
}
