/// Growable sequence of bits, appended most-significant bit first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer(Vec<bool>);

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self(Vec::with_capacity(bits))
    }

    /// Append the low `len` bits of `value`, high bit first
    pub fn append_bits(&mut self, value: u32, len: u8) {
        debug_assert!(len <= 31 && value >> len == 0, "value does not fit in len bits");
        self.0.extend((0..len).rev().map(|i| (value >> i) & 1 != 0));
    }

    /// Append raw bits
    pub fn extend_from_bits(&mut self, bits: &[bool]) {
        self.0.extend_from_slice(bits);
    }

    /// Number of bits held
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no bits have been appended
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bits as a slice
    pub fn as_bits(&self) -> &[bool] {
        &self.0
    }

    /// Pack into bytes, MSB first; a trailing partial byte is zero-filled
    pub fn to_codewords(&self) -> Vec<u8> {
        let mut codewords = vec![0u8; self.0.len().div_ceil(8)];
        for (i, &bit) in self.0.iter().enumerate() {
            codewords[i >> 3] |= u8::from(bit) << (7 - (i & 7));
        }
        codewords
    }

    /// Consume into the underlying bit vector
    pub fn into_bits(self) -> Vec<bool> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_bits_msb_first() {
        let mut bb = BitBuffer::new();
        bb.append_bits(0b0100, 4);
        bb.append_bits(2, 8);
        assert_eq!(bb.len(), 12);
        assert_eq!(
            bb.as_bits(),
            &[false, true, false, false, false, false, false, false, false, false, true, false]
        );
    }

    #[test]
    fn test_zero_length_append() {
        let mut bb = BitBuffer::new();
        bb.append_bits(0, 0);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_to_codewords() {
        let mut bb = BitBuffer::new();
        bb.append_bits(0xEC, 8);
        bb.append_bits(0x11, 8);
        bb.append_bits(0b101, 3);
        assert_eq!(bb.to_codewords(), vec![0xEC, 0x11, 0b1010_0000]);
    }
}
