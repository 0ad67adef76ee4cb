/// BCH codes protecting the format (15,5) and version (18,6) information
pub struct Bch;

impl Bch {
    /// Remainder of `data * x^degree` divided by `generator`, where
    /// `generator` has degree `degree` (its top bit is `1 << degree`).
    pub fn remainder(data: u32, generator: u32, degree: u32) -> u32 {
        let mut rem = data;
        for _ in 0..degree {
            rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
        }
        rem
    }

    /// Systematic codeword: data in the high bits, check bits below
    pub fn encode(data: u32, generator: u32, degree: u32) -> u32 {
        data << degree | Self::remainder(data, generator, degree)
    }

    /// Index of the candidate closest in Hamming distance to any of the
    /// `received` words, if within `max_distance`. Earlier candidates win
    /// ties.
    pub fn nearest(received: &[u32], candidates: &[u32], max_distance: u32) -> Option<usize> {
        let mut best: Option<(u32, usize)> = None;
        for (index, &candidate) in candidates.iter().enumerate() {
            let Some(dist) = received
                .iter()
                .map(|&word| (word ^ candidate).count_ones())
                .min()
            else {
                return None;
            };
            if best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, index));
            }
        }
        best.filter(|&(d, _)| d <= max_distance).map(|(_, i)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_code_is_divisible() {
        // Every format codeword (before the XOR mask) is a multiple of 0x537
        for data in 0..32u32 {
            let word = Bch::encode(data, 0x537, 10);
            assert_eq!(word >> 10, data);
            let mut rem = word;
            for bit in (10..15).rev() {
                if (rem >> bit) & 1 == 1 {
                    rem ^= 0x537 << (bit - 10);
                }
            }
            assert_eq!(rem, 0, "data {}", data);
        }
    }

    #[test]
    fn test_version_code_known_value() {
        assert_eq!(Bch::encode(7, 0x1F25, 12), 0x07C94);
        assert_eq!(Bch::encode(40, 0x1F25, 12), 0x28C69);
    }

    #[test]
    fn test_nearest_candidate() {
        let candidates = [0b0000_0000, 0b1111_0000, 0b0000_1111];
        assert_eq!(Bch::nearest(&[0b1110_0000], &candidates, 3), Some(1));
        assert_eq!(Bch::nearest(&[0b1111_1111, 0b0000_0111], &candidates, 3), Some(2));
        // Equidistant: first candidate wins
        assert_eq!(Bch::nearest(&[0b0000_0011], &candidates, 3), Some(0));
        assert_eq!(Bch::nearest(&[0b1111_1111], &candidates[..1], 3), None);
        assert_eq!(Bch::nearest(&[], &candidates, 3), None);
    }
}
