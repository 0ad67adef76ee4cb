/// Format information: EC level and mask, BCH(15,5) protected
use crate::encoder::bch::Bch;
use crate::encoder::canvas::ModuleGrid;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

const FORMAT_GENERATOR: u32 = 0x537;
const FORMAT_XOR_MASK: u32 = 0x5412;

/// Format info is 15 bits (5 data + 10 ECC), drawn twice around the finders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

/// 15-bit masked format word for (level, mask)
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = u32::from(ec_level.format_bits()) << 3 | u32::from(mask.index());
    (Bch::encode(data, FORMAT_GENERATOR, 10) ^ FORMAT_XOR_MASK) as u16
}

/// Cell of bit `i` in the copy around the top-left finder
fn first_copy_position(i: usize) -> (usize, usize) {
    match i {
        0..=5 => (8, i),
        6 => (8, 7),
        7 => (8, 8),
        8 => (7, 8),
        _ => (14 - i, 8),
    }
}

/// Cell of bit `i` in the copy split between the other two finders
fn second_copy_position(size: usize, i: usize) -> (usize, usize) {
    if i < 8 {
        (size - 1 - i, 8)
    } else {
        (8, size - 15 + i)
    }
}

/// Draw both copies plus the always-dark module at (8, size - 8)
pub fn draw_format_bits(grid: &mut ModuleGrid, ec_level: ECLevel, mask: MaskPattern) {
    let size = grid.size();
    let bits = format_bits(ec_level, mask);
    for i in 0..15 {
        let dark = (bits >> i) & 1 == 1;
        let (x, y) = first_copy_position(i);
        grid.set_function(x, y, dark);
        let (x, y) = second_copy_position(size, i);
        grid.set_function(x, y, dark);
    }
    grid.set_function(8, size - 8, true);
}

impl FormatInfo {
    /// Read both copies and decode to the nearest valid word (up to 3 bit errors)
    pub fn extract(matrix: &BitMatrix) -> Option<Self> {
        let size = matrix.size();
        if size < 21 {
            return None;
        }
        let read = |pos: &dyn Fn(usize) -> (usize, usize)| {
            (0..15).fold(0u32, |acc, i| {
                let (x, y) = pos(i);
                acc | u32::from(matrix.get(x, y)) << i
            })
        };
        let first = read(&first_copy_position);
        let second = read(&|i: usize| second_copy_position(size, i));
        Self::decode(&[first, second])
    }

    /// Decode one or more received 15-bit words
    pub fn decode(received: &[u32]) -> Option<Self> {
        let candidates: Vec<(ECLevel, MaskPattern)> = ECLevel::ALL
            .iter()
            .flat_map(|&level| MaskPattern::ALL.iter().map(move |&mask| (level, mask)))
            .collect();
        let words: Vec<u32> = candidates
            .iter()
            .map(|&(level, mask)| u32::from(format_bits(level, mask)))
            .collect();
        let index = Bch::nearest(received, &words, 3)?;
        let (ec_level, mask_pattern) = candidates[index];
        Some(Self {
            ec_level,
            mask_pattern,
        })
    }
}
