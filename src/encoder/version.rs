/// Version information for versions 7-40, BCH(18,6) protected
use crate::encoder::bch::Bch;
use crate::encoder::canvas::ModuleGrid;
use crate::models::{BitMatrix, Version};

const VERSION_GENERATOR: u32 = 0x1F25;

/// First version that carries version information blocks
const MIN_VERSION_WITH_INFO: u8 = 7;

/// 18-bit version word, `None` below version 7
pub fn version_bits(version: Version) -> Option<u32> {
    (version.number() >= MIN_VERSION_WITH_INFO)
        .then(|| Bch::encode(u32::from(version.number()), VERSION_GENERATOR, 12))
}

/// Bit `i` goes to (size-11 + i%3, i/3) and its transpose
fn position(size: usize, i: usize) -> (usize, usize) {
    (size - 11 + i % 3, i / 3)
}

/// Draw both 6x3 version blocks (no-op below version 7)
pub fn draw_version(grid: &mut ModuleGrid, version: Version) {
    let Some(bits) = version_bits(version) else {
        return;
    };
    let size = grid.size();
    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        let (a, b) = position(size, i);
        grid.set_function(a, b, dark);
        grid.set_function(b, a, dark);
    }
}

pub struct VersionInfo;

impl VersionInfo {
    /// Read both version blocks and decode to the nearest valid version
    /// word (up to 3 bit errors). `None` for symbols smaller than version 7.
    pub fn extract(matrix: &BitMatrix) -> Option<Version> {
        let size = matrix.size();
        if size < Version::new(MIN_VERSION_WITH_INFO)?.size() {
            return None;
        }
        let (mut top_right, mut bottom_left) = (0u32, 0u32);
        for i in 0..18 {
            let (a, b) = position(size, i);
            top_right |= u32::from(matrix.get(a, b)) << i;
            bottom_left |= u32::from(matrix.get(b, a)) << i;
        }
        Self::decode(&[top_right, bottom_left])
    }

    /// Decode one or more received 18-bit words
    pub fn decode(received: &[u32]) -> Option<Version> {
        let versions: Vec<Version> = (MIN_VERSION_WITH_INFO..=Version::MAX.number())
            .filter_map(Version::new)
            .collect();
        let words: Vec<u32> = versions.iter().filter_map(|&v| version_bits(v)).collect();
        let index = Bch::nearest(received, &words, 3)?;
        versions.get(index).copied()
    }
}
