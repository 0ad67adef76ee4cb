use super::BitMatrix;
use crate::encoder::format::FormatInfo;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest version (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Wrap a version number, `None` outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Get the version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Following version, `None` after 40
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

/// Error correction level, ordered by recovery capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels from lowest to highest
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Index into the per-level block tables
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// 2-bit value written into the format information (01=L, 00=M, 11=Q, 10=H)
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }
}

/// Mask pattern (0-7); formulas take column `x` and row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (x + y) % 2 == 0
    Pattern0 = 0,
    /// y % 2 == 0
    Pattern1 = 1,
    /// x % 3 == 0
    Pattern2 = 2,
    /// (x + y) % 3 == 0
    Pattern3 = 3,
    /// (x/3 + y/2) % 2 == 0
    Pattern4 = 4,
    /// (x*y)%2 + (x*y)%3 == 0
    Pattern5 = 5,
    /// ((x*y)%2 + (x*y)%3) % 2 == 0
    Pattern6 = 6,
    /// ((x+y)%2 + (x*y)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its index, `None` above 7
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Index 0-7
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the module at column `x`, row `y` is inverted by this mask
    pub fn is_masked(self, x: usize, y: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (x + y) % 2 == 0,
            MaskPattern::Pattern1 => y % 2 == 0,
            MaskPattern::Pattern2 => x % 3 == 0,
            MaskPattern::Pattern3 => (x + y) % 3 == 0,
            MaskPattern::Pattern4 => (x / 3 + y / 2) % 2 == 0,
            MaskPattern::Pattern5 => (x * y) % 2 + (x * y) % 3 == 0,
            MaskPattern::Pattern6 => ((x * y) % 2 + (x * y) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((x + y) % 2 + (x * y) % 3) % 2 == 0,
        }
    }
}

/// Finished QR code symbol
///
/// Immutable once built: all fields are private and the module grid is
/// only reachable through bounded read accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QRCode {
    version: Version,
    error_correction: ECLevel,
    mask_pattern: MaskPattern,
    modules: BitMatrix,
}

impl QRCode {
    pub(crate) fn new(
        version: Version,
        error_correction: ECLevel,
        mask_pattern: MaskPattern,
        modules: BitMatrix,
    ) -> Self {
        debug_assert_eq!(modules.size(), version.size());
        Self {
            version,
            error_correction,
            mask_pattern,
            modules,
        }
    }

    /// QR code version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Width and height in modules (21-177)
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Error correction level actually used (may be boosted above the request)
    pub fn error_correction(&self) -> ECLevel {
        self.error_correction
    }

    /// Mask pattern applied to the data modules
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Module color at (x, y): `true` = dark. Coordinates outside the
    /// symbol, including negative ones, read as light.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.modules.get(x as usize, y as usize)
    }

    /// Module grid
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Decode the format information drawn into this symbol
    pub fn format_info(&self) -> Option<FormatInfo> {
        FormatInfo::extract(&self.modules)
    }
}
