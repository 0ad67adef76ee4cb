/// Square bit matrix holding the finished modules of a symbol
///
/// Bits are packed row-major, eight modules per byte. Reads outside the
/// grid return `false` (light), writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light matrix of `size` x `size` modules
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0; (size * size).div_ceil(8)],
        }
    }

    /// Build a matrix from a row-major closure
    pub fn from_fn(size: usize, mut dark: impl FnMut(usize, usize) -> bool) -> Self {
        let mut matrix = Self::new(size);
        for y in 0..size {
            for x in 0..size {
                if dark(x, y) {
                    matrix.set(x, y, true);
                }
            }
        }
        matrix
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (x, y); out-of-range reads are light
    pub fn get(&self, x: usize, y: usize) -> bool {
        match self.bit_index(x, y) {
            Some(index) => (self.data[index / 8] >> (index % 8)) & 1 == 1,
            None => false,
        }
    }

    /// Set module at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some(index) = self.bit_index(x, y) {
            if value {
                self.data[index / 8] |= 1 << (index % 8);
            } else {
                self.data[index / 8] &= !(1 << (index % 8));
            }
        }
    }

    /// Flip module at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(index) = self.bit_index(x, y) {
            self.data[index / 8] ^= 1 << (index % 8);
        }
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn bit_index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}
