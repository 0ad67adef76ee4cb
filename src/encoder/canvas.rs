use crate::models::BitMatrix;

/// A cell of the symbol under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written; reads as light
    #[default]
    Empty,
    /// Part of a finder, separator, timing, alignment, format or version area
    Function(bool),
    /// Codeword or remainder bit, subject to masking
    Data(bool),
}

impl Module {
    pub fn is_dark(self) -> bool {
        matches!(self, Module::Function(true) | Module::Data(true))
    }

    pub fn is_function(self) -> bool {
        matches!(self, Module::Function(_))
    }
}

/// Working grid that remembers which cells are reserved for function patterns
///
/// Function cells are never touched by codeword placement or masking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Module {
        self.cells[y * self.size + x]
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_function()
    }

    /// Write a function module, overwriting whatever was there
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        let size = self.size;
        self.cells[y * size + x] = Module::Function(dark);
    }

    /// Write a data module; function cells are left untouched
    pub fn set_data(&mut self, x: usize, y: usize, dark: bool) {
        let size = self.size;
        let cell = &mut self.cells[y * size + x];
        if !cell.is_function() {
            *cell = Module::Data(dark);
        }
    }

    /// Invert a data module (no-op on function cells)
    pub fn flip(&mut self, x: usize, y: usize) {
        let size = self.size;
        let cell = &mut self.cells[y * size + x];
        if let Module::Data(dark) = *cell {
            *cell = Module::Data(!dark);
        }
    }

    /// Number of cells not reserved for function patterns
    pub fn data_capacity(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_function()).count()
    }

    /// Freeze into a plain bit matrix (dark = true)
    pub fn to_matrix(&self) -> BitMatrix {
        BitMatrix::from_fn(self.size, |x, y| self.is_dark(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_cells_are_protected() {
        let mut grid = ModuleGrid::new(21);
        grid.set_function(3, 4, true);
        grid.set_data(3, 4, false);
        grid.flip(3, 4);
        assert_eq!(grid.get(3, 4), Module::Function(true));

        grid.set_data(5, 5, true);
        grid.flip(5, 5);
        assert_eq!(grid.get(5, 5), Module::Data(false));
    }

    #[test]
    fn test_to_matrix() {
        let mut grid = ModuleGrid::new(21);
        grid.set_function(0, 0, true);
        grid.set_data(20, 1, true);
        let matrix = grid.to_matrix();
        assert!(matrix.get(0, 0));
        assert!(matrix.get(20, 1));
        assert!(!matrix.get(1, 20));
        assert_eq!(matrix.count_dark(), 2);
        assert_eq!(grid.data_capacity(), 21 * 21 - 1);
    }
}
