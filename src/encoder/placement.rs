use crate::encoder::canvas::ModuleGrid;
use crate::error::{QrError, Result};

/// Place codeword bits (MSB first) into the non-function cells in the
/// standard zigzag: column pairs from the right edge, skipping the vertical
/// timing column, alternating upward and downward. Cells left over after the
/// last codeword become light remainder modules.
pub fn draw_codewords(grid: &mut ModuleGrid, codewords: &[u8]) -> Result<()> {
    let size = grid.size();
    let total_bits = codewords.len() * 8;
    let mut i = 0usize;

    let mut right = size - 1;
    loop {
        if right == 6 {
            right = 5;
        }
        let upward = (right + 1) & 2 == 0;
        for vert in 0..size {
            let y = if upward { size - 1 - vert } else { vert };
            for x in [right, right - 1] {
                if grid.is_function(x, y) {
                    continue;
                }
                let dark = i < total_bits && (codewords[i >> 3] >> (7 - (i & 7))) & 1 == 1;
                grid.set_data(x, y, dark);
                i += 1;
            }
        }
        if right < 3 {
            break;
        }
        right -= 2;
    }

    if i < total_bits {
        return Err(QrError::Internal("codewords exceed data module capacity"));
    }
    Ok(())
}
