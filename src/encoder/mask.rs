/// Data masking and automatic mask selection
use crate::debug::qr_debug;
use crate::encoder::canvas::ModuleGrid;
use crate::encoder::config::{parallel_masks, use_parallel};
use crate::encoder::format::draw_format_bits;
use crate::encoder::penalty::penalty_score;
use crate::models::{ECLevel, MaskPattern, Version};
use rayon::prelude::*;

/// XOR the mask into every data module. Applying the same mask twice
/// restores the grid.
pub fn apply_mask(grid: &mut ModuleGrid, mask: MaskPattern) {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            if mask.is_masked(x, y) {
                grid.flip(x, y);
            }
        }
    }
}

/// Penalty of `grid` with `mask` applied and its format bits drawn,
/// evaluated on a scratch copy.
pub fn mask_penalty(grid: &ModuleGrid, ec_level: ECLevel, mask: MaskPattern) -> u32 {
    let mut scratch = grid.clone();
    apply_mask(&mut scratch, mask);
    draw_format_bits(&mut scratch, ec_level, mask);
    penalty_score(&scratch.to_matrix())
}

/// Pick the mask with the lowest penalty for an unmasked grid. Ties go to
/// the lowest mask index.
pub fn select_mask(grid: &ModuleGrid, version: Version, ec_level: ECLevel) -> MaskPattern {
    let scores: Vec<(u32, MaskPattern)> = if parallel_masks() && use_parallel(version) {
        MaskPattern::ALL
            .par_iter()
            .map(|&mask| (mask_penalty(grid, ec_level, mask), mask))
            .collect()
    } else {
        MaskPattern::ALL
            .iter()
            .map(|&mask| (mask_penalty(grid, ec_level, mask), mask))
            .collect()
    };

    let mut best = scores[0];
    for &candidate in &scores[1..] {
        if candidate.0 < best.0 {
            best = candidate;
        }
    }

    qr_debug!(
        "MASK: v{} {:?} penalties={:?} chosen={}",
        version.number(),
        ec_level,
        scores.iter().map(|&(p, _)| p).collect::<Vec<_>>(),
        best.1.index()
    );
    best.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::canvas::Module;
    use crate::encoder::function_patterns::draw_function_patterns;
    use crate::encoder::placement::draw_codewords;
    use crate::encoder::tables::num_raw_codewords;

    fn filled_grid(version: Version, ec_level: ECLevel) -> ModuleGrid {
        let mut grid = ModuleGrid::new(version.size());
        draw_function_patterns(&mut grid, version, ec_level);
        let codewords: Vec<u8> = (0..num_raw_codewords(version))
            .map(|i| (i * 37 + 11) as u8)
            .collect();
        draw_codewords(&mut grid, &codewords).unwrap();
        grid
    }

    #[test]
    fn test_apply_mask_is_involution_and_skips_functions() {
        let original = filled_grid(Version::MIN, ECLevel::M);
        for mask in MaskPattern::ALL {
            let mut grid = original.clone();
            apply_mask(&mut grid, mask);
            assert_ne!(grid, original);
            // Finder corner is a function module and stays dark
            assert_eq!(grid.get(0, 0), Module::Function(true));
            apply_mask(&mut grid, mask);
            assert_eq!(grid, original);
        }
    }

    #[test]
    fn test_mask_zero_flips_checkerboard() {
        let mut grid = ModuleGrid::new(21);
        grid.set_data(10, 10, false);
        grid.set_data(11, 10, false);
        apply_mask(&mut grid, MaskPattern::Pattern0);
        assert!(grid.is_dark(10, 10));
        assert!(!grid.is_dark(11, 10));
    }

    #[test]
    fn test_selected_mask_is_optimal() {
        for n in [1, 5, 9] {
            let version = Version::new(n).unwrap();
            let grid = filled_grid(version, ECLevel::Q);
            let chosen = select_mask(&grid, version, ECLevel::Q);
            let best = mask_penalty(&grid, ECLevel::Q, chosen);
            for mask in MaskPattern::ALL {
                let penalty = mask_penalty(&grid, ECLevel::Q, mask);
                assert!(best <= penalty);
                if mask < chosen {
                    assert!(best < penalty, "tie must go to the lower index");
                }
            }
        }
    }
}
