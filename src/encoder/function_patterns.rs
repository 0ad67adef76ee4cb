use crate::encoder::canvas::ModuleGrid;
use crate::encoder::format::draw_format_bits;
use crate::encoder::version::draw_version;
use crate::models::{ECLevel, MaskPattern, Version};

/// Draw every function pattern for `version` onto a fresh grid.
///
/// Format bits are drawn with a placeholder mask 0 so their cells are
/// reserved; mask selection overwrites them later.
pub fn draw_function_patterns(grid: &mut ModuleGrid, version: Version, ec_level: ECLevel) {
    let size = grid.size();

    // Timing patterns (row 6 and column 6)
    for i in 0..size {
        grid.set_function(6, i, i % 2 == 0);
        grid.set_function(i, 6, i % 2 == 0);
    }

    // Finder patterns with their separators, clipped at the edges
    draw_finder_pattern(grid, 3, 3);
    draw_finder_pattern(grid, size - 4, 3);
    draw_finder_pattern(grid, 3, size - 4);

    // Alignment patterns, except where they would overlap a finder
    let align = alignment_pattern_positions(version);
    let last = align.len().saturating_sub(1);
    for (i, &cx) in align.iter().enumerate() {
        for (j, &cy) in align.iter().enumerate() {
            let is_corner = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
            if !is_corner {
                draw_alignment_pattern(grid, cx, cy);
            }
        }
    }

    draw_format_bits(grid, ec_level, MaskPattern::Pattern0);
    draw_version(grid, version);
}

/// 9x9 area centered at (x, y): dark unless Chebyshev distance is 2 or 4
fn draw_finder_pattern(grid: &mut ModuleGrid, x: usize, y: usize) {
    let size = grid.size() as isize;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let xx = x as isize + dx;
            let yy = y as isize + dy;
            if (0..size).contains(&xx) && (0..size).contains(&yy) {
                let dist = dx.abs().max(dy.abs());
                grid.set_function(xx as usize, yy as usize, dist != 2 && dist != 4);
            }
        }
    }
}

/// 5x5 pattern centered at (x, y): dark unless Chebyshev distance is 1
fn draw_alignment_pattern(grid: &mut ModuleGrid, x: usize, y: usize) {
    for dy in 0..5 {
        for dx in 0..5 {
            let dist = (dx as isize - 2).abs().max((dy as isize - 2).abs());
            grid.set_function(x + dx - 2, y + dy - 2, dist != 1);
        }
    }
}

/// Alignment pattern center coordinates, ascending. Empty for version 1.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let ver = version.number() as usize;
    if ver == 1 {
        return Vec::new();
    }
    let num_align = ver / 7 + 2;
    let step = if ver == 32 {
        26
    } else {
        (ver * 4 + 4).div_ceil(num_align * 2 - 2) * 2
    };

    let mut positions = vec![6usize; num_align];
    let last = version.size() - 7;
    for (k, slot) in positions[1..].iter_mut().rev().enumerate() {
        *slot = last - k * step;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::num_raw_data_modules;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        assert_eq!(alignment_pattern_positions(v(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(v(7)), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(v(15)), vec![6, 26, 48, 70]);
        assert_eq!(
            alignment_pattern_positions(v(32)),
            vec![6, 34, 60, 86, 112, 138]
        );
        assert_eq!(
            alignment_pattern_positions(v(36)),
            vec![6, 24, 50, 76, 102, 128, 154]
        );
        assert_eq!(
            alignment_pattern_positions(v(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_data_modules_match_raw_count() {
        for n in 1..=40 {
            let version = v(n);
            let mut grid = ModuleGrid::new(version.size());
            draw_function_patterns(&mut grid, version, ECLevel::M);
            assert_eq!(
                grid.data_capacity(),
                num_raw_data_modules(version),
                "version {}",
                n
            );
        }
    }

    #[test]
    fn test_finder_and_timing_layout() {
        let mut grid = ModuleGrid::new(21);
        draw_function_patterns(&mut grid, v(1), ECLevel::L);

        // Finder ring: dark border, light ring, dark core
        assert!(grid.is_dark(0, 0));
        assert!(!grid.is_dark(1, 1));
        assert!(grid.is_dark(3, 3));
        // Separator row below the top-left finder
        assert!((0..8).all(|x| !grid.is_dark(x, 7)));
        assert!(grid.is_function(7, 7));
        // Timing pattern between the finders
        for i in 8..13 {
            assert_eq!(grid.is_dark(i, 6), i % 2 == 0);
            assert_eq!(grid.is_dark(6, i), i % 2 == 0);
        }
        // Always-dark module
        assert!(grid.is_dark(8, 13));
        assert!(!grid.is_function(9, 9));
    }
}
