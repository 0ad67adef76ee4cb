use crate::models::BitMatrix;

const RUN_THRESHOLD: u32 = 5;
const RUN_PENALTY: u32 = 3;
const BLOCK_PENALTY: u32 = 3;

/// Penalty for a candidate masked symbol; lower is better.
///
/// Two rules: runs of five or more same-colored modules in any row or
/// column score 3 plus 1 per module past five, and every 2x2 same-colored
/// block (overlaps included) scores 3.
pub fn penalty_score(matrix: &BitMatrix) -> u32 {
    let size = matrix.size();
    let mut result = 0;

    for y in 0..size {
        result += run_penalty((0..size).map(|x| matrix.get(x, y)));
    }
    for x in 0..size {
        result += run_penalty((0..size).map(|y| matrix.get(x, y)));
    }

    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                result += BLOCK_PENALTY;
            }
        }
    }
    result
}

/// Run-length rule for one line. The run starts out light with length
/// zero, so a leading light run counts the same as any other.
fn run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut result = 0;
    let mut run_color = false;
    let mut run_len = 0u32;
    for color in line {
        if color == run_color {
            run_len += 1;
            if run_len == RUN_THRESHOLD {
                result += RUN_PENALTY;
            } else if run_len > RUN_THRESHOLD {
                result += 1;
            }
        } else {
            run_color = color;
            run_len = 1;
        }
    }
    result
}
