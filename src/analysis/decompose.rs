//! Guillotine decomposability of solved boards
//!
//! A solvable board whose tiling can be obtained by gluing two smaller
//! solvable boards along a straight cut is nothing new; the undecomposable
//! ones are the genuinely interesting instances.

use ndarray::Array2;

/// Solved board sizes that no single straight cut splits into two solved boards
///
/// A solvable `h` x `w` board is decomposable when `h = a + b` with `a` x `w`
/// and `b` x `w` both solvable, or symmetrically across a vertical cut.
/// Expects the sweep's answer table, indexed by (height, width) with entries
/// below 2 unused. Results are in row-major order of (height, width).
pub fn undecomposable(answers: &Array2<bool>) -> Vec<(usize, usize)> {
    let mut result = Vec::new();
    for height in 2..answers.nrows() {
        for width in 2..answers.ncols() {
            if solved(answers, height, width) && !decomposable(answers, height, width) {
                result.push((height, width));
            }
        }
    }
    result
}

fn solved(answers: &Array2<bool>, height: usize, width: usize) -> bool {
    answers.get([height, width]).copied().unwrap_or(false)
}

fn decomposable(answers: &Array2<bool>, height: usize, width: usize) -> bool {
    // Both halves of a cut need side length at least 2
    (2..=height.saturating_sub(2))
        .any(|cut| solved(answers, cut, width) && solved(answers, height - cut, width))
        || (2..=width.saturating_sub(2))
            .any(|cut| solved(answers, height, cut) && solved(answers, height, width - cut))
}

#[cfg(test)]
mod tests {
    use super::undecomposable;
    use ndarray::Array2;

    #[test]
    fn test_stacked_boards_are_decomposable() {
        // Table where only widths of 4 are solvable, at heights 2, 3, 4, 5
        let mut answers = Array2::from_elem((6, 6), false);
        for height in 2..=5 {
            if let Some(answer) = answers.get_mut([height, 4]) {
                *answer = true;
            }
        }

        // 4x4 = 2x4 + 2x4 and 5x4 = 2x4 + 3x4; 2x4 and 3x4 admit no cut
        assert_eq!(undecomposable(&answers), vec![(2, 4), (3, 4)]);
    }

    #[test]
    fn test_empty_table_has_no_entries() {
        let answers = Array2::from_elem((8, 8), false);
        assert!(undecomposable(&answers).is_empty());
    }
}
