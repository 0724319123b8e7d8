//! Square recovery from labeled boards
//!
//! Reverse-engineers the extent of a placed square from its label run,
//! rejecting footprints that are broken, truncated, or taller than wide.
//! Used by the verifier and by witness rendering.

use crate::io::error::{PackingError, Result};
use crate::spatial::board::{Board, Cell};

/// Recover the side length of the square whose top-left corner is (row, col)
///
/// The candidate size is the run of equal labels extending rightward from
/// (row, col); the full footprint is then validated against it. Callers must
/// scan top-to-bottom, left-to-right and erase each recognized footprint
/// before moving on: the check rejects a region extending below the claimed
/// square but not one extending above, which the scan order makes impossible.
///
/// # Errors
///
/// Returns `BrokenSquare` when (row, col) is unlabeled, the claimed footprint
/// leaves the board, or a footprint cell carries a different label; returns
/// `NonSquareRegion` when the label continues into the row below the
/// footprint.
pub fn reconstruct_square(board: &Board, row: usize, col: usize) -> Result<usize> {
    let Some(label @ Cell::Piece(_)) = board.get(row, col) else {
        return Err(PackingError::BrokenSquare { row, col, size: 1 });
    };

    // Candidate size is the run length of matching labels to the right
    let mut size = 1;
    while col + size < board.cols() && board.get(row, col + size) == Some(label) {
        size += 1;
    }

    // The whole size x size footprint must carry the same label
    for r in row..row + size {
        for c in col..col + size {
            if board.get(r, c) != Some(label) {
                return Err(PackingError::BrokenSquare { row, col, size });
            }
        }
    }

    // A matching label directly below the footprint means the region is a
    // taller rectangle masquerading as a square
    if row + size < board.rows() {
        for c in col..col + size {
            if board.get(row + size, c) == Some(label) {
                return Err(PackingError::NonSquareRegion { row, col, size });
            }
        }
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::reconstruct_square;
    use crate::io::error::PackingError;
    use crate::spatial::board::Board;
    use crate::spatial::tiling::Tiling;
    use ndarray::array;

    #[test]
    fn test_recovers_placed_square() {
        let mut board = Board::new(4, 4);
        board.place(1, 1, 3, 9);
        assert_eq!(reconstruct_square(&board, 1, 1).ok(), Some(3));
    }

    #[test]
    fn test_rejects_truncated_footprint() {
        let labels = array![[1, 1], [1, 2]];
        let board = Tiling::from_labels(&labels).to_scratch_board();
        assert!(matches!(
            reconstruct_square(&board, 0, 0),
            Err(PackingError::BrokenSquare {
                row: 0,
                col: 0,
                size: 2
            })
        ));
    }

    #[test]
    fn test_rejects_tall_rectangle() {
        let labels = array![[1, 1], [1, 1], [1, 1]];
        let board = Tiling::from_labels(&labels).to_scratch_board();
        assert!(matches!(
            reconstruct_square(&board, 0, 0),
            Err(PackingError::NonSquareRegion {
                row: 0,
                col: 0,
                size: 2
            })
        ));
    }

    #[test]
    fn test_rejects_empty_corner() {
        let board = Board::new(2, 2);
        assert!(reconstruct_square(&board, 0, 0).is_err());
    }
}
