//! First-solution backtracking search over square placements
//!
//! The search repeatedly covers the canonical cell (the row-major first empty
//! cell) with each allowed size in configured order, recursing on success and
//! undoing the placement on failure. It stops at the first complete tiling;
//! alternative tilings are deliberately never explored.

use crate::algorithm::sizes::SizeSet;
use crate::spatial::board::Board;
use crate::spatial::tiling::Tiling;

/// Result of one search: a witness, or proof by exhaustion that none exists
///
/// Exhaustion is a normal outcome, not an error; it must stay distinguishable
/// from a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First tiling found in canonical placement order
    Tiled(Tiling),
    /// Every branch was explored without covering the board
    Exhausted,
}

impl SearchOutcome {
    /// Witness tiling, if one was found
    pub fn tiling(self) -> Option<Tiling> {
        match self {
            Self::Tiled(tiling) => Some(tiling),
            Self::Exhausted => None,
        }
    }

    /// Whether a tiling was found
    pub const fn is_tiled(&self) -> bool {
        matches!(self, Self::Tiled(_))
    }
}

/// Search for one perfect tiling of a `height` x `width` board
///
/// Deterministic: identical arguments always produce identical outcomes.
/// Runs synchronously in one call stack; recursion depth is bounded by the
/// number of placed squares, at most `height * width / 4` since every
/// allowed size is at least 2.
pub fn search(height: usize, width: usize, sizes: &SizeSet) -> SearchOutcome {
    let mut board = Board::new(height, width);
    if cover_first_empty(&mut board, sizes, 0) {
        SearchOutcome::Tiled(Tiling::from_board(board))
    } else {
        SearchOutcome::Exhausted
    }
}

/// Try to cover the canonical cell, recursing until the board is complete
///
/// `placed` counts squares already on the board; the next placement takes
/// identifier `placed + 1`, so identifiers grow monotonically down any one
/// branch. On success the board is left fully covered; on failure it is
/// restored to exactly the state it was called with.
fn cover_first_empty(board: &mut Board, sizes: &SizeSet, placed: u32) -> bool {
    let Some((row, col)) = board.find_first_empty() else {
        return true;
    };
    let id = placed + 1;
    for size in sizes.iter() {
        if board.fits(row, col, size) {
            board.place(row, col, size, id);
            if cover_first_empty(board, sizes, id) {
                return true;
            }
            board.clear(row, col, size);
        }
    }
    // Dead end: no allowed size covers the canonical cell
    false
}
