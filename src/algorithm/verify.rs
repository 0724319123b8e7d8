//! Posterior validation of witness tilings
//!
//! Accepts any labeled grid, not just search output, so regression tests and
//! externally assembled tilings go through the same checks.

use crate::algorithm::reconstruct::reconstruct_square;
use crate::algorithm::sizes::SizeSet;
use crate::io::error::{PackingError, Result};
use crate::spatial::board::Cell;
use crate::spatial::tiling::Tiling;

/// Check that a tiling is a perfect packing of allowed squares
///
/// Works on a private scratch copy of the grid: scans cells in row-major
/// order, reconstructs the square at every still-labeled cell, checks its
/// size against the allowed set, and erases its footprint so each cell is
/// attributed to exactly one square. Returns the maximum square size used,
/// the "largest piece needed" quality signal for the tiling.
///
/// # Errors
///
/// Returns `IncompleteTiling` if any cell is empty, `ForbiddenSize` if a
/// reconstructed square's size is not in the allowed set, and propagates
/// `BrokenSquare` / `NonSquareRegion` from reconstruction. All carry the
/// offending coordinate or size for diagnostics.
pub fn verify(tiling: &Tiling, sizes: &SizeSet) -> Result<usize> {
    for row in 0..tiling.rows() {
        for col in 0..tiling.cols() {
            if tiling.get(row, col).is_some_and(Cell::is_empty) {
                return Err(PackingError::IncompleteTiling { row, col });
            }
        }
    }

    let mut scratch = tiling.to_scratch_board();
    let mut max_size = 0;
    for row in 0..scratch.rows() {
        for col in 0..scratch.cols() {
            if scratch.get(row, col).is_some_and(Cell::is_empty) {
                // Already attributed to an earlier square and erased
                continue;
            }
            let size = reconstruct_square(&scratch, row, col)?;
            if !sizes.contains(size) {
                return Err(PackingError::ForbiddenSize { size, row, col });
            }
            max_size = max_size.max(size);
            scratch.clear(row, col, size);
        }
    }
    Ok(max_size)
}

/// Verify a batch of tilings, returning the maximum size used across all
///
/// A global summary statistic only; callers needing per-tiling sizes should
/// call `verify` per tiling themselves.
///
/// # Errors
///
/// Returns the first verification error encountered, in iteration order.
pub fn verify_all<'a, I>(tilings: I, sizes: &SizeSet) -> Result<usize>
where
    I: IntoIterator<Item = &'a Tiling>,
{
    let mut max_size = 0;
    for tiling in tilings {
        max_size = max_size.max(verify(tiling, sizes)?);
    }
    Ok(max_size)
}
