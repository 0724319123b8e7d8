//! Mutable board state and the placement operations of the search
//!
//! The board is the single source of truth during one search: every cell is
//! either empty or carries the identifier of the square covering it. All
//! mutation goes through `place`/`clear`, keeping the backtracking search's
//! place/undo pairing a local, auditable contract per recursion frame.

use ndarray::Array2;

/// A single board cell: empty, or covered by the square with the given id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// No square covers this cell yet
    Empty,
    /// Covered by the placed square with this identifier
    Piece(u32),
}

impl Cell {
    /// Whether this cell is still uncovered
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Rectangular grid of cells being tiled
///
/// Dimensions are fixed for the lifetime of one search. The board is owned
/// exclusively by whichever routine currently mutates it; there is no sharing
/// and no interior mutability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Empty),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell at (row, col), or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get([row, col]).copied()
    }

    /// First empty cell in row-major order: smallest row, then smallest column
    ///
    /// This ordering is load-bearing. The search only ever attempts to cover
    /// this cell, which is what makes the top-edge-only scan in `fits` sound.
    pub fn find_first_empty(&self) -> Option<(usize, usize)> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.is_empty())
            .map(|(position, _)| position)
    }

    /// Whether a `size` x `size` square with top-left (row, col) can be placed
    ///
    /// Checks bounds plus emptiness of the top edge of the footprint only.
    /// Cells are filled in row-major, leftmost-first order, so no filled cell
    /// can sit below an empty top-edge cell within the footprint; callers
    /// that fill in any other order must not rely on this check.
    pub fn fits(&self, row: usize, col: usize, size: usize) -> bool {
        if row + size > self.rows() || col + size > self.cols() {
            return false;
        }
        (col..col + size).all(|c| self.get(row, c).is_some_and(Cell::is_empty))
    }

    /// Write a square's identifier into every cell of its footprint
    ///
    /// # Panics
    ///
    /// Panics if the footprint leaves the board or any footprint cell is
    /// already occupied. Both indicate a broken precondition in the caller
    /// (correct use of `fits` plus row-major order rules them out), not bad
    /// input, so neither is recoverable.
    pub fn place(&mut self, row: usize, col: usize, size: usize, id: u32) {
        assert!(
            row + size <= self.rows() && col + size <= self.cols(),
            "square of size {size} at ({row}, {col}) leaves the board"
        );
        for r in row..row + size {
            for c in col..col + size {
                if let Some(cell) = self.cells.get_mut([r, c]) {
                    assert!(
                        cell.is_empty(),
                        "square of size {size} at ({row}, {col}) overlaps cell ({r}, {c})"
                    );
                    *cell = Cell::Piece(id);
                }
            }
        }
    }

    /// Erase a square's footprint, the undo half of `place`
    ///
    /// Exempt from the overlap check: undoing always targets occupied cells.
    ///
    /// # Panics
    ///
    /// Panics if the footprint leaves the board.
    pub fn clear(&mut self, row: usize, col: usize, size: usize) {
        assert!(
            row + size <= self.rows() && col + size <= self.cols(),
            "square of size {size} at ({row}, {col}) leaves the board"
        );
        for r in row..row + size {
            for c in col..col + size {
                if let Some(cell) = self.cells.get_mut([r, c]) {
                    *cell = Cell::Empty;
                }
            }
        }
    }

    /// Whether every cell is covered
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    pub(crate) fn into_cells(self) -> Array2<Cell> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Cell};

    #[test]
    fn test_first_empty_is_row_major() {
        let mut board = Board::new(3, 4);
        assert_eq!(board.find_first_empty(), Some((0, 0)));

        board.place(0, 0, 2, 1);
        // (0, 2) precedes every empty cell of row 1
        assert_eq!(board.find_first_empty(), Some((0, 2)));

        board.place(0, 2, 2, 2);
        assert_eq!(board.find_first_empty(), Some((2, 0)));
    }

    #[test]
    fn test_fits_rejects_out_of_bounds_and_occupied() {
        let mut board = Board::new(4, 4);
        assert!(board.fits(0, 0, 4));
        assert!(!board.fits(1, 0, 4));
        assert!(!board.fits(0, 3, 2));

        board.place(0, 0, 2, 1);
        assert!(!board.fits(0, 0, 2));
        assert!(board.fits(0, 2, 2));
    }

    #[test]
    fn test_clear_restores_placed_footprint() {
        let mut board = Board::new(3, 3);
        board.place(0, 0, 2, 7);
        assert_eq!(board.get(1, 1), Some(Cell::Piece(7)));

        board.clear(0, 0, 2);
        assert_eq!(board, Board::new(3, 3));
    }

    #[test]
    #[should_panic(expected = "overlaps cell")]
    fn test_place_panics_on_overlap() {
        let mut board = Board::new(4, 4);
        board.place(0, 0, 3, 1);
        board.place(2, 2, 2, 2);
    }

    #[test]
    #[should_panic(expected = "leaves the board")]
    fn test_place_panics_out_of_bounds() {
        let mut board = Board::new(3, 3);
        board.place(2, 2, 2, 1);
    }
}
