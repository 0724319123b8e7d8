//! Immutable witness tilings
//!
//! A `Tiling` is a snapshot of a board taken at the moment a search succeeds,
//! retained by the caller and never mutated afterward. Externally assembled
//! label grids can also be wrapped here to feed the verifier; those carry no
//! completeness guarantee, which is exactly what verification is for.

use ndarray::Array2;

use crate::spatial::board::{Board, Cell};

/// Snapshot of a labeled board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiling {
    cells: Array2<Cell>,
}

impl Tiling {
    /// Freeze a board into a witness
    pub fn from_board(board: Board) -> Self {
        Self {
            cells: board.into_cells(),
        }
    }

    /// Wrap a raw label grid, `0` meaning empty
    ///
    /// Intended for externally assembled grids; nothing is validated here.
    pub fn from_labels(labels: &Array2<u32>) -> Self {
        Self {
            cells: labels.mapv(|label| {
                if label == 0 {
                    Cell::Empty
                } else {
                    Cell::Piece(label)
                }
            }),
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

    /// Mutable scratch copy for scan-and-erase consumers
    ///
    /// Reconstruction erases each square as it is recognized; handing out a
    /// fresh board keeps the witness itself immutable.
    pub fn to_scratch_board(&self) -> Board {
        Board::from_cells(self.cells.clone())
    }
}
