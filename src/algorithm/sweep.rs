//! Symmetry-exploiting sweep over board dimensions
//!
//! Visits every board from 2x2 up to the configured maxima, searching the
//! wide-or-square boards and mirroring answers onto their transposes: a
//! tiling transposes into a tiling, so taller-than-wide boards need no search
//! of their own. Boards are independent, so a host could run them
//! concurrently; this driver stays single-threaded like the search itself.

use ndarray::Array2;

use crate::algorithm::search::{SearchOutcome, search};
use crate::algorithm::sizes::SizeSet;
use crate::spatial::tiling::Tiling;

/// One board visited by the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStep {
    /// Board height
    pub height: usize,
    /// Board width
    pub width: usize,
    /// Whether a tiling exists for this board
    pub solved: bool,
    /// Whether the answer was mirrored from the transposed board rather
    /// than searched
    pub mirrored: bool,
}

/// Stepwise driver over every board size up to the configured maxima
///
/// Answers are recorded in a table indexed by (height, width); one witness
/// tiling is retained per solved searched board, in visit order. Mirrored
/// boards retain no witness of their own.
pub struct Sweep {
    sizes: SizeSet,
    max_height: usize,
    max_width: usize,
    answers: Array2<bool>,
    tilings: Vec<Tiling>,
    next: Option<(usize, usize)>,
}

impl Sweep {
    /// Create a sweep covering heights and widths 2..=max, inclusive
    pub fn new(max_height: usize, max_width: usize, sizes: SizeSet) -> Self {
        let next = (max_height >= 2 && max_width >= 2).then_some((2, 2));
        Self {
            sizes,
            max_height,
            max_width,
            answers: Array2::from_elem((max_height + 1, max_width + 1), false),
            tilings: Vec::new(),
            next,
        }
    }

    /// Total number of boards the sweep visits
    pub const fn board_count(&self) -> usize {
        (self.max_height.saturating_sub(1)) * (self.max_width.saturating_sub(1))
    }

    /// Solve or mirror the next board, or `None` when the sweep is finished
    pub fn step(&mut self) -> Option<SweepStep> {
        let (height, width) = self.next?;
        self.next = self.advance(height, width);

        // The transpose of a tall board was visited earlier in row-major
        // order whenever it lies inside the table
        let mirrored = height > width && height <= self.max_width;
        let solved = if mirrored {
            self.answers.get([width, height]).copied().unwrap_or(false)
        } else {
            match search(height, width, &self.sizes) {
                SearchOutcome::Tiled(tiling) => {
                    self.tilings.push(tiling);
                    true
                }
                SearchOutcome::Exhausted => false,
            }
        };
        if let Some(answer) = self.answers.get_mut([height, width]) {
            *answer = solved;
        }

        Some(SweepStep {
            height,
            width,
            solved,
            mirrored,
        })
    }

    /// Run every remaining board
    pub fn run_to_completion(&mut self) {
        while self.step().is_some() {}
    }

    /// Solvability table indexed by (height, width); rows and columns 0 and 1
    /// are never visited and stay false
    pub const fn answers(&self) -> &Array2<bool> {
        &self.answers
    }

    /// Witness tilings of the searched boards, in visit order
    pub fn tilings(&self) -> &[Tiling] {
        &self.tilings
    }

    const fn advance(&self, height: usize, width: usize) -> Option<(usize, usize)> {
        if width < self.max_width {
            Some((height, width + 1))
        } else if height < self.max_height {
            Some((height + 1, 2))
        } else {
            None
        }
    }
}
