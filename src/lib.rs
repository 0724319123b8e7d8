//! Exhaustive search for perfect tilings of rectangular boards by axis-aligned
//! squares whose side lengths come from a fixed allowed set
//!
//! The search covers the row-major first empty cell with each allowed size in
//! turn and backtracks on dead ends, yielding the first complete tiling per
//! board. An independent verifier reconstructs the squares of any labeled
//! grid and validates them against the allowed sizes.

#![forbid(unsafe_code)]

/// Backtracking search, dimension sweep, and tiling verification
pub mod algorithm;
/// Derived statistics over sweep results
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Board and tiling data structures
pub mod spatial;

pub use io::error::{PackingError, Result};
