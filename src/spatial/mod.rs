//! Spatial data structures for the packing search
//!
//! This module contains board-related functionality including:
//! - Mutable board state and placement operations
//! - Immutable witness tilings

/// Mutable board state and placement operations
pub mod board;
/// Immutable witness tilings
pub mod tiling;

pub use board::{Board, Cell};
pub use tiling::Tiling;
