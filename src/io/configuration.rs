//! Sweep constants and runtime configuration defaults

/// Default upper bound on board height, inclusive
pub const DEFAULT_MAX_HEIGHT: usize = 20;
/// Default upper bound on board width, inclusive
pub const DEFAULT_MAX_WIDTH: usize = 20;

/// Default allowed side lengths, in search order
///
/// Prime sides suffice: a square with composite side splits into a grid of
/// squares with its smallest prime factor as side.
pub const DEFAULT_SIZES: [usize; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

// Safety limit to prevent excessive memory allocation and recursion
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 1_000;

// Image export settings
/// Edge length of one board cell in exported images, in pixels
pub const CELL_SIZE_PX: u32 = 10;
/// Border thickness drawn around each square, in pixels
pub const BORDER_PX: u32 = 1;
/// Default directory for exported witness images
pub const DEFAULT_OUTPUT_DIR: &str = "output";
