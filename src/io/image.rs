//! PNG rendering and export of witness tilings
//!
//! Squares are recovered by the same row-major scan-and-erase discipline the
//! verifier uses, then drawn as filled rectangles with a dark border. Each
//! side length has a base color and a lighter shade; shades are assigned
//! greedily so no two edge-adjacent squares of the same size share one.

use std::path::Path;

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::algorithm::reconstruct::reconstruct_square;
use crate::io::configuration::{BORDER_PX, CELL_SIZE_PX};
use crate::io::error::{PackingError, Result};
use crate::spatial::board::Cell;
use crate::spatial::tiling::Tiling;

/// Base fill colors keyed by square side length
const BASE_COLORS: [(usize, [u8; 3]); 4] = [
    (2, [0x8A, 0x1C, 0x7C]),
    (3, [0x42, 0x9E, 0xA6]),
    (5, [0xFC, 0xD7, 0x57]),
    (7, [0xF2, 0x42, 0x36]),
];

/// Border color drawn between squares
const BORDER_COLOR: [u8; 4] = [0, 0, 0, 255];

fn base_color(size: usize) -> [u8; 3] {
    for &(side, rgb) in &BASE_COLORS {
        if side == size {
            return rgb;
        }
    }
    // Sizes outside the base palette get a deterministic derived color
    let channel = |salt: usize| ((size.wrapping_mul(67).wrapping_add(salt * 151)) % 156 + 60) as u8;
    [channel(0), channel(1), channel(2)]
}

/// 50% lighter version of a color, used for checkerboarding
fn lighten(rgb: [u8; 3]) -> [u8; 3] {
    rgb.map(|value| (u16::from(value) / 2 + 128) as u8)
}

/// A reconstructed square together with its assigned fill color
struct ColoredSquare {
    row: usize,
    col: usize,
    size: usize,
    color: [u8; 3],
}

/// Recover every square of the tiling and assign fill colors greedily
///
/// Each square takes the first of its size's two shades not already used by
/// the neighbor to its left or the row of neighbors above its top edge.
fn color_squares(tiling: &Tiling) -> Result<Vec<ColoredSquare>> {
    let mut scratch = tiling.to_scratch_board();
    let mut cell_colors: Array2<Option<[u8; 3]>> =
        Array2::from_elem((tiling.rows(), tiling.cols()), None);
    let mut squares = Vec::new();

    for row in 0..scratch.rows() {
        for col in 0..scratch.cols() {
            if scratch.get(row, col).is_some_and(Cell::is_empty) {
                continue;
            }
            let size = reconstruct_square(&scratch, row, col)?;
            scratch.clear(row, col, size);

            let base = base_color(size);
            let candidates = [base, lighten(base)];

            let mut used = Vec::new();
            if col > 0 {
                if let Some(&Some(color)) = cell_colors.get([row, col - 1]) {
                    used.push(color);
                }
            }
            if row > 0 {
                for c in col..col + size {
                    if let Some(&Some(color)) = cell_colors.get([row - 1, c]) {
                        used.push(color);
                    }
                }
            }

            let color = candidates
                .into_iter()
                .find(|candidate| !used.contains(candidate))
                .unwrap_or(base);

            for r in row..row + size {
                for c in col..col + size {
                    if let Some(cell_color) = cell_colors.get_mut([r, c]) {
                        *cell_color = Some(color);
                    }
                }
            }
            squares.push(ColoredSquare {
                row,
                col,
                size,
                color,
            });
        }
    }
    Ok(squares)
}

/// Render a tiling as an RGBA image, one filled rectangle per square
///
/// # Errors
///
/// Propagates reconstruction errors when the tiling's label regions are not
/// well-formed squares.
pub fn render_tiling(tiling: &Tiling) -> Result<RgbaImage> {
    let squares = color_squares(tiling)?;

    let width = tiling.cols() as u32 * CELL_SIZE_PX;
    let height = tiling.rows() as u32 * CELL_SIZE_PX;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(BORDER_COLOR));

    for square in &squares {
        let x0 = square.col as u32 * CELL_SIZE_PX;
        let y0 = square.row as u32 * CELL_SIZE_PX;
        let edge = square.size as u32 * CELL_SIZE_PX;
        let [r, g, b] = square.color;

        // Leave a border-wide frame of background around the fill
        for y in (y0 + BORDER_PX)..(y0 + edge - BORDER_PX) {
            for x in (x0 + BORDER_PX)..(x0 + edge - BORDER_PX) {
                img.put_pixel(x, y, Rgba([r, g, b, 255]));
            }
        }
    }

    Ok(img)
}

/// Render one tiling and save it as a PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the tiling is malformed, the parent directory cannot
/// be created, or the image cannot be saved.
pub fn export_tiling(tiling: &Tiling, output_path: &Path) -> Result<()> {
    let img = render_tiling(tiling)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PackingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| PackingError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Save witness tilings as `{height}x{width}.png` files in a directory
///
/// Boards whose dimensions share a common factor decompose into repeats of a
/// smaller board, so they are skipped as uninteresting, matching the report
/// the images accompany. Returns the number of files written.
///
/// # Errors
///
/// Returns an error if any witness is malformed or any file operation fails.
pub fn export_tilings(tilings: &[Tiling], output_dir: &Path) -> Result<usize> {
    let mut written = 0;
    for tiling in tilings {
        if gcd(tiling.rows(), tiling.cols()) > 1 {
            continue;
        }
        let file_name = format!("{}x{}.png", tiling.rows(), tiling.cols());
        export_tiling(tiling, &output_dir.join(file_name))?;
        written += 1;
    }
    Ok(written)
}

const fn gcd(a: usize, b: usize) -> usize {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::{gcd, render_tiling};
    use crate::algorithm::search::search;
    use crate::algorithm::sizes::SizeSet;
    use crate::io::configuration::CELL_SIZE_PX;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(5, 7), 1);
        assert_eq!(gcd(9, 3), 3);
    }

    #[test]
    fn test_render_dimensions_scale_with_board() {
        let Ok(sizes) = SizeSet::new(vec![2]) else {
            unreachable!("literal size set is valid");
        };
        let Some(tiling) = search(4, 6, &sizes).tiling() else {
            unreachable!("4x6 is tileable by 2x2 squares");
        };
        let Ok(img) = render_tiling(&tiling) else {
            unreachable!("search witnesses are well-formed");
        };
        assert_eq!(img.width(), 6 * CELL_SIZE_PX);
        assert_eq!(img.height(), 4 * CELL_SIZE_PX);
    }
}
