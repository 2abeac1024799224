//! The rendering pass: grid cells to a grayscale pixel buffer.

use asc_grid::Grid;
use renderer::{shade, ShadeTracker};

/// Margin added beyond the grid's observed extremes when no explicit
/// floor or ceiling is given, so real samples sit just inside the range.
const BOUNDS_MARGIN: f32 = 0.1;

/// Effective floor and ceiling for one render.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub floor: f32,
    pub ceiling: f32,
}

/// Resolve explicit overrides against the grid's observed height range.
pub fn effective_bounds(grid: &Grid, floor: Option<f32>, ceiling: Option<f32>) -> Bounds {
    Bounds {
        floor: floor.unwrap_or(grid.min_height() - BOUNDS_MARGIN),
        ceiling: ceiling.unwrap_or(grid.max_height() + BOUNDS_MARGIN),
    }
}

/// Shade every cell into a width = ncols, height = nrows grayscale buffer.
///
/// Grid rows are walked from the last (southernmost) index down to the
/// first and written at the inverted image row, so the south edge of the
/// survey lands at the top of the image. Columns map left to right
/// unchanged.
pub fn render_grid_image(grid: &Grid, bounds: Bounds, tracker: &mut ShadeTracker) -> Vec<u8> {
    let ncols = grid.ncols();
    let nrows = grid.nrows();
    let mut pixels = vec![0u8; ncols * nrows];

    for row in (0..nrows).rev() {
        let image_row = nrows - 1 - row;
        for col in 0..ncols {
            let value = shade(bounds.floor, bounds.ceiling, grid.height(row, col), tracker);
            pixels[image_row * ncols + col] = value;
        }
    }

    pixels
}
