//! In-memory representation of a parsed height grid.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Header metadata from the six leading lines of a grid file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridHeader {
    /// Number of columns of height data
    pub ncols: usize,
    /// Number of rows of height data
    pub nrows: usize,
    /// X map reference of the lower-left corner of the grid
    pub xllcorner: f32,
    /// Y map reference of the lower-left corner of the grid
    pub yllcorner: f32,
    /// Cell edge length in map units (e.g. metres)
    pub cellsize: f32,
    /// Sentinel marking samples the sensor could not resolve
    pub nodata_value: i32,
}

/// A rectangular grid of height samples plus its header metadata.
///
/// The matrix is stored as a single flat row-major buffer indexed
/// `row * ncols + col`, with row 0 holding the most northern line of the
/// survey. A grid is built once by the parser and read-only afterwards.
///
/// Running minimum and maximum heights are maintained as samples are set,
/// so once at least one sample has landed, `max_height() >= min_height()`.
#[derive(Debug, Clone)]
pub struct Grid {
    header: GridHeader,
    heights: Vec<f32>,
    min_height: Option<f32>,
    max_height: Option<f32>,
}

impl Grid {
    /// Create a zero-filled grid for the given header.
    pub fn new(header: GridHeader) -> Self {
        let heights = vec![0.0; header.nrows * header.ncols];
        Self {
            header,
            heights,
            min_height: None,
            max_height: None,
        }
    }

    /// Number of columns in the grid.
    pub fn ncols(&self) -> usize {
        self.header.ncols
    }

    /// Number of rows in the grid.
    pub fn nrows(&self) -> usize {
        self.header.nrows
    }

    /// X map reference of the lower-left corner.
    pub fn xllcorner(&self) -> f32 {
        self.header.xllcorner
    }

    /// Y map reference of the lower-left corner.
    pub fn yllcorner(&self) -> f32 {
        self.header.yllcorner
    }

    /// Cell edge length in map units.
    pub fn cellsize(&self) -> f32 {
        self.header.cellsize
    }

    /// The missing-sample sentinel declared in the header.
    pub fn nodata_value(&self) -> i32 {
        self.header.nodata_value
    }

    /// Header metadata block.
    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    /// Smallest height seen so far; 0.0 until a sample has been set.
    pub fn min_height(&self) -> f32 {
        self.min_height.unwrap_or(0.0)
    }

    /// Largest height seen so far; 0.0 until a sample has been set.
    pub fn max_height(&self) -> f32 {
        self.max_height.unwrap_or(0.0)
    }

    /// Height of cell (row, col). Row 0 is the most northern row.
    ///
    /// # Panics
    /// Panics if the indices are outside the grid.
    pub fn height(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.header.nrows && col < self.header.ncols,
            "height({},{}) out of range for {}x{} grid",
            row,
            col,
            self.header.nrows,
            self.header.ncols
        );
        self.heights[row * self.header.ncols + col]
    }

    /// Height at a map coordinate, or `None` when (x, y) falls outside
    /// the surveyed area.
    ///
    /// The lookup translates the coordinate into the grid via the header's
    /// lower-left corner and cell size. `y` grows northward, so the
    /// bottom-most matrix row covers `yllcorner`.
    pub fn height_at(&self, x: f32, y: f32) -> Option<f32> {
        let col_f = (x - self.header.xllcorner) / self.header.cellsize;
        let row_from_south_f = (y - self.header.yllcorner) / self.header.cellsize;

        if col_f < 0.0 || row_from_south_f < 0.0 {
            return None;
        }

        let col = col_f as usize;
        let row_from_south = row_from_south_f as usize;
        if col >= self.header.ncols || row_from_south >= self.header.nrows {
            return None;
        }

        // Row 0 is the northernmost line, so flip the south-relative index.
        let row = self.header.nrows - 1 - row_from_south;
        Some(self.heights[row * self.header.ncols + col])
    }

    /// Set the height of cell (row, col), updating the running min/max.
    ///
    /// Out-of-range indices are rejected with a warning; the write is
    /// dropped rather than corrupting a neighbouring cell.
    pub fn set_height(&mut self, row: usize, col: usize, height: f32) {
        if row >= self.header.nrows || col >= self.header.ncols {
            warn!(row, col, "set_height out of range");
            return;
        }
        self.heights[row * self.header.ncols + col] = height;

        self.max_height = Some(match self.max_height {
            Some(max) if max >= height => max,
            _ => height,
        });
        self.min_height = Some(match self.min_height {
            Some(min) if min <= height => min,
            _ => height,
        });
    }

    /// The full height matrix in row-major order.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_header() -> GridHeader {
        GridHeader {
            ncols: 4,
            nrows: 3,
            xllcorner: 513000.0,
            yllcorner: 152000.0,
            cellsize: 1.0,
            nodata_value: -9999,
        }
    }

    #[test]
    fn test_new_grid_is_zero_filled() {
        let grid = Grid::new(test_header());
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.height(row, col), 0.0);
            }
        }
        assert_eq!(grid.min_height(), 0.0);
        assert_eq!(grid.max_height(), 0.0);
    }

    #[test]
    fn test_set_height_tracks_min_max() {
        let mut grid = Grid::new(test_header());

        grid.set_height(0, 0, 500.0);
        assert_eq!(grid.min_height(), 500.0);
        assert_eq!(grid.max_height(), 500.0);

        grid.set_height(1, 2, 1000.0);
        grid.set_height(2, 3, -25.0);
        assert_eq!(grid.min_height(), -25.0);
        assert_eq!(grid.max_height(), 1000.0);
        assert!(grid.max_height() >= grid.min_height());
    }

    #[test]
    fn test_set_height_out_of_range_ignored() {
        let mut grid = Grid::new(test_header());
        grid.set_height(3, 0, 42.0); // row past the end
        grid.set_height(0, 4, 42.0); // col past the end

        // Nothing written, min/max untouched
        assert!(grid.heights().iter().all(|&h| h == 0.0));
        assert_eq!(grid.max_height(), 0.0);
    }

    #[test]
    fn test_height_at_corners() {
        let mut grid = Grid::new(test_header());
        // Southernmost row is the last matrix row
        grid.set_height(2, 0, 7.0);
        // Northernmost row is row 0
        grid.set_height(0, 3, 9.0);

        assert_eq!(grid.height_at(513000.0, 152000.0), Some(7.0));
        assert_eq!(grid.height_at(513003.5, 152002.5), Some(9.0));
    }

    #[test]
    fn test_height_at_outside_grid() {
        let grid = Grid::new(test_header());
        assert_eq!(grid.height_at(512999.0, 152000.0), None);
        assert_eq!(grid.height_at(513000.0, 151999.0), None);
        assert_eq!(grid.height_at(513004.0, 152000.0), None);
        assert_eq!(grid.height_at(513000.0, 152003.0), None);
    }
}
