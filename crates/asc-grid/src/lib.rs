//! ESRI ARC/INFO ASCII GRID parsing.
//!
//! This crate reads plain-text elevation grids as produced by mapping and
//! lidar survey tooling. A file carries six header lines followed by the
//! rows and columns of height data, most northern row first:
//!
//! ```text
//! ncols 4
//! nrows 4
//! xllcorner    513000
//! yllcorner    152000
//! cellsize     1
//! NODATA_value -9999
//! 500 500 500 500
//! 500 500 500 500
//! 1000 1000 1000 1000
//! 1000 1000 1000 1000
//! ```
//!
//! `xllcorner`/`yllcorner` give the map reference of the lower-left corner
//! in whatever local mapping system the survey uses (UK lidar exports use
//! Ordnance Survey references with metre cells). `NODATA_value` marks
//! samples the sensor could not resolve.
//!
//! Real-world exports are frequently slightly malformed, so the parser is
//! deliberately lenient: header key mismatches, rows with the wrong column
//! count and line over/underruns are logged and skipped rather than
//! aborting the parse. Only unreadable numerics and a truncated header are
//! fatal.

pub mod error;
pub mod grid;
pub mod parser;
pub mod testdata;

pub use error::{GridError, GridResult};
pub use grid::{Grid, GridHeader};
pub use parser::{parse_grid, parse_grid_file};
