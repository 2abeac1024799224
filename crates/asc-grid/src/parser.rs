//! Line-oriented parser for the header-plus-matrix grid format.
//!
//! Survey exports are often slightly off (renamed header keys, short rows,
//! stray trailing lines), so structural problems are warned about and
//! worked around wherever a best-effort reading exists. Only numeric
//! tokens that fail to convert, and a header cut short, abort the parse.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{GridError, GridResult};
use crate::grid::{Grid, GridHeader};

/// Fixed count of header lines before the data rows.
const HEADER_LINES: usize = 6;

/// Open and parse a grid file from disk.
pub fn parse_grid_file(path: impl AsRef<Path>) -> GridResult<Grid> {
    let path = path.as_ref();
    debug!(path = %path.display(), "parsing grid file");
    let file = File::open(path)?;
    parse_grid(BufReader::new(file))
}

/// Parse a grid from any buffered reader.
///
/// Reads the six fixed-order header lines, allocates the zero-filled
/// matrix, then fills it row by row. Rows whose token count does not
/// match `ncols` are skipped whole (the matrix row keeps its zeros);
/// input beyond `nrows + 6` lines is discarded. Both conditions are
/// warnings, not errors.
pub fn parse_grid<R: BufRead>(reader: R) -> GridResult<Grid> {
    let mut lines = reader.lines();

    let ncols: usize = parse_header_field(&mut lines, "ncols")?;
    let nrows: usize = parse_header_field(&mut lines, "nrows")?;
    let xllcorner: f32 = parse_header_field(&mut lines, "xllcorner")?;
    let yllcorner: f32 = parse_header_field(&mut lines, "yllcorner")?;
    let cellsize: f32 = parse_header_field(&mut lines, "cellsize")?;
    let nodata_value: i32 = parse_header_field(&mut lines, "NODATA_value")?;

    if ncols == 0 || nrows == 0 {
        return Err(GridError::InvalidDimensions { ncols, nrows });
    }

    let mut grid = Grid::new(GridHeader {
        ncols,
        nrows,
        xllcorner,
        yllcorner,
        cellsize,
        nodata_value,
    });

    debug!(nrows, ncols, "reading data lines");

    let expected_lines = nrows + HEADER_LINES;
    let mut line_num = HEADER_LINES;

    for line in lines {
        let line = line?;
        line_num += 1;
        if line_num > expected_lines {
            warn!(
                expected = expected_lines,
                "file has too many lines, discarding the rest"
            );
            break;
        }
        let row = line_num - HEADER_LINES - 1;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != ncols {
            warn!(
                line = line_num,
                got = tokens.len(),
                expected = ncols,
                "wrong column count, skipping row"
            );
            continue;
        }

        for (col, token) in tokens.iter().enumerate() {
            let height: f32 = token.parse().map_err(|_| GridError::BadHeightValue {
                line: line_num,
                col,
                value: token.to_string(),
            })?;
            grid.set_height(row, col, height);
        }
    }

    if line_num < expected_lines {
        warn!(
            got = line_num,
            expected = expected_lines,
            "file has too few lines, remaining rows left zero"
        );
    }

    debug!(
        min_height = grid.min_height(),
        max_height = grid.max_height(),
        "parsed grid"
    );

    Ok(grid)
}

/// Read the next header line and parse its value token.
///
/// The line is trimmed and split on whitespace runs into a key and a
/// value. A key differing from the expected field name is tolerated with
/// a warning; a missing or unparsable value is fatal.
fn parse_header_field<T, I>(lines: &mut I, field: &'static str) -> GridResult<T>
where
    T: FromStr,
    I: Iterator<Item = std::io::Result<String>>,
{
    let line = match lines.next() {
        Some(line) => line?,
        None => return Err(GridError::TruncatedHeader { expected: field }),
    };

    let mut tokens = line.split_whitespace();
    let key = tokens.next().unwrap_or("");
    let value = tokens
        .next()
        .ok_or_else(|| GridError::MissingHeaderValue {
            field,
            line: line.clone(),
        })?;

    if key != field {
        warn!(expected = field, got = key, "unexpected header key");
    }

    value.parse().map_err(|_| GridError::BadHeaderValue {
        field,
        value: value.to_string(),
    })
}
