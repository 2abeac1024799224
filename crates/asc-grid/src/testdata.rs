//! Synthetic grid files for tests.
//!
//! Generated files are tiny (a few KB at most) and use the canonical
//! header from the format documentation, so tests can assert against
//! known corner references.

/// Canonical header block shared by the generated files.
fn header(ncols: usize, nrows: usize) -> String {
    format!(
        "ncols {}\nnrows {}\nxllcorner    513000\nyllcorner    152000\ncellsize     1\nNODATA_value -9999\n",
        ncols, nrows
    )
}

/// Grid file text for a plane tilting up towards the south-east.
///
/// The value at 1-based (row i, column j) is `i/2 + j/2`, so every cell
/// differs from its neighbours and the minimum (1.0) sits at the
/// north-west corner.
pub fn tilted_plane(ncols: usize, nrows: usize) -> String {
    let mut out = header(ncols, nrows);
    for i in 1..=nrows {
        for j in 1..=ncols {
            let value = i as f32 / 2.0 + j as f32 / 2.0;
            out.push_str(&format!("{} ", value));
        }
        out.push('\n');
    }
    out
}

/// The canonical four-by-four documentation example: two northern rows of
/// 500s above two southern rows of 1000s.
pub fn sample_4x4() -> String {
    let mut out = header(4, 4);
    out.push_str("500 500 500 500\n");
    out.push_str("500 500 500 500\n");
    out.push_str("1000 1000 1000 1000\n");
    out.push_str("1000 1000 1000 1000\n");
    out
}
