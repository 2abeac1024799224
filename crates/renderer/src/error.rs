//! Error types for rendering.

use thiserror::Error;

/// Errors raised while encoding rendered output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Pixel buffer does not cover the stated dimensions.
    #[error("pixel buffer holds {got} samples, {width}x{height} image needs {needed}")]
    BufferTooSmall {
        got: usize,
        width: usize,
        height: usize,
        needed: usize,
    },

    /// Scanline compression failed.
    #[error("IDAT compression failed: {0}")]
    Compression(#[from] std::io::Error),
}
