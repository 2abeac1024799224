//! Grayscale rendering for height grids.
//!
//! Two pieces: the height-to-shade mapping (with its diagnostic
//! `ShadeTracker`) and a minimal grayscale PNG encoder.

pub mod error;
pub mod png;
pub mod shade;

pub use error::RenderError;
pub use shade::{shade, ShadeTracker};
