//! Height-to-shade mapping.

/// Running minimum and maximum shade produced across one rendering pass.
///
/// Owned by whoever drives the render and threaded through each `shade`
/// call. Purely diagnostic: the recorded extremes never influence pixel
/// values. Concurrent renders must use independent trackers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShadeTracker {
    min_shade: Option<u8>,
    max_shade: Option<u8>,
}

impl ShadeTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest shade recorded since the last reset.
    pub fn min_shade(&self) -> Option<u8> {
        self.min_shade
    }

    /// Largest shade recorded since the last reset.
    pub fn max_shade(&self) -> Option<u8> {
        self.max_shade
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn record(&mut self, shade: u8) {
        self.min_shade = Some(match self.min_shade {
            Some(min) if min <= shade => min,
            _ => shade,
        });
        self.max_shade = Some(match self.max_shade {
            Some(max) if max >= shade => max,
            _ => shade,
        });
    }
}

/// Map a height to an 8-bit grayscale intensity.
///
/// A height at `floor` renders white (255), a height at `ceiling` black
/// (0), and heights between fall off linearly:
/// `255 - (height - floor) * 256 / (ceiling - floor)`, computed in `f32`
/// and truncated. Heights outside `[floor, ceiling]` clamp to the nearest
/// endpoint instead of wrapping around the byte range.
///
/// Callers must guarantee `ceiling > floor`; with an equal or inverted
/// pair the quotient is not finite and the output is unspecified.
///
/// The produced shade is recorded in `tracker` for post-run reporting.
pub fn shade(floor: f32, ceiling: f32, height: f32, tracker: &mut ShadeTracker) -> u8 {
    // Work in floor-relative coordinates.
    let span = ceiling - floor;
    let scaled = (height - floor) * 256.0 / span;
    let step = scaled.clamp(0.0, 255.0) as u8;

    let shade = 255 - step;
    tracker.record(shade);
    shade
}
