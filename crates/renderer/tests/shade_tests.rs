//! Tests for the height-to-shade mapping and its tracker.

use renderer::{shade, ShadeTracker};

// ============================================================================
// Mapping
// ============================================================================

#[test]
fn test_floor_maps_to_white() {
    let mut tracker = ShadeTracker::new();
    assert_eq!(shade(0.0, 1000.0, 0.0, &mut tracker), 255);
    assert_eq!(shade(100.0, 600.0, 100.0, &mut tracker), 255);
}

#[test]
fn test_ceiling_maps_to_black() {
    let mut tracker = ShadeTracker::new();
    assert_eq!(shade(0.0, 1000.0, 1000.0, &mut tracker), 0);
    assert_eq!(shade(-50.0, 50.0, 50.0, &mut tracker), 0);
}

#[test]
fn test_midpoint_worked_example() {
    // 255 - floor(500 * 256 / 1000) = 255 - 128
    let mut tracker = ShadeTracker::new();
    assert_eq!(shade(0.0, 1000.0, 500.0, &mut tracker), 127);
}

#[test]
fn test_quarter_point() {
    // 255 - floor(250 * 256 / 1000) = 255 - 64
    let mut tracker = ShadeTracker::new();
    assert_eq!(shade(0.0, 1000.0, 250.0, &mut tracker), 191);
}

#[test]
fn test_higher_ground_is_darker() {
    let mut tracker = ShadeTracker::new();
    let mut previous = 255;
    for height in [100.0, 300.0, 500.0, 700.0, 900.0] {
        let s = shade(0.0, 1000.0, height, &mut tracker);
        assert!(
            s <= previous,
            "shade should not increase with height: {} then {}",
            previous,
            s
        );
        previous = s;
    }
}

#[test]
fn test_out_of_range_heights_clamp() {
    let mut tracker = ShadeTracker::new();
    // Below the floor clamps to full white, above the ceiling to full black
    assert_eq!(shade(0.0, 1000.0, -400.0, &mut tracker), 255);
    assert_eq!(shade(0.0, 1000.0, 2500.0, &mut tracker), 0);
}

#[test]
fn test_offset_range_matches_zero_based() {
    // Only the floor-relative position matters
    let mut a = ShadeTracker::new();
    let mut b = ShadeTracker::new();
    assert_eq!(
        shade(0.0, 1000.0, 500.0, &mut a),
        shade(5000.0, 6000.0, 5500.0, &mut b)
    );
}

// ============================================================================
// ShadeTracker
// ============================================================================

#[test]
fn test_tracker_starts_empty() {
    let tracker = ShadeTracker::new();
    assert_eq!(tracker.min_shade(), None);
    assert_eq!(tracker.max_shade(), None);
}

#[test]
fn test_tracker_records_extremes() {
    let mut tracker = ShadeTracker::new();
    shade(0.0, 1000.0, 500.0, &mut tracker); // 127
    shade(0.0, 1000.0, 0.0, &mut tracker); // 255
    shade(0.0, 1000.0, 1000.0, &mut tracker); // 0

    assert_eq!(tracker.min_shade(), Some(0));
    assert_eq!(tracker.max_shade(), Some(255));
}

#[test]
fn test_tracker_single_sample() {
    let mut tracker = ShadeTracker::new();
    shade(0.0, 1000.0, 500.0, &mut tracker);
    assert_eq!(tracker.min_shade(), Some(127));
    assert_eq!(tracker.max_shade(), Some(127));
}

#[test]
fn test_tracker_reset() {
    let mut tracker = ShadeTracker::new();
    shade(0.0, 1000.0, 0.0, &mut tracker);
    tracker.reset();
    assert_eq!(tracker.min_shade(), None);
    assert_eq!(tracker.max_shade(), None);
}

#[test]
fn test_trackers_are_independent() {
    let mut first = ShadeTracker::new();
    let mut second = ShadeTracker::new();

    shade(0.0, 1000.0, 1000.0, &mut first);
    shade(0.0, 1000.0, 500.0, &mut second);

    assert_eq!(first.min_shade(), Some(0));
    assert_eq!(second.min_shade(), Some(127));
}
