use navstrip::ScrollRegion;
use proptest::prelude::*;

const TOLERANCE: f32 = 1.0;

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_measure_uses_furthest_item_edge() {
    let region = ScrollRegion::measure(300.0, [100.0, 212.0, 548.0, 400.0]);
    assert_eq!(region.content_extent(), 548.0);
    assert_eq!(region.viewport_extent(), 300.0);
    assert_eq!(region.max_offset(), 248.0);
}

#[test]
fn test_measure_without_items_has_nothing_to_scroll() {
    let region = ScrollRegion::measure(300.0, std::iter::empty());
    assert_eq!(region.content_extent(), 300.0);
    assert_eq!(region.max_offset(), 0.0);
}

#[test]
fn test_set_offset_clamps_both_ends() {
    let mut region = ScrollRegion::new(500.0, 200.0);
    assert!(region.set_offset(1_000.0));
    assert_eq!(region.offset(), 300.0);
    assert!(region.set_offset(-50.0));
    assert_eq!(region.offset(), 0.0);
    assert!(!region.set_offset(-1.0), "clamped to the same value");
}

#[test]
fn test_nan_offset_resets_to_start() {
    let mut region = ScrollRegion::new(500.0, 200.0).with_offset(100.0);
    region.set_offset(f32::NAN);
    assert_eq!(region.offset(), 0.0);
}

#[test]
fn test_growing_viewport_reclamps_offset() {
    let mut region = ScrollRegion::new(500.0, 200.0).with_offset(300.0);
    assert!(region.set_viewport(400.0));
    assert_eq!(region.offset(), 100.0);
    assert!(region.set_viewport(800.0));
    assert_eq!(region.offset(), 0.0);
    assert_eq!(region.content_extent(), 800.0);

    // Shrinking back restores the measured content width.
    assert!(!region.set_viewport(200.0));
    assert_eq!(region.content_extent(), 500.0);
}

// ============================================================================
// Boundary State
// ============================================================================

#[test]
fn test_boundary_at_start() {
    let region = ScrollRegion::new(500.0, 200.0);
    let boundary = region.boundary(TOLERANCE);
    assert!(boundary.at_start);
    assert!(!boundary.at_end);
    assert!(!boundary.arrows().left_enabled);
    assert!(boundary.arrows().right_enabled);
}

#[test]
fn test_boundary_tolerance_absorbs_subpixel_offsets() {
    let region = ScrollRegion::new(500.0, 200.0).with_offset(0.6);
    assert!(region.boundary(TOLERANCE).at_start);

    let region = ScrollRegion::new(500.0, 200.0).with_offset(299.4);
    assert!(region.boundary(TOLERANCE).at_end);

    let region = ScrollRegion::new(500.0, 200.0).with_offset(150.0);
    let boundary = region.boundary(TOLERANCE);
    assert!(!boundary.at_start && !boundary.at_end);
}

#[test]
fn test_boundary_both_ends_when_content_fits() {
    let region = ScrollRegion::new(150.0, 200.0);
    let boundary = region.boundary(TOLERANCE);
    assert!(boundary.at_start && boundary.at_end);
}

#[test]
fn test_boundary_both_ends_within_tolerance_of_overflow() {
    // Less than one tolerance on each end: nothing meaningful to scroll.
    let region = ScrollRegion::new(201.5, 200.0).with_offset(0.8);
    let boundary = region.boundary(TOLERANCE);
    assert!(boundary.at_start && boundary.at_end);

    let region = ScrollRegion::new(200.8, 200.0);
    let boundary = region.boundary(TOLERANCE);
    assert!(boundary.at_start && boundary.at_end);
    assert!(!boundary.arrows().left_enabled && !boundary.arrows().right_enabled);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_offset_always_in_range(
        content in 0.0f32..5_000.0,
        viewport in 0.0f32..2_000.0,
        requested in -10_000.0f32..10_000.0,
    ) {
        let mut region = ScrollRegion::new(content, viewport);
        region.set_offset(requested);
        let offset = region.offset();
        prop_assert!(offset >= 0.0);
        prop_assert!(offset <= (content - viewport).max(0.0));
    }

    #[test]
    fn prop_start_and_end_exclusive_when_scrollable(
        content in 0.0f32..5_000.0,
        viewport in 0.0f32..2_000.0,
        requested in -10_000.0f32..10_000.0,
    ) {
        let region = ScrollRegion::new(content, viewport).with_offset(requested);
        let boundary = region.boundary(TOLERANCE);
        if content <= viewport {
            prop_assert!(boundary.at_start && boundary.at_end);
        } else if region.max_offset() > 2.0 * TOLERANCE {
            prop_assert!(!(boundary.at_start && boundary.at_end));
        }
    }
}
