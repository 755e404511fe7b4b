//! Viewport controller tests
//!
//! Tests for zoom clamping, unconstrained panning, fit-to-content
//! scaling, and visible-range virtualization.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use test_case::test_case;
use tileview::layout::{GridLayout, Viewport, VisibleRange};
use tileview::types::GridDimensions;

/// Create a layout with uniform tile sizes
fn create_layout(columns: u32, rows: u32, tile_width: f32, tile_height: f32) -> GridLayout {
    GridLayout::new(GridDimensions {
        column_count: columns,
        row_count: rows,
        tile_width,
        tile_height,
    })
    .expect("valid test dimensions")
}

// =============================================================================
// ZOOM CLAMPING TESTS
// =============================================================================

#[test_case(999.0, 10.0 ; "far above the maximum lands on the maximum")]
#[test_case(0.000_1, 0.1 ; "far below the minimum lands on the minimum")]
#[test_case(5.0, 5.0 ; "inside the bounds is applied unchanged")]
#[test_case(10.0, 10.0 ; "exactly the maximum is allowed")]
#[test_case(0.1, 0.1 ; "exactly the minimum is allowed")]
fn test_zoom_to_clamps(requested: f32, expected: f32) {
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    let applied = viewport.zoom_to(requested);
    assert_eq!(applied, expected);
    assert_eq!(viewport.scale, expected);
}

#[test]
fn test_scale_stays_in_bounds_across_any_request_sequence() {
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    let requests = [
        0.0, -5.0, 999.0, 3.7, f32::MAX, 0.05, 1.0, -0.0, 10.0001, 0.0999,
    ];
    for &requested in &requests {
        viewport.zoom_to(requested);
        assert!(
            (0.1..=10.0).contains(&viewport.scale),
            "scale {} escaped bounds after request {}",
            viewport.scale,
            requested
        );
    }
}

#[test]
fn test_non_finite_zoom_requests_are_ignored() {
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    viewport.zoom_to(2.0);
    viewport.zoom_to(f32::NAN);
    assert_eq!(viewport.scale, 2.0, "NaN request should keep the prior scale");
    viewport.zoom_to(f32::INFINITY);
    assert_eq!(viewport.scale, 2.0);
}

// =============================================================================
// PAN TESTS
// =============================================================================

#[test]
fn test_pan_accumulates_without_clamping() {
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    viewport.pan_by(100.0, -250.0);
    viewport.pan_by(-400.0, 50.0);
    assert_eq!(viewport.offset_x, -300.0, "panning past the left edge is allowed");
    assert_eq!(viewport.offset_y, -200.0);
}

#[test]
fn test_pan_far_past_content_is_allowed() {
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    viewport.pan_by(1_000_000.0, 1_000_000.0);
    assert_eq!(viewport.offset_x, 1_000_000.0);
    assert_eq!(viewport.offset_y, 1_000_000.0);
}

// =============================================================================
// FIT-TO-CONTENT TESTS
// =============================================================================

#[test]
fn test_fit_scale_picks_the_tighter_axis() {
    // Content: 20 cols * 20px = 400 wide, 50 rows * 30px = 1500 tall
    let layout = create_layout(20, 50, 20.0, 30.0);
    let fit = Viewport::fit_scale(800.0, 600.0, &layout);
    // 800/400 = 2.0, 600/1500 = 0.4 -> the height constrains
    assert_eq!(fit, 0.4);
}

#[test]
fn test_fit_to_content_clamps_into_zoom_bounds() {
    // A huge grid wants a scale below min_zoom; the bound wins
    let layout = create_layout(10_000, 10_000, 20.0, 20.0);
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    let applied = viewport.fit_to_content(&layout);
    assert_eq!(applied, 0.1, "fit below min_zoom should clamp to min_zoom");
}

#[test]
fn test_fit_scale_of_empty_grid_falls_back_to_one() {
    let layout = create_layout(0, 10, 20.0, 20.0);
    assert_eq!(Viewport::fit_scale(800.0, 600.0, &layout), 1.0);
}

// =============================================================================
// VISIBLE RANGE TESTS
// =============================================================================

#[test]
fn test_viewport_containing_the_grid_sees_everything() {
    let layout = create_layout(20, 50, 20.0, 30.0);
    // Content is 400x1500; a big viewport at scale 1 contains it fully
    let viewport = Viewport::new(2000.0, 2000.0, 0.1, 10.0);
    let range = viewport.visible_range(&layout);
    assert_eq!(
        range,
        VisibleRange {
            row_start: 0,
            row_end: 50,
            col_start: 0,
            col_end: 20,
        },
        "full containment should yield the full grid"
    );
}

#[test]
fn test_viewport_disjoint_from_the_grid_sees_nothing() {
    let layout = create_layout(20, 50, 20.0, 30.0);
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    viewport.pan_by(10_000.0, 0.0);
    assert!(viewport.visible_range(&layout).is_empty());

    // Panned before the origin far enough that the window ends at x < 0
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    viewport.pan_by(-10_000.0, -10_000.0);
    assert!(viewport.visible_range(&layout).is_empty());
}

#[test]
fn test_visible_range_excludes_off_screen_tiles() {
    // 100x100 grid, 20px tiles, 400x400 window at scale 1: 20x20 tiles visible
    let layout = create_layout(100, 100, 20.0, 20.0);
    let viewport = Viewport::new(400.0, 400.0, 0.1, 10.0);
    let range = viewport.visible_range(&layout);
    assert_eq!(range.row_end - range.row_start, 20);
    assert_eq!(range.col_end - range.col_start, 20);
    assert_eq!(range.cell_count(), 400, "only the window is iterated");
}

#[test]
fn test_visible_range_follows_the_pan_offset() {
    let layout = create_layout(100, 100, 20.0, 20.0);
    let mut viewport = Viewport::new(400.0, 400.0, 0.1, 10.0);
    viewport.pan_by(200.0, 600.0);
    let range = viewport.visible_range(&layout);
    assert_eq!(range.col_start, 10, "x offset of 200px is 10 tiles in");
    assert_eq!(range.row_start, 30, "y offset of 600px is 30 tiles down");
}

#[test]
fn test_visible_range_includes_partially_covered_tiles() {
    let layout = create_layout(100, 100, 20.0, 20.0);
    let mut viewport = Viewport::new(400.0, 400.0, 0.1, 10.0);
    viewport.pan_by(10.0, 10.0);
    let range = viewport.visible_range(&layout);
    assert_eq!(range.col_start, 0, "tile 0 is still half visible");
    assert_eq!(range.col_end, 21, "tile 20 became half visible");
}

#[test]
fn test_zooming_out_widens_the_visible_range() {
    let layout = create_layout(100, 100, 20.0, 20.0);
    let mut viewport = Viewport::new(400.0, 400.0, 0.1, 10.0);
    viewport.zoom_to(0.5);
    let range = viewport.visible_range(&layout);
    // 400px window at scale 0.5 covers 800 world px = 40 tiles
    assert_eq!(range.row_end - range.row_start, 40);
}

// =============================================================================
// COORDINATE TRANSFORMATION TESTS
// =============================================================================

#[test]
fn test_to_screen_applies_offset_then_scale() {
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    viewport.pan_by(100.0, 200.0);
    viewport.zoom_to(2.0);

    let (screen_x, screen_y) = viewport.to_screen(150.0, 250.0);
    assert_eq!(screen_x, 100.0, "(150 - 100) * 2");
    assert_eq!(screen_y, 100.0, "(250 - 200) * 2");
}

#[test]
fn test_to_world_round_trips() {
    let mut viewport = Viewport::new(800.0, 600.0, 0.1, 10.0);
    viewport.pan_by(-37.5, 12.25);
    viewport.zoom_to(3.0);

    let original = (300.0, 400.0);
    let screen = viewport.to_screen(original.0, original.1);
    let back = viewport.to_world(screen.0, screen.1);

    assert!((back.0 - original.0).abs() < 0.001, "X roundtrip should match");
    assert!((back.1 - original.1).abs() < 0.001, "Y roundtrip should match");
}
