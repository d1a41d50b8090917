// Pinned-section effects and scroll bookkeeping.

use scroll_core::pinned::{horizontal_offset, text_zoom, TEXT_ZOOM_MAX_SCALE};
use scroll_core::progress::{normalized, RenderGate, ScrollDirection, ScrollTracker};

#[test]
fn text_zoom_starts_flat_behind_closed_curtains() {
    let z = text_zoom(0.0);
    assert_eq!(z.scale, 1.0);
    assert_eq!(z.curtain_width_pct, 50.0);
}

#[test]
fn text_zoom_reaches_full_scale_at_the_segment_end() {
    for progress in [0.6, 0.8, 1.0] {
        let z = text_zoom(progress);
        assert!((z.scale - TEXT_ZOOM_MAX_SCALE).abs() < 1e-3);
    }
}

#[test]
fn curtains_hold_until_the_zoom_is_well_underway() {
    // The curtains only start opening at 36% of the pinned range.
    assert_eq!(text_zoom(0.36).curtain_width_pct, 50.0);
    assert!(text_zoom(0.4).curtain_width_pct < 50.0);
    assert!(text_zoom(0.96).curtain_width_pct < 1e-3);
    assert_eq!(text_zoom(1.0).curtain_width_pct, 0.0);
}

#[test]
fn text_zoom_is_monotonic_over_the_pin() {
    let mut last_scale = 0.0;
    let mut last_curtain = f32::MAX;
    for i in 0..=100 {
        let z = text_zoom(i as f32 / 100.0);
        assert!(z.scale >= last_scale);
        assert!(z.curtain_width_pct <= last_curtain);
        last_scale = z.scale;
        last_curtain = z.curtain_width_pct;
    }
}

#[test]
fn text_zoom_clamps_out_of_range_progress() {
    assert_eq!(text_zoom(-1.0), text_zoom(0.0));
    assert_eq!(text_zoom(2.0), text_zoom(1.0));
}

#[test]
fn horizontal_offset_scrubs_across_the_overflow() {
    assert_eq!(horizontal_offset(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(horizontal_offset(0.5, 3000.0, 1000.0), -1000.0);
    assert_eq!(horizontal_offset(1.0, 3000.0, 1000.0), -2000.0);
}

#[test]
fn horizontal_offset_is_zero_when_content_fits() {
    assert_eq!(horizontal_offset(0.7, 800.0, 1000.0), 0.0);
    assert_eq!(horizontal_offset(0.7, 1000.0, 1000.0), 0.0);
}

#[test]
fn normalized_progress_clamps_and_handles_degenerate_extents() {
    assert_eq!(normalized(0.0, 16000.0, 1000.0), 0.0);
    assert_eq!(normalized(7500.0, 16000.0, 1000.0), 0.5);
    assert_eq!(normalized(15000.0, 16000.0, 1000.0), 1.0);
    assert_eq!(normalized(20000.0, 16000.0, 1000.0), 1.0);
    assert_eq!(normalized(-50.0, 16000.0, 1000.0), 0.0);
    // Content no taller than the viewport: nothing to scroll.
    assert_eq!(normalized(100.0, 1000.0, 1000.0), 0.0);
    assert_eq!(normalized(100.0, 500.0, 1000.0), 0.0);
}

#[test]
fn scroll_tracker_reports_direction_and_keeps_it_while_idle() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.observe(100.0), ScrollDirection::Down);
    assert_eq!(tracker.observe(250.0), ScrollDirection::Down);
    assert_eq!(tracker.observe(250.0), ScrollDirection::Down);
    assert_eq!(tracker.observe(180.0), ScrollDirection::Up);
    // Holding still keeps the last direction.
    assert_eq!(tracker.observe(180.0), ScrollDirection::Up);
    assert_eq!(tracker.direction(), ScrollDirection::Up);
}

#[test]
fn render_gate_skips_static_frames() {
    let mut gate = RenderGate::new();
    // First frame always renders (nothing rendered yet).
    assert!(gate.should_render(0.0, false, 0.0));
    gate.mark_rendered(0.0);

    // Sub-threshold scroll, settled, fresh frame: skip.
    assert!(!gate.should_render(1.0, false, 0.001));

    // Any of the three conditions re-enables rendering.
    assert!(gate.should_render(10.0, false, 0.001)); // scrolled past threshold
    assert!(gate.should_render(1.0, true, 0.001)); // still animating
    assert!(gate.should_render(1.0, false, 0.05)); // frame interval elapsed
}

#[test]
fn render_gate_tracks_the_last_rendered_offset() {
    let mut gate = RenderGate::new();
    gate.mark_rendered(500.0);
    assert!(!gate.should_render(501.0, false, 0.0));
    gate.mark_rendered(501.0);
    assert!(gate.should_render(504.0, false, 0.0));
}
