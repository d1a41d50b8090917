// Rotation targeting: sequence math, fast/slow segments, band freezing.

use std::f32::consts::PI;

use scroll_core::object::{rotation_speed_multiplier, rotation_target, vertical_target};
use scroll_core::AnimationConfig;

fn config() -> AnimationConfig {
    AnimationConfig::default()
}

/// Progress value whose main-band progress equals `main` for the default
/// config (band 0.1..0.9).
fn at_main(main: f32) -> f32 {
    0.1 + main * 0.8
}

#[test]
fn rotation_target_is_none_outside_the_main_band() {
    let cfg = config();
    for progress in [0.0, 0.05, 0.1, 0.9, 0.95, 1.0] {
        assert!(
            rotation_target(progress, &cfg).is_none(),
            "expected frozen target at progress {}",
            progress
        );
    }
}

#[test]
fn rotation_target_is_monotonic_within_the_main_band() {
    let cfg = config();
    let mut last = f32::MIN;
    for i in 1..800 {
        let progress = 0.1 + 0.8 * i as f32 / 800.0;
        if let Some(target) = rotation_target(progress, &cfg) {
            assert!(
                target.radians >= last,
                "rotation reversed at progress {}: {} < {}",
                progress,
                target.radians,
                last
            );
            last = target.radians;
        }
    }
}

#[test]
fn rotation_target_is_continuous_at_segment_and_sequence_boundaries() {
    let cfg = config();
    let eps = 1e-5;
    // Fast/slow handoff within sequence 0 and the 0 -> 1 sequence handoff.
    for main in [0.25, 1.0 / 3.0] {
        let left = rotation_target(at_main(main) - eps, &cfg).unwrap().radians;
        let right = rotation_target(at_main(main) + eps, &cfg).unwrap().radians;
        assert!(
            (left - right).abs() < 0.01,
            "target jumps at main progress {}: {} vs {}",
            main,
            left,
            right
        );
    }
}

#[test]
fn fast_segment_contribution_matches_apportioned_rotation() {
    // Scenario: 3 sequences, 4 pi per sequence, fast fraction 0.75, main
    // progress 0.5 -> sequence 1, within 0.5 (fast), contribution 2 pi,
    // target 6 pi.
    let cfg = config();
    let target = rotation_target(at_main(0.5), &cfg).expect("inside band");
    assert_eq!(target.sequence, 1);
    assert!(
        (target.radians - 6.0 * PI).abs() < 1e-3,
        "expected 6 pi, got {}",
        target.radians
    );
}

#[test]
fn slow_segment_starts_where_the_fast_segment_ends() {
    let cfg = config();
    // within == fast_fraction exactly: slow segment at zero progress has
    // the full fast contribution and nothing more.
    let main = (0.0 + 0.75) / 3.0;
    let target = rotation_target(at_main(main), &cfg).expect("inside band");
    assert_eq!(target.sequence, 0);
    assert!((target.radians - 3.0 * PI).abs() < 1e-3);

    // Same point in sequence 1.
    let main = (1.0 + 0.75) / 3.0;
    let target = rotation_target(at_main(main), &cfg).expect("inside band");
    assert_eq!(target.sequence, 1);
    assert!((target.radians - 7.0 * PI).abs() < 1e-3);
}

#[test]
fn each_sequence_ends_one_full_cycle_further() {
    let cfg = config();
    let eps = 1e-4;
    // Just before the 0 -> 1 handoff the target approaches 4 pi.
    let end_of_first = rotation_target(at_main(1.0 / 3.0 - eps), &cfg)
        .unwrap()
        .radians;
    assert!((end_of_first - 4.0 * PI).abs() < 0.05);
}

#[test]
fn speed_multiplier_tracks_the_current_segment() {
    let cfg = config();
    assert_eq!(rotation_speed_multiplier(at_main(0.1), &cfg), cfg.fast_speed);
    assert_eq!(rotation_speed_multiplier(at_main(0.26), &cfg), cfg.slow_speed);
    // Sequence 1 starts fast again.
    assert_eq!(
        rotation_speed_multiplier(at_main(1.05 / 3.0), &cfg),
        cfg.fast_speed
    );
    // Outside the band the target is frozen; the slow rate applies.
    assert_eq!(rotation_speed_multiplier(0.05, &cfg), cfg.slow_speed);
    assert_eq!(rotation_speed_multiplier(0.95, &cfg), cfg.slow_speed);
}

#[test]
fn vertical_target_ramps_with_a_bounded_wave() {
    let cfg = config();
    assert!((vertical_target(0.0, &cfg) - cfg.initial_y).abs() < 1e-6);
    for i in 0..=100 {
        let progress = i as f32 / 100.0;
        let base = cfg.initial_y + progress * cfg.vertical_range;
        let y = vertical_target(progress, &cfg);
        assert!(
            (y - base).abs() <= 0.2 + 1e-6,
            "wave exceeded amplitude at progress {}",
            progress
        );
    }
    // sin(1.5 pi) == -1 at full scroll: ramp top minus the full amplitude.
    let top = cfg.initial_y + cfg.vertical_range - 0.2;
    assert!((vertical_target(1.0, &cfg) - top).abs() < 1e-4);
}
