//! Rotation sequencing and vertical motion for the animated object.

use crate::config::AnimationConfig;
use crate::constants::{WAVE_AMPLITUDE, WAVE_FREQUENCY};

/// Applied (smoothed) object transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjectTransform {
    /// Accumulated yaw in radians; grows without wrapping while scrolling
    /// forward, so full turns are preserved.
    pub rotation_y: f32,
    pub position_y: f32,
}

/// Rotation target for one evaluation inside the main band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTarget {
    pub radians: f32,
    /// Index of the rotation cycle the progress falls in.
    pub sequence: u32,
}

/// Progress through the main band, or `None` outside the open interval
/// (zoom_in.end, zoom_out.start).
fn main_progress(progress: f32, config: &AnimationConfig) -> Option<f32> {
    let (_, zi_end) = config.zoom_in;
    let (zo_start, _) = config.zoom_out;
    if progress > zi_end && progress < zo_start {
        Some(((progress - zi_end) / (zo_start - zi_end)).clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Rotation target at `progress`.
///
/// Returns `None` outside the main band: the target freezes there and the
/// caller keeps interpolating toward the last value it saw. Within the
/// band the target is continuous and strictly increasing; each sequence
/// spends its fast segment covering `fast_fraction` of the per-sequence
/// rotation and the slow segment covering the remainder.
pub fn rotation_target(progress: f32, config: &AnimationConfig) -> Option<RotationTarget> {
    let main = main_progress(progress, config)?;
    let sequence_progress = main * config.sequence_count as f32;
    let sequence = sequence_progress.floor() as u32;
    let within = sequence_progress - sequence as f32;

    let fast = config.fast_fraction;
    let turn = config.rotation_per_sequence;
    let contribution = if within < fast {
        let fast_t = within / fast;
        turn * fast * fast_t
    } else {
        let slow_t = (within - fast) / (1.0 - fast);
        turn * (fast + (1.0 - fast) * slow_t)
    };

    Some(RotationTarget {
        radians: sequence as f32 * turn + contribution,
        sequence,
    })
}

/// Smoothing speed multiplier for the current tick.
///
/// Selected from the current progress independently of the held target:
/// the smoothing rate switches at the fast/slow segment boundary while
/// the smoothed value itself stays continuous. Outside the main band the
/// slow rate applies (the target is frozen there anyway).
pub fn rotation_speed_multiplier(progress: f32, config: &AnimationConfig) -> f32 {
    match main_progress(progress, config) {
        Some(main) => {
            let sequence_progress = main * config.sequence_count as f32;
            let within = sequence_progress - sequence_progress.floor();
            if within < config.fast_fraction {
                config.fast_speed
            } else {
                config.slow_speed
            }
        }
        None => config.slow_speed,
    }
}

/// Vertical position target: a linear ramp over the full scroll with a
/// subtle sinusoidal bob on top.
pub fn vertical_target(progress: f32, config: &AnimationConfig) -> f32 {
    let base = config.initial_y + progress * config.vertical_range;
    base + (progress * std::f32::consts::PI * WAVE_FREQUENCY).sin() * WAVE_AMPLITUDE
}
