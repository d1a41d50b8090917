//! Cross-frame animation state and the per-tick evaluation step.

use smallvec::SmallVec;

use crate::camera::{distance_target, Phase};
use crate::config::{AnimationConfig, ConfigError};
use crate::constants::SETTLE_EPSILON;
use crate::ease::approach;
use crate::object::{
    rotation_speed_multiplier, rotation_target, vertical_target, ObjectTransform,
};
use crate::slides::{active_slide, slide_states, SlideEdge, SlideState, SlideTracker};

/// Discrete state transitions observed during a tick. Carried on the
/// returned frame for subscribers; no other side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    SequenceChanged { from: u32, to: u32 },
    Slide(SlideEdge),
}

/// One evaluated frame: the smoothed values to hand to the renderer plus
/// the transitions crossed while getting there.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub phase: Phase,
    pub camera_distance: f32,
    pub object: ObjectTransform,
    pub slides: SmallVec<[SlideState; 4]>,
    pub events: SmallVec<[TransitionEvent; 4]>,
}

/// Owner of the only mutable cross-frame state: the smoothed camera
/// distance, rotation and vertical offset, the held rotation target, the
/// last sequence index and the active slide.
///
/// Single writer. Ticks must be applied in temporal order: each step
/// interpolates from the previous one, so skipping frames only costs
/// smoothness, never correctness.
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    config: AnimationConfig,
    slide_count: usize,
    camera_distance: f32,
    rotation: f32,
    /// Target held across frames; only advances inside the main band.
    rotation_goal: f32,
    position_y: f32,
    sequence: u32,
    slide_tracker: SlideTracker,
}

impl ScrollAnimator {
    /// Validates the configuration up front; after that, every tick is
    /// total over clamped progress.
    pub fn new(config: AnimationConfig, slide_count: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            camera_distance: config.zoomed_out,
            rotation: 0.0,
            rotation_goal: 0.0,
            position_y: config.initial_y,
            sequence: 0,
            slide_tracker: SlideTracker::new(),
            slide_count,
            config,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    pub fn object(&self) -> ObjectTransform {
        ObjectTransform {
            rotation_y: self.rotation,
            position_y: self.position_y,
        }
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Evaluate one tick at `progress` (clamped to \[0, 1\]).
    pub fn advance(&mut self, progress: f32) -> SceneFrame {
        let progress = progress.clamp(0.0, 1.0);
        let cfg = &self.config;
        let mut events: SmallVec<[TransitionEvent; 4]> = SmallVec::new();

        let phase = Phase::classify(progress, cfg);

        let cam_target = distance_target(progress, cfg);
        self.camera_distance = approach(self.camera_distance, cam_target, cfg.zoom_speed);

        // The rotation target only advances inside the main band; outside
        // it the last target is held and smoothing keeps running toward it.
        if let Some(target) = rotation_target(progress, cfg) {
            if target.sequence != self.sequence {
                log::debug!(
                    "sequence {} -> {} of {}",
                    self.sequence,
                    target.sequence,
                    cfg.sequence_count
                );
                events.push(TransitionEvent::SequenceChanged {
                    from: self.sequence,
                    to: target.sequence,
                });
                self.sequence = target.sequence;
            }
            self.rotation_goal = target.radians;
        }
        let speed = rotation_speed_multiplier(progress, cfg);
        self.rotation = approach(
            self.rotation,
            self.rotation_goal,
            cfg.base_rotation_speed * speed,
        );

        self.position_y = approach(
            self.position_y,
            vertical_target(progress, cfg),
            cfg.base_position_speed,
        );

        let slides = slide_states(progress, self.slide_count);
        for edge in self.slide_tracker.observe(active_slide(progress, self.slide_count)) {
            events.push(TransitionEvent::Slide(edge));
        }

        SceneFrame {
            phase,
            camera_distance: self.camera_distance,
            object: ObjectTransform {
                rotation_y: self.rotation,
                position_y: self.position_y,
            },
            slides,
            events,
        }
    }

    /// Whether any smoothed value is still visibly off its target at
    /// `progress`. Hosts use this to keep rendering until motion settles.
    pub fn is_settling(&self, progress: f32) -> bool {
        let p = progress.clamp(0.0, 1.0);
        (self.camera_distance - distance_target(p, &self.config)).abs() > SETTLE_EPSILON
            || (self.rotation - self.rotation_goal).abs() > SETTLE_EPSILON
            || (self.position_y - vertical_target(p, &self.config)).abs() > SETTLE_EPSILON
    }
}
