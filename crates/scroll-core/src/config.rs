//! Animation tuning and construction-time validation.

use thiserror::Error;

/// Rejected configurations. Detected once when an animator is built;
/// per-frame evaluation is total and cannot fail.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} range is inverted: {start} >= {end}")]
    InvertedRange {
        name: &'static str,
        start: f32,
        end: f32,
    },
    #[error("{name} range ({start}, {end}) must lie within [0, 1]")]
    RangeOutOfBounds {
        name: &'static str,
        start: f32,
        end: f32,
    },
    #[error("zoom-out starts at {zoom_out_start} before zoom-in ends at {zoom_in_end}")]
    OverlappingRanges {
        zoom_in_end: f32,
        zoom_out_start: f32,
    },
    #[error("zoomed-in distance {zoomed_in} must be closer than zoomed-out {zoomed_out}")]
    InvertedDistances { zoomed_in: f32, zoomed_out: f32 },
    #[error("sequence_count must be positive")]
    NoSequences,
    #[error("fast_fraction must be within (0, 1), got {0}")]
    FastFractionOutOfRange(f32),
    #[error("{name} must be within (0, 1], got {value}")]
    SmoothingOutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Tuning for the scroll-driven camera/object animation.
///
/// Progress ranges are fractions of the total scrollable distance. The
/// `Default` values reproduce the tower site's timeline.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    /// Camera distance when fully zoomed in (must be < `zoomed_out`).
    pub zoomed_in: f32,
    /// Camera distance at rest, before and after the animation.
    pub zoomed_out: f32,
    /// Progress band over which the camera eases in.
    pub zoom_in: (f32, f32),
    /// Progress band over which the camera eases back out.
    pub zoom_out: (f32, f32),

    /// Rotation cycles run between the two zoom bands.
    pub sequence_count: u32,
    /// Portion of each sequence spent in the fast rotation segment. The
    /// same fraction of the per-sequence rotation is covered in it.
    pub fast_fraction: f32,
    /// Radians turned per sequence.
    pub rotation_per_sequence: f32,
    /// Smoothing speed multipliers for the fast and slow segments.
    pub fast_speed: f32,
    pub slow_speed: f32,

    // Fraction of remaining distance closed per tick, per concern.
    pub zoom_speed: f32,
    pub base_rotation_speed: f32,
    pub base_position_speed: f32,

    /// Object resting height and total vertical travel over the scroll.
    pub initial_y: f32,
    pub vertical_range: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            zoomed_in: 8.0,
            zoomed_out: 20.0,
            zoom_in: (0.05, 0.1),
            zoom_out: (0.9, 0.95),
            sequence_count: 3,
            fast_fraction: 0.75,
            rotation_per_sequence: std::f32::consts::PI * 4.0,
            fast_speed: 4.0,
            slow_speed: 0.4,
            zoom_speed: 0.08,
            base_rotation_speed: 0.15,
            base_position_speed: 0.1,
            initial_y: crate::constants::OBJECT_INITIAL_Y,
            vertical_range: crate::constants::VERTICAL_RANGE,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("zoom_in", self.zoom_in)?;
        check_range("zoom_out", self.zoom_out)?;
        if self.zoom_out.0 < self.zoom_in.1 {
            return Err(ConfigError::OverlappingRanges {
                zoom_in_end: self.zoom_in.1,
                zoom_out_start: self.zoom_out.0,
            });
        }
        if self.zoomed_in >= self.zoomed_out {
            return Err(ConfigError::InvertedDistances {
                zoomed_in: self.zoomed_in,
                zoomed_out: self.zoomed_out,
            });
        }
        if self.sequence_count == 0 {
            return Err(ConfigError::NoSequences);
        }
        if !(self.fast_fraction > 0.0 && self.fast_fraction < 1.0) {
            return Err(ConfigError::FastFractionOutOfRange(self.fast_fraction));
        }
        check_smoothing("zoom_speed", self.zoom_speed)?;
        check_smoothing("base_rotation_speed", self.base_rotation_speed)?;
        check_smoothing("base_position_speed", self.base_position_speed)?;
        check_positive("rotation_per_sequence", self.rotation_per_sequence)?;
        check_positive("fast_speed", self.fast_speed)?;
        check_positive("slow_speed", self.slow_speed)?;
        Ok(())
    }
}

fn check_range(name: &'static str, (start, end): (f32, f32)) -> Result<(), ConfigError> {
    if start >= end {
        return Err(ConfigError::InvertedRange { name, start, end });
    }
    if start < 0.0 || end > 1.0 {
        return Err(ConfigError::RangeOutOfBounds { name, start, end });
    }
    Ok(())
}

fn check_smoothing(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::SmoothingOutOfRange { name, value })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
