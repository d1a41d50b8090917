//! Scroll phase classification and the camera side of the animation.

use glam::{Mat4, Vec3};

use crate::config::AnimationConfig;
use crate::constants::{camera_fov_radians, CAMERA_HEIGHT, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::ease::{ease_in_out_cubic, lerp};

/// Scroll phase derived from progress against the configured zoom bands.
/// Recomputed on every evaluation; carries no state of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the zoom-in band or past the zoom-out band.
    Idle,
    ZoomIn,
    /// Held fully zoomed while the object rotates.
    Steady,
    ZoomOut,
}

impl Phase {
    pub fn classify(progress: f32, config: &AnimationConfig) -> Phase {
        let (zi_start, zi_end) = config.zoom_in;
        let (zo_start, zo_end) = config.zoom_out;
        if progress >= zi_start && progress <= zi_end {
            Phase::ZoomIn
        } else if progress > zi_end && progress < zo_start {
            Phase::Steady
        } else if progress >= zo_start && progress <= zo_end {
            Phase::ZoomOut
        } else {
            Phase::Idle
        }
    }
}

/// Camera distance target for a given scroll progress.
///
/// Eases (cubic in/out) from `zoomed_out` to `zoomed_in` across the
/// zoom-in band, holds `zoomed_in` through the main band, eases back out
/// across the zoom-out band, and rests at `zoomed_out` everywhere else.
/// Exact at every band boundary, continuous everywhere.
pub fn distance_target(progress: f32, config: &AnimationConfig) -> f32 {
    match Phase::classify(progress, config) {
        Phase::ZoomIn => {
            let (start, end) = config.zoom_in;
            let t = (progress - start) / (end - start);
            lerp(config.zoomed_out, config.zoomed_in, ease_in_out_cubic(t))
        }
        Phase::Steady => config.zoomed_in,
        Phase::ZoomOut => {
            let (start, end) = config.zoom_out;
            let t = (progress - start) / (end - start);
            lerp(config.zoomed_in, config.zoomed_out, ease_in_out_cubic(t))
        }
        Phase::Idle => config.zoomed_out,
    }
}

/// Simple right-handed camera description with perspective projection.
///
/// Hosts place one of these from the smoothed scalar distance each frame;
/// the mapping itself never renders anything.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `distance` on the +Z axis, slightly raised, looking at
    /// the scene origin.
    pub fn at_distance(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, CAMERA_HEIGHT, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: camera_fov_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
