// Fixed scene tuning shared by both hosts.

// Secondary vertical motion
pub const WAVE_FREQUENCY: f32 = 1.5; // full sine periods over the scroll, times pi
pub const WAVE_AMPLITUDE: f32 = 0.2; // world units added on top of the ramp

// Object placement
pub const OBJECT_INITIAL_X: f32 = 0.3;
pub const OBJECT_INITIAL_Y: f32 = -2.0;
pub const OBJECT_SCALE: f32 = 0.003; // model units are millimetres
pub const VERTICAL_RANGE: f32 = 4.0; // total upward travel over the scroll

// Scroll timeline
pub const TOTAL_SCROLL_EXTENT: f32 = 15_000.0; // CSS pixels backing the default timeline

// Slide sub-phase boundaries within one slide window
pub const SLIDE_ENTRY_END: f32 = 0.2;
pub const SLIDE_EXIT_START: f32 = 0.8;

// Opacity floor for unfocused list items
pub const LIST_DIM_OPACITY: f32 = 0.2;

// Render gating
pub const MIN_SCROLL_DELTA_PX: f32 = 2.0;
pub const TARGET_FRAME_INTERVAL_SEC: f32 = 1.0 / 60.0;
pub const SETTLE_EPSILON: f32 = 0.01; // smoothed values this close to target count as settled

// Camera placement used by hosts when building a full camera
pub const CAMERA_HEIGHT: f32 = 1.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

#[inline]
pub fn camera_fov_radians() -> f32 {
    CAMERA_FOV_DEGREES.to_radians()
}
