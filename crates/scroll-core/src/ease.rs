//! Easing and per-frame interpolation primitives.

/// Linear interpolation from `a` to `b` by `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-in/out over `t` in \[0, 1\].
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-in/out over `t` in \[0, 1\].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Close a fraction of the remaining distance toward `target`.
///
/// The fraction is clamped to \[0, 1\], so an oversized speed multiplier
/// snaps to the target instead of overshooting. Repeated application with
/// a fixed target converges asymptotically; applying it at the target is
/// the identity.
#[inline]
pub fn approach(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction.clamp(0.0, 1.0)
}
