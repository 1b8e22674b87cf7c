//! Scalar and rotation math shared by the motion models.

use glam::{EulerRot, Quat, Vec3};

/// Move `current` toward `target` by at most `max_delta`, never
/// overshooting. `max_delta` is treated as non-negative.
#[inline]
#[must_use]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolation factor for an exponential approach at `rate` per
/// second over `dt` seconds, clamped to [0, 1] so large frame times
/// never overshoot the target.
#[inline]
#[must_use]
pub fn smooth_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Compose Euler angles in degrees (pitch, yaw, roll) into a rotation.
///
/// Applies yaw, then pitch, then roll (YXZ order), matching the
/// convention of game-engine Euler accumulators. Plain composition,
/// no gimbal correction.
#[inline]
#[must_use]
pub fn euler_deg_to_quat(euler_deg: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler_deg.y.to_radians(),
        euler_deg.x.to_radians(),
        euler_deg.z.to_radians(),
    )
}

/// Decompose a rotation back into Euler degrees (pitch, yaw, roll) in
/// the same YXZ order as [`euler_deg_to_quat`].
#[inline]
#[must_use]
pub fn quat_to_euler_deg(rotation: Quat) -> Vec3 {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
}
