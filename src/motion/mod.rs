//! Camera motion models.
//!
//! Two mutually exclusive models drive the rig camera:
//! [`FreeFlight`] eases the camera toward a decoupled target pose
//! (6-DOF flight with momentum and optional smoothing), [`OrbitDrag`]
//! moves the camera directly via held look/drag/dolly gestures. Both
//! mutate the single [`CameraPose`] owned by the rig, so switching
//! modes never teleports the camera.

mod free_flight;
mod orbit_drag;
mod pose;

pub use free_flight::FreeFlight;
pub use orbit_drag::OrbitDrag;
pub use pose::{CameraPose, Pose};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lower FOV clamp bound in degrees.
pub const MIN_FOV: f32 = 1e-5;
/// Upper FOV clamp bound in degrees.
pub const MAX_FOV: f32 = 179.0;

/// Clamp a field of view into the valid range. Applied unconditionally
/// wherever an FOV is written; violating the range is a correctness
/// bug, not a reportable error.
#[inline]
#[must_use]
pub fn clamp_fov(fov_deg: f32) -> f32 {
    fov_deg.clamp(MIN_FOV, MAX_FOV)
}

/// Which motion model drives the camera while the rig is enabled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Target-chasing 6-DOF flight.
    FreeFlight,
    /// Direct look/drag/dolly control.
    OrbitDrag,
}

impl MotionMode {
    /// The other mode (mode-switch toggle).
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::FreeFlight => Self::OrbitDrag,
            Self::OrbitDrag => Self::FreeFlight,
        }
    }
}
