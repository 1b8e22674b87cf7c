//! Capability interfaces onto the embedding application.
//!
//! The rig never touches host internals directly; everything it overrides
//! while enabled goes through these traits so the suspend/restore
//! handshake stays symmetric and testable. A real host implements each
//! capability on whatever object owns that subsystem; tests implement
//! them on small fakes.

mod modal;

use glam::Vec3;
pub use modal::{LockFlags, ModalOverride, ModalStack};

/// Reference transform the rig snaps/resets to (typically the player
/// camera).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReferencePose {
    /// World-space position.
    pub position: Vec3,
    /// Orientation as Euler angles in degrees (pitch, yaw, roll).
    pub euler_deg: Vec3,
}

/// The host's own gameplay camera (and its listener).
pub trait HostCamera {
    /// Whether the host camera currently renders.
    fn is_enabled(&self) -> bool;
    /// Enable or disable the host camera.
    fn set_enabled(&mut self, enabled: bool);
    /// The host camera's render-layer mask.
    fn layer_mask(&self) -> i32;
}

/// The host's player entity.
pub trait HostPlayer {
    /// Current reference transform (position + orientation).
    fn reference_pose(&self) -> ReferencePose;
    /// Whether player movement is currently processed.
    fn movement_enabled(&self) -> bool;
    /// Enable or disable player movement processing.
    fn set_movement_enabled(&mut self, enabled: bool);
}

/// The host's UI canvas.
pub trait HostUi {
    /// Global UI opacity in [0, 1].
    fn opacity(&self) -> f32;
    /// Set the global UI opacity.
    fn set_opacity(&mut self, alpha: f32);
}

/// The host's simulation clock. Per-tick elapsed wall time is passed
/// into [`crate::rig::CameraRig::tick`] by the caller and is unaffected
/// by the scale set here, so rig motion stays responsive while the
/// simulation is frozen.
pub trait HostClock {
    /// Current global time scale (1.0 = realtime, 0.0 = frozen).
    fn time_scale(&self) -> f32;
    /// Set the global time scale.
    fn set_time_scale(&mut self, scale: f32);
}

/// The host's cursor. Grabbing confines and hides the cursor.
pub trait HostCursor {
    /// Grab or release the cursor.
    fn set_cursor_grabbed(&mut self, grabbed: bool);
}

/// The host's exclusive-control registry. The rig registers exactly one
/// named override while enabled. [`ModalStack`] is a ready-made
/// implementation hosts can embed.
pub trait HostModalStack {
    /// Register an override. Re-pushing the same name replaces it.
    fn push_override(&mut self, entry: ModalOverride);
    /// Remove the override with the given name, if present.
    fn pop_override(&mut self, name: &str);
}

/// Everything the rig needs from its environment, as one object.
///
/// Blanket-implemented for any type providing all six capabilities.
pub trait HostEnv:
    HostCamera + HostPlayer + HostUi + HostClock + HostCursor + HostModalStack
{
}

impl<T> HostEnv for T where
    T: HostCamera + HostPlayer + HostUi + HostClock + HostCursor + HostModalStack
{
}
