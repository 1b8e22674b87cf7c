use glam::{Quat, Vec3};

/// Position and orientation, without projection state.
///
/// Convention: Y up, local forward is `rotation * Vec3::Z`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

/// The live rig camera state read by the render boundary. Mutated once
/// per tick by the active motion model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl CameraPose {
    /// Create a camera pose at the origin with the given FOV.
    #[must_use]
    pub fn with_fov(fov: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov,
        }
    }

    /// Position + rotation without the projection state.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            rotation: self.rotation,
        }
    }

    /// Local forward axis.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Local right axis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local up axis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}
