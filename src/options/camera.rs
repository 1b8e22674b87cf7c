use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Rig camera projection parameters.
pub struct CameraOptions {
    /// Near clipping plane distance.
    #[schemars(title = "Near Clip", range(min = 0.001, max = 10.0))]
    pub near_clip: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Clip", range(min = 10.0, max = 100_000.0))]
    pub far_clip: f32,
    /// Render-layer mask (-1 renders everything).
    #[schemars(skip)]
    pub layer_mask: i32,
    /// Copy the host camera's layer mask on enable instead of using
    /// `layer_mask`.
    #[schemars(title = "Copy Host Layer Mask")]
    pub copy_host_layer_mask: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            near_clip: 0.01,
            far_clip: 1000.0,
            layer_mask: -1,
            copy_host_layer_mask: true,
        }
    }
}

impl CameraOptions {
    /// Clamp values into their valid ranges.
    pub fn sanitize(&mut self) {
        self.near_clip = self.near_clip.max(1e-3);
        self.far_clip = self.far_clip.max(self.near_clip * 2.0);
        self.layer_mask = self.layer_mask.max(-1);
    }
}
