use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::motion::MotionMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rig", inline)]
#[serde(default)]
/// Rig lifecycle policy.
pub struct RigOptions {
    /// Freeze simulation time while the rig is enabled.
    #[schemars(title = "Freeze Time")]
    pub freeze_time: bool,
    /// Snap the rig to the host reference pose when a motion mode
    /// activates.
    #[schemars(title = "Snap To Reference On Enable")]
    pub snap_to_reference: bool,
    /// Motion mode selected when the rig is first enabled.
    #[schemars(title = "Initial Mode")]
    pub initial_mode: MotionMode,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            freeze_time: true,
            snap_to_reference: true,
            initial_mode: MotionMode::FreeFlight,
        }
    }
}
