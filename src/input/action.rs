use serde::{Deserialize, Serialize};

/// Logical rig inputs that can be bound to physical controls.
///
/// Serde serializes as `snake_case` strings so binding files stay
/// readable:
/// ```toml
/// [bindings]
/// toggle_rig = "F5"
/// reset_rotation = "F7"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum RigAction {
    // Translation
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    // Rotation
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    // Zoom
    ZoomIn,
    ZoomOut,
    // Level-triggered holds
    SpeedModifier,
    LookHold,
    DragHold,
    // Edge-triggered toggles
    ToggleRig,
    SwitchMode,
    ResetPosition,
    ResetRotation,
    ToggleSmoothing,
    ToggleLight,
    ToggleOverlay,
}

impl RigAction {
    /// Every logical action, for edge-tracking bookkeeping.
    pub const ALL: [Self; 24] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::PitchUp,
        Self::PitchDown,
        Self::YawLeft,
        Self::YawRight,
        Self::RollLeft,
        Self::RollRight,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::SpeedModifier,
        Self::LookHold,
        Self::DragHold,
        Self::ToggleRig,
        Self::SwitchMode,
        Self::ResetPosition,
        Self::ResetRotation,
        Self::ToggleSmoothing,
        Self::ToggleLight,
        Self::ToggleOverlay,
    ];
}
