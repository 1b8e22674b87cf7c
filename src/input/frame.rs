use glam::{Vec2, Vec3};

/// Scale applied to the zoom *keys* so they stay comparable to one
/// scroll-wheel notch per tick.
pub(crate) const KEY_ZOOM_STEP: f32 = 0.15;

/// Edge-triggered toggles, true only on the tick their key went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeTriggers {
    /// Master enable/disable for the whole rig.
    pub toggle_rig: bool,
    /// Switch between free-flight and orbit/drag.
    pub switch_mode: bool,
    /// Snap the camera back to the host reference position.
    pub reset_position: bool,
    /// Zero the accumulated rotation.
    pub reset_rotation: bool,
    /// Flip free-flight smoothing.
    pub toggle_smoothing: bool,
    /// Flip the rig light.
    pub toggle_light: bool,
    /// Flip the help-overlay visibility.
    pub toggle_overlay: bool,
}

/// Level-triggered holds, true while their key is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldInputs {
    /// Speed-modifier multiplier is in effect.
    pub speed_modifier: bool,
    /// Orbit/drag look gesture.
    pub look: bool,
    /// Orbit/drag drag gesture.
    pub drag: bool,
}

/// Immutable per-tick input snapshot. Created fresh each tick by the
/// [`InputSampler`](super::InputSampler); never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Movement axes, each component in [-1, 1]
    /// (x = right, y = up, z = forward).
    pub move_axis: Vec3,
    /// Mouse-look input (+x = look right, +y = look down).
    pub mouse_look: Vec2,
    /// Key-look axes in {-1, 0, 1} (x = yaw, y = pitch, same signs as
    /// `mouse_look`).
    pub key_look: Vec2,
    /// Roll axis in {-1, 0, 1} (+ = roll left).
    pub roll: f32,
    /// Raw scroll-wheel delta (+ = scroll up).
    pub scroll: f32,
    /// Zoom-key axis in {-1, 0, 1} (+ = zoom in).
    pub key_zoom: f32,
    /// Edge-triggered toggles.
    pub pressed: EdgeTriggers,
    /// Level-triggered holds.
    pub held: HeldInputs,
}

impl InputFrame {
    /// Zoom input for the free-flight FOV zoom. Scrolling up narrows the
    /// FOV, so scroll enters negated.
    #[must_use]
    pub fn fov_zoom(&self) -> f32 {
        -self.scroll + self.key_zoom * KEY_ZOOM_STEP
    }

    /// Zoom input for the orbit/drag dolly. Scrolling up moves forward.
    #[must_use]
    pub fn dolly_zoom(&self) -> f32 {
        self.scroll + self.key_zoom * KEY_ZOOM_STEP
    }
}
