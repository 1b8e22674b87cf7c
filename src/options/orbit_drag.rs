use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit / Drag", inline)]
#[serde(default)]
/// Orbit/drag motion parameters.
pub struct OrbitDragOptions {
    /// Look sensitivity in degrees per second per input unit.
    #[schemars(title = "Look Sensitivity", range(min = 1.0, max = 1024.0))]
    pub look_sensitivity: f32,
    /// Drag translation sensitivity in world units per second per input
    /// unit.
    #[schemars(title = "Drag Sensitivity", range(min = 1.0, max = 1024.0))]
    pub drag_sensitivity: f32,
    /// Dolly rate along local forward, world units per second per input
    /// unit.
    #[schemars(title = "Zoom Sensitivity", range(min = 1.0, max = 512.0))]
    pub zoom_sensitivity: f32,
    /// Top movement speed while looking, world units per second.
    #[schemars(title = "Max Move Speed", range(min = 0.1, max = 100.0))]
    pub max_speed: f32,
    /// Speed gain per second while move input is held.
    #[schemars(title = "Acceleration", range(min = 0.1, max = 200.0))]
    pub acceleration: f32,
    /// Speed loss per second after move input is released.
    #[schemars(title = "Deceleration", range(min = 0.1, max = 200.0))]
    pub deceleration: f32,
    /// Multiplier while the speed-modifier key is held (applies to
    /// acceleration and drag).
    #[schemars(title = "Speed Modifier", range(min = 1.0, max = 10.0))]
    pub speed_modifier_multiplier: f32,
}

impl Default for OrbitDragOptions {
    fn default() -> Self {
        Self {
            look_sensitivity: 256.0,
            drag_sensitivity: 256.0,
            zoom_sensitivity: 75.0,
            max_speed: 20.0,
            acceleration: 60.0,
            deceleration: 90.0,
            speed_modifier_multiplier: 2.0,
        }
    }
}

impl OrbitDragOptions {
    /// Clamp values into their valid ranges.
    pub fn sanitize(&mut self) {
        self.look_sensitivity = self.look_sensitivity.max(0.0);
        self.drag_sensitivity = self.drag_sensitivity.max(0.0);
        self.zoom_sensitivity = self.zoom_sensitivity.max(0.0);
        self.max_speed = self.max_speed.max(0.0);
        self.acceleration = self.acceleration.max(0.0);
        self.deceleration = self.deceleration.max(0.0);
        self.speed_modifier_multiplier =
            self.speed_modifier_multiplier.max(1.0);
    }
}
