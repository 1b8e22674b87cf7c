use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::motion::clamp_fov;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free Flight", inline)]
#[serde(default)]
/// Free-flight motion parameters.
pub struct FreeFlightOptions {
    /// Pitch/yaw sensitivity in degrees per second per input unit.
    #[schemars(title = "Look Speed", range(min = 1.0, max = 512.0))]
    pub look_speed: f32,
    /// Extra multiplier applied to mouse look only (key look is
    /// unaffected).
    #[schemars(title = "Mouse Look Multiplier", range(min = 0.1, max = 4.0))]
    pub mouse_look_multiplier: f32,
    /// Roll sensitivity in degrees per second per input unit.
    #[schemars(title = "Roll Speed", range(min = 1.0, max = 180.0))]
    pub roll_speed: f32,
    /// FOV zoom rate in degrees per second per input unit.
    #[schemars(title = "Zoom Speed", range(min = 1.0, max = 180.0))]
    pub zoom_speed: f32,
    /// Exponential-approach rate for position/rotation/zoom smoothing.
    #[schemars(title = "Smoothing Speed", range(min = 0.1, max = 20.0))]
    pub smoothing_speed: f32,
    /// Whether smoothing starts enabled.
    #[schemars(title = "Smoothing")]
    pub smoothing: bool,
    /// Top flight speed in world units per second.
    #[schemars(title = "Max Speed", range(min = 0.1, max = 100.0))]
    pub max_speed: f32,
    /// Speed gain per second while move input is held.
    #[schemars(title = "Acceleration", range(min = 0.1, max = 200.0))]
    pub acceleration: f32,
    /// Speed loss per second after move input is released.
    #[schemars(title = "Deceleration", range(min = 0.1, max = 200.0))]
    pub deceleration: f32,
    /// Acceleration multiplier while the speed-modifier key is held.
    #[schemars(title = "Speed Modifier", range(min = 1.0, max = 10.0))]
    pub speed_modifier_multiplier: f32,
    /// Starting field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0))]
    pub fov: f32,
}

impl Default for FreeFlightOptions {
    fn default() -> Self {
        Self {
            look_speed: 128.0,
            mouse_look_multiplier: 1.0,
            roll_speed: 40.0,
            zoom_speed: 60.0,
            smoothing_speed: 1.5,
            smoothing: false,
            max_speed: 12.0,
            acceleration: 40.0,
            deceleration: 60.0,
            speed_modifier_multiplier: 2.0,
            fov: 77.0,
        }
    }
}

impl FreeFlightOptions {
    /// Clamp values into their valid ranges.
    pub fn sanitize(&mut self) {
        self.look_speed = self.look_speed.max(0.0);
        self.mouse_look_multiplier = self.mouse_look_multiplier.max(0.0);
        self.roll_speed = self.roll_speed.max(0.0);
        self.zoom_speed = self.zoom_speed.max(0.0);
        self.smoothing_speed = self.smoothing_speed.max(0.0);
        self.max_speed = self.max_speed.max(0.0);
        self.acceleration = self.acceleration.max(0.0);
        self.deceleration = self.deceleration.max(0.0);
        self.speed_modifier_multiplier =
            self.speed_modifier_multiplier.max(1.0);
        self.fov = clamp_fov(self.fov);
    }
}
