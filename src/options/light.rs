use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Light", inline)]
#[serde(default)]
/// Parameters for the directional light attached to the rig.
pub struct LightOptions {
    /// Light intensity (non-negative).
    #[schemars(title = "Intensity", range(min = 0.0, max = 10.0))]
    pub intensity: f32,
    /// Light color as linear RGB.
    #[schemars(title = "Color")]
    pub color: [f32; 3],
    /// Light culling-layer mask (-1 lights everything).
    #[schemars(skip)]
    pub layer_mask: i32,
}

impl Default for LightOptions {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            color: [1.0, 1.0, 1.0],
            layer_mask: -1,
        }
    }
}

impl LightOptions {
    /// Clamp values into their valid ranges.
    pub fn sanitize(&mut self) {
        self.intensity = self.intensity.max(0.0);
        for c in &mut self.color {
            *c = c.clamp(0.0, 1.0);
        }
        self.layer_mask = self.layer_mask.max(-1);
    }
}
