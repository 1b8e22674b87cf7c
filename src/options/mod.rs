//! Centralized rig options with TOML preset support.
//!
//! All tweakable settings (motion speeds and sensitivities, camera
//! projection, light, rig lifecycle policy) are consolidated here.
//! Options serialize to/from TOML for presets; out-of-range values are
//! clamped at load time so the tick path never has to validate.

mod camera;
mod free_flight;
mod light;
mod orbit_drag;
mod rig;

use std::path::Path;

pub use camera::CameraOptions;
pub use free_flight::FreeFlightOptions;
pub use light::LightOptions;
pub use orbit_drag::OrbitDragOptions;
pub use rig::RigOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[free_flight]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Free-flight motion parameters.
    pub free_flight: FreeFlightOptions,
    /// Orbit/drag motion parameters.
    pub orbit_drag: OrbitDragOptions,
    /// Rig camera projection parameters.
    pub camera: CameraOptions,
    /// Rig light parameters.
    pub light: LightOptions,
    /// Rig lifecycle policy.
    pub rig: RigOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults;
    /// out-of-range values are clamped.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        opts.sanitize();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Clamp every configured value into its valid range. Called on
    /// load; callers mutating options at runtime should call it again.
    pub fn sanitize(&mut self) {
        self.free_flight.sanitize();
        self.orbit_drag.sanitize();
        self.camera.sanitize();
        self.light.sanitize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionMode, MAX_FOV};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[free_flight]
max_speed = 30.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.free_flight.max_speed, 30.0);
        // Everything else should be default
        assert_eq!(opts.free_flight.look_speed, 128.0);
        assert_eq!(opts.orbit_drag.look_sensitivity, 256.0);
        assert!(opts.rig.freeze_time);
        assert_eq!(opts.rig.initial_mode, MotionMode::FreeFlight);
    }

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let mut opts = Options::default();
        opts.free_flight.fov = 500.0;
        opts.free_flight.max_speed = -3.0;
        opts.free_flight.smoothing_speed = -1.0;
        opts.orbit_drag.drag_sensitivity = -256.0;
        opts.camera.near_clip = -0.5;
        opts.light.intensity = -2.0;

        opts.sanitize();

        assert_eq!(opts.free_flight.fov, MAX_FOV);
        assert_eq!(opts.free_flight.max_speed, 0.0);
        assert_eq!(opts.free_flight.smoothing_speed, 0.0);
        assert_eq!(opts.orbit_drag.drag_sensitivity, 0.0);
        assert!(opts.camera.near_clip > 0.0);
        assert_eq!(opts.light.intensity, 0.0);
    }

    #[test]
    fn far_clip_stays_beyond_near_clip() {
        let mut opts = Options::default();
        opts.camera.near_clip = 10.0;
        opts.camera.far_clip = 5.0;
        opts.sanitize();
        assert!(opts.camera.far_clip > opts.camera.near_clip);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("free_flight"));
        assert!(props.contains_key("orbit_drag"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("light"));
        assert!(props.contains_key("rig"));

        let free = &props["free_flight"]["properties"];
        assert!(free.get("max_speed").is_some());
        assert!(free.get("smoothing_speed").is_some());
    }
}
