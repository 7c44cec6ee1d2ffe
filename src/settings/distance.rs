//! Distance (zoom) settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Distance", inline)]
#[serde(default)]
/// Zoom distance parameters.
pub struct DistanceSettings {
    /// Physical key that zooms in (`KeyCode` debug format).
    #[schemars(skip)]
    pub zoom_in_key: String,
    /// Physical key that zooms out.
    #[schemars(skip)]
    pub zoom_out_key: String,
    /// Whether the scroll wheel zooms.
    #[schemars(title = "Scroll Zoom")]
    pub scroll: bool,
    /// Scroll zoom speed in world units per scroll line.
    #[schemars(title = "Scroll Speed", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub mouse_sensitivity: f32,
    /// Keyboard zoom speed multiplier.
    #[schemars(title = "Key Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub key_sensitivity: f32,
    /// Smoothing rate for the camera offset blend.
    #[schemars(title = "Smoothing", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub speed: f32,
    /// Closest allowed zoom distance in world units.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub min: f32,
    /// Live zoom distance; doubles as the initial distance.
    #[schemars(skip)]
    pub current: f32,
    /// Farthest allowed zoom distance in world units.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub max: f32,
}

impl Default for DistanceSettings {
    fn default() -> Self {
        Self {
            zoom_in_key: "KeyX".to_owned(),
            zoom_out_key: "KeyZ".to_owned(),
            scroll: true,
            mouse_sensitivity: 70.0,
            key_sensitivity: 10.0,
            speed: 40.0,
            min: 10.0,
            current: 35.0,
            max: 200.0,
        }
    }
}
