//! Centralized rig settings with TOML preset support.
//!
//! All tweakable parameters (movement, rotation, zoom distance) are
//! consolidated here. Settings serialize to/from TOML for control-scheme
//! presets; [`RigSettings::json_schema`] describes the UI-exposed fields
//! for host-side configuration panels.

mod distance;
mod movement;
mod rotation;

use std::path::Path;

pub use distance::DistanceSettings;
pub use movement::{EdgePanSettings, MovementSettings};
pub use rotation::RotationSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PerchError;
use crate::input::MouseButton;

/// Top-level settings container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rotation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigSettings {
    /// Ground-plane translation parameters.
    pub movement: MovementSettings,
    /// Orbit rotation parameters.
    pub rotation: RotationSettings,
    /// Zoom distance parameters.
    pub distance: DistanceSettings,
}

impl RigSettings {
    /// Generate JSON Schema describing the UI-exposed settings.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigSettings)
    }

    /// Load settings from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PerchError> {
        let content = std::fs::read_to_string(path).map_err(PerchError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PerchError::SettingsParse(e.to_string()))
    }

    /// Save settings to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PerchError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PerchError::SettingsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PerchError::Io)?;
        }
        std::fs::write(path, content).map_err(PerchError::Io)
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
}

// ── Mouse bindings ──

/// Mouse button a drag gesture is bound to, including a disabled sentinel.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseBinding {
    /// Gesture disabled.
    None,
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseBinding {
    /// The input-layer button this binding refers to, or `None` when the
    /// gesture is disabled.
    #[must_use]
    pub fn button(self) -> Option<MouseButton> {
        match self {
            Self::None => None,
            Self::Left => Some(MouseButton::Left),
            Self::Right => Some(MouseButton::Right),
            Self::Middle => Some(MouseButton::Middle),
        }
    }
}
