//! Persisted viewer state with TOML file support.
//!
//! Everything the viewer keeps between runs lives here: the camera
//! pose, the overlay and spotlight toggles, the scratch transform
//! sliders, and the key bindings. State serializes to/from a single
//! TOML file loaded at startup and written on exit.

mod pose;
mod scratch;

use std::path::Path;

pub use pose::CameraPose;
use schemars::JsonSchema;
pub use scratch::ScratchTransform;
use serde::{Deserialize, Serialize};

use crate::error::LagoonError;
use crate::input::KeyBindings;

/// Top-level persisted state. All fields use `#[serde(default)]`, so a
/// partial or missing file falls back to defaults field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ViewerState {
    /// Whether the debug overlay is visible. While the overlay is
    /// open, the cursor is released and mouse-look pauses.
    #[schemars(skip)]
    pub overlay_enabled: bool,
    /// Whether spotlights contribute to shading.
    #[schemars(title = "Spotlights")]
    pub spotlights_enabled: bool,
    /// Camera placement restored at startup.
    #[schemars(skip)]
    pub camera: CameraPose,
    /// Scratch transform slider values.
    pub scratch: ScratchTransform,
    /// Keyboard binding table.
    #[schemars(skip)]
    pub bindings: KeyBindings,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            overlay_enabled: true,
            spotlights_enabled: false,
            camera: CameraPose::default(),
            scratch: ScratchTransform::default(),
            bindings: KeyBindings::default(),
        }
    }
}

impl ViewerState {
    /// Generate JSON Schema describing the UI-exposed state fields.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ViewerState)
    }

    /// Load state from a TOML file. A missing file is a first run and
    /// yields defaults; missing fields within an existing file use
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LagoonError::Io`] when the file exists but cannot be
    /// read, and [`LagoonError::StateParse`] when it is not valid
    /// state TOML.
    pub fn load(path: &Path) -> Result<Self, LagoonError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "no viewer state at {}, starting from defaults",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(LagoonError::Io(e)),
        };
        toml::from_str(&content)
            .map_err(|e| LagoonError::StateParse(e.to_string()))
    }

    /// Save state to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`LagoonError::StateParse`] when serialization fails
    /// and [`LagoonError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LagoonError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LagoonError::StateParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LagoonError::Io)?;
        }
        std::fs::write(path, content).map_err(LagoonError::Io)
    }
}
