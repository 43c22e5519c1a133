// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sandbox settings, read from a RON file.

use std::fs;
use std::path::{Path, PathBuf};

use lumen_core::camera::Frustum;
use lumen_core::CameraSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commands::Command;

/// Errors raised while loading [`SandboxSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Parse(String),

    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    #[error("No command is bound to key '{0}'")]
    UnknownKey(char),
}

/// A framebuffer size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Everything the sandbox run needs.
///
/// Fields missing from the file keep their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxSettings {
    pub camera: CameraSettings,
    /// When set, the viewport's width over height replaces `camera.aspect_ratio`.
    pub viewport: Option<Viewport>,
    /// Volume used by [`Command::AsymmetricPerspective`].
    pub asymmetric_frustum: Frustum,
    /// Volume used by [`Command::Orthographic`].
    pub orthographic_frustum: Frustum,
    /// Key presses replayed first, one frame each. Whitespace is skipped.
    pub keys: String,
    /// Commands replayed after `keys`, one frame each.
    pub script: Vec<Command>,
}

impl Default for SandboxSettings {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            viewport: None,
            asymmetric_frustum: Frustum::new(-4.0, 6.0, -6.0, 5.0, 2.0, 20.0),
            orthographic_frustum: Frustum::new(-4.0, 6.0, -6.0, 5.0, 2.0, 30.0),
            keys: "ddww=jjj".to_owned(),
            script: vec![
                Command::MouseLook { dx: 40.0, dy: 0.0 },
                Command::Zoom(-10.0),
                Command::Orthographic,
                Command::ResetPose,
                Command::SymmetricPerspective,
            ],
        }
    }
}

impl SandboxSettings {
    /// Parses settings from RON text.
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        ron::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Reads and parses a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Serializes the settings as pretty-printed RON.
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty_config)
            .map_err(|e| SettingsError::Serialize(e.to_string()))
    }

    /// The camera settings with the aspect ratio taken from the viewport, if one is set.
    ///
    /// A viewport with zero height is ignored.
    pub fn camera_settings(&self) -> CameraSettings {
        let mut camera = self.camera;
        match self.viewport {
            Some(Viewport { width, height }) if height > 0 => {
                camera.aspect_ratio = width as f32 / height as f32;
            }
            Some(viewport) => log::warn!("Ignoring viewport {:?} with zero height", viewport),
            None => {}
        }
        camera
    }

    /// The full replay: the bound keys followed by the script.
    pub fn commands(&self) -> Result<Vec<Command>, SettingsError> {
        let mut commands = self
            .keys
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|key| Command::from_key(key).ok_or(SettingsError::UnknownKey(key)))
            .collect::<Result<Vec<_>, _>>()?;
        commands.extend_from_slice(&self.script);
        Ok(commands)
    }
}
