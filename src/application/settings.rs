//! Functions for loading demo settings.

use std::fs;
use std::path::Path;

use crate::errors::*;

/// A structure containing configuration data for the engine, which are
/// used to specify hardware setup stuff to create the window and other
/// context information.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "window": { "title": "Camera", "size": [1280, 720] }, "engine": { "max_fps": 60 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineParams,
    pub window: WindowParams,
    /// Runs without a window and a GPU, commands go to the headless device.
    pub headless: bool,
}

impl Settings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads settings from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| Error::Io {
            path: path.display().to_string(),
            err,
        })?;

        Self::from_json(&json)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// If fps goes lower than this, time will appear to slow. Zero disables
    /// the clamp.
    pub min_fps: u32,
    /// The engine sleeps if fps is higher than this. Zero disables the cap.
    pub max_fps: u32,
    /// The color the frame is cleared with before `on_render`.
    pub clear_color: [f32; 4],
    /// Enables depth testing, and clears the depth buffer every frame.
    pub depth_test: bool,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            min_fps: 10,
            max_fps: 60,
            clear_color: [0.1, 0.1, 0.1, 1.0],
            depth_test: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: [u32; 2],
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u8,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "LearnOpenGL".to_owned(),
            size: [800, 600],
            multisample: 0,
            vsync: true,
        }
    }
}
