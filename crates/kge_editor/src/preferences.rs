//! Editor preferences.
//!
//! Persistent settings that survive editor restarts, stored as TOML.

use std::path::{Path, PathBuf};

use kge_core::{CoreResult, DisplayOption, EngineCore, ViewerOption};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or saving preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no configuration directory on this platform")]
    NoConfigDir,
}

/// Viewport post-processing defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    pub ssvo: bool,
    pub hdr: bool,
    pub aa: bool,
    pub gamma: bool,
    pub color_grading: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            ssvo: true,
            hdr: true,
            aa: true,
            gamma: true,
            color_grading: true,
        }
    }
}

impl DisplayPreferences {
    pub fn get(&self, option: DisplayOption) -> bool {
        match option {
            DisplayOption::Ssvo => self.ssvo,
            DisplayOption::Hdr => self.hdr,
            DisplayOption::Aa => self.aa,
            DisplayOption::Gamma => self.gamma,
            DisplayOption::ColorGrading => self.color_grading,
        }
    }
}

/// Model viewer defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerPreferences {
    pub skinning: bool,
    pub smooth_mesh: bool,
    pub line_mode: bool,
    pub fps_camera: bool,
}

impl Default for ViewerPreferences {
    fn default() -> Self {
        Self {
            skinning: true,
            smooth_mesh: true,
            line_mode: false,
            fps_camera: false,
        }
    }
}

impl ViewerPreferences {
    pub fn get(&self, option: ViewerOption) -> bool {
        match option {
            ViewerOption::Skinning => self.skinning,
            ViewerOption::SmoothMesh => self.smooth_mesh,
            ViewerOption::LineMode => self.line_mode,
            ViewerOption::FpsCamera => self.fps_camera,
        }
    }
}

/// Editor preferences and settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    /// Maximum undo entries, unbounded if unset
    pub history_limit: Option<usize>,
    pub max_recent_files: usize,
    /// Skybox applied to new documents
    pub default_skybox: Option<String>,
    pub display: DisplayPreferences,
    pub viewer: ViewerPreferences,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            history_limit: None,
            max_recent_files: 10,
            default_skybox: None,
            display: DisplayPreferences::default(),
            viewer: ViewerPreferences::default(),
        }
    }
}

impl EditorPreferences {
    /// Load preferences from a file.
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let content = std::fs::read_to_string(path)?;
        let prefs = toml::from_str(&content)?;
        log::info!("Loaded preferences from {:?}", path);
        Ok(prefs)
    }

    /// Save preferences to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Saved preferences to {:?}", path);
        Ok(())
    }

    /// Get the default preferences path.
    pub fn default_path() -> Result<PathBuf, PreferencesError> {
        dirs::config_dir()
            .map(|mut p| {
                p.push("kge_editor");
                p.push("preferences.toml");
                p
            })
            .ok_or(PreferencesError::NoConfigDir)
    }

    /// Load from the default path, falling back to defaults.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{}, using default preferences", e);
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Failed to load preferences from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Push display and viewer defaults into a core.
    ///
    /// This bypasses the command history; it is meant for a freshly opened
    /// tool, before the user has done anything.
    pub fn apply_to(&self, core: &mut dyn EngineCore) -> CoreResult<()> {
        for &option in DisplayOption::all() {
            core.set_display_option(option, self.display.get(option))?;
        }
        for &option in ViewerOption::all() {
            core.set_viewer_option(option, self.viewer.get(option))?;
        }
        if let Some(skybox) = &self.default_skybox {
            core.set_skybox_name(skybox)?;
        }
        Ok(())
    }
}
