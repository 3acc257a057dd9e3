//! TOML files written and read by [`MemoryCore`](super::MemoryCore).

use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::EntityId;
use crate::snapshot::{EntitySnapshot, MaterialProps};

/// A saved scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDocument {
    pub scene: SceneHeader,
    #[serde(default)]
    pub entities: Vec<EntitySnapshot>,
}

/// Scene-wide settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneHeader {
    pub name: String,
    #[serde(default)]
    pub skybox: String,
    #[serde(default)]
    pub active_camera: Option<EntityId>,
}

/// A material exported on its own. The id is not stored; importing
/// always creates a new material.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialFile {
    pub name: String,
    pub material: MaterialProps,
}

pub(crate) fn read_toml<T: DeserializeOwned>(path: &Path) -> CoreResult<T> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CoreError::Parse(e.to_string()))
}

pub(crate) fn write_toml<T: Serialize>(value: &T, path: &Path) -> CoreResult<()> {
    let content = toml::to_string_pretty(value).map_err(|e| CoreError::Serialize(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}
