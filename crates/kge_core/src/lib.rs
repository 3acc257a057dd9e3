//! KGE Core Boundary
//!
//! Everything the editor tools know about the engine.
//!
//! ## Contents
//!
//! - **Ids**: opaque handles for entities, materials and meshes
//! - **Types**: light types, material channels, render toggles
//! - **Snapshots**: full captures of an entity or material, used to recreate
//!   destroyed objects under their original id
//! - **Core traits**: the read/write surface an engine binding implements
//! - **MemoryCore**: an in-memory implementation with TOML documents

pub mod core;
pub mod error;
pub mod id;
pub mod memory;
pub mod snapshot;
pub mod types;

pub use crate::core::{CameraCore, EngineCore, EntityCore, LightCore, MaterialCore, SceneCore, ViewerCore};
pub use error::{CoreError, CoreResult};
pub use id::{EntityId, IdCounter, MaterialId, MeshId};
pub use memory::{MaterialFile, MemoryCore, SceneDocument, SceneHeader};
pub use snapshot::{
    CameraProps, EntityDetail, EntitySnapshot, LightProps, MaterialProps, MaterialSnapshot,
    MaterialTextures,
};
pub use types::{
    ControlMode, DetailMode, DisplayOption, EntityKind, LightAttrib, LightType, MaterialColor,
    MaterialFlag, MaterialScalar, TextureSlot, ViewerOption,
};
