//! Errors reported by an engine core.

use thiserror::Error;

use crate::id::{EntityId, MaterialId, MeshId};
use crate::types::EntityKind;

/// Core result alias.
pub type CoreResult<T> = Result<T, CoreError>;

/// Failures surfaced across the core boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity id is not live in the current document
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),
    /// Material id is not live in the current model
    #[error("material not found: {0}")]
    MaterialNotFound(MaterialId),
    /// Mesh id is not part of the current model
    #[error("mesh not found: {0}")]
    MeshNotFound(MeshId),
    /// Kind-specific property accessed on the wrong kind of entity
    #[error("{id} is a {found:?}, expected a {expected:?}")]
    WrongEntityKind {
        id: EntityId,
        expected: EntityKind,
        found: EntityKind,
    },
    /// Restoring an entity whose id is still live
    #[error("entity already exists: {0}")]
    DuplicateEntity(EntityId),
    /// Removing a material a mesh still refers to
    #[error("{material} is still assigned to {mesh}")]
    MaterialInUse { material: MaterialId, mesh: MeshId },
    /// Restoring a material whose id is still live
    #[error("material already exists: {0}")]
    DuplicateMaterial(MaterialId),
    /// Frame index outside the loaded animation
    #[error("frame {frame} out of range (0..{num_frames})")]
    FrameOutOfRange { frame: f32, num_frames: u32 },
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed document or material file
    #[error("parse error: {0}")]
    Parse(String),
    /// Document or material could not be written
    #[error("serialize error: {0}")]
    Serialize(String),
}
