//! Shared command types: codes, results and the captured-value slot.

use kge_core::{CoreError, CoreResult, EngineCore, EntityId, MaterialId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for command execution.
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while executing or revoking a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The core rejected a read or write
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    /// Revoke called on a command that has not been executed
    #[error("'{0}' revoked before it was executed")]
    NotExecuted(&'static str),
}

/// Object created by a command, returned so the caller can select it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Created {
    Entity(EntityId),
    Material(MaterialId),
}

impl Created {
    pub fn entity(self) -> Option<EntityId> {
        match self {
            Created::Entity(id) => Some(id),
            Created::Material(_) => None,
        }
    }

    pub fn material(self) -> Option<MaterialId> {
        match self {
            Created::Material(id) => Some(id),
            Created::Entity(_) => None,
        }
    }
}

/// Stable identifying code of a command kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandCode {
    // Scene
    SetSceneName,
    SetSkyboxName,
    SetControlMode,
    SetActiveCamera,
    SetDisplayOption,

    // Entity
    AddModel,
    AddLight,
    AddCamera,
    RemoveEntity,
    ClearEntities,
    SelectEntity,
    SetEntityName,
    SetEntityVisible,
    SetEntityTranslation,
    SetEntityRotation,
    SetEntityScale,

    // Light
    SetLightEnabled,
    SetLightAttrib,
    SetLightColor,
    SetLightFalloff,
    SetLightInnerAngle,
    SetLightOuterAngle,
    SetLightProjectiveTexture,

    // Camera
    SetCameraLookAt,
    SetCameraUpVec,
    SetCameraFov,
    SetCameraAspect,
    SetCameraNearPlane,
    SetCameraFarPlane,

    // Material
    SelectMesh,
    SetMaterialColor,
    SetMaterialScalar,
    SetMaterialFlag,
    SetTexture,
    SetDetailMode,
    AssignMaterial,
    CopyMaterial,
    ImportMaterial,

    // Viewer
    SetCurrentFrame,
    SetViewerOption,
}

/// A new value plus the value it replaced.
///
/// `previous` is filled by the first successful execute and refreshed on
/// every redo. Nothing else writes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Edit<T> {
    pub value: T,
    previous: Option<T>,
}

impl<T: Clone> Edit<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            previous: None,
        }
    }

    /// Value captured by the last execute.
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    pub fn is_executed(&self) -> bool {
        self.previous.is_some()
    }

    /// Read the current value, then write the new one.
    pub(crate) fn apply(
        &mut self,
        core: &mut dyn EngineCore,
        get: impl FnOnce(&dyn EngineCore) -> CoreResult<T>,
        set: impl FnOnce(&mut dyn EngineCore, T) -> CoreResult<()>,
    ) -> CommandResult<()> {
        let previous = get(&*core)?;
        set(core, self.value.clone())?;
        self.previous = Some(previous);
        Ok(())
    }

    /// Write the captured value back.
    pub(crate) fn revert(
        &self,
        name: &'static str,
        core: &mut dyn EngineCore,
        set: impl FnOnce(&mut dyn EngineCore, T) -> CoreResult<()>,
    ) -> CommandResult<()> {
        let previous = self.previous.clone().ok_or(CommandError::NotExecuted(name))?;
        set(core, previous)?;
        Ok(())
    }
}
