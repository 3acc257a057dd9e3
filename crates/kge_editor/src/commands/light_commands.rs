//! Light attributes.

use glam::Vec3;
use kge_core::{EngineCore, EntityId, LightAttrib};

use super::command::{CommandCode, CommandResult, Created, Edit};

#[derive(Clone, Debug, PartialEq)]
pub enum LightCommand {
    SetEnabled { id: EntityId, edit: Edit<bool> },
    SetAttrib { id: EntityId, edit: Edit<LightAttrib> },
    /// Linear RGB
    SetColor { id: EntityId, edit: Edit<Vec3> },
    SetFalloff { id: EntityId, edit: Edit<Vec3> },
    /// Radians
    SetInnerAngle { id: EntityId, edit: Edit<f32> },
    /// Radians
    SetOuterAngle { id: EntityId, edit: Edit<f32> },
    SetProjectiveTexture { id: EntityId, edit: Edit<String> },
}

impl LightCommand {
    pub fn set_enabled(id: EntityId, enabled: bool) -> Self {
        Self::SetEnabled { id, edit: Edit::new(enabled) }
    }

    pub fn set_attrib(id: EntityId, attrib: LightAttrib) -> Self {
        Self::SetAttrib { id, edit: Edit::new(attrib) }
    }

    pub fn set_color(id: EntityId, color: Vec3) -> Self {
        Self::SetColor { id, edit: Edit::new(color) }
    }

    pub fn set_falloff(id: EntityId, falloff: Vec3) -> Self {
        Self::SetFalloff { id, edit: Edit::new(falloff) }
    }

    pub fn set_inner_angle(id: EntityId, angle: f32) -> Self {
        Self::SetInnerAngle { id, edit: Edit::new(angle) }
    }

    pub fn set_outer_angle(id: EntityId, angle: f32) -> Self {
        Self::SetOuterAngle { id, edit: Edit::new(angle) }
    }

    pub fn set_projective_texture(id: EntityId, name: impl Into<String>) -> Self {
        Self::SetProjectiveTexture { id, edit: Edit::new(name.into()) }
    }

    /// Light the command targets.
    pub fn target(&self) -> EntityId {
        match self {
            Self::SetEnabled { id, .. }
            | Self::SetAttrib { id, .. }
            | Self::SetColor { id, .. }
            | Self::SetFalloff { id, .. }
            | Self::SetInnerAngle { id, .. }
            | Self::SetOuterAngle { id, .. }
            | Self::SetProjectiveTexture { id, .. } => *id,
        }
    }

    pub fn code(&self) -> CommandCode {
        match self {
            Self::SetEnabled { .. } => CommandCode::SetLightEnabled,
            Self::SetAttrib { .. } => CommandCode::SetLightAttrib,
            Self::SetColor { .. } => CommandCode::SetLightColor,
            Self::SetFalloff { .. } => CommandCode::SetLightFalloff,
            Self::SetInnerAngle { .. } => CommandCode::SetLightInnerAngle,
            Self::SetOuterAngle { .. } => CommandCode::SetLightOuterAngle,
            Self::SetProjectiveTexture { .. } => CommandCode::SetLightProjectiveTexture,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SetEnabled { .. } => "Set light enabled",
            Self::SetAttrib { .. } => "Set light attribute",
            Self::SetColor { .. } => "Set light color",
            Self::SetFalloff { .. } => "Set light falloff",
            Self::SetInnerAngle { .. } => "Set light inner angle",
            Self::SetOuterAngle { .. } => "Set light outer angle",
            Self::SetProjectiveTexture { .. } => "Set projective texture",
        }
    }

    pub fn execute(&mut self, core: &mut dyn EngineCore) -> CommandResult<Option<Created>> {
        let id = self.target();
        match self {
            Self::SetEnabled { edit, .. } => edit.apply(
                core,
                |c| c.light_enabled(id),
                |c, v| c.set_light_enabled(id, v),
            )?,
            Self::SetAttrib { edit, .. } => edit.apply(
                core,
                |c| c.light_attrib(id),
                |c, v| c.set_light_attrib(id, v),
            )?,
            Self::SetColor { edit, .. } => edit.apply(
                core,
                |c| c.light_color(id),
                |c, v| c.set_light_color(id, v),
            )?,
            Self::SetFalloff { edit, .. } => edit.apply(
                core,
                |c| c.light_falloff(id),
                |c, v| c.set_light_falloff(id, v),
            )?,
            Self::SetInnerAngle { edit, .. } => edit.apply(
                core,
                |c| c.light_inner_angle(id),
                |c, v| c.set_light_inner_angle(id, v),
            )?,
            Self::SetOuterAngle { edit, .. } => edit.apply(
                core,
                |c| c.light_outer_angle(id),
                |c, v| c.set_light_outer_angle(id, v),
            )?,
            Self::SetProjectiveTexture { edit, .. } => edit.apply(
                core,
                |c| c.light_projective_texture(id),
                |c, v| c.set_light_projective_texture(id, &v),
            )?,
        }
        Ok(None)
    }

    pub fn revoke(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        let id = self.target();
        let name = self.name();
        match self {
            Self::SetEnabled { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_light_enabled(id, v))
            }
            Self::SetAttrib { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_light_attrib(id, v))
            }
            Self::SetColor { edit, .. } => edit.revert(name, core, |c, v| c.set_light_color(id, v)),
            Self::SetFalloff { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_light_falloff(id, v))
            }
            Self::SetInnerAngle { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_light_inner_angle(id, v))
            }
            Self::SetOuterAngle { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_light_outer_angle(id, v))
            }
            Self::SetProjectiveTexture { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_light_projective_texture(id, &v))
            }
        }
    }
}
