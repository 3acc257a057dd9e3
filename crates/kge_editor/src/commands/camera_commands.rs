//! Camera attributes.

use glam::Vec3;
use kge_core::{EngineCore, EntityId};

use super::command::{CommandCode, CommandResult, Created, Edit};

#[derive(Clone, Debug, PartialEq)]
pub enum CameraCommand {
    SetLookAt { id: EntityId, edit: Edit<Vec3> },
    SetUpVec { id: EntityId, edit: Edit<Vec3> },
    SetFov { id: EntityId, edit: Edit<f32> },
    SetAspect { id: EntityId, edit: Edit<f32> },
    SetNearPlane { id: EntityId, edit: Edit<f32> },
    SetFarPlane { id: EntityId, edit: Edit<f32> },
}

impl CameraCommand {
    pub fn set_look_at(id: EntityId, look_at: Vec3) -> Self {
        Self::SetLookAt { id, edit: Edit::new(look_at) }
    }

    pub fn set_up_vec(id: EntityId, up: Vec3) -> Self {
        Self::SetUpVec { id, edit: Edit::new(up) }
    }

    pub fn set_fov(id: EntityId, fov: f32) -> Self {
        Self::SetFov { id, edit: Edit::new(fov) }
    }

    pub fn set_aspect(id: EntityId, aspect: f32) -> Self {
        Self::SetAspect { id, edit: Edit::new(aspect) }
    }

    pub fn set_near_plane(id: EntityId, near: f32) -> Self {
        Self::SetNearPlane { id, edit: Edit::new(near) }
    }

    pub fn set_far_plane(id: EntityId, far: f32) -> Self {
        Self::SetFarPlane { id, edit: Edit::new(far) }
    }

    pub fn target(&self) -> EntityId {
        match self {
            Self::SetLookAt { id, .. }
            | Self::SetUpVec { id, .. }
            | Self::SetFov { id, .. }
            | Self::SetAspect { id, .. }
            | Self::SetNearPlane { id, .. }
            | Self::SetFarPlane { id, .. } => *id,
        }
    }

    pub fn code(&self) -> CommandCode {
        match self {
            Self::SetLookAt { .. } => CommandCode::SetCameraLookAt,
            Self::SetUpVec { .. } => CommandCode::SetCameraUpVec,
            Self::SetFov { .. } => CommandCode::SetCameraFov,
            Self::SetAspect { .. } => CommandCode::SetCameraAspect,
            Self::SetNearPlane { .. } => CommandCode::SetCameraNearPlane,
            Self::SetFarPlane { .. } => CommandCode::SetCameraFarPlane,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SetLookAt { .. } => "Set camera look at",
            Self::SetUpVec { .. } => "Set camera up vec",
            Self::SetFov { .. } => "Set camera fov",
            Self::SetAspect { .. } => "Set camera aspect",
            Self::SetNearPlane { .. } => "Set camera near plane",
            Self::SetFarPlane { .. } => "Set camera far plane",
        }
    }

    pub fn execute(&mut self, core: &mut dyn EngineCore) -> CommandResult<Option<Created>> {
        let id = self.target();
        match self {
            Self::SetLookAt { edit, .. } => edit.apply(
                core,
                |c| c.camera_look_at(id),
                |c, v| c.set_camera_look_at(id, v),
            )?,
            Self::SetUpVec { edit, .. } => edit.apply(
                core,
                |c| c.camera_up_vec(id),
                |c, v| c.set_camera_up_vec(id, v),
            )?,
            Self::SetFov { edit, .. } => {
                edit.apply(core, |c| c.camera_fov(id), |c, v| c.set_camera_fov(id, v))?
            }
            Self::SetAspect { edit, .. } => edit.apply(
                core,
                |c| c.camera_aspect(id),
                |c, v| c.set_camera_aspect(id, v),
            )?,
            Self::SetNearPlane { edit, .. } => edit.apply(
                core,
                |c| c.camera_near_plane(id),
                |c, v| c.set_camera_near_plane(id, v),
            )?,
            Self::SetFarPlane { edit, .. } => edit.apply(
                core,
                |c| c.camera_far_plane(id),
                |c, v| c.set_camera_far_plane(id, v),
            )?,
        }
        Ok(None)
    }

    pub fn revoke(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        let id = self.target();
        let name = self.name();
        match self {
            Self::SetLookAt { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_camera_look_at(id, v))
            }
            Self::SetUpVec { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_camera_up_vec(id, v))
            }
            Self::SetFov { edit, .. } => edit.revert(name, core, |c, v| c.set_camera_fov(id, v)),
            Self::SetAspect { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_camera_aspect(id, v))
            }
            Self::SetNearPlane { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_camera_near_plane(id, v))
            }
            Self::SetFarPlane { edit, .. } => {
                edit.revert(name, core, |c, v| c.set_camera_far_plane(id, v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kge_core::{CameraCore, EntityCore, MemoryCore};

    #[test]
    fn test_fov_round_trip() {
        let mut core = MemoryCore::new();
        let id = core.add_camera("Camera0").unwrap();
        let before = core.camera_fov(id).unwrap();

        let mut cmd = CameraCommand::set_fov(id, 1.0);
        cmd.execute(&mut core).unwrap();
        assert_eq!(core.camera_fov(id).unwrap(), 1.0);

        cmd.revoke(&mut core).unwrap();
        assert_eq!(core.camera_fov(id).unwrap(), before);
    }

    #[test]
    fn test_up_vec_names() {
        let cmd = CameraCommand::set_up_vec(EntityId(1), Vec3::Z);
        assert_eq!(cmd.name(), "Set camera up vec");
        assert_eq!(cmd.code(), CommandCode::SetCameraUpVec);
    }
}
