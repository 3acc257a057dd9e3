//! Document-wide scene settings.

use kge_core::{ControlMode, DisplayOption, EngineCore, EntityId};

use super::command::{CommandCode, CommandResult, Created, Edit};

#[derive(Clone, Debug, PartialEq)]
pub enum SceneCommand {
    SetName(Edit<String>),
    SetSkybox(Edit<String>),
    SetControlMode(Edit<ControlMode>),
    /// Switch the viewport camera. `None` returns to the free editor camera.
    SetActiveCamera(Edit<Option<EntityId>>),
    SetDisplayOption {
        option: DisplayOption,
        edit: Edit<bool>,
    },
}

impl SceneCommand {
    pub fn set_name(name: impl Into<String>) -> Self {
        Self::SetName(Edit::new(name.into()))
    }

    pub fn set_skybox(name: impl Into<String>) -> Self {
        Self::SetSkybox(Edit::new(name.into()))
    }

    pub fn set_control_mode(mode: ControlMode) -> Self {
        Self::SetControlMode(Edit::new(mode))
    }

    pub fn set_active_camera(camera: Option<EntityId>) -> Self {
        Self::SetActiveCamera(Edit::new(camera))
    }

    pub fn set_display_option(option: DisplayOption, on: bool) -> Self {
        Self::SetDisplayOption {
            option,
            edit: Edit::new(on),
        }
    }

    pub fn code(&self) -> CommandCode {
        match self {
            Self::SetName(_) => CommandCode::SetSceneName,
            Self::SetSkybox(_) => CommandCode::SetSkyboxName,
            Self::SetControlMode(_) => CommandCode::SetControlMode,
            Self::SetActiveCamera(_) => CommandCode::SetActiveCamera,
            Self::SetDisplayOption { .. } => CommandCode::SetDisplayOption,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SetName(_) => "Set scene name",
            Self::SetSkybox(_) => "Set skybox name",
            Self::SetControlMode(_) => "Set control mode",
            Self::SetActiveCamera(_) => "Switch camera",
            Self::SetDisplayOption { option, .. } => match option {
                DisplayOption::Ssvo => "Set SSVO",
                DisplayOption::Hdr => "Set HDR",
                DisplayOption::Aa => "Set AA",
                DisplayOption::Gamma => "Set gamma",
                DisplayOption::ColorGrading => "Set color grading",
            },
        }
    }

    pub fn execute(&mut self, core: &mut dyn EngineCore) -> CommandResult<Option<Created>> {
        match self {
            Self::SetName(edit) => {
                edit.apply(core, |c| c.scene_name(), |c, v| c.set_scene_name(&v))?
            }
            Self::SetSkybox(edit) => {
                edit.apply(core, |c| c.skybox_name(), |c, v| c.set_skybox_name(&v))?
            }
            Self::SetControlMode(edit) => {
                edit.apply(core, |c| c.control_mode(), |c, v| c.set_control_mode(v))?
            }
            Self::SetActiveCamera(edit) => {
                edit.apply(core, |c| c.active_camera(), |c, v| c.set_active_camera(v))?
            }
            Self::SetDisplayOption { option, edit } => {
                let option = *option;
                edit.apply(
                    core,
                    |c| c.display_option(option),
                    |c, v| c.set_display_option(option, v),
                )?
            }
        }
        Ok(None)
    }

    pub fn revoke(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        let name = self.name();
        match self {
            Self::SetName(edit) => edit.revert(name, core, |c, v| c.set_scene_name(&v)),
            Self::SetSkybox(edit) => edit.revert(name, core, |c, v| c.set_skybox_name(&v)),
            Self::SetControlMode(edit) => edit.revert(name, core, |c, v| c.set_control_mode(v)),
            Self::SetActiveCamera(edit) => edit.revert(name, core, |c, v| c.set_active_camera(v)),
            Self::SetDisplayOption { option, edit } => {
                let option = *option;
                edit.revert(name, core, |c, v| c.set_display_option(option, v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kge_core::{EntityCore, MemoryCore, SceneCore};

    #[test]
    fn test_skybox_round_trip() {
        let mut core = MemoryCore::new();
        core.set_skybox_name("old.dds").unwrap();

        let mut cmd = SceneCommand::set_skybox("new.dds");
        assert_eq!(cmd.execute(&mut core).unwrap(), None);
        assert_eq!(core.skybox_name().unwrap(), "new.dds");

        cmd.revoke(&mut core).unwrap();
        assert_eq!(core.skybox_name().unwrap(), "old.dds");
    }

    #[test]
    fn test_switch_camera_back_to_free_camera() {
        let mut core = MemoryCore::new();
        let camera = core.add_camera("Camera0").unwrap();

        let mut cmd = SceneCommand::set_active_camera(Some(camera));
        cmd.execute(&mut core).unwrap();
        assert_eq!(core.active_camera().unwrap(), Some(camera));

        cmd.revoke(&mut core).unwrap();
        assert_eq!(core.active_camera().unwrap(), None);
    }

    #[test]
    fn test_display_option_names() {
        assert_eq!(SceneCommand::set_display_option(DisplayOption::Hdr, false).name(), "Set HDR");
        assert_eq!(
            SceneCommand::set_display_option(DisplayOption::Gamma, false).code(),
            CommandCode::SetDisplayOption
        );
    }
}
