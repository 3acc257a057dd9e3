//! Animation playback and viewer toggles.

use kge_core::{EngineCore, ViewerOption};

use super::command::{CommandCode, CommandResult, Created, Edit};

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerCommand {
    SetCurrentFrame(Edit<f32>),
    SetOption {
        option: ViewerOption,
        edit: Edit<bool>,
    },
}

impl ViewerCommand {
    pub fn set_current_frame(frame: f32) -> Self {
        Self::SetCurrentFrame(Edit::new(frame))
    }

    pub fn set_option(option: ViewerOption, on: bool) -> Self {
        Self::SetOption {
            option,
            edit: Edit::new(on),
        }
    }

    pub fn code(&self) -> CommandCode {
        match self {
            Self::SetCurrentFrame(_) => CommandCode::SetCurrentFrame,
            Self::SetOption { .. } => CommandCode::SetViewerOption,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SetCurrentFrame(_) => "Set current frame",
            Self::SetOption { option, .. } => match option {
                ViewerOption::Skinning => "Set skinning",
                ViewerOption::SmoothMesh => "Set smooth mesh",
                ViewerOption::LineMode => "Set line mode",
                ViewerOption::FpsCamera => "Set FPS camera",
            },
        }
    }

    pub fn execute(&mut self, core: &mut dyn EngineCore) -> CommandResult<Option<Created>> {
        match self {
            Self::SetCurrentFrame(edit) => {
                edit.apply(core, |c| c.current_frame(), |c, v| c.set_current_frame(v))?
            }
            Self::SetOption { option, edit } => {
                let option = *option;
                edit.apply(
                    core,
                    |c| c.viewer_option(option),
                    |c, v| c.set_viewer_option(option, v),
                )?
            }
        }
        Ok(None)
    }

    pub fn revoke(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        let name = self.name();
        match self {
            Self::SetCurrentFrame(edit) => edit.revert(name, core, |c, v| c.set_current_frame(v)),
            Self::SetOption { option, edit } => {
                let option = *option;
                edit.revert(name, core, |c, v| c.set_viewer_option(option, v))
            }
        }
    }
}
