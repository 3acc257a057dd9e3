//! Reversible editor commands.
//!
//! Every mutation an editor tool makes goes through an [`EditorCommand`].
//! A command stores its target and the new value; `execute` reads the
//! current value from the core, keeps it, and writes the new one, and
//! `revoke` writes the kept value back. Commands that create objects
//! return the new id from `execute`; commands that destroy objects keep a
//! full snapshot so `revoke` can rebuild them under the same id.
//!
//! Commands are grouped by the core trait they drive. The groups are plain
//! enums and [`EditorCommand`] is the closed union over them.

mod camera_commands;
mod command;
mod entity_commands;
mod light_commands;
mod material_commands;
mod scene_commands;
mod viewer_commands;

pub use camera_commands::CameraCommand;
pub use command::{CommandCode, CommandError, CommandResult, Created, Edit};
pub use entity_commands::{EntityCommand, EntityCreation, EntityRemoval};
pub use light_commands::LightCommand;
pub use material_commands::{MaterialCommand, MaterialCreation};
pub use scene_commands::SceneCommand;
pub use viewer_commands::ViewerCommand;

use kge_core::EngineCore;

/// One undoable user action.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    Scene(SceneCommand),
    Entity(EntityCommand),
    Light(LightCommand),
    Camera(CameraCommand),
    Material(MaterialCommand),
    Viewer(ViewerCommand),
}

impl EditorCommand {
    pub fn code(&self) -> CommandCode {
        match self {
            Self::Scene(cmd) => cmd.code(),
            Self::Entity(cmd) => cmd.code(),
            Self::Light(cmd) => cmd.code(),
            Self::Camera(cmd) => cmd.code(),
            Self::Material(cmd) => cmd.code(),
            Self::Viewer(cmd) => cmd.code(),
        }
    }

    /// Human-readable name for the undo/redo menu.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scene(cmd) => cmd.name(),
            Self::Entity(cmd) => cmd.name(),
            Self::Light(cmd) => cmd.name(),
            Self::Camera(cmd) => cmd.name(),
            Self::Material(cmd) => cmd.name(),
            Self::Viewer(cmd) => cmd.name(),
        }
    }

    /// Apply the command, capturing whatever `revoke` needs.
    ///
    /// Also used for redo. Returns the id of a created object, if any.
    pub fn execute(&mut self, core: &mut dyn EngineCore) -> CommandResult<Option<Created>> {
        match self {
            Self::Scene(cmd) => cmd.execute(core),
            Self::Entity(cmd) => cmd.execute(core),
            Self::Light(cmd) => cmd.execute(core),
            Self::Camera(cmd) => cmd.execute(core),
            Self::Material(cmd) => cmd.execute(core),
            Self::Viewer(cmd) => cmd.execute(core),
        }
    }

    /// Undo a successful `execute`.
    pub fn revoke(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        match self {
            Self::Scene(cmd) => cmd.revoke(core),
            Self::Entity(cmd) => cmd.revoke(core),
            Self::Light(cmd) => cmd.revoke(core),
            Self::Camera(cmd) => cmd.revoke(core),
            Self::Material(cmd) => cmd.revoke(core),
            Self::Viewer(cmd) => cmd.revoke(core),
        }
    }
}

impl From<SceneCommand> for EditorCommand {
    fn from(cmd: SceneCommand) -> Self {
        Self::Scene(cmd)
    }
}

impl From<EntityCommand> for EditorCommand {
    fn from(cmd: EntityCommand) -> Self {
        Self::Entity(cmd)
    }
}

impl From<LightCommand> for EditorCommand {
    fn from(cmd: LightCommand) -> Self {
        Self::Light(cmd)
    }
}

impl From<CameraCommand> for EditorCommand {
    fn from(cmd: CameraCommand) -> Self {
        Self::Camera(cmd)
    }
}

impl From<MaterialCommand> for EditorCommand {
    fn from(cmd: MaterialCommand) -> Self {
        Self::Material(cmd)
    }
}

impl From<ViewerCommand> for EditorCommand {
    fn from(cmd: ViewerCommand) -> Self {
        Self::Viewer(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kge_core::{EntityId, LightType};

    #[test]
    fn test_dispatch_names_and_codes() {
        let cmds: Vec<EditorCommand> = vec![
            SceneCommand::set_name("Sponza").into(),
            EntityCommand::add_light(LightType::Point, "Light0").into(),
            LightCommand::set_enabled(EntityId(1), false).into(),
            CameraCommand::set_aspect(EntityId(2), 1.5).into(),
            ViewerCommand::set_current_frame(3.0).into(),
        ];

        let names: Vec<_> = cmds.iter().map(EditorCommand::name).collect();
        assert_eq!(
            names,
            vec![
                "Set scene name",
                "Add light",
                "Set light enabled",
                "Set camera aspect",
                "Set current frame",
            ]
        );
        assert_eq!(cmds[1].code(), CommandCode::AddLight);
    }
}
