//! Entity creation, destruction, selection and common properties.

use glam::{Quat, Vec3};
use kge_core::{EngineCore, EntityId, EntityKind, EntitySnapshot, LightType};

use super::command::{CommandCode, CommandError, CommandResult, Created, Edit};

/// Bookkeeping of a command that creates an entity.
///
/// Revoking parks a snapshot of the created entity; the next execute
/// restores it instead of creating a fresh one, so a redo brings back the
/// same id and later history entries that target it stay valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityCreation {
    created: Option<EntityId>,
    previous_selection: Option<EntityId>,
    parked: Option<EntitySnapshot>,
}

impl EntityCreation {
    /// Id of the live entity, if the command is currently applied.
    pub fn created(&self) -> Option<EntityId> {
        self.created
    }

    fn execute(
        &mut self,
        core: &mut dyn EngineCore,
        create: impl FnOnce(&mut dyn EngineCore) -> kge_core::CoreResult<EntityId>,
    ) -> CommandResult<EntityId> {
        let previous_selection = core.selected_entity()?;
        let id = match &self.parked {
            Some(snapshot) => {
                core.restore_entity(snapshot)?;
                snapshot.id
            }
            None => create(core)?,
        };
        self.parked = None;
        self.created = Some(id);
        self.previous_selection = previous_selection;

        core.select_entity(Some(id))?;
        Ok(id)
    }

    fn revoke(&mut self, name: &'static str, core: &mut dyn EngineCore) -> CommandResult<()> {
        let id = self.created.ok_or(CommandError::NotExecuted(name))?;
        let snapshot = core.entity_snapshot(id)?;
        core.remove_entity(id)?;
        self.created = None;
        self.parked = Some(snapshot);

        core.select_entity(self.previous_selection)?;
        Ok(())
    }
}

/// Backup taken before destroying entities.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityRemoval {
    snapshots: Vec<EntitySnapshot>,
    selection: Option<EntityId>,
    active_camera: Option<EntityId>,
}

impl EntityRemoval {
    /// Snapshot every entity in `ids`, then destroy them.
    fn execute(core: &mut dyn EngineCore, ids: &[EntityId]) -> CommandResult<Self> {
        let selection = core.selected_entity()?;
        let active_camera = core.active_camera()?;
        let snapshots = ids
            .iter()
            .map(|&id| core.entity_snapshot(id))
            .collect::<Result<Vec<_>, _>>()?;

        for &id in ids {
            core.remove_entity(id)?;
        }
        if selection.map_or(false, |s| ids.contains(&s)) {
            core.select_entity(None)?;
        }

        Ok(Self {
            snapshots,
            selection,
            active_camera,
        })
    }

    fn revoke(&self, core: &mut dyn EngineCore) -> CommandResult<()> {
        for snapshot in &self.snapshots {
            core.restore_entity(snapshot)?;
        }
        if let Some(camera) = self.active_camera {
            if self.contains(camera) {
                core.set_active_camera(Some(camera))?;
            }
        }
        core.select_entity(self.selection)?;
        Ok(())
    }

    pub fn snapshots(&self) -> &[EntitySnapshot] {
        &self.snapshots
    }

    fn contains(&self, id: EntityId) -> bool {
        self.snapshots.iter().any(|s| s.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EntityCommand {
    AddModel {
        meshml: String,
        creation: EntityCreation,
    },
    AddLight {
        light_type: LightType,
        name: String,
        creation: EntityCreation,
    },
    AddCamera {
        name: String,
        creation: EntityCreation,
    },
    Remove {
        id: EntityId,
        removal: Option<EntityRemoval>,
    },
    /// Remove every entity, or only those of one kind.
    Clear {
        kind: Option<EntityKind>,
        removal: Option<EntityRemoval>,
    },
    Select(Edit<Option<EntityId>>),
    SetName {
        id: EntityId,
        edit: Edit<String>,
    },
    SetVisible {
        id: EntityId,
        edit: Edit<bool>,
    },
    SetTranslation {
        id: EntityId,
        edit: Edit<Vec3>,
    },
    SetRotation {
        id: EntityId,
        edit: Edit<Quat>,
    },
    SetScale {
        id: EntityId,
        edit: Edit<Vec3>,
    },
}

impl EntityCommand {
    pub fn add_model(meshml: impl Into<String>) -> Self {
        Self::AddModel {
            meshml: meshml.into(),
            creation: EntityCreation::default(),
        }
    }

    pub fn add_light(light_type: LightType, name: impl Into<String>) -> Self {
        Self::AddLight {
            light_type,
            name: name.into(),
            creation: EntityCreation::default(),
        }
    }

    pub fn add_camera(name: impl Into<String>) -> Self {
        Self::AddCamera {
            name: name.into(),
            creation: EntityCreation::default(),
        }
    }

    pub fn remove(id: EntityId) -> Self {
        Self::Remove { id, removal: None }
    }

    pub fn clear(kind: Option<EntityKind>) -> Self {
        Self::Clear { kind, removal: None }
    }

    pub fn select(id: Option<EntityId>) -> Self {
        Self::Select(Edit::new(id))
    }

    pub fn set_name(id: EntityId, name: impl Into<String>) -> Self {
        Self::SetName {
            id,
            edit: Edit::new(name.into()),
        }
    }

    pub fn set_visible(id: EntityId, visible: bool) -> Self {
        Self::SetVisible {
            id,
            edit: Edit::new(visible),
        }
    }

    pub fn set_translation(id: EntityId, translation: Vec3) -> Self {
        Self::SetTranslation {
            id,
            edit: Edit::new(translation),
        }
    }

    pub fn set_rotation(id: EntityId, rotation: Quat) -> Self {
        Self::SetRotation {
            id,
            edit: Edit::new(rotation),
        }
    }

    pub fn set_scale(id: EntityId, scale: Vec3) -> Self {
        Self::SetScale {
            id,
            edit: Edit::new(scale),
        }
    }

    pub fn code(&self) -> CommandCode {
        match self {
            Self::AddModel { .. } => CommandCode::AddModel,
            Self::AddLight { .. } => CommandCode::AddLight,
            Self::AddCamera { .. } => CommandCode::AddCamera,
            Self::Remove { .. } => CommandCode::RemoveEntity,
            Self::Clear { .. } => CommandCode::ClearEntities,
            Self::Select(_) => CommandCode::SelectEntity,
            Self::SetName { .. } => CommandCode::SetEntityName,
            Self::SetVisible { .. } => CommandCode::SetEntityVisible,
            Self::SetTranslation { .. } => CommandCode::SetEntityTranslation,
            Self::SetRotation { .. } => CommandCode::SetEntityRotation,
            Self::SetScale { .. } => CommandCode::SetEntityScale,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddModel { .. } => "Add model",
            Self::AddLight { .. } => "Add light",
            Self::AddCamera { .. } => "Add camera",
            Self::Remove { .. } => "Remove entity",
            Self::Clear { .. } => "Clear entities",
            Self::Select(_) => "Select entity",
            Self::SetName { .. } => "Set entity name",
            Self::SetVisible { .. } => "Set entity visible",
            Self::SetTranslation { .. } => "Set entity translation",
            Self::SetRotation { .. } => "Set entity rotation",
            Self::SetScale { .. } => "Set entity scale",
        }
    }

    pub fn execute(&mut self, core: &mut dyn EngineCore) -> CommandResult<Option<Created>> {
        match self {
            Self::AddModel { meshml, creation } => {
                let id = creation.execute(core, |c| c.add_model(meshml.as_str()))?;
                return Ok(Some(Created::Entity(id)));
            }
            Self::AddLight {
                light_type,
                name,
                creation,
            } => {
                let light_type = *light_type;
                let id = creation.execute(core, |c| c.add_light(light_type, name.as_str()))?;
                return Ok(Some(Created::Entity(id)));
            }
            Self::AddCamera { name, creation } => {
                let id = creation.execute(core, |c| c.add_camera(name.as_str()))?;
                return Ok(Some(Created::Entity(id)));
            }
            Self::Remove { id, removal } => {
                *removal = Some(EntityRemoval::execute(core, &[*id])?);
            }
            Self::Clear { kind, removal } => {
                let mut ids = core.entity_ids()?;
                if let Some(kind) = *kind {
                    let mut matching = Vec::with_capacity(ids.len());
                    for id in ids {
                        if core.entity_kind(id)? == kind {
                            matching.push(id);
                        }
                    }
                    ids = matching;
                }
                *removal = Some(EntityRemoval::execute(core, &ids)?);
            }
            Self::Select(edit) => {
                edit.apply(core, |c| c.selected_entity(), |c, v| c.select_entity(v))?
            }
            Self::SetName { id, edit } => {
                let id = *id;
                edit.apply(core, |c| c.entity_name(id), |c, v| c.set_entity_name(id, &v))?
            }
            Self::SetVisible { id, edit } => {
                let id = *id;
                edit.apply(
                    core,
                    |c| c.entity_visible(id),
                    |c, v| c.set_entity_visible(id, v),
                )?
            }
            Self::SetTranslation { id, edit } => {
                let id = *id;
                edit.apply(
                    core,
                    |c| c.entity_translation(id),
                    |c, v| c.set_entity_translation(id, v),
                )?
            }
            Self::SetRotation { id, edit } => {
                let id = *id;
                edit.apply(
                    core,
                    |c| c.entity_rotation(id),
                    |c, v| c.set_entity_rotation(id, v),
                )?
            }
            Self::SetScale { id, edit } => {
                let id = *id;
                edit.apply(core, |c| c.entity_scale(id), |c, v| c.set_entity_scale(id, v))?
            }
        }
        Ok(None)
    }

    pub fn revoke(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        let name = self.name();
        match self {
            Self::AddModel { creation, .. }
            | Self::AddLight { creation, .. }
            | Self::AddCamera { creation, .. } => creation.revoke(name, core),
            Self::Remove { removal, .. } | Self::Clear { removal, .. } => {
                let backup = removal.as_ref().ok_or(CommandError::NotExecuted(name))?;
                backup.revoke(core)?;
                *removal = None;
                Ok(())
            }
            Self::Select(edit) => edit.revert(name, core, |c, v| c.select_entity(v)),
            Self::SetName { id, edit } => {
                let id = *id;
                edit.revert(name, core, |c, v| c.set_entity_name(id, &v))
            }
            Self::SetVisible { id, edit } => {
                let id = *id;
                edit.revert(name, core, |c, v| c.set_entity_visible(id, v))
            }
            Self::SetTranslation { id, edit } => {
                let id = *id;
                edit.revert(name, core, |c, v| c.set_entity_translation(id, v))
            }
            Self::SetRotation { id, edit } => {
                let id = *id;
                edit.revert(name, core, |c, v| c.set_entity_rotation(id, v))
            }
            Self::SetScale { id, edit } => {
                let id = *id;
                edit.revert(name, core, |c, v| c.set_entity_scale(id, v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kge_core::{EntityCore, LightCore, MemoryCore, SceneCore};

    #[test]
    fn test_add_selects_new_entity() {
        let mut core = MemoryCore::new();
        let light = core.add_light(LightType::Point, "Light0").unwrap();
        core.select_entity(Some(light)).unwrap();

        let mut cmd = EntityCommand::add_camera("Camera0");
        let created = cmd.execute(&mut core).unwrap();
        let camera = created.and_then(Created::entity).unwrap();

        assert_eq!(core.selected_entity().unwrap(), Some(camera));

        cmd.revoke(&mut core).unwrap();
        assert!(!core.contains_entity(camera));
        assert_eq!(core.selected_entity().unwrap(), Some(light));
    }

    #[test]
    fn test_re_execute_restores_same_id() {
        let mut core = MemoryCore::new();
        let mut cmd = EntityCommand::add_light(LightType::Spot, "Light0");

        let first = cmd.execute(&mut core).unwrap();
        cmd.revoke(&mut core).unwrap();
        let second = cmd.execute(&mut core).unwrap();

        assert_eq!(first, second);
        let id = second.and_then(Created::entity).unwrap();
        assert_eq!(core.light_type(id).unwrap(), LightType::Spot);
    }

    #[test]
    fn test_remove_restores_active_camera() {
        let mut core = MemoryCore::new();
        let camera = core.add_camera("Camera0").unwrap();
        core.set_active_camera(Some(camera)).unwrap();
        core.select_entity(Some(camera)).unwrap();

        let mut cmd = EntityCommand::remove(camera);
        cmd.execute(&mut core).unwrap();
        assert_eq!(core.active_camera().unwrap(), None);
        assert_eq!(core.selected_entity().unwrap(), None);

        cmd.revoke(&mut core).unwrap();
        assert_eq!(core.active_camera().unwrap(), Some(camera));
        assert_eq!(core.selected_entity().unwrap(), Some(camera));
    }

    #[test]
    fn test_clear_by_kind() {
        let mut core = MemoryCore::new();
        let model = core.add_model("foo.meshml").unwrap();
        let l0 = core.add_light(LightType::Point, "Light0").unwrap();
        let l1 = core.add_light(LightType::Ambient, "Light1").unwrap();

        let mut cmd = EntityCommand::clear(Some(EntityKind::Light));
        cmd.execute(&mut core).unwrap();
        assert_eq!(core.entity_ids().unwrap(), vec![model]);

        cmd.revoke(&mut core).unwrap();
        assert_eq!(core.entity_ids().unwrap(), vec![model, l0, l1]);
        assert_eq!(core.light_type(l1).unwrap(), LightType::Ambient);
    }

    #[test]
    fn test_remove_missing_entity() {
        let mut core = MemoryCore::new();
        let mut cmd = EntityCommand::remove(EntityId(7));

        assert!(cmd.execute(&mut core).is_err());
        assert!(matches!(
            cmd.revoke(&mut core),
            Err(CommandError::NotExecuted("Remove entity"))
        ));
    }
}
