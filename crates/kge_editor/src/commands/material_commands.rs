//! Material editor: meshes, materials and their parameters.

use std::path::PathBuf;

use glam::Vec3;
use kge_core::{
    CoreResult, DetailMode, EngineCore, MaterialColor, MaterialFlag, MaterialId, MaterialScalar,
    MaterialSnapshot, MeshId, TextureSlot,
};

use super::command::{CommandCode, CommandError, CommandResult, Created, Edit};

/// Bookkeeping of a command that creates a material.
///
/// Same parking scheme as entity creation: revoke snapshots and destroys
/// the material, the next execute restores it under the same id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialCreation {
    created: Option<MaterialId>,
    parked: Option<MaterialSnapshot>,
}

impl MaterialCreation {
    pub fn created(&self) -> Option<MaterialId> {
        self.created
    }

    fn execute(
        &mut self,
        core: &mut dyn EngineCore,
        create: impl FnOnce(&mut dyn EngineCore) -> CoreResult<MaterialId>,
    ) -> CommandResult<MaterialId> {
        let id = match &self.parked {
            Some(snapshot) => {
                core.restore_material(snapshot)?;
                snapshot.id
            }
            None => create(core)?,
        };
        self.parked = None;
        self.created = Some(id);
        Ok(id)
    }

    fn revoke(&mut self, name: &'static str, core: &mut dyn EngineCore) -> CommandResult<()> {
        let id = self.created.ok_or(CommandError::NotExecuted(name))?;
        let snapshot = core.material_snapshot(id)?;
        core.remove_material(id)?;
        self.created = None;
        self.parked = Some(snapshot);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MaterialCommand {
    SelectMesh(Edit<Option<MeshId>>),
    /// Assign a material to a mesh.
    Assign {
        mesh: MeshId,
        edit: Edit<MaterialId>,
    },
    SetColor {
        id: MaterialId,
        channel: MaterialColor,
        edit: Edit<Vec3>,
    },
    SetScalar {
        id: MaterialId,
        param: MaterialScalar,
        edit: Edit<f32>,
    },
    SetFlag {
        id: MaterialId,
        flag: MaterialFlag,
        edit: Edit<bool>,
    },
    SetTexture {
        id: MaterialId,
        slot: TextureSlot,
        edit: Edit<String>,
    },
    SetDetailMode {
        id: MaterialId,
        edit: Edit<DetailMode>,
    },
    Copy {
        source: MaterialId,
        creation: MaterialCreation,
    },
    Import {
        path: PathBuf,
        creation: MaterialCreation,
    },
}

impl MaterialCommand {
    pub fn select_mesh(mesh: Option<MeshId>) -> Self {
        Self::SelectMesh(Edit::new(mesh))
    }

    pub fn assign(mesh: MeshId, material: MaterialId) -> Self {
        Self::Assign {
            mesh,
            edit: Edit::new(material),
        }
    }

    pub fn set_color(id: MaterialId, channel: MaterialColor, value: Vec3) -> Self {
        Self::SetColor {
            id,
            channel,
            edit: Edit::new(value),
        }
    }

    pub fn set_scalar(id: MaterialId, param: MaterialScalar, value: f32) -> Self {
        Self::SetScalar {
            id,
            param,
            edit: Edit::new(value),
        }
    }

    pub fn set_flag(id: MaterialId, flag: MaterialFlag, on: bool) -> Self {
        Self::SetFlag {
            id,
            flag,
            edit: Edit::new(on),
        }
    }

    pub fn set_texture(id: MaterialId, slot: TextureSlot, name: impl Into<String>) -> Self {
        Self::SetTexture {
            id,
            slot,
            edit: Edit::new(name.into()),
        }
    }

    pub fn set_detail_mode(id: MaterialId, mode: DetailMode) -> Self {
        Self::SetDetailMode {
            id,
            edit: Edit::new(mode),
        }
    }

    pub fn copy(source: MaterialId) -> Self {
        Self::Copy {
            source,
            creation: MaterialCreation::default(),
        }
    }

    pub fn import(path: impl Into<PathBuf>) -> Self {
        Self::Import {
            path: path.into(),
            creation: MaterialCreation::default(),
        }
    }

    pub fn code(&self) -> CommandCode {
        match self {
            Self::SelectMesh(_) => CommandCode::SelectMesh,
            Self::Assign { .. } => CommandCode::AssignMaterial,
            Self::SetColor { .. } => CommandCode::SetMaterialColor,
            Self::SetScalar { .. } => CommandCode::SetMaterialScalar,
            Self::SetFlag { .. } => CommandCode::SetMaterialFlag,
            Self::SetTexture { .. } => CommandCode::SetTexture,
            Self::SetDetailMode { .. } => CommandCode::SetDetailMode,
            Self::Copy { .. } => CommandCode::CopyMaterial,
            Self::Import { .. } => CommandCode::ImportMaterial,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectMesh(_) => "Select mesh",
            Self::Assign { .. } => "Assign material",
            Self::SetColor { channel, .. } => match channel {
                MaterialColor::Albedo => "Set albedo",
                MaterialColor::Emissive => "Set emissive",
                MaterialColor::Ambient => "Set ambient",
                MaterialColor::Diffuse => "Set diffuse",
                MaterialColor::Specular => "Set specular",
            },
            Self::SetScalar { param, .. } => match param {
                MaterialScalar::Metalness => "Set metalness",
                MaterialScalar::Glossiness => "Set glossiness",
                MaterialScalar::Shininess => "Set shininess",
                MaterialScalar::Opacity => "Set opacity",
                MaterialScalar::AlphaTest => "Set alpha test",
                MaterialScalar::HeightOffset => "Set height offset",
                MaterialScalar::HeightScale => "Set height scale",
                MaterialScalar::EdgeTessHint => "Set edge tessellation hint",
                MaterialScalar::InsideTessHint => "Set inside tessellation hint",
                MaterialScalar::MinTess => "Set min tessellation",
                MaterialScalar::MaxTess => "Set max tessellation",
            },
            Self::SetFlag { flag, .. } => match flag {
                MaterialFlag::Transparent => "Set transparent",
                MaterialFlag::Sss => "Set SSS",
                MaterialFlag::TwoSided => "Set two sided",
            },
            Self::SetTexture { .. } => "Set texture",
            Self::SetDetailMode { .. } => "Set detail mode",
            Self::Copy { .. } => "Copy material",
            Self::Import { .. } => "Import material",
        }
    }

    pub fn execute(&mut self, core: &mut dyn EngineCore) -> CommandResult<Option<Created>> {
        match self {
            Self::SelectMesh(edit) => {
                edit.apply(core, |c| c.selected_mesh(), |c, v| c.select_mesh(v))?
            }
            Self::Assign { mesh, edit } => {
                let mesh = *mesh;
                edit.apply(
                    core,
                    |c| c.mesh_material(mesh),
                    |c, v| c.set_mesh_material(mesh, v),
                )?
            }
            Self::SetColor { id, channel, edit } => {
                let (id, channel) = (*id, *channel);
                edit.apply(
                    core,
                    |c| c.material_color(id, channel),
                    |c, v| c.set_material_color(id, channel, v),
                )?
            }
            Self::SetScalar { id, param, edit } => {
                let (id, param) = (*id, *param);
                edit.apply(
                    core,
                    |c| c.material_scalar(id, param),
                    |c, v| c.set_material_scalar(id, param, v),
                )?
            }
            Self::SetFlag { id, flag, edit } => {
                let (id, flag) = (*id, *flag);
                edit.apply(
                    core,
                    |c| c.material_flag(id, flag),
                    |c, v| c.set_material_flag(id, flag, v),
                )?
            }
            Self::SetTexture { id, slot, edit } => {
                let (id, slot) = (*id, *slot);
                edit.apply(
                    core,
                    |c| c.texture(id, slot),
                    |c, v| c.set_texture(id, slot, &v),
                )?
            }
            Self::SetDetailMode { id, edit } => {
                let id = *id;
                edit.apply(
                    core,
                    |c| c.detail_mode(id),
                    |c, v| c.set_detail_mode(id, v),
                )?
            }
            Self::Copy { source, creation } => {
                let source = *source;
                let id = creation.execute(core, |c| c.copy_material(source))?;
                return Ok(Some(Created::Material(id)));
            }
            Self::Import { path, creation } => {
                let id = creation.execute(core, |c| c.import_material(path.as_path()))?;
                return Ok(Some(Created::Material(id)));
            }
        }
        Ok(None)
    }

    pub fn revoke(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        let name = self.name();
        match self {
            Self::SelectMesh(edit) => edit.revert(name, core, |c, v| c.select_mesh(v)),
            Self::Assign { mesh, edit } => {
                let mesh = *mesh;
                edit.revert(name, core, |c, v| c.set_mesh_material(mesh, v))
            }
            Self::SetColor { id, channel, edit } => {
                let (id, channel) = (*id, *channel);
                edit.revert(name, core, |c, v| c.set_material_color(id, channel, v))
            }
            Self::SetScalar { id, param, edit } => {
                let (id, param) = (*id, *param);
                edit.revert(name, core, |c, v| c.set_material_scalar(id, param, v))
            }
            Self::SetFlag { id, flag, edit } => {
                let (id, flag) = (*id, *flag);
                edit.revert(name, core, |c, v| c.set_material_flag(id, flag, v))
            }
            Self::SetTexture { id, slot, edit } => {
                let (id, slot) = (*id, *slot);
                edit.revert(name, core, |c, v| c.set_texture(id, slot, &v))
            }
            Self::SetDetailMode { id, edit } => {
                let id = *id;
                edit.revert(name, core, |c, v| c.set_detail_mode(id, v))
            }
            Self::Copy { creation, .. } | Self::Import { creation, .. } => {
                creation.revoke(name, core)
            }
        }
    }
}
