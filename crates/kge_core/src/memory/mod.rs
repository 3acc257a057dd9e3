//! In-memory engine core.
//!
//! `MemoryCore` implements the whole [`EngineCore`](crate::EngineCore)
//! surface over plain maps keyed by id. It renders nothing; it exists so the
//! command layer can be driven and verified without the native engine, and
//! as the reference for what a production binding has to honour:
//!
//! - ids come from monotonic counters and are never reused
//! - removing an entity drops it from the selection and the active camera
//! - restoring a snapshot brings the object back under its original id

mod document;

pub use document::{MaterialFile, SceneDocument, SceneHeader};

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use glam::{Quat, Vec3};

use crate::core::{CameraCore, EntityCore, LightCore, MaterialCore, SceneCore, ViewerCore};
use crate::error::{CoreError, CoreResult};
use crate::id::{EntityId, IdCounter, MaterialId, MeshId};
use crate::snapshot::{
    CameraProps, EntityDetail, EntitySnapshot, LightProps, MaterialProps, MaterialSnapshot,
};
use crate::types::{
    ControlMode, DetailMode, DisplayOption, EntityKind, LightAttrib, LightType, MaterialColor,
    MaterialFlag, MaterialScalar, TextureSlot, ViewerOption,
};

/// A mesh of the loaded model.
#[derive(Clone, Debug)]
struct MeshRecord {
    name: String,
    material: MaterialId,
}

/// Engine core that keeps every property in memory.
#[derive(Clone, Debug)]
pub struct MemoryCore {
    // Scene
    scene_name: String,
    skybox_name: String,
    active_camera: Option<EntityId>,
    control_mode: ControlMode,
    display: HashMap<DisplayOption, bool>,
    document: Option<PathBuf>,

    // Entities
    entities: BTreeMap<EntityId, EntitySnapshot>,
    entity_ids: IdCounter,
    selected_entity: Option<EntityId>,

    // Model
    meshes: BTreeMap<MeshId, MeshRecord>,
    mesh_ids: IdCounter,
    selected_mesh: Option<MeshId>,
    materials: BTreeMap<MaterialId, MaterialSnapshot>,
    material_ids: IdCounter,

    // Playback
    num_frames: u32,
    current_frame: f32,
    viewer: HashMap<ViewerOption, bool>,
}

impl Default for MemoryCore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCore {
    pub fn new() -> Self {
        Self {
            scene_name: String::new(),
            skybox_name: String::new(),
            active_camera: None,
            control_mode: ControlMode::default(),
            display: DisplayOption::all().iter().map(|&o| (o, true)).collect(),
            document: None,
            entities: BTreeMap::new(),
            entity_ids: IdCounter::new(),
            selected_entity: None,
            meshes: BTreeMap::new(),
            mesh_ids: IdCounter::new(),
            selected_mesh: None,
            materials: BTreeMap::new(),
            material_ids: IdCounter::new(),
            num_frames: 0,
            current_frame: 0.0,
            viewer: ViewerOption::all()
                .iter()
                .map(|&o| (o, matches!(o, ViewerOption::Skinning | ViewerOption::SmoothMesh)))
                .collect(),
        }
    }

    /// Path of the last loaded scene, if any.
    pub fn document(&self) -> Option<&Path> {
        self.document.as_deref()
    }

    pub fn num_entities(&self) -> usize {
        self.entities.len()
    }

    pub fn contains_entity(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn contains_material(&self, id: MaterialId) -> bool {
        self.materials.contains_key(&id)
    }

    /// Add a material to the loaded model.
    pub fn add_material(&mut self, name: impl Into<String>) -> MaterialId {
        let id = MaterialId(self.material_ids.next());
        let name = name.into();
        log::debug!("Added material {} ({})", id, name);
        self.materials.insert(
            id,
            MaterialSnapshot {
                id,
                name,
                props: MaterialProps::default(),
            },
        );
        id
    }

    /// Add a mesh to the loaded model.
    pub fn add_mesh(&mut self, name: impl Into<String>, material: MaterialId) -> CoreResult<MeshId> {
        self.material(material)?;
        let id = MeshId(self.mesh_ids.next());
        self.meshes.insert(
            id,
            MeshRecord {
                name: name.into(),
                material,
            },
        );
        Ok(id)
    }

    /// Set the length of the loaded animation.
    pub fn set_num_frames(&mut self, num_frames: u32) {
        self.num_frames = num_frames;
        let last = num_frames.saturating_sub(1) as f32;
        if self.current_frame > last {
            self.current_frame = last;
        }
    }

    fn insert_entity(&mut self, name: &str, detail: EntityDetail) -> EntityId {
        let id = EntityId(self.entity_ids.next());
        log::debug!("Added {} {} ({})", detail.kind().name(), id, name);
        self.entities.insert(id, EntitySnapshot::new(id, name, detail));
        id
    }

    fn entity(&self, id: EntityId) -> CoreResult<&EntitySnapshot> {
        self.entities.get(&id).ok_or(CoreError::EntityNotFound(id))
    }

    fn entity_mut(&mut self, id: EntityId) -> CoreResult<&mut EntitySnapshot> {
        self.entities.get_mut(&id).ok_or(CoreError::EntityNotFound(id))
    }

    fn light(&self, id: EntityId) -> CoreResult<&LightProps> {
        let entity = self.entity(id)?;
        match &entity.detail {
            EntityDetail::Light(light) => Ok(light),
            other => Err(CoreError::WrongEntityKind {
                id,
                expected: EntityKind::Light,
                found: other.kind(),
            }),
        }
    }

    fn light_mut(&mut self, id: EntityId) -> CoreResult<&mut LightProps> {
        let entity = self.entity_mut(id)?;
        match &mut entity.detail {
            EntityDetail::Light(light) => Ok(light),
            other => Err(CoreError::WrongEntityKind {
                id,
                expected: EntityKind::Light,
                found: other.kind(),
            }),
        }
    }

    fn camera(&self, id: EntityId) -> CoreResult<&CameraProps> {
        let entity = self.entity(id)?;
        match &entity.detail {
            EntityDetail::Camera(camera) => Ok(camera),
            other => Err(CoreError::WrongEntityKind {
                id,
                expected: EntityKind::Camera,
                found: other.kind(),
            }),
        }
    }

    fn camera_mut(&mut self, id: EntityId) -> CoreResult<&mut CameraProps> {
        let entity = self.entity_mut(id)?;
        match &mut entity.detail {
            EntityDetail::Camera(camera) => Ok(camera),
            other => Err(CoreError::WrongEntityKind {
                id,
                expected: EntityKind::Camera,
                found: other.kind(),
            }),
        }
    }

    fn material(&self, id: MaterialId) -> CoreResult<&MaterialSnapshot> {
        self.materials.get(&id).ok_or(CoreError::MaterialNotFound(id))
    }

    fn material_mut(&mut self, id: MaterialId) -> CoreResult<&mut MaterialSnapshot> {
        self.materials.get_mut(&id).ok_or(CoreError::MaterialNotFound(id))
    }

    fn mesh(&self, id: MeshId) -> CoreResult<&MeshRecord> {
        self.meshes.get(&id).ok_or(CoreError::MeshNotFound(id))
    }

    fn reset_scene(&mut self) {
        self.scene_name.clear();
        self.skybox_name.clear();
        self.active_camera = None;
        self.entities.clear();
        self.entity_ids = IdCounter::new();
        self.selected_entity = None;
        self.document = None;
    }
}

impl SceneCore for MemoryCore {
    fn scene_name(&self) -> CoreResult<String> {
        Ok(self.scene_name.clone())
    }

    fn set_scene_name(&mut self, name: &str) -> CoreResult<()> {
        self.scene_name = name.to_string();
        Ok(())
    }

    fn skybox_name(&self) -> CoreResult<String> {
        Ok(self.skybox_name.clone())
    }

    fn set_skybox_name(&mut self, name: &str) -> CoreResult<()> {
        self.skybox_name = name.to_string();
        Ok(())
    }

    fn active_camera(&self) -> CoreResult<Option<EntityId>> {
        Ok(self.active_camera)
    }

    fn set_active_camera(&mut self, id: Option<EntityId>) -> CoreResult<()> {
        if let Some(id) = id {
            self.camera(id)?;
        }
        self.active_camera = id;
        Ok(())
    }

    fn control_mode(&self) -> CoreResult<ControlMode> {
        Ok(self.control_mode)
    }

    fn set_control_mode(&mut self, mode: ControlMode) -> CoreResult<()> {
        self.control_mode = mode;
        Ok(())
    }

    fn display_option(&self, option: DisplayOption) -> CoreResult<bool> {
        Ok(self.display.get(&option).copied().unwrap_or(true))
    }

    fn set_display_option(&mut self, option: DisplayOption, on: bool) -> CoreResult<()> {
        self.display.insert(option, on);
        Ok(())
    }

    fn load_scene(&mut self, path: &Path) -> CoreResult<()> {
        let doc: SceneDocument = document::read_toml(path)?;

        self.reset_scene();
        self.scene_name = doc.scene.name;
        self.skybox_name = doc.scene.skybox;
        for entity in doc.entities {
            self.entity_ids.observe(entity.id.0);
            self.entities.insert(entity.id, entity);
        }
        self.active_camera = doc
            .scene
            .active_camera
            .filter(|id| self.camera(*id).is_ok());
        self.document = Some(path.to_path_buf());

        log::info!("Loaded scene {:?} with {} entities", path, self.entities.len());
        Ok(())
    }

    fn save_scene(&self, path: &Path) -> CoreResult<()> {
        let doc = SceneDocument {
            scene: SceneHeader {
                name: self.scene_name.clone(),
                skybox: self.skybox_name.clone(),
                active_camera: self.active_camera,
            },
            entities: self.entities.values().cloned().collect(),
        };
        document::write_toml(&doc, path)?;

        log::info!("Saved scene to {:?}", path);
        Ok(())
    }

    fn close_scene(&mut self) -> CoreResult<()> {
        self.reset_scene();
        Ok(())
    }
}

impl EntityCore for MemoryCore {
    fn entity_ids(&self) -> CoreResult<Vec<EntityId>> {
        Ok(self.entities.keys().copied().collect())
    }

    fn entity_kind(&self, id: EntityId) -> CoreResult<EntityKind> {
        Ok(self.entity(id)?.kind())
    }

    fn add_model(&mut self, meshml: &str) -> CoreResult<EntityId> {
        let name = Path::new(meshml)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| meshml.to_string());
        Ok(self.insert_entity(
            &name,
            EntityDetail::Model {
                meshml: meshml.to_string(),
            },
        ))
    }

    fn add_light(&mut self, light_type: LightType, name: &str) -> CoreResult<EntityId> {
        Ok(self.insert_entity(name, EntityDetail::Light(LightProps::new(light_type))))
    }

    fn add_camera(&mut self, name: &str) -> CoreResult<EntityId> {
        Ok(self.insert_entity(name, EntityDetail::Camera(CameraProps::default())))
    }

    fn remove_entity(&mut self, id: EntityId) -> CoreResult<()> {
        let removed = self.entities.remove(&id).ok_or(CoreError::EntityNotFound(id))?;
        if self.selected_entity == Some(id) {
            self.selected_entity = None;
        }
        if self.active_camera == Some(id) {
            self.active_camera = None;
        }
        log::debug!("Removed {} {} ({})", removed.kind().name(), id, removed.name);
        Ok(())
    }

    fn entity_snapshot(&self, id: EntityId) -> CoreResult<EntitySnapshot> {
        self.entity(id).cloned()
    }

    fn restore_entity(&mut self, snapshot: &EntitySnapshot) -> CoreResult<()> {
        if self.entities.contains_key(&snapshot.id) {
            return Err(CoreError::DuplicateEntity(snapshot.id));
        }
        self.entity_ids.observe(snapshot.id.0);
        self.entities.insert(snapshot.id, snapshot.clone());
        log::debug!("Restored {} ({})", snapshot.id, snapshot.name);
        Ok(())
    }

    fn selected_entity(&self) -> CoreResult<Option<EntityId>> {
        Ok(self.selected_entity)
    }

    fn select_entity(&mut self, id: Option<EntityId>) -> CoreResult<()> {
        if let Some(id) = id {
            self.entity(id)?;
        }
        self.selected_entity = id;
        Ok(())
    }

    fn entity_name(&self, id: EntityId) -> CoreResult<String> {
        Ok(self.entity(id)?.name.clone())
    }

    fn set_entity_name(&mut self, id: EntityId, name: &str) -> CoreResult<()> {
        self.entity_mut(id)?.name = name.to_string();
        Ok(())
    }

    fn entity_visible(&self, id: EntityId) -> CoreResult<bool> {
        Ok(self.entity(id)?.visible)
    }

    fn set_entity_visible(&mut self, id: EntityId, visible: bool) -> CoreResult<()> {
        self.entity_mut(id)?.visible = visible;
        Ok(())
    }

    fn entity_translation(&self, id: EntityId) -> CoreResult<Vec3> {
        Ok(self.entity(id)?.translation)
    }

    fn set_entity_translation(&mut self, id: EntityId, translation: Vec3) -> CoreResult<()> {
        self.entity_mut(id)?.translation = translation;
        Ok(())
    }

    fn entity_rotation(&self, id: EntityId) -> CoreResult<Quat> {
        Ok(self.entity(id)?.rotation)
    }

    fn set_entity_rotation(&mut self, id: EntityId, rotation: Quat) -> CoreResult<()> {
        self.entity_mut(id)?.rotation = rotation;
        Ok(())
    }

    fn entity_scale(&self, id: EntityId) -> CoreResult<Vec3> {
        Ok(self.entity(id)?.scale)
    }

    fn set_entity_scale(&mut self, id: EntityId, scale: Vec3) -> CoreResult<()> {
        self.entity_mut(id)?.scale = scale;
        Ok(())
    }
}

impl LightCore for MemoryCore {
    fn light_type(&self, id: EntityId) -> CoreResult<LightType> {
        Ok(self.light(id)?.light_type)
    }

    fn light_enabled(&self, id: EntityId) -> CoreResult<bool> {
        Ok(self.light(id)?.enabled)
    }

    fn set_light_enabled(&mut self, id: EntityId, enabled: bool) -> CoreResult<()> {
        self.light_mut(id)?.enabled = enabled;
        Ok(())
    }

    fn light_attrib(&self, id: EntityId) -> CoreResult<LightAttrib> {
        Ok(self.light(id)?.attrib)
    }

    fn set_light_attrib(&mut self, id: EntityId, attrib: LightAttrib) -> CoreResult<()> {
        self.light_mut(id)?.attrib = attrib;
        Ok(())
    }

    fn light_color(&self, id: EntityId) -> CoreResult<Vec3> {
        Ok(self.light(id)?.color)
    }

    fn set_light_color(&mut self, id: EntityId, color: Vec3) -> CoreResult<()> {
        self.light_mut(id)?.color = color;
        Ok(())
    }

    fn light_falloff(&self, id: EntityId) -> CoreResult<Vec3> {
        Ok(self.light(id)?.falloff)
    }

    fn set_light_falloff(&mut self, id: EntityId, falloff: Vec3) -> CoreResult<()> {
        self.light_mut(id)?.falloff = falloff;
        Ok(())
    }

    fn light_inner_angle(&self, id: EntityId) -> CoreResult<f32> {
        Ok(self.light(id)?.inner_angle)
    }

    fn set_light_inner_angle(&mut self, id: EntityId, angle: f32) -> CoreResult<()> {
        self.light_mut(id)?.inner_angle = angle;
        Ok(())
    }

    fn light_outer_angle(&self, id: EntityId) -> CoreResult<f32> {
        Ok(self.light(id)?.outer_angle)
    }

    fn set_light_outer_angle(&mut self, id: EntityId, angle: f32) -> CoreResult<()> {
        self.light_mut(id)?.outer_angle = angle;
        Ok(())
    }

    fn light_projective_texture(&self, id: EntityId) -> CoreResult<String> {
        Ok(self.light(id)?.projective_texture.clone())
    }

    fn set_light_projective_texture(&mut self, id: EntityId, name: &str) -> CoreResult<()> {
        self.light_mut(id)?.projective_texture = name.to_string();
        Ok(())
    }
}

impl CameraCore for MemoryCore {
    fn camera_look_at(&self, id: EntityId) -> CoreResult<Vec3> {
        Ok(self.camera(id)?.look_at)
    }

    fn set_camera_look_at(&mut self, id: EntityId, look_at: Vec3) -> CoreResult<()> {
        self.camera_mut(id)?.look_at = look_at;
        Ok(())
    }

    fn camera_up_vec(&self, id: EntityId) -> CoreResult<Vec3> {
        Ok(self.camera(id)?.up_vec)
    }

    fn set_camera_up_vec(&mut self, id: EntityId, up: Vec3) -> CoreResult<()> {
        self.camera_mut(id)?.up_vec = up;
        Ok(())
    }

    fn camera_fov(&self, id: EntityId) -> CoreResult<f32> {
        Ok(self.camera(id)?.fov)
    }

    fn set_camera_fov(&mut self, id: EntityId, fov: f32) -> CoreResult<()> {
        self.camera_mut(id)?.fov = fov;
        Ok(())
    }

    fn camera_aspect(&self, id: EntityId) -> CoreResult<f32> {
        Ok(self.camera(id)?.aspect)
    }

    fn set_camera_aspect(&mut self, id: EntityId, aspect: f32) -> CoreResult<()> {
        self.camera_mut(id)?.aspect = aspect;
        Ok(())
    }

    fn camera_near_plane(&self, id: EntityId) -> CoreResult<f32> {
        Ok(self.camera(id)?.near_plane)
    }

    fn set_camera_near_plane(&mut self, id: EntityId, near: f32) -> CoreResult<()> {
        self.camera_mut(id)?.near_plane = near;
        Ok(())
    }

    fn camera_far_plane(&self, id: EntityId) -> CoreResult<f32> {
        Ok(self.camera(id)?.far_plane)
    }

    fn set_camera_far_plane(&mut self, id: EntityId, far: f32) -> CoreResult<()> {
        self.camera_mut(id)?.far_plane = far;
        Ok(())
    }
}

impl MaterialCore for MemoryCore {
    fn mesh_ids(&self) -> CoreResult<Vec<MeshId>> {
        Ok(self.meshes.keys().copied().collect())
    }

    fn mesh_name(&self, mesh: MeshId) -> CoreResult<String> {
        Ok(self.mesh(mesh)?.name.clone())
    }

    fn selected_mesh(&self) -> CoreResult<Option<MeshId>> {
        Ok(self.selected_mesh)
    }

    fn select_mesh(&mut self, mesh: Option<MeshId>) -> CoreResult<()> {
        if let Some(mesh) = mesh {
            self.mesh(mesh)?;
        }
        self.selected_mesh = mesh;
        Ok(())
    }

    fn mesh_material(&self, mesh: MeshId) -> CoreResult<MaterialId> {
        Ok(self.mesh(mesh)?.material)
    }

    fn set_mesh_material(&mut self, mesh: MeshId, material: MaterialId) -> CoreResult<()> {
        self.material(material)?;
        let record = self.meshes.get_mut(&mesh).ok_or(CoreError::MeshNotFound(mesh))?;
        record.material = material;
        Ok(())
    }

    fn material_ids(&self) -> CoreResult<Vec<MaterialId>> {
        Ok(self.materials.keys().copied().collect())
    }

    fn material_name(&self, id: MaterialId) -> CoreResult<String> {
        Ok(self.material(id)?.name.clone())
    }

    fn material_color(&self, id: MaterialId, channel: MaterialColor) -> CoreResult<Vec3> {
        Ok(self.material(id)?.props.color(channel))
    }

    fn set_material_color(&mut self, id: MaterialId, channel: MaterialColor, value: Vec3) -> CoreResult<()> {
        self.material_mut(id)?.props.set_color(channel, value);
        Ok(())
    }

    fn material_scalar(&self, id: MaterialId, param: MaterialScalar) -> CoreResult<f32> {
        Ok(self.material(id)?.props.scalar(param))
    }

    fn set_material_scalar(&mut self, id: MaterialId, param: MaterialScalar, value: f32) -> CoreResult<()> {
        self.material_mut(id)?.props.set_scalar(param, value);
        Ok(())
    }

    fn material_flag(&self, id: MaterialId, flag: MaterialFlag) -> CoreResult<bool> {
        Ok(self.material(id)?.props.flag(flag))
    }

    fn set_material_flag(&mut self, id: MaterialId, flag: MaterialFlag, on: bool) -> CoreResult<()> {
        self.material_mut(id)?.props.set_flag(flag, on);
        Ok(())
    }

    fn texture(&self, id: MaterialId, slot: TextureSlot) -> CoreResult<String> {
        Ok(self.material(id)?.props.textures.get(slot).to_string())
    }

    fn set_texture(&mut self, id: MaterialId, slot: TextureSlot, name: &str) -> CoreResult<()> {
        self.material_mut(id)?.props.textures.set(slot, name);
        Ok(())
    }

    fn detail_mode(&self, id: MaterialId) -> CoreResult<DetailMode> {
        Ok(self.material(id)?.props.detail_mode)
    }

    fn set_detail_mode(&mut self, id: MaterialId, mode: DetailMode) -> CoreResult<()> {
        self.material_mut(id)?.props.detail_mode = mode;
        Ok(())
    }

    fn copy_material(&mut self, id: MaterialId) -> CoreResult<MaterialId> {
        let source = self.material(id)?;
        let name = format!("{} Copy", source.name);
        let props = source.props.clone();

        let new_id = MaterialId(self.material_ids.next());
        log::debug!("Copied {} to {}", id, new_id);
        self.materials.insert(new_id, MaterialSnapshot { id: new_id, name, props });
        Ok(new_id)
    }

    fn remove_material(&mut self, id: MaterialId) -> CoreResult<()> {
        self.material(id)?;
        if let Some((&mesh, _)) = self.meshes.iter().find(|(_, m)| m.material == id) {
            return Err(CoreError::MaterialInUse { material: id, mesh });
        }
        self.materials.remove(&id);
        log::debug!("Removed {}", id);
        Ok(())
    }

    fn material_snapshot(&self, id: MaterialId) -> CoreResult<MaterialSnapshot> {
        self.material(id).cloned()
    }

    fn restore_material(&mut self, snapshot: &MaterialSnapshot) -> CoreResult<()> {
        if self.materials.contains_key(&snapshot.id) {
            return Err(CoreError::DuplicateMaterial(snapshot.id));
        }
        self.material_ids.observe(snapshot.id.0);
        self.materials.insert(snapshot.id, snapshot.clone());
        Ok(())
    }

    fn import_material(&mut self, path: &Path) -> CoreResult<MaterialId> {
        let file: MaterialFile = document::read_toml(path)?;
        let id = MaterialId(self.material_ids.next());
        self.materials.insert(
            id,
            MaterialSnapshot {
                id,
                name: file.name,
                props: file.material,
            },
        );
        log::info!("Imported {} from {:?}", id, path);
        Ok(id)
    }

    fn export_material(&self, id: MaterialId, path: &Path) -> CoreResult<()> {
        let material = self.material(id)?;
        let file = MaterialFile {
            name: material.name.clone(),
            material: material.props.clone(),
        };
        document::write_toml(&file, path)?;
        log::info!("Exported {} to {:?}", id, path);
        Ok(())
    }
}

impl ViewerCore for MemoryCore {
    fn num_frames(&self) -> CoreResult<u32> {
        Ok(self.num_frames)
    }

    fn current_frame(&self) -> CoreResult<f32> {
        Ok(self.current_frame)
    }

    fn set_current_frame(&mut self, frame: f32) -> CoreResult<()> {
        let last = self.num_frames.saturating_sub(1) as f32;
        if !(0.0..=last).contains(&frame) {
            return Err(CoreError::FrameOutOfRange {
                frame,
                num_frames: self.num_frames,
            });
        }
        self.current_frame = frame;
        Ok(())
    }

    fn viewer_option(&self, option: ViewerOption) -> CoreResult<bool> {
        Ok(self.viewer.get(&option).copied().unwrap_or(false))
    }

    fn set_viewer_option(&mut self, option: ViewerOption, on: bool) -> CoreResult<()> {
        self.viewer.insert(option, on);
        Ok(())
    }
}
