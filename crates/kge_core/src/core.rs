//! The engine core boundary.
//!
//! Editor tools never touch engine state directly. Every read and write goes
//! through these traits, one per target group. A production implementation
//! forwards to the native engine; [`MemoryCore`](crate::memory::MemoryCore)
//! keeps everything in memory.
//!
//! All traits are object safe so commands can run against
//! `&mut dyn EngineCore`.

use std::path::Path;

use glam::{Quat, Vec3};

use crate::error::CoreResult;
use crate::id::{EntityId, MaterialId, MeshId};
use crate::snapshot::{EntitySnapshot, MaterialSnapshot};
use crate::types::{
    ControlMode, DetailMode, DisplayOption, EntityKind, LightAttrib, LightType, MaterialColor,
    MaterialFlag, MaterialScalar, TextureSlot, ViewerOption,
};

/// Document-wide state of the scene editor.
pub trait SceneCore {
    fn scene_name(&self) -> CoreResult<String>;
    fn set_scene_name(&mut self, name: &str) -> CoreResult<()>;

    /// Skybox texture name. Shared with the material editor and viewers.
    fn skybox_name(&self) -> CoreResult<String>;
    fn set_skybox_name(&mut self, name: &str) -> CoreResult<()>;

    /// Camera the viewport renders through; `None` is the free editor camera.
    fn active_camera(&self) -> CoreResult<Option<EntityId>>;
    fn set_active_camera(&mut self, id: Option<EntityId>) -> CoreResult<()>;

    fn control_mode(&self) -> CoreResult<ControlMode>;
    fn set_control_mode(&mut self, mode: ControlMode) -> CoreResult<()>;

    fn display_option(&self, option: DisplayOption) -> CoreResult<bool>;
    fn set_display_option(&mut self, option: DisplayOption, on: bool) -> CoreResult<()>;

    fn load_scene(&mut self, path: &Path) -> CoreResult<()>;
    fn save_scene(&self, path: &Path) -> CoreResult<()>;
    fn close_scene(&mut self) -> CoreResult<()>;
}

/// Per-entity state shared by models, lights and cameras.
pub trait EntityCore {
    fn entity_ids(&self) -> CoreResult<Vec<EntityId>>;
    fn entity_kind(&self, id: EntityId) -> CoreResult<EntityKind>;

    /// Load a model file and place it in the scene.
    fn add_model(&mut self, meshml: &str) -> CoreResult<EntityId>;
    fn add_light(&mut self, light_type: LightType, name: &str) -> CoreResult<EntityId>;
    fn add_camera(&mut self, name: &str) -> CoreResult<EntityId>;
    fn remove_entity(&mut self, id: EntityId) -> CoreResult<()>;

    /// Capture every property of an entity.
    fn entity_snapshot(&self, id: EntityId) -> CoreResult<EntitySnapshot>;
    /// Recreate an entity from a snapshot, keeping its id.
    fn restore_entity(&mut self, snapshot: &EntitySnapshot) -> CoreResult<()>;

    fn selected_entity(&self) -> CoreResult<Option<EntityId>>;
    fn select_entity(&mut self, id: Option<EntityId>) -> CoreResult<()>;

    fn entity_name(&self, id: EntityId) -> CoreResult<String>;
    fn set_entity_name(&mut self, id: EntityId, name: &str) -> CoreResult<()>;
    fn entity_visible(&self, id: EntityId) -> CoreResult<bool>;
    fn set_entity_visible(&mut self, id: EntityId, visible: bool) -> CoreResult<()>;
    fn entity_translation(&self, id: EntityId) -> CoreResult<Vec3>;
    fn set_entity_translation(&mut self, id: EntityId, translation: Vec3) -> CoreResult<()>;
    fn entity_rotation(&self, id: EntityId) -> CoreResult<Quat>;
    fn set_entity_rotation(&mut self, id: EntityId, rotation: Quat) -> CoreResult<()>;
    fn entity_scale(&self, id: EntityId) -> CoreResult<Vec3>;
    fn set_entity_scale(&mut self, id: EntityId, scale: Vec3) -> CoreResult<()>;
}

/// Light entity attributes.
pub trait LightCore {
    fn light_type(&self, id: EntityId) -> CoreResult<LightType>;
    fn light_enabled(&self, id: EntityId) -> CoreResult<bool>;
    fn set_light_enabled(&mut self, id: EntityId, enabled: bool) -> CoreResult<()>;
    fn light_attrib(&self, id: EntityId) -> CoreResult<LightAttrib>;
    fn set_light_attrib(&mut self, id: EntityId, attrib: LightAttrib) -> CoreResult<()>;
    fn light_color(&self, id: EntityId) -> CoreResult<Vec3>;
    fn set_light_color(&mut self, id: EntityId, color: Vec3) -> CoreResult<()>;
    fn light_falloff(&self, id: EntityId) -> CoreResult<Vec3>;
    fn set_light_falloff(&mut self, id: EntityId, falloff: Vec3) -> CoreResult<()>;
    fn light_inner_angle(&self, id: EntityId) -> CoreResult<f32>;
    fn set_light_inner_angle(&mut self, id: EntityId, angle: f32) -> CoreResult<()>;
    fn light_outer_angle(&self, id: EntityId) -> CoreResult<f32>;
    fn set_light_outer_angle(&mut self, id: EntityId, angle: f32) -> CoreResult<()>;
    fn light_projective_texture(&self, id: EntityId) -> CoreResult<String>;
    fn set_light_projective_texture(&mut self, id: EntityId, name: &str) -> CoreResult<()>;
}

/// Camera entity attributes.
pub trait CameraCore {
    fn camera_look_at(&self, id: EntityId) -> CoreResult<Vec3>;
    fn set_camera_look_at(&mut self, id: EntityId, look_at: Vec3) -> CoreResult<()>;
    fn camera_up_vec(&self, id: EntityId) -> CoreResult<Vec3>;
    fn set_camera_up_vec(&mut self, id: EntityId, up: Vec3) -> CoreResult<()>;
    fn camera_fov(&self, id: EntityId) -> CoreResult<f32>;
    fn set_camera_fov(&mut self, id: EntityId, fov: f32) -> CoreResult<()>;
    fn camera_aspect(&self, id: EntityId) -> CoreResult<f32>;
    fn set_camera_aspect(&mut self, id: EntityId, aspect: f32) -> CoreResult<()>;
    fn camera_near_plane(&self, id: EntityId) -> CoreResult<f32>;
    fn set_camera_near_plane(&mut self, id: EntityId, near: f32) -> CoreResult<()>;
    fn camera_far_plane(&self, id: EntityId) -> CoreResult<f32>;
    fn set_camera_far_plane(&mut self, id: EntityId, far: f32) -> CoreResult<()>;
}

/// Meshes and materials of the loaded model (material editor).
pub trait MaterialCore {
    fn mesh_ids(&self) -> CoreResult<Vec<MeshId>>;
    fn mesh_name(&self, mesh: MeshId) -> CoreResult<String>;
    fn selected_mesh(&self) -> CoreResult<Option<MeshId>>;
    fn select_mesh(&mut self, mesh: Option<MeshId>) -> CoreResult<()>;
    fn mesh_material(&self, mesh: MeshId) -> CoreResult<MaterialId>;
    fn set_mesh_material(&mut self, mesh: MeshId, material: MaterialId) -> CoreResult<()>;

    fn material_ids(&self) -> CoreResult<Vec<MaterialId>>;
    fn material_name(&self, id: MaterialId) -> CoreResult<String>;
    fn material_color(&self, id: MaterialId, channel: MaterialColor) -> CoreResult<Vec3>;
    fn set_material_color(&mut self, id: MaterialId, channel: MaterialColor, value: Vec3) -> CoreResult<()>;
    fn material_scalar(&self, id: MaterialId, param: MaterialScalar) -> CoreResult<f32>;
    fn set_material_scalar(&mut self, id: MaterialId, param: MaterialScalar, value: f32) -> CoreResult<()>;
    fn material_flag(&self, id: MaterialId, flag: MaterialFlag) -> CoreResult<bool>;
    fn set_material_flag(&mut self, id: MaterialId, flag: MaterialFlag, on: bool) -> CoreResult<()>;
    fn texture(&self, id: MaterialId, slot: TextureSlot) -> CoreResult<String>;
    fn set_texture(&mut self, id: MaterialId, slot: TextureSlot, name: &str) -> CoreResult<()>;
    fn detail_mode(&self, id: MaterialId) -> CoreResult<DetailMode>;
    fn set_detail_mode(&mut self, id: MaterialId, mode: DetailMode) -> CoreResult<()>;

    /// Duplicate a material, returning the id of the copy.
    fn copy_material(&mut self, id: MaterialId) -> CoreResult<MaterialId>;
    /// Destroy a material. Meshes still using it must be reassigned first.
    fn remove_material(&mut self, id: MaterialId) -> CoreResult<()>;
    fn material_snapshot(&self, id: MaterialId) -> CoreResult<MaterialSnapshot>;
    fn restore_material(&mut self, snapshot: &MaterialSnapshot) -> CoreResult<()>;
    fn import_material(&mut self, path: &Path) -> CoreResult<MaterialId>;
    fn export_material(&self, id: MaterialId, path: &Path) -> CoreResult<()>;
}

/// Animation playback and render toggles of the model viewers.
pub trait ViewerCore {
    fn num_frames(&self) -> CoreResult<u32>;
    fn current_frame(&self) -> CoreResult<f32>;
    fn set_current_frame(&mut self, frame: f32) -> CoreResult<()>;
    fn viewer_option(&self, option: ViewerOption) -> CoreResult<bool>;
    fn set_viewer_option(&mut self, option: ViewerOption, on: bool) -> CoreResult<()>;
}

/// Everything an editor command may touch.
pub trait EngineCore: SceneCore + EntityCore + LightCore + CameraCore + MaterialCore + ViewerCore {}

impl<T> EngineCore for T where T: SceneCore + EntityCore + LightCore + CameraCore + MaterialCore + ViewerCore {}
