//! Full property backups of entities and materials.
//!
//! A snapshot holds everything needed to recreate an object with its
//! original id after it has been destroyed. Destructive editor commands
//! take one before destroying and hand it back to the core on undo.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::id::{EntityId, MaterialId};
use crate::types::{
    DetailMode, EntityKind, LightAttrib, LightType, MaterialColor, MaterialFlag, MaterialScalar,
    TextureSlot,
};

/// Light-specific attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightProps {
    pub light_type: LightType,
    pub enabled: bool,
    pub attrib: LightAttrib,
    /// Linear RGB
    pub color: Vec3,
    /// Constant, linear and quadratic attenuation
    pub falloff: Vec3,
    /// Radians
    pub inner_angle: f32,
    /// Radians
    pub outer_angle: f32,
    #[serde(default)]
    pub projective_texture: String,
}

impl LightProps {
    pub fn new(light_type: LightType) -> Self {
        Self {
            light_type,
            enabled: true,
            attrib: LightAttrib::NONE,
            color: Vec3::ONE,
            falloff: Vec3::new(1.0, 0.0, 1.0),
            inner_angle: std::f32::consts::FRAC_PI_8,
            outer_angle: std::f32::consts::FRAC_PI_6,
            projective_texture: String::new(),
        }
    }
}

/// Camera-specific attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraProps {
    pub look_at: Vec3,
    pub up_vec: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraProps {
    fn default() -> Self {
        Self {
            look_at: Vec3::new(0.0, 0.0, 1.0),
            up_vec: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 1.0,
            near_plane: 0.1,
            far_plane: 500.0,
        }
    }
}

/// Kind-specific part of an entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityDetail {
    Model { meshml: String },
    Light(LightProps),
    Camera(CameraProps),
}

impl EntityDetail {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityDetail::Model { .. } => EntityKind::Model,
            EntityDetail::Light(_) => EntityKind::Light,
            EntityDetail::Camera(_) => EntityKind::Camera,
        }
    }
}

/// Everything the core knows about one scene entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub name: String,
    pub visible: bool,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub detail: EntityDetail,
}

impl EntitySnapshot {
    pub fn new(id: EntityId, name: impl Into<String>, detail: EntityDetail) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            detail,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.detail.kind()
    }

    pub fn light(&self) -> Option<&LightProps> {
        match &self.detail {
            EntityDetail::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn camera(&self) -> Option<&CameraProps> {
        match &self.detail {
            EntityDetail::Camera(camera) => Some(camera),
            _ => None,
        }
    }
}

/// Texture file names per slot. Empty means no texture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialTextures {
    pub albedo: String,
    pub metalness: String,
    pub glossiness: String,
    pub emissive: String,
    pub normal: String,
    pub height: String,
}

impl MaterialTextures {
    pub fn get(&self, slot: TextureSlot) -> &str {
        match slot {
            TextureSlot::Albedo => &self.albedo,
            TextureSlot::Metalness => &self.metalness,
            TextureSlot::Glossiness => &self.glossiness,
            TextureSlot::Emissive => &self.emissive,
            TextureSlot::Normal => &self.normal,
            TextureSlot::Height => &self.height,
        }
    }

    pub fn set(&mut self, slot: TextureSlot, name: impl Into<String>) {
        let name = name.into();
        match slot {
            TextureSlot::Albedo => self.albedo = name,
            TextureSlot::Metalness => self.metalness = name,
            TextureSlot::Glossiness => self.glossiness = name,
            TextureSlot::Emissive => self.emissive = name,
            TextureSlot::Normal => self.normal = name,
            TextureSlot::Height => self.height = name,
        }
    }
}

/// All editable parameters of a material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialProps {
    pub albedo: Vec3,
    pub emissive: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub metalness: f32,
    pub glossiness: f32,
    pub shininess: f32,
    pub opacity: f32,
    pub alpha_test: f32,
    pub height_offset: f32,
    pub height_scale: f32,
    pub edge_tess_hint: f32,
    pub inside_tess_hint: f32,
    pub min_tess: f32,
    pub max_tess: f32,
    pub transparent: bool,
    pub sss: bool,
    pub two_sided: bool,
    pub detail_mode: DetailMode,
    #[serde(default)]
    pub textures: MaterialTextures,
}

impl Default for MaterialProps {
    fn default() -> Self {
        let mut props = Self {
            albedo: Vec3::splat(0.8),
            emissive: Vec3::ZERO,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ZERO,
            metalness: 0.0,
            glossiness: 0.0,
            shininess: 0.0,
            opacity: 0.0,
            alpha_test: 0.0,
            height_offset: 0.0,
            height_scale: 0.0,
            edge_tess_hint: 0.0,
            inside_tess_hint: 0.0,
            min_tess: 0.0,
            max_tess: 0.0,
            transparent: false,
            sss: false,
            two_sided: false,
            detail_mode: DetailMode::default(),
            textures: MaterialTextures::default(),
        };
        for &param in MaterialScalar::all() {
            props.set_scalar(param, param.default_value());
        }
        props
    }
}

impl MaterialProps {
    pub fn color(&self, channel: MaterialColor) -> Vec3 {
        match channel {
            MaterialColor::Albedo => self.albedo,
            MaterialColor::Emissive => self.emissive,
            MaterialColor::Ambient => self.ambient,
            MaterialColor::Diffuse => self.diffuse,
            MaterialColor::Specular => self.specular,
        }
    }

    pub fn set_color(&mut self, channel: MaterialColor, value: Vec3) {
        let slot = match channel {
            MaterialColor::Albedo => &mut self.albedo,
            MaterialColor::Emissive => &mut self.emissive,
            MaterialColor::Ambient => &mut self.ambient,
            MaterialColor::Diffuse => &mut self.diffuse,
            MaterialColor::Specular => &mut self.specular,
        };
        *slot = value;
    }

    pub fn scalar(&self, param: MaterialScalar) -> f32 {
        match param {
            MaterialScalar::Metalness => self.metalness,
            MaterialScalar::Glossiness => self.glossiness,
            MaterialScalar::Shininess => self.shininess,
            MaterialScalar::Opacity => self.opacity,
            MaterialScalar::AlphaTest => self.alpha_test,
            MaterialScalar::HeightOffset => self.height_offset,
            MaterialScalar::HeightScale => self.height_scale,
            MaterialScalar::EdgeTessHint => self.edge_tess_hint,
            MaterialScalar::InsideTessHint => self.inside_tess_hint,
            MaterialScalar::MinTess => self.min_tess,
            MaterialScalar::MaxTess => self.max_tess,
        }
    }

    pub fn set_scalar(&mut self, param: MaterialScalar, value: f32) {
        let slot = match param {
            MaterialScalar::Metalness => &mut self.metalness,
            MaterialScalar::Glossiness => &mut self.glossiness,
            MaterialScalar::Shininess => &mut self.shininess,
            MaterialScalar::Opacity => &mut self.opacity,
            MaterialScalar::AlphaTest => &mut self.alpha_test,
            MaterialScalar::HeightOffset => &mut self.height_offset,
            MaterialScalar::HeightScale => &mut self.height_scale,
            MaterialScalar::EdgeTessHint => &mut self.edge_tess_hint,
            MaterialScalar::InsideTessHint => &mut self.inside_tess_hint,
            MaterialScalar::MinTess => &mut self.min_tess,
            MaterialScalar::MaxTess => &mut self.max_tess,
        };
        *slot = value;
    }

    pub fn flag(&self, flag: MaterialFlag) -> bool {
        match flag {
            MaterialFlag::Transparent => self.transparent,
            MaterialFlag::Sss => self.sss,
            MaterialFlag::TwoSided => self.two_sided,
        }
    }

    pub fn set_flag(&mut self, flag: MaterialFlag, value: bool) {
        match flag {
            MaterialFlag::Transparent => self.transparent = value,
            MaterialFlag::Sss => self.sss = value,
            MaterialFlag::TwoSided => self.two_sided = value,
        }
    }
}

/// A material with its identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialSnapshot {
    pub id: MaterialId,
    pub name: String,
    pub props: MaterialProps,
}
