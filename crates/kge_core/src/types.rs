//! Property vocabulary shared by the core traits and the editor commands.

use serde::{Deserialize, Serialize};

/// What a scene entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Model,
    Light,
    Camera,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Model => "Model",
            EntityKind::Light => "Light",
            EntityKind::Camera => "Camera",
        }
    }

    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::Model, EntityKind::Light, EntityKind::Camera]
    }
}

/// Light source type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightType {
    Ambient,
    Point,
    Directional,
    Spot,
    SphereArea,
    TubeArea,
}

impl LightType {
    pub fn name(&self) -> &'static str {
        match self {
            LightType::Ambient => "Ambient",
            LightType::Point => "Point",
            LightType::Directional => "Directional",
            LightType::Spot => "Spot",
            LightType::SphereArea => "Sphere Area",
            LightType::TubeArea => "Tube Area",
        }
    }

    /// Whether inner/outer cone angles mean anything for this type.
    pub fn has_cone(&self) -> bool {
        matches!(self, LightType::Spot)
    }
}

/// Light attribute bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightAttrib(pub u32);

impl LightAttrib {
    pub const NONE: Self = Self(0);
    pub const NO_SHADOW: Self = Self(1 << 0);
    pub const NO_DIFFUSE: Self = Self(1 << 1);
    pub const NO_SPECULAR: Self = Self(1 << 2);
    pub const INDIRECT: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl std::ops::BitOr for LightAttrib {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

/// Viewport manipulation mode of the scene editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    #[default]
    Selection,
    Translation,
    Rotation,
    Scaling,
}

/// Post-processing toggles of the scene viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayOption {
    Ssvo,
    Hdr,
    Aa,
    Gamma,
    ColorGrading,
}

impl DisplayOption {
    pub fn all() -> &'static [DisplayOption] {
        &[
            DisplayOption::Ssvo,
            DisplayOption::Hdr,
            DisplayOption::Aa,
            DisplayOption::Gamma,
            DisplayOption::ColorGrading,
        ]
    }
}

/// Model viewer toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerOption {
    Skinning,
    SmoothMesh,
    LineMode,
    FpsCamera,
}

impl ViewerOption {
    pub fn all() -> &'static [ViewerOption] {
        &[
            ViewerOption::Skinning,
            ViewerOption::SmoothMesh,
            ViewerOption::LineMode,
            ViewerOption::FpsCamera,
        ]
    }
}

/// Colour channels of a material, stored as linear RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialColor {
    Albedo,
    Emissive,
    Ambient,
    Diffuse,
    Specular,
}

impl MaterialColor {
    pub fn all() -> &'static [MaterialColor] {
        &[
            MaterialColor::Albedo,
            MaterialColor::Emissive,
            MaterialColor::Ambient,
            MaterialColor::Diffuse,
            MaterialColor::Specular,
        ]
    }
}

/// Scalar material parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialScalar {
    Metalness,
    Glossiness,
    Shininess,
    Opacity,
    /// Alpha test threshold, 0 disables the test
    AlphaTest,
    HeightOffset,
    HeightScale,
    EdgeTessHint,
    InsideTessHint,
    MinTess,
    MaxTess,
}

impl MaterialScalar {
    pub fn all() -> &'static [MaterialScalar] {
        &[
            MaterialScalar::Metalness,
            MaterialScalar::Glossiness,
            MaterialScalar::Shininess,
            MaterialScalar::Opacity,
            MaterialScalar::AlphaTest,
            MaterialScalar::HeightOffset,
            MaterialScalar::HeightScale,
            MaterialScalar::EdgeTessHint,
            MaterialScalar::InsideTessHint,
            MaterialScalar::MinTess,
            MaterialScalar::MaxTess,
        ]
    }

    /// Value a freshly created material starts with.
    pub fn default_value(&self) -> f32 {
        match self {
            MaterialScalar::Metalness => 0.0,
            MaterialScalar::Glossiness => 0.5,
            MaterialScalar::Shininess => 32.0,
            MaterialScalar::Opacity => 1.0,
            MaterialScalar::AlphaTest => 0.0,
            MaterialScalar::HeightOffset => -0.5,
            MaterialScalar::HeightScale => 0.06,
            MaterialScalar::EdgeTessHint => 5.0,
            MaterialScalar::InsideTessHint => 5.0,
            MaterialScalar::MinTess => 1.0,
            MaterialScalar::MaxTess => 9.0,
        }
    }
}

/// Boolean material flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialFlag {
    Transparent,
    Sss,
    TwoSided,
}

impl MaterialFlag {
    pub fn all() -> &'static [MaterialFlag] {
        &[MaterialFlag::Transparent, MaterialFlag::Sss, MaterialFlag::TwoSided]
    }
}

/// Texture slots of a material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureSlot {
    Albedo,
    Metalness,
    Glossiness,
    Emissive,
    Normal,
    Height,
}

impl TextureSlot {
    pub fn all() -> &'static [TextureSlot] {
        &[
            TextureSlot::Albedo,
            TextureSlot::Metalness,
            TextureSlot::Glossiness,
            TextureSlot::Emissive,
            TextureSlot::Normal,
            TextureSlot::Height,
        ]
    }
}

/// How the height map of a material is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailMode {
    #[default]
    Parallax,
    ParallaxOcclusion,
    FlatTessellation,
    SmoothTessellation,
}
