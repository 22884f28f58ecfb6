//! Scene files describing scripted collidable objects.
//!
//! A scene is a TOML document with one `[[objects]]` table per object:
//!
//! ```toml
//! name = "duel"
//!
//! [[objects]]
//! id = 1
//! name = "knight"
//! position = [0.0, 0.0]
//! velocity = [40.0, 0.0]
//! size = [32.0, 32.0]
//!
//! [[objects.attack]]
//! shape = "box"
//! offset = [24.0, 8.0]
//! size = [16.0, 8.0]
//! hit_type = 1
//! ```
//!
//! Objects without an explicit `bounding` volume get the box enclosing all
//! of their attack and vulnerability volumes.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use riposte_collision::{AaBoxVolume, HitType, SharedVolume, SphereVolume, VolumeList};
use riposte_common::ScenarioError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during scene loading.
#[derive(Debug, Error)]
pub enum SceneLoadError {
    /// Failed to read file.
    #[error("Failed to read scene file {path}: {source}")]
    ReadError {
        /// Scene path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Scene parsed but describes something unusable.
    #[error(transparent)]
    Invalid(#[from] ScenarioError),
}

/// Volume as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum VolumeDef {
    /// Axis-aligned box.
    Box {
        /// Bottom-left corner
        offset: Vec2,
        /// Width and height
        size: Vec2,
        /// Hit type tag
        #[serde(default)]
        hit_type: HitType,
    },
    /// Circle.
    Sphere {
        /// Center
        center: Vec2,
        /// Radius
        radius: f32,
        /// Hit type tag
        #[serde(default)]
        hit_type: HitType,
    },
}

impl VolumeDef {
    /// Build the runtime volume.
    #[must_use]
    pub fn build(&self) -> SharedVolume {
        match *self {
            Self::Box {
                offset,
                size,
                hit_type,
            } => AaBoxVolume::new(offset.x, offset.y, size.x, size.y)
                .with_hit_type(hit_type)
                .into_shared(),
            Self::Sphere {
                center,
                radius,
                hit_type,
            } => SphereVolume::new(center.x, center.y, radius)
                .with_hit_type(hit_type)
                .into_shared(),
        }
    }
}

const fn default_facing() -> Vec2 {
    Vec2::X
}

const fn default_true() -> bool {
    true
}

/// Object as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDef {
    /// Unique object ID
    pub id: u64,
    /// Display name for logs
    #[serde(default)]
    pub name: String,
    /// Starting world position
    #[serde(default)]
    pub position: Vec2,
    /// Units per second
    #[serde(default)]
    pub velocity: Vec2,
    /// Facing direction
    #[serde(default = "default_facing")]
    pub facing: Vec2,
    /// Unflipped sprite size
    #[serde(default)]
    pub size: Vec2,
    /// Whether the object handles hit notifications
    #[serde(default = "default_true")]
    pub reacts: bool,
    /// Whether the object accepts hits it receives
    #[serde(default = "default_true")]
    pub accepts_hits: bool,
    /// Explicit bounding volume
    #[serde(default)]
    pub bounding: Option<VolumeDef>,
    /// Volumes that deal hits
    #[serde(default)]
    pub attack: Vec<VolumeDef>,
    /// Volumes that receive hits
    #[serde(default)]
    pub vulnerability: Vec<VolumeDef>,
}

impl ObjectDef {
    /// Name for logs, falling back to the ID.
    #[must_use]
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("object-{}", self.id)
        } else {
            self.name.clone()
        }
    }

    /// Runtime attack volumes, `None` when there are none.
    #[must_use]
    pub fn attack_volumes(&self) -> Option<VolumeList> {
        build_list(&self.attack)
    }

    /// Runtime vulnerability volumes, `None` when there are none.
    #[must_use]
    pub fn vulnerability_volumes(&self) -> Option<VolumeList> {
        build_list(&self.vulnerability)
    }

    /// Explicit bounding volume, or the box enclosing every other volume.
    #[must_use]
    pub fn bounding_volume(&self) -> SharedVolume {
        if let Some(bounding) = &self.bounding {
            return bounding.build();
        }
        let parts: Vec<SharedVolume> = self
            .attack
            .iter()
            .chain(&self.vulnerability)
            .map(VolumeDef::build)
            .collect();
        AaBoxVolume::enclosing(&parts).into_shared()
    }
}

fn build_list(defs: &[VolumeDef]) -> Option<VolumeList> {
    if defs.is_empty() {
        None
    } else {
        Some(defs.iter().map(VolumeDef::build).collect())
    }
}

/// A parsed and validated scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name
    #[serde(default)]
    pub name: String,
    /// Objects in registration order
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
}

impl Scene {
    /// Load and validate a scene file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SceneLoadError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_toml_str(&contents)?;
        info!(
            "Loaded scene '{}' with {} objects from {}",
            scene.name,
            scene.objects.len(),
            path.display()
        );
        Ok(scene)
    }

    /// Parse and validate a scene from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, SceneLoadError> {
        let scene: Self = toml::from_str(contents)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Checks every object can take part in collision.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.objects.is_empty() {
            return Err(ScenarioError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.objects.len());
        for object in &self.objects {
            if !seen.insert(object.id) {
                return Err(ScenarioError::DuplicateObject(object.id));
            }
            if object.attack.is_empty() && object.vulnerability.is_empty() {
                return Err(ScenarioError::NoVolumes(object.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riposte_collision::{CollisionVolume, VolumeShape};

    const DUEL: &str = include_str!("../scenes/duel.toml");

    #[test]
    fn test_bundled_scene_parses() {
        let scene = Scene::from_toml_str(DUEL).expect("bundled scene is valid");
        assert_eq!(scene.name, "duel");
        assert!(scene.objects.len() >= 2);
    }

    #[test]
    fn test_defaults_and_shapes() {
        let scene = Scene::from_toml_str(
            r#"
            [[objects]]
            id = 7

            [[objects.vulnerability]]
            shape = "sphere"
            center = [4.0, 4.0]
            radius = 4.0

            [[objects.attack]]
            shape = "box"
            offset = [8.0, 0.0]
            size = [4.0, 2.0]
            hit_type = 2
            "#,
        )
        .expect("valid scene");

        let object = &scene.objects[0];
        assert_eq!(object.label(), "object-7");
        assert_eq!(object.facing, Vec2::X);
        assert!(object.reacts);
        assert!(object.accepts_hits);

        let attack = object.attack_volumes().expect("attack volumes");
        assert_eq!(attack[0].hit_type(), HitType::DEATH);
        assert!(matches!(attack[0].shape(), VolumeShape::AaBox(_)));

        let vulnerability = object.vulnerability_volumes().expect("vulnerability volumes");
        assert_eq!(vulnerability[0].hit_type(), HitType::INVALID);
        assert!(matches!(vulnerability[0].shape(), VolumeShape::Sphere(_)));
    }

    #[test]
    fn test_bounding_encloses_volumes() {
        let object = ObjectDef {
            id: 1,
            name: "slime".to_string(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            facing: Vec2::X,
            size: Vec2::new(16.0, 16.0),
            reacts: true,
            accepts_hits: true,
            bounding: None,
            attack: vec![VolumeDef::Box {
                offset: Vec2::new(12.0, 0.0),
                size: Vec2::new(8.0, 4.0),
                hit_type: HitType::HIT,
            }],
            vulnerability: vec![VolumeDef::Sphere {
                center: Vec2::new(4.0, 4.0),
                radius: 4.0,
                hit_type: HitType::INVALID,
            }],
        };

        let bounding = object.bounding_volume();
        assert_eq!(bounding.min_x(), 0.0);
        assert_eq!(bounding.max_x(), 20.0);
        assert_eq!(bounding.min_y(), 0.0);
        assert_eq!(bounding.max_y(), 8.0);
        assert!(object.attack_volumes().is_some());
    }

    #[test]
    fn test_explicit_bounding_wins() {
        let scene = Scene::from_toml_str(
            r#"
            [[objects]]
            id = 1
            bounding = { shape = "sphere", center = [0.0, 0.0], radius = 50.0 }

            [[objects.vulnerability]]
            shape = "box"
            offset = [0.0, 0.0]
            size = [2.0, 2.0]
            "#,
        )
        .expect("valid scene");

        let bounding = scene.objects[0].bounding_volume();
        assert!(matches!(bounding.shape(), VolumeShape::Sphere(_)));
        assert_eq!(bounding.max_x(), 50.0);
    }

    #[test]
    fn test_validation_errors() {
        let empty = Scene::from_toml_str("name = \"nothing\"");
        assert!(matches!(empty, Err(SceneLoadError::Invalid(ScenarioError::Empty))));

        let duplicate = Scene::from_toml_str(
            r#"
            [[objects]]
            id = 1
            vulnerability = [{ shape = "box", offset = [0.0, 0.0], size = [1.0, 1.0] }]

            [[objects]]
            id = 1
            vulnerability = [{ shape = "box", offset = [0.0, 0.0], size = [1.0, 1.0] }]
            "#,
        );
        assert!(matches!(
            duplicate,
            Err(SceneLoadError::Invalid(ScenarioError::DuplicateObject(1)))
        ));

        let bare = Scene::from_toml_str("[[objects]]\nid = 3\n");
        assert!(matches!(bare, Err(SceneLoadError::Invalid(ScenarioError::NoVolumes(3)))));
    }

    #[test]
    fn test_unknown_shape_is_parse_error() {
        let result = Scene::from_toml_str(
            r#"
            [[objects]]
            id = 1
            attack = [{ shape = "triangle", offset = [0.0, 0.0] }]
            "#,
        );
        assert!(matches!(result, Err(SceneLoadError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("duel.toml");
        fs::write(&path, DUEL).expect("write scene");

        let scene = Scene::load_from(&path).expect("load scene");
        assert_eq!(scene.name, "duel");

        let missing = Scene::load_from(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(SceneLoadError::ReadError { .. })));
    }
}
