//! JSON scene descriptions.
//!
//! A [`SceneData`] is a flat list of nodes with string ids and optional parent
//! ids. It is spawned into a [`World`] for calibration and the resulting
//! orders are copied back so the file can be rewritten.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "oak", "position": [4.0, 5.25] },
//!     { "id": "oak_top", "parent": "oak", "position": [4.0, 5.5],
//!       "sprite": { "texture": "oak.png", "width": 2.0, "height": 3.0, "sort_order": 0 } },
//!     { "id": "oak_shadow", "parent": "oak_top", "position": [4.0, 5.0],
//!       "sprite": { "texture": "shadow.png", "width": 2.0, "height": 1.0 } },
//!     { "id": "player", "dynamic": true, "position": [0.0, 0.0],
//!       "sprite": { "texture": "hero.png", "width": 1.0, "height": 2.0 } }
//!   ]
//! }
//! ```
//!
//! Nodes without a `label` are classified by their `id`.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamicsort::DynamicSort;
use crate::components::label::Label;
use crate::components::mapposition::MapPosition;
use crate::components::occluder::Occluder;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;

/// Whole scene as stored on disk.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SceneData {
    pub nodes: Vec<NodeData>,
}

/// One scene node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NodeData {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<SpriteData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collider: Option<ColliderData>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dynamic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub occluder: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SpriteData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub origin: [f32; 2],
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ColliderData {
    pub size: [f32; 2],
    #[serde(default)]
    pub offset: [f32; 2],
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Maps node ids to the entities spawned for them.
pub type SceneIndex = FxHashMap<String, Entity>;

impl SceneData {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let scene: SceneData = serde_json::from_str(&file_content)?;
        Ok(scene)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that ids are unique and that parent links do not loop.
    ///
    /// Unknown parents are not an error; they are reported when spawning.
    pub fn validate(&self) -> Result<(), String> {
        let mut parents: FxHashMap<&str, Option<&str>> = FxHashMap::default();
        for node in &self.nodes {
            if parents
                .insert(node.id.as_str(), node.parent.as_deref())
                .is_some()
            {
                return Err(format!("Duplicate node id '{}'", node.id));
            }
        }

        for node in &self.nodes {
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            let mut current = Some(node.id.as_str());
            while let Some(id) = current {
                if !seen.insert(id) {
                    return Err(format!("Parent cycle through node '{}'", id));
                }
                current = parents.get(id).copied().flatten();
            }
        }
        Ok(())
    }

    /// Spawn every node into `world` and link parents with [`ChildOf`].
    pub fn spawn_into(&self, world: &mut World) -> Result<SceneIndex, String> {
        self.validate()?;

        let mut index = SceneIndex::default();
        for node in &self.nodes {
            let entity = spawn_node(world, node);
            index.insert(node.id.clone(), entity);
        }

        for node in &self.nodes {
            let Some(parent_id) = node.parent.as_deref() else {
                continue;
            };
            match index.get(parent_id) {
                Some(&parent) => {
                    world.entity_mut(index[&node.id]).insert(ChildOf(parent));
                }
                None => warn!(
                    "Node '{}' references unknown parent '{}', treating it as a root",
                    node.id, parent_id
                ),
            }
        }
        world.flush();
        Ok(index)
    }

    /// Copy sort orders back from `world`.
    ///
    /// Sprites that no longer exist on their entity (removed by cleanup) are
    /// dropped from the description.
    pub fn sync_from_world(&mut self, world: &World, index: &SceneIndex) {
        for node in &mut self.nodes {
            let Some(&entity) = index.get(&node.id) else {
                continue;
            };
            if node.sprite.is_none() {
                continue;
            }
            if world.get::<Sprite>(entity).is_none() {
                node.sprite = None;
                continue;
            }
            if let (Some(sprite), Some(z_index)) = (node.sprite.as_mut(), world.get::<ZIndex>(entity)) {
                sprite.sort_order = z_index.0;
            }
        }
    }
}

fn spawn_node(world: &mut World, node: &NodeData) -> Entity {
    let label = node.label.clone().unwrap_or_else(|| node.id.clone());
    let mut entity = world.spawn((
        MapPosition::new(node.position[0], node.position[1]),
        Label::new(label),
    ));

    if let Some(sprite) = &node.sprite {
        entity.insert((
            Sprite {
                tex_key: sprite.texture.clone(),
                width: sprite.width,
                height: sprite.height,
                origin: Vec2::from(sprite.origin),
            },
            ZIndex(sprite.sort_order),
        ));
    }
    if let Some(collider) = &node.collider {
        entity.insert(
            BoxCollider::new(collider.size[0], collider.size[1])
                .with_offset(Vec2::from(collider.offset)),
        );
    }
    if node.dynamic {
        entity.insert(DynamicSort);
    }
    if node.occluder {
        entity.insert(Occluder);
    }
    entity.id()
}
