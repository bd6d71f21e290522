//! Read-only view of the scene graph used by the calibration pass.
//!
//! Every step after cleanup reads nodes through [`SceneNodes`], so the
//! ordering logic never depends on how the world stores its entities and can
//! run as a regular system or through a [`SystemState`](bevy_ecs::system::SystemState).

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamicsort::DynamicSort;
use crate::components::label::Label;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;

type NodeData = (
    Option<&'static ChildOf>,
    Option<&'static MapPosition>,
    Option<&'static BoxCollider>,
    Option<&'static Sprite>,
    Option<&'static Label>,
    Has<DynamicSort>,
);

/// Snapshot of the components calibration reads from one node.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    pub entity: Entity,
    pub parent: Option<Entity>,
    /// World position; nodes without a [`MapPosition`] sit at the origin.
    pub position: Vec2,
    pub collider: Option<&'a BoxCollider>,
    pub sprite: Option<&'a Sprite>,
    pub label: Option<&'a Label>,
    pub dynamic: bool,
}

/// System parameter giving read access to any node by entity.
#[derive(SystemParam)]
pub struct SceneNodes<'w, 's> {
    nodes: Query<'w, 's, NodeData>,
}

impl SceneNodes<'_, '_> {
    /// Look up a node. Returns `None` for entities that no longer exist.
    pub fn get(&self, entity: Entity) -> Option<NodeView<'_>> {
        let (child_of, position, collider, sprite, label, dynamic) =
            self.nodes.get(entity).ok()?;
        Some(NodeView {
            entity,
            parent: child_of.map(ChildOf::parent),
            position: position.map(|p| p.pos).unwrap_or_default(),
            collider,
            sprite,
            label,
            dynamic,
        })
    }

    /// Parent of `entity`, only if it still exists in the world.
    pub fn parent_of(&self, entity: Entity) -> Option<NodeView<'_>> {
        self.get(entity)
            .and_then(|node| node.parent)
            .and_then(|parent| self.get(parent))
    }
}
