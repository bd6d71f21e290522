//! Reference-Y resolution.
//!
//! The reference Y of a node is the world height its order is computed from.
//! Rules are tried in order and the chain always ends with the node's own
//! position:
//!
//! 1. Composite two-tier: the node has a sprite and its parent does not. The
//!    parent is the anchor (a planting point), so its position wins.
//! 2. Bottom edge of the node's [`BoxCollider`](crate::components::boxcollider::BoxCollider).
//! 3. Bottom edge of the node's sprite, when it has visual content.
//! 4. The node's position.
//!
//! `bottom_offset` is added in every case.

use bevy_ecs::prelude::*;
use log::trace;

use crate::systems::nodes::{NodeView, SceneNodes};

/// Parent of `node` if `node` is the sprite tier of a composite two-tier object.
///
/// Only one level is inspected: a sprite-less grandparent does not matter.
pub fn composite_anchor<'a>(nodes: &'a SceneNodes, node: &NodeView) -> Option<NodeView<'a>> {
    node.sprite?;
    nodes.parent_of(node.entity).filter(|parent| parent.sprite.is_none())
}

/// Resolve the reference Y of an already fetched node.
pub fn reference_y_of(nodes: &SceneNodes, node: &NodeView, bottom_offset: f32) -> f32 {
    if let Some(anchor) = composite_anchor(nodes, node) {
        trace!("{:?}: anchored to parent {:?}", node.entity, anchor.entity);
        return anchor.position.y + bottom_offset;
    }
    if let Some(collider) = node.collider {
        return collider.min_y(node.position) + bottom_offset;
    }
    if let Some((min, _)) = node.sprite.and_then(|s| s.visual_bounds(node.position)) {
        return min.y + bottom_offset;
    }
    node.position.y + bottom_offset
}

/// Resolve the reference Y of `entity`.
///
/// A despawned entity resolves to `bottom_offset`, as if it sat at the origin.
pub fn resolve_reference_y(nodes: &SceneNodes, entity: Entity, bottom_offset: f32) -> f32 {
    match nodes.get(entity) {
        Some(node) => reference_y_of(nodes, &node, bottom_offset),
        None => bottom_offset,
    }
}
