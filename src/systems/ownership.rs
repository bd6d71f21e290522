//! Dynamic-ownership filter.
//!
//! Nodes under a [`DynamicSort`](crate::components::dynamicsort::DynamicSort)
//! marker are re-sorted every frame at runtime and must not be touched by the
//! static pass.

use bevy_ecs::prelude::*;

use crate::systems::nodes::SceneNodes;

/// Returns `true` if `entity` or any of its ancestors carries `DynamicSort`.
///
/// Walks `ChildOf` links upwards; the hierarchy is assumed acyclic.
pub fn is_excluded(nodes: &SceneNodes, entity: Entity) -> bool {
    let mut current = nodes.get(entity);
    while let Some(node) = current {
        if node.dynamic {
            return true;
        }
        current = node.parent.and_then(|parent| nodes.get(parent));
    }
    false
}
