//! Marker for nodes whose draw order is owned by a per-frame sorter.

use bevy_ecs::prelude::Component;

/// Excludes this node and its whole subtree from static calibration.
///
/// A runtime system re-sorts these every frame (the player, NPCs, anything
/// that moves); calibration leaves their [`ZIndex`](super::zindex::ZIndex)
/// alone so the two never fight.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DynamicSort;
