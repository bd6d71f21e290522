//! World-space position of a scene node.
//!
//! Unlike an engine-side local position, this value is never relative to a
//! parent: a child spawned with `ChildOf` carries its absolute world position,
//! and nothing propagates transforms down the hierarchy. Calibration reads the
//! positions exactly as authored.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space pivot of a node.
///
/// The scene graph is 2D with Y pointing up: a larger `pos.y` is farther
/// "back" in a top-down view. Depth is not represented.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
