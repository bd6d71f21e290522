use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::zindex::ZIndex;

/// Renderable sprite attached to a scene node.
///
/// `tex_key` is the visual content reference. A sprite without one (or with
/// an empty key) is *degenerate*: it has no visual bounds and is ignored as a
/// bounds source. `origin` is the pivot measured from the sprite's bottom-left
/// corner, in world units.
#[derive(Component, Clone, Debug, Default, PartialEq)]
#[require(ZIndex)]
pub struct Sprite {
    pub tex_key: Option<String>,
    pub width: f32,
    pub height: f32,
    pub origin: Vec2,
}

impl Sprite {
    /// Create a sprite with visual content and its pivot at the bottom-left corner.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: Some(tex_key.into()),
            width,
            height,
            origin: Vec2::ZERO,
        }
    }

    /// Create a sprite with no visual content.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Returns `true` when the sprite references actual visual content.
    pub fn has_content(&self) -> bool {
        self.tex_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Returns (min, max) of the drawn rectangle for a node at `position`,
    /// or `None` for a degenerate sprite.
    pub fn visual_bounds(&self, position: Vec2) -> Option<(Vec2, Vec2)> {
        if !self.has_content() {
            return None;
        }
        let p0 = position - self.origin;
        let p1 = p0 + Vec2::new(self.width, self.height);
        Some((p0.min(p1), p0.max(p1)))
    }
}
