//! Degenerate sprite cleanup.
//!
//! An occluder carrying a sprite with no texture has no drawable bounds. The
//! sprite (and its [`ZIndex`]) is removed before any bounds are read, which
//! also turns the occluder into a sprite-less anchor for its children.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::occluder::Occluder;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;

/// Outcome of a cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: usize,
    pub failed: usize,
}

/// Remove sprites without visual content from every [`Occluder`].
///
/// A failed removal is logged and counted; the pass always continues.
pub fn remove_degenerate_sprites(world: &mut World) -> CleanupReport {
    let degenerate: Vec<Entity> = {
        let mut query = world.query_filtered::<(Entity, &Sprite), With<Occluder>>();
        query
            .iter(world)
            .filter(|(_, sprite)| !sprite.has_content())
            .map(|(entity, _)| entity)
            .collect()
    };
    remove_sprites(world, degenerate)
}

/// Remove the sprite and its [`ZIndex`] from each of `entities`.
///
/// Entities that no longer exist (despawned between collection and removal,
/// e.g. by a hook) are logged and counted as failures.
pub fn remove_sprites(
    world: &mut World,
    entities: impl IntoIterator<Item = Entity>,
) -> CleanupReport {
    let mut report = CleanupReport::default();
    for entity in entities {
        match world.get_entity_mut(entity) {
            Ok(mut entity_mut) => {
                entity_mut.remove::<(Sprite, ZIndex)>();
                debug!("Removed degenerate sprite from {:?}", entity);
                report.removed += 1;
            }
            Err(err) => {
                warn!("Could not remove degenerate sprite from {:?}: {}", entity, err);
                report.failed += 1;
            }
        }
    }
    report
}
