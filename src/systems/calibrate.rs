//! Calibration driver.
//!
//! One synchronous pass over the whole world:
//!
//! 1. [`remove_degenerate_sprites`] strips empty sprites from occluders.
//! 2. Every sprite-carrying node that is not dynamically owned is a candidate.
//! 3. Reserved orders (at or below the threshold) are left untouched.
//! 4. Everything else gets its computed order, written only when it differs.
//!    Computed orders never land in the reserved band; they are clamped to
//!    `reserved_threshold + 1`.
//!
//! Computed orders depend on geometry and labels only, never on stored
//! orders, so a second pass over an unchanged world writes nothing.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use log::{debug, info, warn};

use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::calibrationconfig::CalibrationConfig;
use crate::resources::calibrationsummary::{CalibrationSummary, LastCalibration};
use crate::systems::cleanup::remove_degenerate_sprites;
use crate::systems::classify::SortClass;
use crate::systems::nodes::SceneNodes;
use crate::systems::ownership::is_excluded;
use crate::systems::sortkey::order_of;

/// Apply computed orders to every candidate sprite.
///
/// Does not run cleanup; `removed` and `failed_removals` stay at zero.
pub fn apply_orders(
    nodes: &SceneNodes,
    orders: &mut Query<(Entity, &mut ZIndex), With<Sprite>>,
    config: &CalibrationConfig,
) -> CalibrationSummary {
    let mut summary = CalibrationSummary::default();

    for (entity, mut z_index) in orders.iter_mut() {
        let Some(node) = nodes.get(entity) else {
            debug!("{:?}: not readable as a scene node, ignored", entity);
            continue;
        };
        if is_excluded(nodes, entity) {
            summary.excluded += 1;
            continue;
        }
        summary.total += 1;

        if z_index.0 <= config.reserved_threshold {
            debug!("{:?}: reserved order {} kept", entity, z_index.0);
            summary.skipped += 1;
            continue;
        }

        let class = SortClass::of(node.label);
        let order = outside_reserved_band(entity, order_of(nodes, &node, class, config), config);
        if z_index.0 != order {
            debug!("{:?} ({:?}): {} -> {}", entity, class, z_index.0, order);
            z_index.0 = order;
            summary.calibrated += 1;
        }
    }

    summary
}

/// Clamp a computed order to just above the reserved band.
///
/// A computed value inside the band would be taken for a hand-placed marker
/// on the next pass and frozen there.
pub fn outside_reserved_band(entity: Entity, order: i32, config: &CalibrationConfig) -> i32 {
    if order > config.reserved_threshold {
        return order;
    }
    let clamped = config.reserved_threshold.saturating_add(1);
    warn!(
        "{:?}: computed order {} falls in the reserved band (<= {}), clamped to {}",
        entity, order, config.reserved_threshold, clamped
    );
    clamped
}

/// Run a full calibration pass.
///
/// Reads [`CalibrationConfig`] from the world (defaults when absent), stores
/// the result in [`LastCalibration`] and returns it.
pub fn calibrate(world: &mut World) -> CalibrationSummary {
    let config = world
        .get_resource::<CalibrationConfig>()
        .cloned()
        .unwrap_or_default();

    let cleanup = remove_degenerate_sprites(world);

    let mut state = SystemState::<(
        SceneNodes,
        Query<(Entity, &mut ZIndex), With<Sprite>>,
    )>::new(world);
    let (nodes, mut orders) = state.get_mut(world);
    let mut summary = apply_orders(&nodes, &mut orders, &config);
    summary.removed = cleanup.removed;
    summary.failed_removals = cleanup.failed;

    info!("Calibration: {}", summary);
    world.insert_resource(LastCalibration(summary));
    summary
}

/// Exclusive system wrapper around [`calibrate`].
pub fn calibrate_system(world: &mut World) {
    calibrate(world);
}
