//! Sort key calculation.
//!
//! Ordinary nodes get `-round(reference_y * multiplier) + order_offset`, so a
//! node higher up the map (farther back) paints first. Shadows and glows take
//! the ordinary order of their parent plus a fixed offset, whatever their own
//! bounds say.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::calibrationconfig::CalibrationConfig;
use crate::systems::bounds::{reference_y_of, resolve_reference_y};
use crate::systems::classify::SortClass;
use crate::systems::nodes::{NodeView, SceneNodes};

/// Ordinary-case order for a reference Y.
///
/// Rounds half away from zero and saturates at the `i32` range.
pub fn base_order(reference_y: f32, config: &CalibrationConfig) -> i32 {
    let scaled = (f64::from(reference_y) * f64::from(config.multiplier)).round();
    // Float-to-int casts saturate; NaN maps to 0.
    (f64::from(config.order_offset) - scaled) as i32
}

/// Order of an already fetched node of the given class.
pub fn order_of(
    nodes: &SceneNodes,
    node: &NodeView,
    class: SortClass,
    config: &CalibrationConfig,
) -> i32 {
    let offset = match class {
        SortClass::Ordinary => {
            return base_order(reference_y_of(nodes, node, config.bottom_offset), config);
        }
        SortClass::Shadow => config.shadow_offset,
        SortClass::GlowEffect => config.glow_offset,
    };

    match nodes.parent_of(node.entity) {
        // The parent is always taken in its ordinary form, even when it is a
        // shadow or glow itself.
        Some(parent) => {
            let parent_order =
                base_order(reference_y_of(nodes, &parent, config.bottom_offset), config);
            parent_order.saturating_add(offset)
        }
        None => {
            debug!(
                "{:?}: {:?} without a parent, ordering by its own bounds",
                node.entity, class
            );
            base_order(reference_y_of(nodes, node, config.bottom_offset), config)
        }
    }
}

/// Compute the order `entity` should have.
pub fn compute_order(nodes: &SceneNodes, entity: Entity, config: &CalibrationConfig) -> i32 {
    match nodes.get(entity) {
        Some(node) => order_of(nodes, &node, SortClass::of(node.label), config),
        None => base_order(resolve_reference_y(nodes, entity, config.bottom_offset), config),
    }
}
