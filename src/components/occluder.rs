//! Marker for nodes that take part in proximity fading.

use bevy_ecs::prelude::Component;

/// The node may be faded out when something walks behind it.
///
/// Calibration only cares about this marker during cleanup: occluders that
/// carry a sprite with no content lose that sprite before bounds are read.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Occluder;
